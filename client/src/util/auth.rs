//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same guard: `worklink::guard::decide`
//! picks the outcome, this module performs the navigation and remembers
//! where an anonymous visitor was headed.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use worklink::guard::{COMPLETE_PROFILE_PATH, HOME_PATH, LOGIN_PATH, landing_path};
use worklink::{GuardDecision, Session};

use crate::state::session::ReturnTo;

/// Account settings, open to any signed-in user with a finished profile.
pub const ACCOUNT_PATH: &str = "/account";

/// Navigate whenever `decision` becomes a redirect.
pub fn install_route_guard<F>(decision: Memo<GuardDecision>, return_to: ReturnTo, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let GuardDecision::Redirect { to, from } = decision.get() else {
            return;
        };
        if let Some(from) = from {
            return_to.0.set(Some(from));
        }
        navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}

/// Path plus query string, as the guard records it.
pub fn location_with_query(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() { pathname.to_owned() } else { format!("{pathname}?{search}") }
}

/// Where to go after a successful sign-in.
///
/// An incomplete profile always goes to the wizard; otherwise a remembered
/// location wins over the role dashboard.
pub fn post_login_target(session: &Session, return_to: Option<&str>) -> String {
    if !session.profile_completed {
        return COMPLETE_PROFILE_PATH.to_owned();
    }
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.starts_with(LOGIN_PATH) => path.to_owned(),
        _ => landing_path(session).to_owned(),
    }
}

/// Destination of the home page's call to action. Users without a role have
/// no dashboard, so they get account settings instead of `/` again.
pub fn home_link(session: &Session) -> &'static str {
    if !session.is_authenticated {
        return LOGIN_PATH;
    }
    match landing_path(session) {
        HOME_PATH => ACCOUNT_PATH,
        path => path,
    }
}

/// A surfaced error goes stale as soon as the user edits a form field.
pub fn error_cleared_by_edit(session: &Session) -> bool {
    session.error.is_some()
}
