//! Route wrapper that applies the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes declare what they require with a `RouteAccess`; while the session
//! is settling a neutral placeholder renders instead of the page, so nothing
//! protected flashes before a redirect.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use worklink::guard::decide;
use worklink::{GuardDecision, RouteAccess};

use crate::state::session::{ReturnTo, SessionContext};
use crate::util::auth::{install_route_guard, location_with_query};

#[component]
pub fn Protected(access: RouteAccess, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>().state;
    let return_to = expect_context::<ReturnTo>();
    let location = use_location();

    let decision = Memo::new(move |_| {
        let here = location_with_query(&location.pathname.get(), &location.search.get());
        session.with(|s| decide(s, &access, &here))
    });
    install_route_guard(decision, return_to, use_navigate());

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=|| view! { <div class="session-pending">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}
