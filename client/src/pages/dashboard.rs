//! Role dashboard: the authenticated landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! One view serves `/worker`, `/owner` and `/admin`; the route guard has
//! already matched the role. It shows who is signed in and carries the
//! account actions that go through the session manager (password and
//! sign-out). Marketplace content is rendered elsewhere.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use worklink::guard::LOGIN_PATH;
use worklink::{User, UserType};

use crate::state::session::{ReturnTo, SessionContext};

const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PasswordAction {
    /// Provider-only account without a password yet.
    Set,
    Change,
}

pub(crate) fn password_action(user: Option<&User>) -> PasswordAction {
    match user.and_then(|u| u.has_password) {
        Some(false) => PasswordAction::Set,
        _ => PasswordAction::Change,
    }
}

pub(crate) fn role_label(user_type: Option<UserType>) -> &'static str {
    match user_type {
        Some(UserType::Worker) => "Worker",
        Some(UserType::Owner) => "Property owner",
        Some(UserType::Admin) => "Administrator",
        None => "Member",
    }
}

pub(crate) fn validate_new_password(new: &str, confirm: &str) -> Result<String, &'static str> {
    if new.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 6 characters.");
    }
    if new != confirm {
        return Err("Passwords do not match.");
    }
    Ok(new.to_owned())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let session = ctx.state;
    let return_to = expect_context::<ReturnTo>();
    let navigate = use_navigate();

    let current = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let name = move || session.with(|s| s.user.as_ref().map(User::display_name).unwrap_or_default());
    let role = move || session.with(|s| role_label(s.user_type));
    let action = move || session.with(|s| password_action(s.user.as_ref()));
    let busy = move || session.with(|s| s.is_loading);

    let on_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.is_loading) {
            return;
        }
        let new = match validate_new_password(&new_password.get_untracked(), &confirm.get_untracked()) {
            Ok(new) => new,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let action = session.with_untracked(|s| password_action(s.user.as_ref()));
        let current_password = current.get_untracked();
        if action == PasswordAction::Change && current_password.is_empty() {
            info.set("Enter your current password.".to_owned());
            return;
        }
        info.set(String::new());
        let manager = ctx.manager();
        spawn_local(async move {
            let result = match action {
                PasswordAction::Set => manager.set_password(&new).await,
                PasswordAction::Change => manager.change_password(&current_password, &new).await,
            };
            match result {
                Ok(message) => {
                    current.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                    info.set(message);
                }
                Err(e) => log::debug!("password update failed: {e}"),
            }
        });
    };

    let on_logout = move |_| {
        let manager = ctx.manager();
        let navigate = navigate.clone();
        spawn_local(async move {
            manager.logout().await;
            return_to.0.set(None);
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__self">{name}</span>
                <span class="toolbar__role">{role}</span>
                <span class="toolbar__spacer"></span>
                <button class="btn toolbar__logout" on:click=on_logout title="Sign out">
                    "Sign out"
                </button>
            </header>

            <section class="dashboard-page__account">
                <h2>
                    {move || if action() == PasswordAction::Set { "Set a password" } else { "Change password" }}
                </h2>
                <form class="account-form" on:submit=on_password>
                    <Show when=move || action() == PasswordAction::Change>
                        <input
                            class="account-input"
                            type="password"
                            placeholder="Current password"
                            prop:value=move || current.get()
                            on:input=move |ev| {
                                current.set(event_target_value(&ev));
                                ctx.input_changed();
                            }
                        />
                    </Show>
                    <input
                        class="account-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| {
                            new_password.set(event_target_value(&ev));
                            ctx.input_changed();
                        }
                    />
                    <input
                        class="account-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| {
                            confirm.set(event_target_value(&ev));
                            ctx.input_changed();
                        }
                    />
                    <button class="btn" type="submit" disabled=busy>
                        "Save"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="account-message">{move || info.get()}</p>
                </Show>
                <Show when=move || session.with(|s| s.error.is_some())>
                    <p class="account-message account-message--error">
                        {move || session.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
            </section>
        </div>
    }
}
