//! Complete-profile route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable with an incomplete profile. Finishing it records the role (if
//! the account has none yet) and marks the profile complete through
//! `SessionManager::update_user`. The backend stores it first; only then
//! does the guard let the user into their dashboard.

#[cfg(test)]
#[path = "complete_profile_test.rs"]
mod complete_profile_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use worklink::guard::landing_path;
use worklink::{User, UserType};

use crate::state::session::SessionContext;

/// The user as it should look once the wizard is done.
pub(crate) fn completed_profile(user: &User, chosen: Option<UserType>) -> Result<User, &'static str> {
    let Some(user_type) = user.user_type.or(chosen) else {
        return Err("Choose whether you are looking for work or hiring.");
    };
    Ok(User { user_type: Some(user_type), profile_completed: true, ..user.clone() })
}

#[component]
pub fn CompleteProfilePage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let session = ctx.state;
    let navigate = use_navigate();
    let chosen = RwSignal::new(None::<UserType>);
    let info = RwSignal::new(String::new());

    let needs_role = move || session.with(|s| s.user_type.is_none());
    let greeting = move || session.with(|s| s.user.as_ref().map(User::display_name).unwrap_or_default());

    let busy = move || session.with(|s| s.is_loading);

    let on_finish = move |_| {
        if session.with_untracked(|s| s.is_loading) {
            return;
        }
        let Some(user) = session.with_untracked(|s| s.user.clone()) else {
            return;
        };
        let updated = match completed_profile(&user, chosen.get_untracked()) {
            Ok(updated) => updated,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        let manager = ctx.manager();
        let navigate = navigate.clone();
        spawn_local(async move {
            match manager.update_user(updated).await {
                Ok(state) => navigate(landing_path(&state), NavigateOptions::default()),
                Err(e) => {
                    log::debug!("profile update failed: {e}");
                    info.set(e.to_string());
                }
            }
        });
    };

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <h1>{move || format!("Welcome, {}", greeting())}</h1>
                <p class="profile-card__subtitle">"Finish setting up your profile to continue."</p>
                <Show when=needs_role>
                    <div class="profile-roles">
                        <label>
                            <input
                                type="radio"
                                name="user-type"
                                on:change=move |_| {
                                    chosen.set(Some(UserType::Worker));
                                    ctx.input_changed();
                                }
                            />
                            "I'm looking for work"
                        </label>
                        <label>
                            <input
                                type="radio"
                                name="user-type"
                                on:change=move |_| {
                                    chosen.set(Some(UserType::Owner));
                                    ctx.input_changed();
                                }
                            />
                            "I'm hiring for my property"
                        </label>
                    </div>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="profile-message">{move || info.get()}</p>
                </Show>
                <button class="profile-button" disabled=busy on:click=on_finish>
                    "Finish"
                </button>
            </div>
        </div>
    }
}
