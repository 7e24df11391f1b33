//! Login page: email + password sign-in, account registration, and Google
//! sign-in through the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Input is validated here before any manager call. Backend and provider
//! errors are not tracked locally; they arrive through `Session::error`.
//! Once the session is authenticated an effect moves the user on, so every
//! sign-in path (including a collected redirect) ends up in the same place.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use worklink::UserType;
use worklink::api::RegisterRequest;

use crate::state::session::{ReturnTo, SessionContext};
use crate::util::auth::post_login_target;

const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    SignIn,
    Register,
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

fn validate_credentials(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 6 characters.");
    }
    Ok(email.to_owned())
}

/// Trimmed `(email, password)` ready for `login_with_password`.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = validate_credentials(email, password)?;
    Ok((email, password.to_owned()))
}

pub(crate) fn validate_register_input(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    user_type: Option<UserType>,
) -> Result<RegisterRequest, &'static str> {
    let (first_name, last_name) = (first_name.trim(), last_name.trim());
    if first_name.is_empty() || last_name.is_empty() {
        return Err("Enter your first and last name.");
    }
    let email = validate_credentials(email, password)?;
    Ok(RegisterRequest {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email,
        password: password.to_owned(),
        user_type,
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let session = ctx.state;
    let return_to = expect_context::<ReturnTo>();
    let navigate = use_navigate();

    let mode = RwSignal::new(Mode::SignIn);
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let user_type = RwSignal::new(None::<UserType>);
    let info = RwSignal::new(String::new());

    Effect::new(move || {
        let state = session.get();
        if state.is_loading || !state.is_authenticated {
            return;
        }
        let target = post_login_target(&state, return_to.0.get_untracked().as_deref());
        return_to.0.set(None);
        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    let busy = move || session.with(|s| s.is_loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|s| s.is_loading) {
            return;
        }
        info.set(String::new());
        let manager = ctx.manager();
        match mode.get_untracked() {
            Mode::SignIn => match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok((email, password)) => spawn_local(async move {
                    if let Err(e) = manager.login_with_password(&email, &password).await {
                        log::debug!("password sign-in failed: {e}");
                    }
                }),
                Err(message) => info.set(message.to_owned()),
            },
            Mode::Register => match validate_register_input(
                &first_name.get_untracked(),
                &last_name.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
                user_type.get_untracked(),
            ) {
                Ok(request) => spawn_local(async move {
                    if let Err(e) = manager.register(&request).await {
                        log::debug!("registration failed: {e}");
                    }
                }),
                Err(message) => info.set(message.to_owned()),
            },
        }
    };

    let on_google = move |_| {
        if session.with_untracked(|s| s.is_loading) {
            return;
        }
        info.set(String::new());
        let manager = ctx.manager();
        spawn_local(async move {
            match manager.login_with_identity_provider_popup().await {
                Ok(_) => {}
                Err(e) if e.is_popup_blocked() => {
                    log::info!("popup blocked, continuing with redirect sign-in");
                    if let Err(e) = manager.login_with_identity_provider_redirect().await {
                        log::warn!("redirect sign-in could not start: {e}");
                    }
                }
                Err(e) => log::debug!("popup sign-in failed: {e}"),
            }
        });
    };

    let edited = move || {
        info.set(String::new());
        ctx.input_changed();
    };

    let on_toggle_mode = move |_| {
        mode.update(|m| *m = if *m == Mode::SignIn { Mode::Register } else { Mode::SignIn });
        edited();
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"WorkLink"</h1>
                <p class="login-card__subtitle">
                    {move || if mode.get() == Mode::SignIn { "Sign in to your account" } else { "Create an account" }}
                </p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || mode.get() == Mode::Register>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="First name"
                            prop:value=move || first_name.get()
                            on:input=move |ev| {
                                first_name.set(event_target_value(&ev));
                                edited();
                            }
                        />
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Last name"
                            prop:value=move || last_name.get()
                            on:input=move |ev| {
                                last_name.set(event_target_value(&ev));
                                edited();
                            }
                        />
                        <select
                            class="login-input"
                            on:change=move |ev| {
                                user_type.set(UserType::parse(&event_target_value(&ev)));
                                edited();
                            }
                        >
                            <option value="">"I am..."</option>
                            <option value="worker">"Looking for work"</option>
                            <option value="owner">"Hiring for my property"</option>
                        </select>
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            edited();
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            edited();
                        }
                    />
                    <button class="login-button" type="submit" disabled=busy>
                        {move || if mode.get() == Mode::SignIn { "Sign In" } else { "Create Account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || session.with(|s| s.error.is_some())>
                    <p class="login-message login-message--error">
                        {move || session.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <div class="login-divider"></div>
                <button class="login-button login-button--google" disabled=busy on:click=on_google>
                    "Continue with Google"
                </button>
                <button class="login-link" type="button" on:click=on_toggle_mode>
                    {move || {
                        if mode.get() == Mode::SignIn {
                            "New here? Create an account"
                        } else {
                            "Already have an account? Sign in"
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
