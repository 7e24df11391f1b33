//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos::task::spawn_local;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};
use worklink::guard::landing_path;
use worklink::{RouteAccess, UserType};

use crate::components::protected::Protected;
use crate::pages::{complete_profile::CompleteProfilePage, dashboard::DashboardPage, login::LoginPage};
use crate::state::session::{SessionContext, build_manager};
use crate::util::auth::home_link;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session manager, provides the session context, and sets up
/// client-side routing with guarded role routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let manager = match build_manager() {
        Ok(manager) => manager,
        Err(e) => {
            log::error!("session manager unavailable: {e}");
            return view! { <p class="fatal">"WorkLink could not start. Please reload the page."</p> }.into_any();
        }
    };
    SessionContext::install(manager);

    view! {
        <Stylesheet id="leptos" href="/pkg/worklink.css"/>
        <Title text="WorkLink"/>

        <Router>
            <SessionBootstrap/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("complete-profile")
                    view=|| {
                        view! {
                            <Protected access=RouteAccess::incomplete_profile_ok()>
                                <CompleteProfilePage/>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=StaticSegment("account")
                    view=|| {
                        view! {
                            <Protected access=RouteAccess::authenticated()>
                                <DashboardPage/>
                            </Protected>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("worker"), StaticSegment("dashboard"))
                    view=|| role_dashboard(UserType::Worker)
                />
                <Route
                    path=(StaticSegment("owner"), StaticSegment("dashboard"))
                    view=|| role_dashboard(UserType::Owner)
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| role_dashboard(UserType::Admin)
                />
            </Routes>
        </Router>
    }
    .into_any()
}

fn role_dashboard(user_type: UserType) -> impl IntoView {
    view! {
        <Protected access=RouteAccess::role(user_type)>
            <DashboardPage/>
        </Protected>
    }
}

/// Finishes a pending provider redirect, then validates the stored session.
///
/// Runs once per page load, in the browser only (effects never run during
/// SSR). Both steps share one task so the redirect result is always
/// collected before bootstrap reads the durable token.
#[component]
fn SessionBootstrap() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let navigate = use_navigate();

    Effect::new(move || {
        let manager = ctx.manager();
        let navigate = navigate.clone();
        spawn_local(async move {
            match manager.collect_redirect_result().await {
                Ok(Some(session)) => navigate(landing_path(&session), NavigateOptions::default()),
                Ok(None) => {}
                Err(e) => log::warn!("redirect sign-in could not be completed: {e}"),
            }
            if let Err(e) = manager.bootstrap_session().await {
                log::warn!("stored session not restored: {e}");
            }
        });
    });
}

/// Neutral landing for `/`, also where users without a role end up.
#[component]
fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>().state;
    let target = move || session.with(|s| home_link(s).to_owned());
    let label = move || session.with(|s| if s.is_authenticated { "Go to your dashboard" } else { "Sign in" });

    view! {
        <div class="home-page">
            <h1>"WorkLink"</h1>
            <p>"Local services, from people nearby."</p>
            <A href=target>{label}</A>
        </div>
    }
}
