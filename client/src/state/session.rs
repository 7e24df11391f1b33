//! Reactive bridge from the session store to Leptos.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionContext` is provided once at the app root. Its `state` signal is
//! written only by the store subscription installed here; components read
//! it and call manager operations, never set it.

use leptos::prelude::*;
use worklink::api::ApiError;
use worklink::{ClientConfig, HttpAuthBackend, Session, SessionManager};

use crate::net::identity::FirebaseProvider;
use crate::util::auth::error_cleared_by_edit;
use crate::util::storage::BrowserStorage;

pub type Manager = SessionManager<HttpAuthBackend, FirebaseProvider, BrowserStorage>;

/// Location a guard bounced the user away from, consumed after login.
#[derive(Clone, Copy, Debug)]
pub struct ReturnTo(pub RwSignal<Option<String>>);

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: RwSignal<Session>,
    manager: StoredValue<Manager, LocalStorage>,
}

impl SessionContext {
    /// Mirror `manager`'s store into a signal and provide both as context.
    pub fn install(manager: Manager) -> Self {
        let state = RwSignal::new(manager.state());
        let subscription = manager.store().subscribe(move |session| state.set(session.clone()));
        let context = Self { state, manager: StoredValue::new_local(manager) };

        let stored = context.manager;
        on_cleanup(move || {
            if stored.try_with_value(|m| m.store().unsubscribe(subscription)) != Some(true) {
                log::debug!("session bridge already unsubscribed");
            }
        });

        provide_context(context);
        provide_context(ReturnTo(RwSignal::new(None)));
        context
    }

    /// Handle for running operations; clones share one store and storage.
    pub fn manager(&self) -> Manager {
        self.manager.get_value()
    }

    /// Form inputs call this on every edit.
    pub fn input_changed(&self) {
        if self.state.with_untracked(error_cleared_by_edit) {
            self.manager().clear_error();
        }
    }
}

fn load_config() -> ClientConfig {
    #[cfg(feature = "hydrate")]
    let loaded = ClientConfig::from_build_env();
    #[cfg(not(feature = "hydrate"))]
    let loaded = ClientConfig::from_env();
    loaded.unwrap_or_else(|e| {
        log::error!("{e}; using default client config");
        ClientConfig::default()
    })
}

/// Assemble the browser session manager from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_manager() -> Result<Manager, ApiError> {
    let config = load_config();
    log::debug!("backend at {}", config.api_base_url);
    let provider_request = config.provider.clone();
    let backend = HttpAuthBackend::new(config)?;
    Ok(SessionManager::new(backend, FirebaseProvider::new(), BrowserStorage::new())
        .with_provider_request(provider_request))
}
