//! Firebase-backed identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Firebase SDK is loaded by `js/identity.js`; this module binds its four
//! exports with `wasm-bindgen` and decodes their JSON results into core
//! types. Without the `hydrate` feature (SSR, native tests) every sign-in
//! reports `ProviderError::Unavailable` and there is never a redirect result.
//!
//! ERROR HANDLING
//! ==============
//! The shim rejects with `{ code, message }`; codes are mapped through
//! `ProviderError::from_code` so messages match the core's table.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
use worklink::provider::ProviderIdentity;
use worklink::{IdentityProvider, ProviderError, ProviderRequest};

#[cfg(feature = "hydrate")]
mod shim {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(module = "/js/identity.js")]
    extern "C" {
        #[wasm_bindgen(js_name = signInWithPopup, catch)]
        pub async fn sign_in_with_popup(request_json: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = signInWithRedirect, catch)]
        pub async fn sign_in_with_redirect(request_json: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = getRedirectResult, catch)]
        pub async fn get_redirect_result() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_name = signOut, catch)]
        pub async fn sign_out() -> Result<JsValue, JsValue>;
    }
}

/// Shape of a shim rejection.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct ShimFailure {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FirebaseProvider;

impl FirebaseProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

/// JSON handed to the shim's sign-in functions.
fn request_json(request: &ProviderRequest) -> String {
    serde_json::json!({ "scopes": request.scopes, "prompt": request.prompt }).to_string()
}

/// Decode a shim result: `null` means no identity.
#[cfg(any(test, feature = "hydrate"))]
fn parse_identity(raw: &str) -> Result<Option<ProviderIdentity>, ProviderError> {
    serde_json::from_str::<Option<ProviderIdentity>>(raw)
        .map_err(|e| ProviderError::Other(format!("Unexpected identity payload: {e}")))
}

/// Decode a shim rejection into a provider error.
#[cfg(any(test, feature = "hydrate"))]
fn parse_failure(raw: &str) -> ProviderError {
    match serde_json::from_str::<ShimFailure>(raw) {
        Ok(failure) => ProviderError::from_code(&failure.code, failure.message.as_deref()),
        Err(_) => ProviderError::from_code("", Some(raw.trim_matches('"'))),
    }
}

#[cfg(feature = "hydrate")]
fn stringify(value: &wasm_bindgen::JsValue) -> String {
    js_sys::JSON::stringify(value)
        .map(String::from)
        .unwrap_or_else(|_| "null".to_owned())
}

impl IdentityProvider for FirebaseProvider {
    async fn sign_in_popup(&self, request: &ProviderRequest) -> Result<ProviderIdentity, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let value = shim::sign_in_with_popup(&request_json(request))
                .await
                .map_err(|e| parse_failure(&stringify(&e)))?;
            parse_identity(&stringify(&value))?.ok_or_else(|| ProviderError::Other("Google sign-in failed".to_owned()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("popup sign-in requested outside the browser: {}", request_json(request));
            Err(ProviderError::Unavailable)
        }
    }

    async fn sign_in_redirect(&self, request: &ProviderRequest) -> Result<(), ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            shim::sign_in_with_redirect(&request_json(request))
                .await
                .map(|_| ())
                .map_err(|e| parse_failure(&stringify(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            log::debug!("redirect sign-in requested outside the browser: {}", request_json(request));
            Err(ProviderError::Unavailable)
        }
    }

    async fn redirect_result(&self) -> Result<Option<ProviderIdentity>, ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            let value = shim::get_redirect_result()
                .await
                .map_err(|e| parse_failure(&stringify(&e)))?;
            parse_identity(&stringify(&value))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        #[cfg(feature = "hydrate")]
        {
            shim::sign_out()
                .await
                .map(|_| ())
                .map_err(|e| parse_failure(&stringify(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(())
        }
    }
}
