//! Browser-facing adapters for the session core's network seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backend HTTP goes through `worklink::HttpAuthBackend` directly; only the
//! identity provider needs browser glue.

pub mod identity;
