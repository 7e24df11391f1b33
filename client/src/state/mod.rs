//! Shared reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session core owns the truth; this module mirrors it into signals so
//! pages re-render when it changes.

pub mod session;
