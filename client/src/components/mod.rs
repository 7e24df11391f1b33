//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read session state from Leptos context and wrap route views.

pub mod protected;
