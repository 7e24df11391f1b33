//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; guarding happens in
//! `components::protected` before a page renders.

pub mod complete_profile;
pub mod dashboard;
pub mod login;
