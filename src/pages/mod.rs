//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is not handled here; the route guard
//! decides before a page is created.

pub mod create;
pub mod home;
pub mod list;
pub mod login;
pub mod not_found;
pub mod share;
