//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision and formatting logic lives here, away from the view code,
//! so it can be unit-tested natively. `storage` is the only module that
//! touches browser APIs.

pub mod datetime;
pub mod filesize;
pub mod forms;
pub mod guard;
pub mod share_url;
pub mod storage;
pub mod upload;
