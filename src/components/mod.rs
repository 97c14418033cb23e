//! Reusable UI components shared across pages.

pub mod route_guard;
pub mod share_content;
pub mod site_header;
