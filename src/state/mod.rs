//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `session` holds the fetched identity and its
//! load flags, `passwords` the locally cached share passwords. Both are
//! provided once at the app root and read through context.

pub mod passwords;
pub mod session;
