//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP requests and classifies failures, `types` defines the
//! JSON schema shared with the backend.

pub mod api;
pub mod types;
