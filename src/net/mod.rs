//! Networking modules for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the backend's REST auth calls, `watch` drives the passive
//! session-change channel, and `types` defines the shared payload schema.

pub mod api;
pub mod types;
pub mod watch;
