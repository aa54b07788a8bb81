//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session store is the only cross-page state; per-page concerns (form
//! fields, dialog visibility) stay as local signals inside the page modules.

pub mod auth;
