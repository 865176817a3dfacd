//! Directory listing with per-entry filesystem metadata, rendered as JSON.

pub mod core;
pub mod models;
pub mod services;
