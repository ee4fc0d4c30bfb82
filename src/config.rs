//! Configuration loader and schema types.
//!
//! This module exposes the settings used by the terminal front end and
//! helpers to load them from disk and the environment.

mod load;
mod schema;

pub use load::{SettingsError, default_config_path, resolve_config_path};
pub use schema::*;
