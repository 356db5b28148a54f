//! Configuration loading
//!
//! Settings come from an optional config file, either given explicitly or
//! discovered in the working directory. Missing files mean defaults.

pub mod loader;

pub use loader::load_config;
