//! web-pathfix: normalize backslash resource paths in exported web markup
//!
//! A web export produced on Windows can embed `href="\assets\x.png"` style
//! references that browsers resolve incorrectly. This crate rewrites those
//! references to root-anchored forward-slash paths. It also carries the
//! small layout and date helpers shared with the app's UI layer.

pub mod cli;
pub mod config;
pub mod domain;
pub mod layout;
pub mod normalize;
pub mod scan;
pub mod utils;
