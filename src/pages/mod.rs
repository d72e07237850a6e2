//! Routed pages.

pub mod algorithms;
pub mod monitor;
pub mod not_found;
