//! Shared widget helpers.

pub mod styling;
