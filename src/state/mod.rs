//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that holds all interactive data
//! - Navigation types (Screen, BmiField)
//! - State error handling

mod error;
mod navigation;

pub use error::StateError;
pub use navigation::{BmiField, Screen};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
