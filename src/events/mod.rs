//! Event handling module.
//!
//! This module contains the terminal event handler: user input and the
//! cosmetic animation tick.

pub mod terminal;
