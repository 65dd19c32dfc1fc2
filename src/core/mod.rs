//! Core logic for specifications
//!
//! This module contains pure logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Failure and evaluation types
//! - `ports/` - The `Specification` trait every rule implements
//! - `services/` - Combinators built on the port

pub mod models;
pub mod ports;
pub mod services;
