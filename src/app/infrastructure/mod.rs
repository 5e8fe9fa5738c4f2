//! Infrastructure layer - seams to the host editor.
//!
//! This module contains the code that interfaces with the host:
//! - Host capability traits
//! - Named event bus
//! - Error types

pub mod error;
pub mod event_bus;
pub mod host;
