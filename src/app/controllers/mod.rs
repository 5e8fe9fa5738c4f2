//! Controllers layer - orchestration and coordination.
//!
//! This module contains the controllers behind the font size widgets:
//! - The numeric field
//! - The preset dropdown
//! - The shared set-font-size operation that reconciles both

pub mod font_size_control;
pub mod preset_list;
pub mod size_input;
