//! Validation utilities for the text matrix format
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::validate_coord;
pub use parsing::{parse_entry_line, parse_header_line, parse_index};
