//! Amount field input handling.
//!
//! This module owns the boundary between the text the user types and the
//! numeric [`crate::models::SalaryAmount`]: normalization and validation on
//! the way in, grouped formatting on the way back out.

mod format;
mod normalize;

pub use format::{DEFAULT_GROUP_SEPARATOR, format_for_editing, format_for_editing_with};
pub use normalize::{normalize_amount_input, parse_amount_input, strip_whitespace};
