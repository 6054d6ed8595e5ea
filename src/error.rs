//! Construction-time errors for the GIF-variant LZW codecs.
//!
//! Per-step backpressure and data errors are reported through [`crate::status::Status`]
//! rather than `Result`, since `NoInputAvail`/`NoOutputAvail` are routine, not exceptional.
//! The only fallible entry points left are the constructors, which validate
//! `min_code_width` up front.

use thiserror::Error;

/// GIF permits an LZW minimum code size between 2 and 8 bits, inclusive.
pub const MIN_INIT_CODE_WIDTH: u32 = 2;
pub const MAX_INIT_CODE_WIDTH: u32 = 8;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstructionError {
	/// `min_code_width` must be in `[2, 8]`. A width of 1 is rejected even though the
	/// reference implementation accepts it: with `min_code_width == 1`, `clear_code == 2`
	/// and `end_code == 3`, which already do not fit in the initial code width of 2 bits.
	#[error("LZW minimum code width {0} is out of range (must be between {MIN_INIT_CODE_WIDTH} and {MAX_INIT_CODE_WIDTH})")]
	InvalidMinCodeWidth(u32),
}
