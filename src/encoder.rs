//! The resumable GIF-variant LZW encoder.
//!
//! Mirrors [`crate::decoder::Decoder`]'s approach: the reference implementation's
//! labeled-`goto` resumption becomes an explicit `Resume` tag, and bit-packing scratch
//! (`out_buffer`, `bits_in_buf`) plus LZW control state (the code for the string matched
//! so far) live as fields so a suspended call can be re-entered with nothing but a new
//! pair of slices.

use crate::dictionary::{EncoderTable, HashProfile, Probe, CODE_LIMIT, MAX_CODE_WIDTH};
use crate::error::ConstructionError;
use crate::status::{Status, StepOutcome};

/// What a suspended [`Encoder::step`] call should do once the bit-packing buffer has
/// been fully drained to `output`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Continuation {
	/// The opening CLEAR code has been flushed; start reading input.
	PostInitClear,
	/// A code was flushed because `(prefix, byte)` missed the table at `slot`. Install
	/// the pair there (if there's room) and start a new candidate string with `byte`.
	/// The empty slot found by the probe that triggered this travels with the
	/// continuation itself, rather than through a separate `Option` field, so there is
	/// no "should never be None" case to defend against when this variant is handled.
	PostMiss { slot: usize, prefix: u16, byte: u8 },
	/// The CLEAR emitted because the table filled up has been flushed; reset the
	/// dictionary and start a new candidate string with `byte`.
	PostTableFullClear { byte: u8 },
	/// The final in-progress string has been flushed; emit the END code next.
	PostLastHead,
	/// The END code has been flushed; pad and emit the last partial byte, if any.
	PostEnd,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Resume {
	Init,
	FetchByte,
	Draining(Continuation),
	Finished,
}

/// An incremental, suspendable GIF-variant LZW encoder.
///
/// Construct with [`Encoder::new`] or [`Encoder::with_profile`], then call
/// [`Encoder::step`] repeatedly. Pass `end_of_data = true` together with the final
/// (possibly empty) chunk of input to signal that no further bytes are coming; the
/// encoder then flushes the in-progress string, the END code, and any partial trailing
/// byte before reporting [`Status::Ok`].
#[derive(Debug)]
pub struct Encoder {
	min_code_width: u32,
	clear_code: u16,
	end_code: u16,
	next_code: u16,
	max_code: u16,
	code_width: u32,

	out_buffer: u32,
	bits_in_buf: u32,

	resume: Resume,
	in_code: Option<u16>,

	table: EncoderTable,
}

impl Encoder {
	/// Creates an encoder using [`HashProfile::Fast`].
	pub fn new(min_code_width: u32) -> Result<Self, ConstructionError> {
		Self::with_profile(min_code_width, HashProfile::Fast)
	}

	/// Creates an encoder tuned with the given [`HashProfile`].
	pub fn with_profile(min_code_width: u32, profile: HashProfile) -> Result<Self, ConstructionError> {
		if !(crate::error::MIN_INIT_CODE_WIDTH..=crate::error::MAX_INIT_CODE_WIDTH).contains(&min_code_width) {
			return Err(ConstructionError::InvalidMinCodeWidth(min_code_width));
		}

		let clear_code = 1u16 << min_code_width;
		let end_code = clear_code + 1;

		let mut encoder = Encoder {
			min_code_width,
			clear_code,
			end_code,
			next_code: 0,
			max_code: 0,
			code_width: 0,
			out_buffer: 0,
			bits_in_buf: 0,
			resume: Resume::Init,
			in_code: None,
			table: EncoderTable::new(profile),
		};
		encoder.reset_table();
		Ok(encoder)
	}

	fn reset_table(&mut self) {
		self.table.clear();
		self.next_code = self.end_code + 1;
		self.max_code = 2 * self.clear_code - 1;
		self.code_width = self.min_code_width + 1;
	}

	#[inline]
	fn put_code(&mut self, code: u16) {
		self.out_buffer |= (code as u32) << self.bits_in_buf;
		self.bits_in_buf += self.code_width;
	}

	/// Drains whole bytes out of the bit-packing buffer into `output`, resuming exactly
	/// where a previous call left off. Returns `false` (leaving any remaining whole or
	/// partial bytes buffered) the moment `output` runs out.
	fn drain(&mut self, output: &mut [u8], out_pos: &mut usize) -> bool {
		while self.bits_in_buf >= 8 {
			if *out_pos >= output.len() {
				return false;
			}
			output[*out_pos] = (self.out_buffer & 0xFF) as u8;
			*out_pos += 1;
			self.out_buffer >>= 8;
			self.bits_in_buf -= 8;
		}
		true
	}

	/// Advances the encoder, consuming from `input` and writing packed LZW code bytes
	/// into `output`. Set `end_of_data` once the final chunk of `input` has been passed
	/// (it may be empty) so the encoder knows to flush rather than suspend on
	/// `NoInputAvail`.
	pub fn step(&mut self, input: &[u8], output: &mut [u8], end_of_data: bool) -> StepOutcome {
		let mut in_pos = 0usize;
		let mut out_pos = 0usize;

		loop {
			match self.resume {
				Resume::Finished => return StepOutcome::new(in_pos, out_pos, Status::Ok),

				Resume::Init => {
					self.put_code(self.clear_code);
					self.resume = Resume::Draining(Continuation::PostInitClear);
					continue;
				}

				Resume::FetchByte => {
					if in_pos >= input.len() {
						if !end_of_data {
							return StepOutcome::new(in_pos, out_pos, Status::NoInputAvail);
						}
						match self.in_code.take() {
							Some(code) => {
								self.put_code(code);
								self.resume = Resume::Draining(Continuation::PostLastHead);
							}
							None => {
								self.put_code(self.end_code);
								self.resume = Resume::Draining(Continuation::PostEnd);
							}
						}
						continue;
					}

					let byte = input[in_pos];
					in_pos += 1;
					match self.in_code {
						None => {
							self.in_code = Some(byte as u16);
						}
						Some(prefix) => match self.table.probe(prefix, byte) {
							Probe::Hit(code) => self.in_code = Some(code),
							Probe::Empty(slot) => {
								self.put_code(prefix);
								self.resume = Resume::Draining(Continuation::PostMiss { slot, prefix, byte });
							}
						},
					}
					continue;
				}

				Resume::Draining(cont) => {
					if !self.drain(output, &mut out_pos) {
						return StepOutcome::new(in_pos, out_pos, Status::NoOutputAvail);
					}
					match cont {
						Continuation::PostInitClear => {
							self.resume = Resume::FetchByte;
						}
						Continuation::PostMiss { slot, prefix, byte } => {
							if self.next_code < CODE_LIMIT {
								self.table.install(slot, self.next_code, prefix, byte);
								self.next_code += 1;
								if self.next_code > self.max_code && self.code_width < MAX_CODE_WIDTH {
									self.max_code = self.max_code * 2 + 1;
									self.code_width += 1;
								}
								self.in_code = Some(byte as u16);
								self.resume = Resume::FetchByte;
							} else {
								self.put_code(self.clear_code);
								self.resume = Resume::Draining(Continuation::PostTableFullClear { byte });
							}
						}
						Continuation::PostTableFullClear { byte } => {
							self.reset_table();
							self.in_code = Some(byte as u16);
							self.resume = Resume::FetchByte;
						}
						Continuation::PostLastHead => {
							self.put_code(self.end_code);
							self.resume = Resume::Draining(Continuation::PostEnd);
						}
						Continuation::PostEnd => {
							if self.bits_in_buf > 0 {
								if out_pos >= output.len() {
									return StepOutcome::new(in_pos, out_pos, Status::NoOutputAvail);
								}
								output[out_pos] = (self.out_buffer & 0xFF) as u8;
								out_pos += 1;
								self.out_buffer = 0;
								self.bits_in_buf = 0;
							}
							self.resume = Resume::Finished;
							return StepOutcome::new(in_pos, out_pos, Status::Ok);
						}
					}
					continue;
				}
			}
		}
	}
}
