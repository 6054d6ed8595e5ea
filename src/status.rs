//! The stable status contract shared by [`crate::decoder::Decoder::step`] and
//! [`crate::encoder::Encoder::step`].

/// Outcome of a single `step()` call.
///
/// The numeric values match the language-neutral contract this codec implements, so that
/// a caller bridging to another runtime (e.g. over FFI) can rely on the discriminants
/// staying fixed. `OutOfMemory` is part of that stable contract but is never produced by
/// this implementation: construction in safe Rust either succeeds or is rejected up front
/// by [`crate::error::ConstructionError`], so there is no later point at which a `step()`
/// call could discover an allocation failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
	/// The END code has been consumed (decoder) or emitted and flushed (encoder). The
	/// instance is now terminal; further `step()` calls return `Ok` without progress.
	Ok = 0,
	/// More input is needed; resume with a non-empty input slice.
	NoInputAvail = 1,
	/// The output slice is full; resume with more output room.
	NoOutputAvail = 2,
	/// Reserved for parity with the language-neutral contract. Never produced by this
	/// implementation; see the type-level documentation above.
	OutOfMemory = 3,
	/// Reserved for parity with the language-neutral contract, where it reports a step
	/// dispatch reaching a state it should be structurally unable to reach. Never
	/// produced by this implementation: both [`crate::decoder::Decoder`] and
	/// [`crate::encoder::Encoder`] carry any data an internal transition needs directly
	/// on the `Resume`/`Continuation` variant that requires it, so there is no "this
	/// should be impossible" branch left to guard with this status instead.
	InternalError = 4,
	/// Decoder only: the code stream is corrupt (see [`crate::decoder::Decoder`]).
	InvalidData = 5,
}

/// The result of a single `step()` call: how much of each buffer was used, and why the
/// call returned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StepOutcome {
	/// Number of bytes consumed from the input slice passed to `step()`.
	pub bytes_read: usize,
	/// Number of bytes written into the output slice passed to `step()`.
	pub bytes_written: usize,
	pub status: Status,
}

impl StepOutcome {
	pub(crate) fn new(bytes_read: usize, bytes_written: usize, status: Status) -> Self {
		StepOutcome { bytes_read, bytes_written, status }
	}
}
