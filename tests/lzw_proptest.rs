//! Property-based round-trip coverage: random payloads pushed through the encoder and
//! decoder in random-sized chunks must come back out byte-for-byte identical. A full
//! checksum utility (Adler-32/CRC-32) is out of scope for this crate, so plain slice
//! equality is the round-trip oracle here, same as in `tests/lzw_scenarios.rs`.

use gif_lzw::{Decoder, Encoder, HashProfile};
use proptest::prelude::*;

fn drive_encoder(payload: &[u8], min_code_width: u32, profile: HashProfile, chunk_sizes: &[usize]) -> Vec<u8> {
	let mut encoder = Encoder::with_profile(min_code_width, profile).unwrap();
	let mut packed = Vec::new();
	let mut in_pos = 0;
	let mut chunk_cursor = 0usize;

	loop {
		let end_of_data = in_pos >= payload.len();
		let in_chunk = chunk_sizes[chunk_cursor % chunk_sizes.len()].max(1);
		let out_chunk = chunk_sizes[(chunk_cursor + 1) % chunk_sizes.len()].max(1);
		chunk_cursor += 1;

		let chunk_end = (in_pos + in_chunk).min(payload.len());
		let mut out_buf = vec![0u8; out_chunk];
		let outcome = encoder.step(&payload[in_pos..chunk_end], &mut out_buf, end_of_data);
		in_pos += outcome.bytes_read;
		packed.extend_from_slice(&out_buf[..outcome.bytes_written]);
		if outcome.status == gif_lzw::Status::Ok {
			break;
		}
	}
	packed
}

fn drive_decoder(packed: &[u8], min_code_width: u32, chunk_sizes: &[usize]) -> Vec<u8> {
	let mut decoder = Decoder::new(min_code_width).unwrap();
	let mut unpacked = Vec::new();
	let mut in_pos = 0;
	let mut chunk_cursor = 0usize;

	loop {
		let in_chunk = chunk_sizes[chunk_cursor % chunk_sizes.len()].max(1);
		let out_chunk = chunk_sizes[(chunk_cursor + 1) % chunk_sizes.len()].max(1);
		chunk_cursor += 1;

		let chunk_end = (in_pos + in_chunk).min(packed.len());
		let mut out_buf = vec![0u8; out_chunk];
		let outcome = decoder.step(&packed[in_pos..chunk_end], &mut out_buf);
		in_pos += outcome.bytes_read;
		unpacked.extend_from_slice(&out_buf[..outcome.bytes_written]);
		if outcome.status == gif_lzw::Status::Ok {
			break;
		}
	}
	unpacked
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn round_trips_arbitrary_payloads(
		payload in prop::collection::vec(any::<u8>(), 0..2000),
		min_code_width in 2u32..=8,
		use_compact in any::<bool>(),
		chunk_sizes in prop::collection::vec(1usize..=37, 1..6),
	) {
		let profile = if use_compact { HashProfile::Compact } else { HashProfile::Fast };
		let packed = drive_encoder(&payload, min_code_width, profile, &chunk_sizes);
		let unpacked = drive_decoder(&packed, min_code_width, &chunk_sizes);
		prop_assert_eq!(unpacked, payload);
	}

	#[test]
	fn round_trips_low_entropy_payloads_that_fill_the_dictionary(
		run_lengths in prop::collection::vec(1usize..=30, 50..400),
		min_code_width in 2u32..=4,
	) {
		let mut payload = Vec::new();
		for (i, run) in run_lengths.iter().enumerate() {
			let byte = (i % 3) as u8;
			payload.extend(std::iter::repeat(byte).take(*run));
		}
		let packed = drive_encoder(&payload, min_code_width, HashProfile::Fast, &[5, 11, 17]);
		let unpacked = drive_decoder(&packed, min_code_width, &[5, 11, 17]);
		prop_assert_eq!(unpacked, payload);
	}
}
