use crate::encoding::TextEncoding;

const LF: u8 = 0x0A;
const CR: u8 = 0x0D;

/// Looks for UTF-16 encodings of `\n`/`\r` by scanning non-overlapping byte pairs - genuine
/// UTF-16 text in any language will almost always contain line breaks, and the parity of the
/// zero byte in the pair gives away the endianness. If pairs of both parities turn up, the
/// buffer is almost certainly not UTF-16 at all and the scan aborts straight away. A trailing
/// odd byte is never read; buffers shorter than one pair defer
pub fn check_newline_chars(buffer: &[u8]) -> TextEncoding {
	if buffer.len() < 2 {
		return TextEncoding::Unknown;
	}

	let mut le_control_chars = 0;
	let mut be_control_chars = 0;

	for pair in buffer.chunks_exact(2) {
		let (ch1, ch2) = (pair[0], pair[1]);

		if ch1 == 0 {
			if ch2 == LF || ch2 == CR {
				be_control_chars += 1;
			}
		} else if ch2 == 0 && (ch1 == LF || ch1 == CR) {
			le_control_chars += 1;
		}

		// Control chars of both endiannesses means this isn't UTF-16
		if le_control_chars > 0 && be_control_chars > 0 {
			return TextEncoding::Unknown;
		}
	}

	if le_control_chars > 0 {
		TextEncoding::Utf16LeNoBom
	} else if be_control_chars > 0 {
		TextEncoding::Utf16BeNoBom
	} else {
		TextEncoding::Unknown
	}
}

/// Fallback for UTF-16 buffers with no line breaks: for mostly Latin/ASCII-range text one byte
/// of every code unit is null, and whether the nulls sit at even or odd offsets gives the
/// endianness. Counts nulls at each parity over the whole buffer and compares the fractions
/// against the configured thresholds (passed as percentages). Both sides of a branch have to
/// hold - lots of nulls at one parity AND few at the other - otherwise the check defers.
///
/// The fractions are normalised as `count * 2 / len` rather than by the number of positions
/// actually sampled at that parity, which slightly skews the result for odd-length buffers.
/// Kept that way deliberately - existing classifications depend on the original ratio semantics
pub fn check_null_distribution(buffer: &[u8], expected_null_percent: f64, unexpected_null_percent: f64) -> TextEncoding {
	let num_even_nulls = buffer.iter().step_by(2).filter(|&&b| b == 0).count();
	let num_odd_nulls = buffer.iter().skip(1).step_by(2).filter(|&&b| b == 0).count();

	let even_null_fraction = (num_even_nulls * 2) as f64 / buffer.len() as f64;
	let odd_null_fraction = (num_odd_nulls * 2) as f64 / buffer.len() as f64;
	let expected_null_threshold = expected_null_percent / 100.0;
	let unexpected_null_threshold = unexpected_null_percent / 100.0;

	// Lots of odd nulls, few even nulls: data bytes at even offsets, i.e. little endian
	if even_null_fraction < unexpected_null_threshold && odd_null_fraction > expected_null_threshold {
		return TextEncoding::Utf16LeNoBom;
	}

	// Lots of even nulls, few odd nulls: big endian
	if odd_null_fraction < unexpected_null_threshold && even_null_fraction > expected_null_threshold {
		return TextEncoding::Utf16BeNoBom;
	}

	TextEncoding::Unknown
}
