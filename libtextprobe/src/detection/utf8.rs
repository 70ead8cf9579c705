use crate::encoding::TextEncoding;

/// Walks the buffer once validating UTF-8 sequence structure. Returns:
/// - `Unknown` - not valid UTF-8 (or aborted on a null lead byte when `null_suggests_binary`)
/// - `Ascii` - structurally valid, but every byte was in the 0-127 range, so the buffer is
///   indistinguishable from plain ASCII and the caller shouldn't assume UTF-8
/// - `Utf8NoBom` - valid, with at least one multibyte sequence observed
///
/// Valid sequences:
/// ```text
/// 0xxxxxxx                                1 byte, lead 0x00-0x7F
/// 110xxxxx 10xxxxxx                       2 byte, lead 0xC2-0xDF
/// 1110xxxx 10xxxxxx 10xxxxxx              3 byte, lead 0xE0-0xEF
/// 11110xxx 10xxxxxx 10xxxxxx 10xxxxxx     4 byte, lead 0xF0-0xF4
/// ```
/// Continuation bytes are 0x80-0xBF. Lead bytes 0x80-0xC1 and 0xF5-0xFF are invalid outright
/// (0xC0/0xC1 would only begin overlong encodings, 0xF5+ would encode past U+10FFFF), and a
/// sequence cut off by the end of the buffer invalidates the whole buffer
pub fn check_utf8(buffer: &[u8], null_suggests_binary: bool) -> TextEncoding {
	let mut only_saw_ascii_range = true;
	let mut pos = 0;

	while pos < buffer.len() {
		let ch = buffer[pos];
		pos += 1;

		if ch == 0 && null_suggests_binary {
			return TextEncoding::Unknown;
		}

		let continuations = match ch {
			0x00..=0x7F => 0,
			0xC2..=0xDF => 1,
			0xE0..=0xEF => 2,
			0xF0..=0xF4 => 3,
			_ => return TextEncoding::Unknown
		};

		for _ in 0..continuations {
			only_saw_ascii_range = false;

			match buffer.get(pos) {
				Some(0x80..=0xBF) => pos += 1,
				// Out of continuation range, or the buffer ended mid-sequence
				_ => return TextEncoding::Unknown
			}
		}
	}

	if only_saw_ascii_range {
		TextEncoding::Ascii
	} else {
		TextEncoding::Utf8NoBom
	}
}
