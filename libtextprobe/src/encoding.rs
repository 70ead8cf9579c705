#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TextEncoding {
	/// Could not be confidently classified as text - for most callers this means binary data
	Unknown,
	/// Single-byte text, any value 0-255
	Ansi,
	/// Single-byte text, all values in the 0-127 range. Also a valid UTF-8 buffer, but reported
	/// separately since ASCII is the stricter claim
	Ascii,
	/// UTF-8 with a leading byte order mark
	Utf8Bom,
	/// UTF-8 containing at least one valid multibyte sequence, no byte order mark
	Utf8NoBom,
	/// UTF-16 little endian with a leading byte order mark
	Utf16LeBom,
	/// UTF-16 little endian, inferred heuristically without a byte order mark
	Utf16LeNoBom,
	/// UTF-16 big endian with a leading byte order mark
	Utf16BeBom,
	/// UTF-16 big endian, inferred heuristically without a byte order mark
	Utf16BeNoBom
}

impl TextEncoding {
	/// The number of bytes the byte order mark occupies for BOM-bearing classifications, so that
	/// callers can skip past it when extracting payload bytes. 0 for everything else
	pub fn bom_length(self) -> usize {
		match self {
			TextEncoding::Utf16LeBom | TextEncoding::Utf16BeBom => 2,
			TextEncoding::Utf8Bom => 3,
			_ => 0
		}
	}
}

#[cfg(test)]
mod test {
	use super::TextEncoding;

	#[test]
	fn test_bom_lengths() {
		assert_eq!(TextEncoding::Utf16LeBom.bom_length(), 2);
		assert_eq!(TextEncoding::Utf16BeBom.bom_length(), 2);
		assert_eq!(TextEncoding::Utf8Bom.bom_length(), 3);

		assert_eq!(TextEncoding::Unknown.bom_length(), 0);
		assert_eq!(TextEncoding::Ansi.bom_length(), 0);
		assert_eq!(TextEncoding::Ascii.bom_length(), 0);
		assert_eq!(TextEncoding::Utf8NoBom.bom_length(), 0);
		assert_eq!(TextEncoding::Utf16LeNoBom.bom_length(), 0);
		assert_eq!(TextEncoding::Utf16BeNoBom.bom_length(), 0);
	}

	#[test]
	fn test_display_names() {
		assert_eq!(TextEncoding::Utf16LeBom.to_string(), "utf16_le_bom");
		assert_eq!(TextEncoding::Utf8NoBom.to_string(), "utf8_no_bom");
		assert_eq!(TextEncoding::Unknown.to_string(), "unknown");
	}
}
