pub mod config;

mod utf8;
mod utf16;

use log::{debug, trace};

use crate::encoding::TextEncoding;

use self::config::DetectionConfig;

const UTF16_LE_BOM: [u8; 2] = [ 0xFF, 0xFE ];
const UTF16_BE_BOM: [u8; 2] = [ 0xFE, 0xFF ];
const UTF8_BOM: [u8; 3] = [ 0xEF, 0xBB, 0xBF ];

const DEFAULT_UTF16_EXPECTED_NULL_PERCENT: f64 = 70.0;
const DEFAULT_UTF16_UNEXPECTED_NULL_PERCENT: f64 = 10.0;

/// Checks the first bytes of the buffer for a byte order mark. Returns `Unknown` when no BOM is
/// present - in that case the caller has to decide what the buffer is by other means (e.g.
/// [`TextDetector::detect`], which runs this as the first stage of its pipeline). Buffers too
/// short to hold a BOM simply fail to match
pub fn check_bom(buffer: &[u8]) -> TextEncoding {
	if buffer.starts_with(&UTF16_LE_BOM) {
		TextEncoding::Utf16LeBom
	} else if buffer.starts_with(&UTF16_BE_BOM) {
		TextEncoding::Utf16BeBom
	} else if buffer.starts_with(&UTF8_BOM) {
		TextEncoding::Utf8Bom
	} else {
		TextEncoding::Unknown
	}
}

/// Classifies byte buffers as binary data or one of six text encodings, holding the tunable
/// thresholds the heuristic stages use. Detection is a pure function of the buffer and the
/// configured thresholds - no state is kept between calls, so one instance can serve any number
/// of buffers (and threads, as long as nothing races the setters)
#[derive(Debug)]
pub struct TextDetector {
	null_suggests_binary: bool,
	utf16_expected_null_percent: f64,
	utf16_unexpected_null_percent: f64
}

impl Default for TextDetector {
	fn default() -> Self {
		TextDetector {
			null_suggests_binary: true,
			utf16_expected_null_percent: DEFAULT_UTF16_EXPECTED_NULL_PERCENT,
			utf16_unexpected_null_percent: DEFAULT_UTF16_UNEXPECTED_NULL_PERCENT
		}
	}
}

impl TextDetector {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a detector with the defaults overlaid by whatever values `config` carries. Config
	/// values go through the setters, so out of range percentages are dropped silently
	pub fn with_config(config: &DetectionConfig) -> Self {
		let mut detector = Self::default();
		detector.apply_config(config);
		detector
	}

	pub fn apply_config(&mut self, config: &DetectionConfig) {
		if let Some(value) = config.null_suggests_binary {
			self.set_null_suggests_binary(value);
		}
		if let Some(value) = config.utf16_expected_null_percent {
			self.set_utf16_expected_null_percent(value);
		}
		if let Some(value) = config.utf16_unexpected_null_percent {
			self.set_utf16_unexpected_null_percent(value);
		}
	}

	/// Whether a null byte should be taken as evidence of binary data. Affects the UTF-8 stage
	/// (which aborts on a null lead byte when set) and the final null-presence fallback. Defaults
	/// to true
	pub fn set_null_suggests_binary(&mut self, value: bool) {
		self.null_suggests_binary = value;
	}

	/// Minimum percentage of nulls at the expected parity for the UTF-16 null-distribution stage
	/// to report a match. Only values strictly between 0 and 100 are accepted; anything else
	/// (including NaN) leaves the previous value in place, without an error or a warning
	pub fn set_utf16_expected_null_percent(&mut self, value: f64) {
		if value > 0.0 && value < 100.0 {
			self.utf16_expected_null_percent = value;
		}
	}

	/// Maximum percentage of nulls tolerated at the opposite parity for the UTF-16
	/// null-distribution stage. Same silent open-interval validation as
	/// [`Self::set_utf16_expected_null_percent`]
	pub fn set_utf16_unexpected_null_percent(&mut self, value: f64) {
		if value > 0.0 && value < 100.0 {
			self.utf16_unexpected_null_percent = value;
		}
	}

	/// Runs the full detection pipeline over the buffer: BOM scan, UTF-8 structural validation,
	/// UTF-16 newline-pair heuristic, UTF-16 null-distribution heuristic, then the null-presence
	/// fallback. The first stage that reaches a positive conclusion wins - a BOM always outranks
	/// buffer content, structural UTF-8 proof outranks the statistical UTF-16 stages, and those
	/// outrank the ANSI/binary fallback. Every input maps to some [`TextEncoding`]; `Unknown`
	/// means binary (or at least "not confidently text")
	pub fn detect(&self, buffer: &[u8]) -> TextEncoding {
		// No bytes, no evidence - and the fallback would otherwise call this Ansi
		if buffer.is_empty() {
			return TextEncoding::Unknown;
		}

		let encoding = check_bom(buffer);
		if encoding != TextEncoding::Unknown {
			debug!("BOM found, classified {} byte buffer as {}", buffer.len(), encoding);
			return encoding;
		}

		let encoding = utf8::check_utf8(buffer, self.null_suggests_binary);
		if encoding != TextEncoding::Unknown {
			debug!("Classified {} byte buffer as {}", buffer.len(), encoding);
			return encoding;
		}

		let encoding = utf16::check_newline_chars(buffer);
		if encoding != TextEncoding::Unknown {
			debug!("Classified {} byte buffer as {} from newline pairs", buffer.len(), encoding);
			return encoding;
		}

		let encoding = utf16::check_null_distribution(
			buffer,
			self.utf16_expected_null_percent,
			self.utf16_unexpected_null_percent
		);
		if encoding != TextEncoding::Unknown {
			debug!("Classified {} byte buffer as {} from null distribution", buffer.len(), encoding);
			return encoding;
		}

		trace!("No stage matched, falling back to null-presence scan");

		let encoding = if !contains_nulls(buffer) {
			TextEncoding::Ansi
		} else if self.null_suggests_binary {
			TextEncoding::Unknown
		} else {
			TextEncoding::Ansi
		};

		debug!("Classified {} byte buffer as {} by fallback", buffer.len(), encoding);

		encoding
	}
}

/// Used to decide between ANSI text and binary data once every other stage has deferred
fn contains_nulls(buffer: &[u8]) -> bool {
	buffer.contains(&0)
}

#[cfg(test)]
mod test {
	use crate::encoding::TextEncoding;
	use crate::utils::init_test_logger;

	use super::{check_bom, TextDetector};

	#[test]
	fn test_check_bom() {
		assert_eq!(check_bom(&[ 0xFF, 0xFE, 0x68, 0x00 ]), TextEncoding::Utf16LeBom);
		assert_eq!(check_bom(&[ 0xFE, 0xFF, 0x00, 0x68 ]), TextEncoding::Utf16BeBom);
		assert_eq!(check_bom(&[ 0xEF, 0xBB, 0xBF, 0x68 ]), TextEncoding::Utf8Bom);

		// Exact-length buffers still match
		assert_eq!(check_bom(&[ 0xFF, 0xFE ]), TextEncoding::Utf16LeBom);
		assert_eq!(check_bom(&[ 0xEF, 0xBB, 0xBF ]), TextEncoding::Utf8Bom);

		// Too short to hold the marker
		assert_eq!(check_bom(&[ 0xFF ]), TextEncoding::Unknown);
		assert_eq!(check_bom(&[ 0xEF, 0xBB ]), TextEncoding::Unknown);
		assert_eq!(check_bom(&[]), TextEncoding::Unknown);

		assert_eq!(check_bom(b"plain text"), TextEncoding::Unknown);
	}

	#[test]
	fn test_bom_outranks_content() {
		init_test_logger();

		let detector = TextDetector::new();

		// The payload after the UTF-8 BOM isn't valid UTF-8, but the BOM still wins
		assert_eq!(detector.detect(&[ 0xEF, 0xBB, 0xBF, 0xFF, 0xFF, 0xFF ]), TextEncoding::Utf8Bom);
		assert_eq!(detector.detect(&[ 0xFF, 0xFE, 0x00, 0x00, 0x00 ]), TextEncoding::Utf16LeBom);
		assert_eq!(detector.detect(&[ 0xFE, 0xFF ]), TextEncoding::Utf16BeBom);
	}

	#[test]
	fn test_detect_ascii() {
		let detector = TextDetector::new();

		assert_eq!(detector.detect(b"The quick brown fox\r\n"), TextEncoding::Ascii);
		assert_eq!(detector.detect(&[ 0x7F ]), TextEncoding::Ascii);
	}

	#[test]
	fn test_detect_utf8_multibyte() {
		let detector = TextDetector::new();

		// "café"
		assert_eq!(detector.detect(&[ 0x63, 0x61, 0x66, 0xC3, 0xA9 ]), TextEncoding::Utf8NoBom);
	}

	#[test]
	fn test_detect_utf16_le_via_newlines() {
		let detector = TextDetector::new();

		// "hi\n" in UTF-16 LE - the UTF-8 stage aborts on the null and the newline pair decides
		// the endianness before the null-distribution stage runs
		assert_eq!(detector.detect(&[ 0x68, 0x00, 0x69, 0x00, 0x0A, 0x00 ]), TextEncoding::Utf16LeNoBom);
	}

	#[test]
	fn test_detect_utf16_be_via_newlines() {
		let detector = TextDetector::new();

		assert_eq!(detector.detect(&[ 0x00, 0x68, 0x00, 0x69, 0x00, 0x0A ]), TextEncoding::Utf16BeNoBom);
	}

	#[test]
	fn test_detect_utf16_via_null_distribution() {
		let detector = TextDetector::new();

		// No newlines at all, so only the null distribution can tell
		assert_eq!(detector.detect(&[ 0x68, 0x00, 0x69, 0x00, 0x21, 0x00 ]), TextEncoding::Utf16LeNoBom);
		assert_eq!(detector.detect(&[ 0x00, 0x68, 0x00, 0x69, 0x00, 0x21 ]), TextEncoding::Utf16BeNoBom);
	}

	#[test]
	fn test_detect_ansi() {
		let detector = TextDetector::new();

		// 0xE9 looks like a 3-byte UTF-8 lead with no continuations, so the UTF-8 stage rejects
		// it and the null-free fallback reports ANSI
		assert_eq!(detector.detect(&[ 0x63, 0x61, 0x66, 0xE9 ]), TextEncoding::Ansi);
	}

	#[test]
	fn test_detect_binary() {
		let mut detector = TextDetector::new();

		// A null in otherwise 8-bit content: binary under the default policy, text if the caller
		// opted out of null-suggests-binary
		let buffer = [ 0x61, 0x62, 0x00, 0xE9, 0x64 ];

		assert_eq!(detector.detect(&buffer), TextEncoding::Unknown);

		detector.set_null_suggests_binary(false);
		assert_eq!(detector.detect(&buffer), TextEncoding::Ansi);
	}

	#[test]
	fn test_detect_null_tolerant_ascii() {
		let mut detector = TextDetector::new();
		detector.set_null_suggests_binary(false);

		// With nulls treated as text, 0x00 is just another byte in the 0-127 range
		assert_eq!(detector.detect(&[ 0x61, 0x00, 0x62 ]), TextEncoding::Ascii);
	}

	#[test]
	fn test_detect_empty_buffer() {
		let detector = TextDetector::new();

		assert_eq!(detector.detect(&[]), TextEncoding::Unknown);
	}

	#[test]
	fn test_detect_idempotent() {
		let detector = TextDetector::new();
		let buffer = [ 0x63, 0x61, 0x66, 0xC3, 0xA9 ];

		let first = detector.detect(&buffer);
		let second = detector.detect(&buffer);

		assert_eq!(first, second);
	}

	#[test]
	fn test_setter_range_validation() {
		// 10 bytes, 3 nulls at odd positions and none at even: odd fraction 0.6, even 0.0.
		// Below the default 70% expectation, above a configured 50% one - so the classification
		// flips if and only if a set actually took effect
		let buffer = [ 0x61, 0x00, 0x62, 0x00, 0x63, 0x00, 0x64, 0x64, 0x65, 0x65 ];

		let mut detector = TextDetector::new();
		assert_eq!(detector.detect(&buffer), TextEncoding::Unknown);

		detector.set_utf16_expected_null_percent(50.0);
		assert_eq!(detector.detect(&buffer), TextEncoding::Utf16LeNoBom);

		// All out of range - the 50% from above must survive every one of these
		detector.set_utf16_expected_null_percent(0.0);
		detector.set_utf16_expected_null_percent(100.0);
		detector.set_utf16_expected_null_percent(-5.0);
		detector.set_utf16_expected_null_percent(250.0);
		detector.set_utf16_expected_null_percent(f64::NAN);
		assert_eq!(detector.detect(&buffer), TextEncoding::Utf16LeNoBom);

		// Same policy on the unexpected-null setter
		detector.set_utf16_unexpected_null_percent(0.0);
		detector.set_utf16_unexpected_null_percent(101.0);
		assert_eq!(detector.detect(&buffer), TextEncoding::Utf16LeNoBom);
	}

	#[test]
	fn test_mixed_parity_newlines_fall_through() {
		let detector = TextDetector::new();

		// One LE-looking newline pair and one BE-looking one: the newline stage aborts, the null
		// distribution is a 50/50 split, and the fallback sees nulls
		assert_eq!(detector.detect(&[ 0x0A, 0x00, 0x00, 0x0A ]), TextEncoding::Unknown);
	}
}
