use serde::Deserialize;

/// Optional overrides for the detection tunables, usually deserialized from a TOML config file.
/// Values are applied through the [`TextDetector`](super::TextDetector) setters, so percentages
/// outside the open (0, 100) interval are dropped silently and the defaults kept - the same
/// no-op-on-invalid policy the setters themselves follow
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct DetectionConfig {
	#[serde(default)]
	pub null_suggests_binary: Option<bool>,
	#[serde(default)]
	pub utf16_expected_null_percent: Option<f64>,
	#[serde(default)]
	pub utf16_unexpected_null_percent: Option<f64>
}
