mod args;

use std::{fs, io::Write, path::Path, process::ExitCode};

use args::Args;
use clap::Parser;
use libtextprobe::{detection::{config::DetectionConfig, TextDetector}, encoding::TextEncoding};
use log::{debug, error};

const DEFAULT_CONFIG_PATH: &str = "Textprobe.toml";

fn main() -> ExitCode {
	let args = Args::parse();

	env_logger::Builder::new()
		.filter_level(args.verbose.log_level_filter())
		.format(|f, record| {
			let level_style = f.default_level_style(record.level());
			writeln!(f, "[{} {}/{}{}{}]: {}", f.timestamp(), record.target(), level_style.render(), record.level(), level_style.render_reset(), record.args())
		})
		.init();

	debug!("Args: {:?}", args);

	let Some(input) = args.input else {
		eprintln!("Usage: textprobe <filename>");
		return ExitCode::FAILURE;
	};

	// An explicitly passed config path has to load; the default one is only read if it exists
	let explicit = args.config.is_some();
	let config_path = args.config.unwrap_or(DEFAULT_CONFIG_PATH.to_string());
	let config = if explicit || Path::new(&config_path).exists() {
		match fs::read_to_string(&config_path) {
			Ok(config_string) => match toml::from_str(&config_string) {
				Ok(config) => config,
				Err(e) => {
					error!("Error processing config file \"{}\": {}", config_path, e);
					return ExitCode::FAILURE;
				}
			},
			Err(e) => {
				error!("Could not open config file \"{}\": {}", config_path, e);
				return ExitCode::FAILURE;
			}
		}
	} else {
		DetectionConfig::default()
	};

	debug!("Config: {:?}", config);

	let buffer = match fs::read(&input) {
		Ok(buffer) => buffer,
		Err(e) => {
			error!("Could not read file \"{}\": {}", input, e);
			return ExitCode::FAILURE;
		}
	};

	let detector = TextDetector::with_config(&config);
	let encoding = detector.detect(&buffer);

	debug!("Detected encoding variant: {}", encoding);

	println!("Encoding: {}", encoding_label(encoding));

	ExitCode::SUCCESS
}

/// Maps each classification to the user-facing label. BOM and non-BOM variants of the same
/// encoding read the same
fn encoding_label(encoding: TextEncoding) -> &'static str {
	match encoding {
		TextEncoding::Unknown => "Binary",
		TextEncoding::Ascii => "ASCII (chars in the 0-127 range)",
		TextEncoding::Ansi => "ANSI (chars in the range 0-255 range)",
		TextEncoding::Utf8Bom | TextEncoding::Utf8NoBom => "UTF-8",
		TextEncoding::Utf16LeBom | TextEncoding::Utf16LeNoBom => "UTF-16 Little Endian",
		TextEncoding::Utf16BeBom | TextEncoding::Utf16BeNoBom => "UTF-16 Big Endian"
	}
}
