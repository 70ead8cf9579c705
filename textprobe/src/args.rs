use clap::Parser;
use clap_verbosity_flag::InfoLevel;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
	#[command(flatten)]
	pub verbose: clap_verbosity_flag::Verbosity<InfoLevel>,
	/// Path to the file to classify
	pub input: Option<String>,
	/// Path to a TOML config file overriding the detection thresholds. Defaults to looking for "Textprobe.toml" in the current working directory, falling back to built-in defaults if it doesn't exist
	#[arg(short, long)]
	pub config: Option<String>
}
