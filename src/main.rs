#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "reflectkit", about = "Reflective handle inspection tools")]
struct Cli {
	/// Raise log verbosity (-v debug, -vv trace).
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Resolve pointer indirection on a type expression and optional value.
	Origin(cmd::origin::Args),
	/// Extract a native value from a handle built from a literal.
	Extract(cmd::extract::Args),
	/// List every kind with its family.
	Kinds(cmd::kinds::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> reflectkit::reflect::Result<()> {
	match command {
		Commands::Origin(args) => cmd::origin::run(args),
		Commands::Extract(args) => cmd::extract::run(args),
		Commands::Kinds(args) => cmd::kinds::run(args),
	}
}

fn init_logging(verbose: u8) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		EnvFilter::new(match verbose {
			0 => "warn",
			1 => "debug",
			_ => "trace",
		})
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
