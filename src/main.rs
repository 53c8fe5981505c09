#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "paywalk", about = "Typed JSON payload inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Get {
		path: PathBuf,
		#[arg(long)]
		at: String,
		#[arg(long = "as", value_enum, default_value = "raw")]
		as_type: cmd::get::AsType,
		#[arg(long)]
		default: Option<String>,
		#[arg(long)]
		json: bool,
	},
	Iter {
		path: PathBuf,
		#[arg(long)]
		at: Option<String>,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> paywalk::payload::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Get {
			path,
			at,
			as_type,
			default,
			json,
		} => cmd::get::run(path, at, as_type, default, json),
		Commands::Iter { path, at, json } => cmd::iter::run(path, at, json),
	}
}
