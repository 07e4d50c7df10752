use std::{io::Read, path::PathBuf};
use clap::{Parser, Subcommand};

use apvocab::LD;

mod config;
use config::Config;


#[derive(Parser)]
/// inspect, normalize and compare activitystreams documents
struct Args {
	#[clap(subcommand)]
	/// command to run
	command: Mode,

	/// path to config file, leave empty to not use any
	#[arg(short, long)]
	config: Option<PathBuf>,

	#[arg(long, default_value_t=false)]
	/// run with debug level tracing
	debug: bool,
}

#[derive(Clone, Subcommand)]
enum Mode {
	/// print current or default configuration
	Config,

	/// parse a document and print it back in normal form
	Normalize {
		/// document to read, `-` for stdin
		file: PathBuf,
	},

	/// print namespaces and aliases a document needs to be serialized
	Context {
		/// document to read, `-` for stdin
		file: PathBuf,
	},

	/// tell whether the first document sorts before, after or together with the second
	Compare {
		/// first document, `-` for stdin
		a: PathBuf,

		/// second document, `-` for stdin
		b: PathBuf,
	},
}

#[derive(Debug, thiserror::Error)]
enum CliError {
	#[error("could not read document: {0}")]
	Io(#[from] std::io::Error),

	#[error("invalid json: {0}")]
	Json(#[from] serde_json::Error),

	#[error("could not deserialize document: {0}")]
	Deserialize(#[from] apvocab::DeserializeError),

	#[error("could not serialize document: {0}")]
	Serialize(#[from] apvocab::SerializeError),
}

fn main() {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.compact()
		.with_writer(std::io::stderr)
		.with_max_level(if args.debug { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.init();

	let config = Config::load(args.config.as_ref());

	if matches!(args.command, Mode::Config) {
		println!("{}", toml::to_string_pretty(&config).expect("failed serializing config"));
		return;
	}

	if let Err(e) = run(args.command, &config) {
		tracing::error!("{e}");
		std::process::exit(1);
	}
}

fn run(mode: Mode, config: &Config) -> Result<(), CliError> {
	let registry = config.registry();

	match mode {
		Mode::Normalize { file } => {
			let obj = registry.resolve(&read_document(&file)?)?;
			tracing::debug!("read {} with alias '{}'", obj.kind(), obj.alias());
			let out = if config.output.context {
				obj.ld_serialize()?
			} else {
				serde_json::Value::Object(obj.serialize()?)
			};
			print(&out, config)?;
		},

		Mode::Context { file } => {
			let obj = registry.resolve(&read_document(&file)?)?;
			print(&serde_json::to_value(obj.jsonld_context())?, config)?;
		},

		Mode::Compare { a, b } => {
			let a = registry.resolve(&read_document(&a)?)?;
			let b = registry.resolve(&read_document(&b)?)?;
			// properties only line up between objects of the same type
			let verdict = if a.kind() != b.kind() {
				if a.type_name() < b.type_name() { "less" } else { "greater" }
			} else if a.less_than(&b) {
				"less"
			} else if b.less_than(&a) {
				"greater"
			} else {
				"equal"
			};
			println!("{verdict}");
		},

		Mode::Config => unreachable!(),
	}

	Ok(())
}

fn read_document(path: &PathBuf) -> Result<serde_json::Value, CliError> {
	let raw = if path.as_os_str() == "-" {
		let mut buf = String::new();
		std::io::stdin().read_to_string(&mut buf)?;
		buf
	} else {
		std::fs::read_to_string(path)?
	};
	Ok(serde_json::from_str(&raw)?)
}

fn print(value: &serde_json::Value, config: &Config) -> Result<(), CliError> {
	let out = if config.output.pretty {
		serde_json::to_string_pretty(value)?
	} else {
		serde_json::to_string(value)?
	};
	println!("{out}");
	Ok(())
}
