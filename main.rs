use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use apcodec::{Base, Container, Decoder, Encoder, Item, Recipients};

#[derive(Parser)]
/// look into and tidy up activitystreams documents
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

	/// decode a document and describe what it holds
	Inspect {
		/// document to read, `-` for stdin
		input: PathBuf,
	},

	/// decode a document and encode it back
	Normalize {
		/// document to read, `-` for stdin
		input: PathBuf,

		#[arg(long, default_value_t = false)]
		/// replace embedded records with their ids where only a reference is expected
		flatten: bool,

		#[arg(long, default_value_t = false)]
		/// deduplicate recipients and drop bto/bcc
		clean: bool,

		#[arg(long, default_value_t = false)]
		/// keep records of unknown type instead of failing
		lenient: bool,
	},
}

fn main() -> ExitCode {
	let args = Args::parse();

	tracing_subscriber::fmt()
		.compact()
		.with_max_level(if args.debug { tracing::Level::DEBUG } else { tracing::Level::INFO })
		.init();

	let config = apcodec::Config::load(args.config.as_ref());

	match args.command {
		Mode::Config => match toml::to_string_pretty(&config) {
			Ok(x) => println!("{x}"),
			Err(e) => {
				tracing::error!("failed serializing config: {e}");
				return ExitCode::FAILURE;
			},
		},

		Mode::Inspect { input } => {
			let decoder = Decoder::from_config(&config.decode);
			let Some(item) = read(&input).and_then(|raw| decoded(decoder.decode(&raw))) else {
				return ExitCode::FAILURE;
			};
			for x in item.iter() {
				println!("{}", describe(x));
			}
		},

		Mode::Normalize { input, flatten, clean, lenient } => {
			let mut decoder = Decoder::from_config(&config.decode);
			if lenient {
				decoder = decoder.lenient();
			}
			let Some(mut item) = read(&input).and_then(|raw| decoded(decoder.decode(&raw))) else {
				return ExitCode::FAILURE;
			};
			tidy(&mut item, flatten, clean);
			let mut out = Encoder::from_config(&config.encode).encode(&item);
			out.push(b'\n');
			if let Err(e) = std::io::stdout().write_all(&out) {
				tracing::error!("failed writing output: {e}");
				return ExitCode::FAILURE;
			}
		},
	}

	ExitCode::SUCCESS
}

fn read(input: &Path) -> Option<Vec<u8>> {
	let mut raw = Vec::new();
	let res = if input == Path::new("-") {
		std::io::stdin().read_to_end(&mut raw).map(|_| raw)
	} else {
		std::fs::read(input)
	};
	match res {
		Ok(raw) => Some(raw),
		Err(e) => {
			tracing::error!("failed reading {}: {e}", input.display());
			None
		},
	}
}

fn decoded(res: apcodec::Result<Item>) -> Option<Item> {
	match res {
		Ok(item) => Some(item),
		Err(e) => {
			tracing::error!("could not decode document: {e}");
			None
		},
	}
}

fn describe(item: &Item) -> String {
	match item {
		Item::Iri(iri) => format!("{iri}\treference"),
		Item::Items(items) => format!("list of {} items", items.len()),
		Item::Record(record) => {
			let reference = record.reference().map(|r| r.as_str()).unwrap_or("(anonymous)");
			let kind = if record.kind().is_empty() { "(untyped)" } else { record.kind().as_str() };
			match record.as_container() {
				Ok(coll) => format!("{reference}\t{kind}\t{:?}\t{} items", record.family(), coll.count()),
				Err(_) => format!("{reference}\t{kind}\t{:?}", record.family()),
			}
		},
	}
}

fn tidy(item: &mut Item, flatten: bool, clean: bool) {
	match item {
		Item::Iri(_) => {},
		Item::Items(items) => {
			for x in items {
				tidy(x, flatten, clean);
			}
		},
		Item::Record(record) => {
			if flatten {
				apcodec::flatten_properties(record);
			}
			if clean {
				record.clean();
			}
		},
	}
}
