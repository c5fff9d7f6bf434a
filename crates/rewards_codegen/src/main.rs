use std::path::PathBuf;

use clap::Parser;
use rewards_codegen::GenerateOptions;

#[derive(Debug, Parser)]
#[command(
	name = "rewards_codegen",
	about = "Generate the Rust and TypeScript rewards clients from the Codama IDL"
)]
struct Args {
	/// Codama IDL describing the rewards program.
	#[arg(long, default_value = "idl/rewards_program.json")]
	idl: PathBuf,

	/// Rust client crate root. Generated code lands in `src/generated`.
	#[arg(long, default_value = "clients/rust")]
	rust_client_dir: PathBuf,

	/// TypeScript client package root. Generated code lands in
	/// `src/generated`.
	#[arg(long, default_value = "clients/typescript")]
	typescript_client_dir: PathBuf,

	/// Executable used to invoke npx.
	#[arg(long, default_value = "npx")]
	npx: String,

	/// Skip running the renderer code formatters.
	#[arg(long, default_value_t = false)]
	skip_format: bool,
}

fn main() {
	let args = Args::parse();

	let options = GenerateOptions {
		idl_path: args.idl,
		rust_client_dir: args.rust_client_dir,
		typescript_client_dir: args.typescript_client_dir,
		npx: args.npx,
		format_code: !args.skip_format,
	};

	if let Err(error) = rewards_codegen::generate_clients(&options) {
		eprintln!("Error: {error}");
		std::process::exit(1);
	}
}
