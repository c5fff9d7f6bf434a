//! Drives the external Codama renderers through Node.
//!
//! Both renderers are npm packages; each is run as a short-lived `node`
//! process via `npx` (falling back to `pnpm dlx` when `npx` is missing),
//! with an embedded ES-module script that loads the transformed IDL and
//! calls the renderer visitor. The two renders write to disjoint output
//! directories and are spawned before either is waited on, so they may
//! overlap in wall-clock time.

use std::path::Path;
use std::process::Child;
use std::process::Command;
use std::process::Stdio;

use crate::error::CodegenError;

const CODAMA_PACKAGE: &str = "codama@1.5.1";
const RENDERERS_JS_PACKAGE: &str = "@codama/renderers-js@2.0.2";
const RENDERERS_RUST_PACKAGE: &str = "@codama/renderers-rust@1.1.2";

const RUST_RENDER_SCRIPT: &str = r#"
import { renderVisitor as renderRustVisitor } from "@codama/renderers-rust";
import { createFromJson } from "codama";
import { readFileSync } from "node:fs";

const [idlPath, outputDir, crateFolder, formatCode] = process.argv.slice(1);

const codama = createFromJson(readFileSync(idlPath, "utf8"));
await codama.accept(
	renderRustVisitor(outputDir, {
		crateFolder,
		deleteFolderBeforeRendering: true,
		formatCode: formatCode === "true",
	}),
);
"#;

const JS_RENDER_SCRIPT: &str = r#"
import { renderVisitor as renderJsVisitor } from "@codama/renderers-js";
import { createFromJson } from "codama";
import { readFileSync } from "node:fs";

const [idlPath, outputDir, formatCode] = process.argv.slice(1);

const codama = createFromJson(readFileSync(idlPath, "utf8"));
await codama.accept(
	renderJsVisitor(outputDir, {
		deleteFolderBeforeRendering: true,
		formatCode: formatCode === "true",
	}),
);
"#;

/// Options forwarded to the external renderers.
#[derive(Debug, Clone)]
pub struct RenderOptions {
	/// Executable used to invoke npx.
	pub npx: String,
	/// Run the renderer code formatters over the generated sources.
	pub format_code: bool,
}

struct RenderJob {
	target: &'static str,
	cmd: String,
	child: Child,
}

/// Render both clients from the transformed IDL at `idl_path`.
pub fn render_clients(
	idl_path: &Path,
	rust_client_dir: &Path,
	typescript_client_dir: &Path,
	options: &RenderOptions,
) -> Result<(), CodegenError> {
	let format_code = if options.format_code { "true" } else { "false" };
	let rust_out = rust_client_dir.join("src").join("generated");
	let typescript_out = typescript_client_dir.join("src").join("generated");

	let rust_job = spawn_render(
		options,
		RENDERERS_RUST_PACKAGE,
		RUST_RENDER_SCRIPT,
		"rust client",
		|command| {
			command
				.arg(idl_path)
				.arg(&rust_out)
				.arg(rust_client_dir)
				.arg(format_code);
		},
	)?;
	let js_job = spawn_render(
		options,
		RENDERERS_JS_PACKAGE,
		JS_RENDER_SCRIPT,
		"typescript client",
		|command| {
			command.arg(idl_path).arg(&typescript_out).arg(format_code);
		},
	)?;

	// Wait on both even when the first one failed.
	let rust_result = wait_render(rust_job);
	let js_result = wait_render(js_job);
	rust_result?;
	js_result
}

fn spawn_render(
	options: &RenderOptions,
	package: &str,
	script: &str,
	target: &'static str,
	configure: impl Fn(&mut Command),
) -> Result<RenderJob, CodegenError> {
	let mut command = npx_command(&options.npx, package, script);
	configure(&mut command);

	match command.spawn() {
		Ok(child) => {
			Ok(RenderJob {
				target,
				cmd: options.npx.clone(),
				child,
			})
		}
		Err(source) if source.kind() == std::io::ErrorKind::NotFound && options.npx == "npx" => {
			let mut command = pnpm_command(package, script);
			configure(&mut command);
			let child = command.spawn().map_err(|source| {
				CodegenError::RunCommand {
					cmd: "pnpm".to_string(),
					source,
				}
			})?;
			Ok(RenderJob {
				target,
				cmd: "pnpm".to_string(),
				child,
			})
		}
		Err(source) => {
			Err(CodegenError::RunCommand {
				cmd: options.npx.clone(),
				source,
			})
		}
	}
}

fn npx_command(npx: &str, package: &str, script: &str) -> Command {
	let mut command = Command::new(npx);
	command
		.arg("-y")
		.arg("-p")
		.arg(CODAMA_PACKAGE)
		.arg("-p")
		.arg(package)
		.arg("node")
		.arg("--input-type=module")
		.arg("-e")
		.arg(script)
		.stdout(Stdio::piped())
		.stderr(Stdio::piped());
	command
}

fn pnpm_command(package: &str, script: &str) -> Command {
	let mut command = Command::new("pnpm");
	command
		.arg("dlx")
		.arg("--package")
		.arg(CODAMA_PACKAGE)
		.arg("--package")
		.arg(package)
		.arg("node")
		.arg("--input-type=module")
		.arg("-e")
		.arg(script)
		.stdout(Stdio::piped())
		.stderr(Stdio::piped());
	command
}

fn wait_render(job: RenderJob) -> Result<(), CodegenError> {
	let RenderJob { target, cmd, child } = job;
	let output = child.wait_with_output().map_err(|source| {
		CodegenError::RunCommand {
			cmd: cmd.clone(),
			source,
		}
	})?;

	if output.status.success() {
		return Ok(());
	}

	let stdout = String::from_utf8_lossy(&output.stdout).trim().to_owned();
	let stderr = String::from_utf8_lossy(&output.stderr).trim().to_owned();
	let details = if !stderr.is_empty() {
		format!(": {stderr}")
	} else if !stdout.is_empty() {
		format!(": {stdout}")
	} else {
		String::new()
	};

	Err(CodegenError::CommandFailed {
		cmd: format!("{cmd} ({target} render)"),
		status: output.status.code().unwrap_or(-1),
		details,
	})
}
