//! Build-time generation of the rewards program clients.
//!
//! Reads the Codama IDL describing the rewards program, applies the
//! rewards-specific updates in a fixed order, and drives the external Rust
//! and TypeScript renderers against the transformed IDL while preserving
//! the hand-maintained client manifests around the renderer calls.

pub mod builder;
pub mod error;
pub mod preserve;
pub mod render;
pub mod updates;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use codama_nodes::RootNode;

pub use crate::builder::RewardsIdlBuilder;
pub use crate::builder::transform_idl;
pub use crate::error::CodegenError;
pub use crate::preserve::ConfigPreserver;
pub use crate::render::RenderOptions;

/// Options for one end-to-end generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
	pub idl_path: PathBuf,
	pub rust_client_dir: PathBuf,
	pub typescript_client_dir: PathBuf,
	pub npx: String,
	pub format_code: bool,
}

/// Read an IDL file and parse it as a Codama root node.
pub fn read_root_node(path: &Path) -> Result<RootNode, CodegenError> {
	let json = std::fs::read_to_string(path).map_err(|source| {
		CodegenError::ReadIdl {
			path: path.to_path_buf(),
			source,
		}
	})?;
	serde_json::from_str(&json).map_err(|source| {
		CodegenError::ParseIdl {
			path: path.to_path_buf(),
			source,
		}
	})
}

/// Run the full generation pipeline: transform the IDL, then render both
/// clients with the client manifests preserved around the renderer calls.
///
/// The manifests are restored even when rendering fails; the render error is
/// still returned afterwards.
pub fn generate_clients(options: &GenerateOptions) -> Result<(), CodegenError> {
	let root = read_root_node(&options.idl_path)?;
	let root = transform_idl(root);
	let idl_file = write_transformed_idl(&root)?;

	let preserver =
		ConfigPreserver::preserve(&options.typescript_client_dir, &options.rust_client_dir)?;

	let render_options = RenderOptions {
		npx: options.npx.clone(),
		format_code: options.format_code,
	};
	let result = render::render_clients(
		idl_file.path(),
		&options.rust_client_dir,
		&options.typescript_client_dir,
		&render_options,
	);

	preserver.restore();
	result
}

/// Hand the transformed IDL to the renderers through a temporary file that
/// lives until both renders finish.
fn write_transformed_idl(root: &RootNode) -> Result<tempfile::NamedTempFile, CodegenError> {
	let json = serde_json::to_string_pretty(root)
		.map_err(|source| CodegenError::SerializeIdl { source })?;

	let mut file = tempfile::Builder::new()
		.prefix("rewards_idl")
		.suffix(".json")
		.tempfile()
		.map_err(|source| CodegenError::CreateTempIdl { source })?;
	file.write_all(json.as_bytes()).map_err(|source| {
		CodegenError::WriteIdl {
			path: file.path().to_path_buf(),
			source,
		}
	})?;

	Ok(file)
}
