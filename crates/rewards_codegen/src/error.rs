use std::path::PathBuf;

/// Errors produced during end-to-end client generation.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
	#[error("Failed to read IDL at {path}: {source}")]
	ReadIdl {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("Failed to parse IDL at {path} as a Codama root node: {source}")]
	ParseIdl {
		path: PathBuf,
		source: serde_json::Error,
	},

	#[error("Failed to serialize the transformed IDL: {source}")]
	SerializeIdl { source: serde_json::Error },

	#[error("Failed to create a temporary file for the transformed IDL: {source}")]
	CreateTempIdl { source: std::io::Error },

	#[error("Failed to write transformed IDL to {path}: {source}")]
	WriteIdl {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("Failed to back up {path}: {source}")]
	PreserveConfig {
		path: PathBuf,
		source: std::io::Error,
	},

	#[error("Failed to run `{cmd}`: {source}")]
	RunCommand { cmd: String, source: std::io::Error },

	#[error("`{cmd}` failed with status {status}{details}")]
	CommandFailed {
		cmd: String,
		status: i32,
		details: String,
	},
}
