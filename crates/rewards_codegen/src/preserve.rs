use std::path::Path;
use std::path::PathBuf;

use crate::error::CodegenError;

/// Manifest files the TypeScript renderer would otherwise clobber.
const TYPESCRIPT_CONFIG_FILES: &[&str] = &[
	"package.json",
	"tsconfig.json",
	".npmignore",
	"pnpm-lock.yaml",
	"Cargo.toml",
];

struct PreservedFile {
	original: PathBuf,
	backup: PathBuf,
}

/// Copies hand-maintained client manifests aside before generation and puts
/// them back afterwards.
///
/// Restoration also runs on drop, so early error returns in the driver still
/// put the originals back. Individual restore failures are reported as
/// warnings and never abort the run.
pub struct ConfigPreserver {
	preserved: Vec<PreservedFile>,
}

impl ConfigPreserver {
	/// Back up every preserved file that exists under the two client
	/// directories. Files that are absent are skipped; a file that exists
	/// but cannot be copied fails the run.
	pub fn preserve(
		typescript_client_dir: &Path,
		rust_client_dir: &Path,
	) -> Result<Self, CodegenError> {
		let mut preserved = Vec::new();

		for filename in TYPESCRIPT_CONFIG_FILES {
			back_up(typescript_client_dir, filename, &mut preserved)?;
		}
		back_up(rust_client_dir, "Cargo.toml", &mut preserved)?;

		Ok(Self { preserved })
	}

	/// Restore every backed-up file and delete the backups.
	pub fn restore(mut self) {
		self.restore_all();
	}

	fn restore_all(&mut self) {
		for file in self.preserved.drain(..) {
			if let Err(error) = restore_file(&file) {
				eprintln!(
					"Warning: failed to restore {} from {}: {error}",
					file.original.display(),
					file.backup.display(),
				);
			}
		}
	}
}

impl Drop for ConfigPreserver {
	fn drop(&mut self) {
		self.restore_all();
	}
}

fn back_up(
	dir: &Path,
	filename: &str,
	preserved: &mut Vec<PreservedFile>,
) -> Result<(), CodegenError> {
	let original = dir.join(filename);
	if !original.exists() {
		return Ok(());
	}

	let backup = dir.join(format!("{filename}.temp"));
	std::fs::copy(&original, &backup).map_err(|source| {
		CodegenError::PreserveConfig {
			path: original.clone(),
			source,
		}
	})?;

	preserved.push(PreservedFile { original, backup });
	Ok(())
}

fn restore_file(file: &PreservedFile) -> std::io::Result<()> {
	if file.backup.exists() {
		std::fs::copy(&file.backup, &file.original)?;
		std::fs::remove_file(&file.backup)?;
	}
	Ok(())
}
