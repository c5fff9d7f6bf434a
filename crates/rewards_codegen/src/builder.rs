use codama_nodes::RootNode;

use crate::updates;

/// Chains the rewards IDL updates ahead of client generation.
///
/// Invocation order is significant: `append_account_discriminator` must run
/// before `append_account_version` (the version field slots in behind the
/// discriminator), and `append_pda_derivers` must run before
/// `update_instruction_bumps` (the bump default references the registered
/// `distributionConfig` PDA). [`transform_idl`] applies the canonical order.
#[derive(Debug)]
pub struct RewardsIdlBuilder {
	root: RootNode,
}

impl RewardsIdlBuilder {
	pub fn new(root: RootNode) -> Self {
		Self { root }
	}

	/// Parse a raw IDL JSON document into a builder.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		Ok(Self::new(serde_json::from_str(json)?))
	}

	pub fn append_account_discriminator(mut self) -> Self {
		self.root = updates::append_account_discriminator(self.root);
		self
	}

	pub fn append_account_version(mut self) -> Self {
		self.root = updates::append_account_version(self.root);
		self
	}

	pub fn append_pda_derivers(mut self) -> Self {
		self.root = updates::append_pda_derivers(self.root);
		self
	}

	pub fn set_instruction_account_default_values(mut self) -> Self {
		self.root = updates::set_instruction_account_default_values(self.root);
		self
	}

	pub fn update_instruction_bumps(mut self) -> Self {
		self.root = updates::update_instruction_bumps(self.root);
		self
	}

	pub fn remove_emit_instruction(mut self) -> Self {
		self.root = updates::remove_emit_instruction(self.root);
		self
	}

	pub fn build(self) -> RootNode {
		self.root
	}
}

/// The full update chain in its canonical order.
pub fn transform_idl(root: RootNode) -> RootNode {
	RewardsIdlBuilder::new(root)
		.append_account_discriminator()
		.append_account_version()
		.append_pda_derivers()
		.set_instruction_account_default_values()
		.update_instruction_bumps()
		.remove_emit_instruction()
		.build()
}
