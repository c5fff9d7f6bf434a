//! The rewards IDL updates applied before client generation.
//!
//! Each update is a pure `RootNode -> RootNode` edit with no I/O. The order
//! in which they run matters; `RewardsIdlBuilder` fixes it at the call site.

mod append_account_discriminator;
mod append_account_version;
mod append_pda_derivers;
mod remove_emit_instruction;
mod set_instruction_account_default_values;
mod update_instruction_bumps;

pub use append_account_discriminator::append_account_discriminator;
pub use append_account_version::append_account_version;
pub use append_pda_derivers::append_pda_derivers;
pub use remove_emit_instruction::remove_emit_instruction;
pub use set_instruction_account_default_values::ATA_PROGRAM_ID;
pub use set_instruction_account_default_values::REWARDS_PROGRAM_ID;
pub use set_instruction_account_default_values::SYSTEM_PROGRAM_ID;
pub use set_instruction_account_default_values::TOKEN_PROGRAM_ID;
pub use set_instruction_account_default_values::associated_token_account_value;
pub use set_instruction_account_default_values::set_instruction_account_default_values;
pub use update_instruction_bumps::update_instruction_bumps;

use codama_nodes::AccountNode;
use codama_nodes::CamelCaseString;
use codama_nodes::NestedTypeNode;
use codama_nodes::NumberFormat;
use codama_nodes::NumberTypeNode;
use codama_nodes::PdaNode;
use codama_nodes::ProgramNode;
use codama_nodes::RootNode;
use codama_nodes::StructFieldTypeNode;
use codama_nodes::StructTypeNode;
use codama_nodes::TypeNode;

/// Visit every program in the root, the main one first.
pub(crate) fn programs_mut(root: &mut RootNode) -> impl Iterator<Item = &mut ProgramNode> {
	let RootNode {
		program,
		additional_programs,
		..
	} = root;
	std::iter::once(program).chain(additional_programs.iter_mut())
}

/// Apply `f` to every account node in every program.
pub(crate) fn map_accounts(mut root: RootNode, f: impl Fn(&mut AccountNode)) -> RootNode {
	for program in programs_mut(&mut root) {
		for account in &mut program.accounts {
			f(account);
		}
	}
	root
}

/// The struct payload of an account, when the payload is a direct struct
/// value. Wrapped or otherwise shaped payloads return `None` and pass
/// through untouched.
pub(crate) fn struct_data_mut(account: &mut AccountNode) -> Option<&mut StructTypeNode> {
	match &mut account.data {
		NestedTypeNode::Value(data) => Some(data),
		_ => None,
	}
}

/// Register PDA descriptors on the program with the given name. Programs
/// without a matching name are left alone.
pub(crate) fn add_pdas(mut root: RootNode, program_name: &str, pdas: Vec<PdaNode>) -> RootNode {
	let program = programs_mut(&mut root).find(|program| is_named(&program.name, program_name));
	if let Some(program) = program {
		program.pdas.extend(pdas);
	}
	root
}

pub(crate) fn is_named(name: &CamelCaseString, expected: &str) -> bool {
	name == &CamelCaseString::from(expected)
}

pub(crate) fn u8_field(name: &str) -> StructFieldTypeNode {
	StructFieldTypeNode::new(name, TypeNode::from(NumberTypeNode::le(NumberFormat::U8)))
}

#[cfg(test)]
pub(crate) mod fixtures {
	use codama_nodes::AccountNode;
	use codama_nodes::InstructionNode;
	use codama_nodes::ProgramNode;
	use codama_nodes::PublicKeyTypeNode;
	use codama_nodes::RootNode;
	use codama_nodes::StructFieldTypeNode;
	use codama_nodes::StructTypeNode;
	use codama_nodes::TypeNode;

	use super::REWARDS_PROGRAM_ID;

	/// A struct account with a single `owner: publicKey` field.
	pub(crate) fn distribution_account(size: Option<usize>) -> AccountNode {
		let data = StructTypeNode::new(vec![StructFieldTypeNode::new(
			"owner",
			TypeNode::from(PublicKeyTypeNode::new()),
		)]);
		let mut account = AccountNode::new("distribution", data);
		account.size = size;
		account
	}

	pub(crate) fn rewards_root(
		accounts: Vec<AccountNode>,
		instructions: Vec<InstructionNode>,
	) -> RootNode {
		let mut program = ProgramNode::new("rewardsProgram", REWARDS_PROGRAM_ID);
		for account in accounts {
			program = program.add_account(account);
		}
		for instruction in instructions {
			program = program.add_instruction(instruction);
		}
		RootNode::new(program)
	}
}
