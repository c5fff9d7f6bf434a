use codama_nodes::RootNode;

use crate::updates::is_named;
use crate::updates::programs_mut;

/// Drop the internal `emitEvent` instruction so it never shows up in the
/// generated client APIs. The instruction and all of its bindings disappear;
/// there is no partial removal.
pub fn remove_emit_instruction(mut root: RootNode) -> RootNode {
	for program in programs_mut(&mut root) {
		program
			.instructions
			.retain(|instruction| !is_named(&instruction.name, "emitEvent"));
	}
	root
}

#[cfg(test)]
mod tests {
	use codama_nodes::InstructionNode;

	use super::*;
	use crate::updates::fixtures::rewards_root;

	fn instruction(name: &str) -> InstructionNode {
		InstructionNode {
			name: name.into(),
			..Default::default()
		}
	}

	#[test]
	fn removes_exactly_the_emit_instruction() {
		let root = rewards_root(
			vec![],
			vec![instruction("createDistribution"), instruction("emitEvent")],
		);
		let root = remove_emit_instruction(root);

		let instructions = &root.program.instructions;
		assert_eq!(instructions.len(), 1);
		assert!(is_named(&instructions[0].name, "createDistribution"));
	}

	#[test]
	fn is_a_no_op_without_the_instruction() {
		let root = rewards_root(vec![], vec![instruction("createDistribution")]);
		let root = remove_emit_instruction(root);

		assert_eq!(root.program.instructions.len(), 1);
	}
}
