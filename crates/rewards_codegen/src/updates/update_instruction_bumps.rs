use codama_nodes::AccountBumpValueNode;
use codama_nodes::InstructionInputValueNode;
use codama_nodes::RootNode;

use crate::updates::is_named;
use crate::updates::programs_mut;

/// Default the `bump` argument of `createDistribution` to the bump stored
/// for the `distributionConfig` PDA account, so callers never compute it.
///
/// Depends on [`append_pda_derivers`][crate::updates::append_pda_derivers]
/// having registered the `distributionConfig` PDA first.
pub fn update_instruction_bumps(mut root: RootNode) -> RootNode {
	for program in programs_mut(&mut root) {
		for instruction in &mut program.instructions {
			if !is_named(&instruction.name, "createDistribution") {
				continue;
			}
			for argument in &mut instruction.arguments {
				if is_named(&argument.name, "bump") {
					argument.default_value = Some(InstructionInputValueNode::AccountBump(
						AccountBumpValueNode::new("distributionConfig"),
					));
				}
			}
		}
	}
	root
}
