use codama_nodes::ConstantPdaSeedNode;
use codama_nodes::PdaNode;
use codama_nodes::PdaSeedNode;
use codama_nodes::PublicKeyTypeNode;
use codama_nodes::RootNode;
use codama_nodes::StringTypeNode;
use codama_nodes::StringValueNode;
use codama_nodes::TypeNode;
use codama_nodes::VariablePdaSeedNode;

use crate::updates::add_pdas;

/// Name of the program node the rewards updates target.
pub(crate) const REWARDS_PROGRAM_NAME: &str = "rewardsProgram";

/// Register the PDA derivation metadata for the rewards program.
///
/// This is declarative: the seeds describe how the generated clients derive
/// the addresses. No hashing happens here.
pub fn append_pda_derivers(root: RootNode) -> RootNode {
	add_pdas(
		root,
		REWARDS_PROGRAM_NAME,
		vec![
			PdaNode::new(
				"distributionConfig",
				vec![
					PdaSeedNode::Constant(ConstantPdaSeedNode::new(
						StringTypeNode::utf8(),
						StringValueNode::new("distribution_config"),
					)),
					PdaSeedNode::Variable(VariablePdaSeedNode::new(
						"configSeed",
						TypeNode::from(PublicKeyTypeNode::new()),
					)),
				],
			),
			PdaNode::new(
				"eventAuthority",
				vec![PdaSeedNode::Constant(ConstantPdaSeedNode::new(
					StringTypeNode::utf8(),
					StringValueNode::new("event_authority"),
				))],
			),
		],
	)
}

#[cfg(test)]
mod tests {
	use codama_nodes::ProgramNode;

	use super::*;
	use crate::updates::fixtures::rewards_root;
	use crate::updates::is_named;

	#[test]
	fn registers_both_pdas() {
		let root = append_pda_derivers(rewards_root(vec![], vec![]));

		let pdas = &root.program.pdas;
		assert_eq!(pdas.len(), 2);
		assert!(is_named(&pdas[0].name, "distributionConfig"));
		assert_eq!(pdas[0].seeds.len(), 2);
		assert!(is_named(&pdas[1].name, "eventAuthority"));
		assert_eq!(pdas[1].seeds.len(), 1);
	}

	#[test]
	fn skips_programs_with_other_names() {
		let root = codama_nodes::RootNode::new(ProgramNode::new(
			"someOtherProgram",
			"11111111111111111111111111111111",
		));
		let root = append_pda_derivers(root);

		assert!(root.program.pdas.is_empty());
	}
}
