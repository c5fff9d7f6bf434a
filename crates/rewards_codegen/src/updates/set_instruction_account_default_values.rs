use codama_nodes::AccountValueNode;
use codama_nodes::InstructionInputValueNode;
use codama_nodes::PdaNode;
use codama_nodes::PdaSeedNode;
use codama_nodes::PdaSeedValueNode;
use codama_nodes::PdaValueNode;
use codama_nodes::PublicKeyTypeNode;
use codama_nodes::PublicKeyValueNode;
use codama_nodes::RootNode;
use codama_nodes::TypeNode;
use codama_nodes::VariablePdaSeedNode;

use crate::updates::is_named;
use crate::updates::programs_mut;

/// On-chain address of the rewards program.
pub const REWARDS_PROGRAM_ID: &str = "REWArDioXgQJ2fZKkfu9LCLjQfRwYWVVfsvcsR5hoXi";

/// SPL associated token account program.
pub const ATA_PROGRAM_ID: &str = "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL";

/// System program.
pub const SYSTEM_PROGRAM_ID: &str = "11111111111111111111111111111111";

/// SPL token program.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

const ACCOUNT_DEFAULTS: &[(&str, &str)] = &[
	("rewardsProgram", REWARDS_PROGRAM_ID),
	("tokenProgram", TOKEN_PROGRAM_ID),
	("associatedTokenProgram", ATA_PROGRAM_ID),
	("systemProgram", SYSTEM_PROGRAM_ID),
];

/// Give well-known instruction accounts constant public-key defaults so the
/// generated instruction builders do not require callers to supply them.
pub fn set_instruction_account_default_values(mut root: RootNode) -> RootNode {
	for program in programs_mut(&mut root) {
		for instruction in &mut program.instructions {
			for account in &mut instruction.accounts {
				let matched = ACCOUNT_DEFAULTS
					.iter()
					.find(|(name, _)| is_named(&account.name, name));
				if let Some((_, address)) = matched {
					account.default_value = Some(InstructionInputValueNode::PublicKey(
						PublicKeyValueNode::new(*address),
					));
				}
			}
		}
	}
	root
}

/// Default value describing how to derive an associated token account from
/// the named owner, mint, and token program instruction accounts. This is
/// metadata for the renderers; the derivation itself happens in the
/// generated clients.
pub fn associated_token_account_value(
	owner_account: &str,
	mint_account: &str,
	token_program: &str,
) -> InstructionInputValueNode {
	let mut pda = PdaNode::new(
		"associatedTokenAccount",
		vec![
			PdaSeedNode::Variable(VariablePdaSeedNode::new(
				"owner",
				TypeNode::from(PublicKeyTypeNode::new()),
			)),
			PdaSeedNode::Variable(VariablePdaSeedNode::new(
				"tokenProgram",
				TypeNode::from(PublicKeyTypeNode::new()),
			)),
			PdaSeedNode::Variable(VariablePdaSeedNode::new(
				"mint",
				TypeNode::from(PublicKeyTypeNode::new()),
			)),
		],
	);
	pda.program_id = Some(ATA_PROGRAM_ID.to_string());

	InstructionInputValueNode::Pda(PdaValueNode::new(
		pda,
		vec![
			PdaSeedValueNode::new("owner", AccountValueNode::new(owner_account)),
			PdaSeedValueNode::new("tokenProgram", AccountValueNode::new(token_program)),
			PdaSeedValueNode::new("mint", AccountValueNode::new(mint_account)),
		],
	))
}
