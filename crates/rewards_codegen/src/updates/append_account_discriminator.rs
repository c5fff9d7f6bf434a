use codama_nodes::RootNode;

use crate::updates::map_accounts;
use crate::updates::struct_data_mut;
use crate::updates::u8_field;

/// Prepend a one-byte `discriminator` field to every struct-typed account
/// payload so generated clients can tell account types apart during
/// deserialization. A declared account size grows by one byte.
///
/// Must run before [`append_account_version`][crate::updates::append_account_version],
/// which slots the version field in behind the discriminator.
pub fn append_account_discriminator(root: RootNode) -> RootNode {
	map_accounts(root, |account| {
		let Some(data) = struct_data_mut(account) else {
			return;
		};

		data.fields.insert(0, u8_field("discriminator"));

		if let Some(size) = account.size {
			account.size = Some(size + 1);
		}
	})
}

#[cfg(test)]
mod tests {
	use codama_nodes::NestedTypeNode;

	use super::*;
	use crate::updates::fixtures::distribution_account;
	use crate::updates::fixtures::rewards_root;
	use crate::updates::is_named;

	#[test]
	fn prepends_discriminator_and_grows_size() {
		let root = rewards_root(vec![distribution_account(Some(32))], vec![]);
		let root = append_account_discriminator(root);

		let account = &root.program.accounts[0];
		assert_eq!(account.size, Some(33));

		let NestedTypeNode::Value(data) = &account.data else {
			panic!("expected a struct payload");
		};
		assert_eq!(data.fields.len(), 2);
		assert!(is_named(&data.fields[0].name, "discriminator"));
		assert!(is_named(&data.fields[1].name, "owner"));
	}

	#[test]
	fn leaves_missing_size_absent() {
		let root = rewards_root(vec![distribution_account(None)], vec![]);
		let root = append_account_discriminator(root);

		let account = &root.program.accounts[0];
		assert_eq!(account.size, None);

		let NestedTypeNode::Value(data) = &account.data else {
			panic!("expected a struct payload");
		};
		assert!(is_named(&data.fields[0].name, "discriminator"));
	}
}
