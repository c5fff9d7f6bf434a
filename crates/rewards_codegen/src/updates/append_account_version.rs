use codama_nodes::RootNode;

use crate::updates::is_named;
use crate::updates::map_accounts;
use crate::updates::struct_data_mut;
use crate::updates::u8_field;

/// Insert a one-byte `version` field into every struct-typed account payload
/// for versioned deserialization. The field lands directly behind an
/// existing `discriminator` field, or at the front when there is none. A
/// declared account size grows by one byte.
pub fn append_account_version(root: RootNode) -> RootNode {
	map_accounts(root, |account| {
		let Some(data) = struct_data_mut(account) else {
			return;
		};

		let position = data
			.fields
			.iter()
			.position(|field| is_named(&field.name, "discriminator"));
		let index = position.map_or(0, |index| index + 1);
		data.fields.insert(index, u8_field("version"));

		if let Some(size) = account.size {
			account.size = Some(size + 1);
		}
	})
}
