use crate::properties::strategies::version_strategy;

use contract_ledger::services::confirmation::parse_compiler_version;
use proptest::{prelude::*, test_runner::Config};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_version_is_text_after_first_delimiter(
		prefix in "[a-z]{0,6}",
		version in version_strategy(),
		suffix in "(:[a-z0-9.]{1,6})?"
	) {
		let identity = format!("{}vyper:{}{}", prefix, version, suffix);

		let parsed = parse_compiler_version(&identity, "vyper");

		prop_assert_eq!(parsed, Some(format!("{}{}", version, suffix)));
	}

	#[test]
	fn test_identity_without_marker_is_rejected(
		identity in "v?[0-9]\\.[0-9]{1,2}\\.[0-9]{1,2}\\+commit\\.[0-9a-f]{8}"
	) {
		prop_assert_eq!(parse_compiler_version(&identity, "vyper"), None);
	}

	#[test]
	fn test_marker_match_is_case_sensitive(version in version_strategy()) {
		let identity = format!("Vyper:{}", version);

		prop_assert_eq!(parse_compiler_version(&identity, "vyper"), None);
	}

	#[test]
	fn test_identity_without_delimiter_is_kept_whole(version in version_strategy()) {
		let identity = format!("vyper-{}", version);

		prop_assert_eq!(parse_compiler_version(&identity, "vyper"), Some(identity.clone()));
	}
}
