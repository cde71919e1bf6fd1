use alloy::primitives::U256;
use contract_ledger::models::{Chain, ConfirmedContract};
use proptest::{option, prelude::*};

pub fn chain_strategy() -> impl Strategy<Value = Chain> {
	prop::sample::select(Chain::ALL.to_vec())
}

/// Lowercase 20-byte hex address as found in candidate lists
pub fn address_strategy() -> impl Strategy<Value = String> {
	"[0-9a-f]{40}".prop_map(|hex| format!("0x{}", hex))
}

/// Version text free of the ledger's field separator
pub fn version_strategy() -> impl Strategy<Value = String> {
	"[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}(b[0-9])?(\\+commit\\.[0-9a-f]{8})?"
}

pub fn balance_strategy() -> impl Strategy<Value = Option<U256>> {
	option::of(any::<u128>().prop_map(U256::from))
}

pub fn confirmed_contract_strategy() -> impl Strategy<Value = ConfirmedContract> {
	(
		chain_strategy(),
		address_strategy(),
		version_strategy(),
		balance_strategy(),
	)
		.prop_map(|(chain, address, version, native_balance)| ConfirmedContract {
			chain,
			address,
			version,
			native_balance,
		})
}
