use alloy::primitives::U256;

use crate::models::Chain;

/// Candidate addresses read from `<root>/<version_label>/<chain>.csv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateAddressList {
	pub version_label: String,
	pub chain: Chain,
	pub addresses: Vec<String>,
}

/// A contract whose explorer metadata confirmed the target compiler.
///
/// `native_balance` is `None` only when the balance lookup failed or no RPC node is
/// configured; a zero balance is `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedContract {
	pub chain: Chain,
	pub address: String,
	pub version: String,
	pub native_balance: Option<U256>,
}

impl ConfirmedContract {
	pub fn new(chain: Chain, address: impl Into<String>, version: impl Into<String>) -> Self {
		Self {
			chain,
			address: address.into(),
			version: version.into(),
			native_balance: None,
		}
	}

	/// Ledger representation: `network,address,version,balance\n`, empty balance when missing
	pub fn to_ledger_line(&self) -> String {
		let balance = self
			.native_balance
			.map(|balance| balance.to_string())
			.unwrap_or_default();
		format!(
			"{},{},{},{}\n",
			self.chain, self.address, self.version, balance
		)
	}
}

/// Confirmed contracts of one candidate list, keyed by address in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfirmedContracts {
	contracts: Vec<ConfirmedContract>,
}

impl ConfirmedContracts {
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a contract, replacing the entry with the same address in place
	pub fn insert(&mut self, contract: ConfirmedContract) {
		match self
			.contracts
			.iter_mut()
			.find(|existing| existing.address == contract.address)
		{
			Some(existing) => *existing = contract,
			None => self.contracts.push(contract),
		}
	}

	pub fn get(&self, address: &str) -> Option<&ConfirmedContract> {
		self.contracts
			.iter()
			.find(|contract| contract.address == address)
	}

	pub fn len(&self) -> usize {
		self.contracts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contracts.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, ConfirmedContract> {
		self.contracts.iter()
	}

	pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ConfirmedContract> {
		self.contracts.iter_mut()
	}
}

impl<'a> IntoIterator for &'a ConfirmedContracts {
	type Item = &'a ConfirmedContract;
	type IntoIter = std::slice::Iter<'a, ConfirmedContract>;

	fn into_iter(self) -> Self::IntoIter {
		self.contracts.iter()
	}
}

impl FromIterator<ConfirmedContract> for ConfirmedContracts {
	fn from_iter<I: IntoIterator<Item = ConfirmedContract>>(iter: I) -> Self {
		let mut contracts = Self::new();
		for contract in iter {
			contracts.insert(contract);
		}
		contracts
	}
}
