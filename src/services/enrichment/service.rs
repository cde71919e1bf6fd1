//! Balance enrichment stage.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::{
	models::{ConfirmedContracts, NetworkEndpoints},
	services::blockchain::BalanceClientTrait,
};

/// Attaches native balances to confirmed contracts
pub struct EnrichmentService<B: BalanceClientTrait> {
	balances: Arc<B>,
}

impl<B: BalanceClientTrait> EnrichmentService<B> {
	pub fn new(balances: Arc<B>) -> Self {
		Self { balances }
	}

	/// Looks up the balance of every contract and stores it on the record.
	///
	/// Without an RPC URL for the network no lookup is attempted and every balance stays
	/// missing. A failed lookup also leaves the balance missing; a zero balance is kept as
	/// zero. Returns the number of balances found.
	#[instrument(skip_all, fields(network = %endpoints.chain))]
	pub async fn enrich(
		&self,
		endpoints: &NetworkEndpoints,
		contracts: &mut ConfirmedContracts,
	) -> usize {
		let Some(rpc_url) = endpoints.rpc_url.as_deref() else {
			for contract in contracts.iter_mut() {
				warn!(address = %contract.address, "No RPC URL configured, balance recorded as missing");
				contract.native_balance = None;
			}
			return 0;
		};

		let mut found = 0;
		for contract in contracts.iter_mut() {
			match self
				.balances
				.get_native_balance(rpc_url, &contract.address)
				.await
			{
				Ok(balance) => {
					contract.native_balance = Some(balance);
					found += 1;
				}
				Err(e) => {
					warn!(address = %contract.address, error = %e, "Failed to get native balance");
					contract.native_balance = None;
				}
			}
		}

		info!(found, total = contracts.len(), "Enrichment finished");
		found
	}
}
