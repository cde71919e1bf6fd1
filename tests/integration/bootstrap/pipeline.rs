use crate::integration::mocks::{
	balance_body, create_test_endpoints, source_code_body, write_candidate_file,
	OTHER_VYPER_ADDRESS, SOLIDITY_ADDRESS, VYPER_ADDRESS,
};
use contract_ledger::{
	bootstrap::{initialize_services, run_pipeline, PipelineSummary},
	models::{Chain, PipelineConfig},
};
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::{path::Path, time::Duration};
use tempfile::TempDir;

/// Explorer answering vyper for [`VYPER_ADDRESS`] and solidity for [`SOLIDITY_ADDRESS`]
async fn mock_explorer(server: &mut ServerGuard) -> (Mock, Mock) {
	let vyper = server
		.mock("GET", "/api")
		.match_query(Matcher::UrlEncoded("address".into(), VYPER_ADDRESS.into()))
		.with_status(200)
		.with_body(source_code_body("vyper:0.3.1"))
		.create_async()
		.await;
	let solidity = server
		.mock("GET", "/api")
		.match_query(Matcher::UrlEncoded("address".into(), SOLIDITY_ADDRESS.into()))
		.with_status(200)
		.with_body(source_code_body("v0.8.19+commit.7dd6d404"))
		.create_async()
		.await;
	(vyper, solidity)
}

fn pipeline_config(root: &Path, ledger: &Path) -> PipelineConfig {
	let mut config = PipelineConfig::new(root, ledger);
	config.rate_limit_delay = Duration::from_millis(10);
	config.http_timeout = Duration::from_secs(5);
	config
}

#[tokio::test]
async fn test_pipeline_writes_confirmed_contract_with_balance() {
	let mut explorer = Server::new_async().await;
	let mut rpc = Server::new_async().await;
	let (vyper_mock, solidity_mock) = mock_explorer(&mut explorer).await;
	let rpc_mock = rpc
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(serde_json::json!({"method": "eth_getBalance"})))
		.with_status(200)
		.with_body(balance_body("0x3e8"))
		.expect(1)
		.create_async()
		.await;

	let dir = TempDir::new().unwrap();
	let root = dir.path().join("candidates");
	let ledger_path = dir.path().join("ledger.csv");
	write_candidate_file(&root, "0.3.1", "eth.csv", &[VYPER_ADDRESS, SOLIDITY_ADDRESS]);

	let config = pipeline_config(&root, &ledger_path).with_endpoints(create_test_endpoints(
		Chain::Eth,
		&explorer.url(),
		Some(&rpc.url()),
	));
	let (explorer_client, balance_client, ledger) = initialize_services(&config).unwrap();

	let summary = run_pipeline(&config, explorer_client, balance_client, &ledger)
		.await
		.unwrap();

	assert_eq!(
		summary,
		PipelineSummary {
			files_processed: 1,
			candidates: 2,
			confirmed: 1,
			balances_found: 1,
			lines_written: 1,
		}
	);
	assert_eq!(
		std::fs::read_to_string(&ledger_path).unwrap(),
		format!("eth,{},0.3.1,1000\n", VYPER_ADDRESS)
	);
	vyper_mock.assert();
	solidity_mock.assert();
	rpc_mock.assert();
}

#[tokio::test]
async fn test_pipeline_twice_duplicates_lines() {
	let mut explorer = Server::new_async().await;
	let mut rpc = Server::new_async().await;
	let _mocks = mock_explorer(&mut explorer).await;
	let _rpc_mock = rpc
		.mock("POST", "/")
		.with_status(200)
		.with_body(balance_body("0x3e8"))
		.create_async()
		.await;

	let dir = TempDir::new().unwrap();
	let root = dir.path().join("candidates");
	let ledger_path = dir.path().join("ledger.csv");
	write_candidate_file(&root, "0.3.1", "eth.csv", &[VYPER_ADDRESS]);

	let config = pipeline_config(&root, &ledger_path).with_endpoints(create_test_endpoints(
		Chain::Eth,
		&explorer.url(),
		Some(&rpc.url()),
	));

	for _ in 0..2 {
		let (explorer_client, balance_client, ledger) = initialize_services(&config).unwrap();
		run_pipeline(&config, explorer_client, balance_client, &ledger)
			.await
			.unwrap();
	}

	let line = format!("eth,{},0.3.1,1000\n", VYPER_ADDRESS);
	assert_eq!(
		std::fs::read_to_string(&ledger_path).unwrap(),
		format!("{}{}", line, line)
	);
}

#[tokio::test]
async fn test_pipeline_without_rpc_url_writes_empty_balance() {
	let mut explorer = Server::new_async().await;
	let _mocks = mock_explorer(&mut explorer).await;

	let dir = TempDir::new().unwrap();
	let root = dir.path().join("candidates");
	let ledger_path = dir.path().join("ledger.csv");
	write_candidate_file(&root, "0.3.1", "eth.csv", &[VYPER_ADDRESS]);

	let config = pipeline_config(&root, &ledger_path)
		.with_endpoints(create_test_endpoints(Chain::Eth, &explorer.url(), None));
	let (explorer_client, balance_client, ledger) = initialize_services(&config).unwrap();

	let summary = run_pipeline(&config, explorer_client, balance_client, &ledger)
		.await
		.unwrap();

	assert_eq!(summary.balances_found, 0);
	assert_eq!(
		std::fs::read_to_string(&ledger_path).unwrap(),
		format!("eth,{},0.3.1,\n", VYPER_ADDRESS)
	);
}

#[tokio::test]
async fn test_pipeline_skips_unknown_network_files() {
	let mut explorer = Server::new_async().await;
	let (vyper_mock, _) = mock_explorer(&mut explorer).await;

	let dir = TempDir::new().unwrap();
	let root = dir.path().join("candidates");
	let ledger_path = dir.path().join("ledger.csv");
	write_candidate_file(&root, "0.3.1", "eth.csv", &[VYPER_ADDRESS]);
	write_candidate_file(&root, "0.3.1", "solana.csv", &[OTHER_VYPER_ADDRESS]);
	write_candidate_file(&root, "0.3.1", "notes.txt", &[OTHER_VYPER_ADDRESS]);

	let config = pipeline_config(&root, &ledger_path)
		.with_endpoints(create_test_endpoints(Chain::Eth, &explorer.url(), None));
	let (explorer_client, balance_client, ledger) = initialize_services(&config).unwrap();

	let summary = run_pipeline(&config, explorer_client, balance_client, &ledger)
		.await
		.unwrap();

	assert_eq!(summary.files_processed, 1);
	assert_eq!(summary.lines_written, 1);
	vyper_mock.assert();
}

#[tokio::test]
async fn test_pipeline_processes_versions_in_order() {
	let mut explorer = Server::new_async().await;
	let _vyper = explorer
		.mock("GET", "/api")
		.match_query(Matcher::UrlEncoded("address".into(), VYPER_ADDRESS.into()))
		.with_status(200)
		.with_body(source_code_body("vyper:0.2.8"))
		.create_async()
		.await;
	let _other = explorer
		.mock("GET", "/api")
		.match_query(Matcher::UrlEncoded("address".into(), OTHER_VYPER_ADDRESS.into()))
		.with_status(200)
		.with_body(source_code_body("vyper:0.3.7"))
		.create_async()
		.await;

	let dir = TempDir::new().unwrap();
	let root = dir.path().join("candidates");
	let ledger_path = dir.path().join("ledger.csv");
	write_candidate_file(&root, "0.3.7", "eth.csv", &[OTHER_VYPER_ADDRESS]);
	write_candidate_file(&root, "0.2.8", "eth.csv", &[VYPER_ADDRESS]);

	let config = pipeline_config(&root, &ledger_path)
		.with_endpoints(create_test_endpoints(Chain::Eth, &explorer.url(), None));
	let (explorer_client, balance_client, ledger) = initialize_services(&config).unwrap();

	let summary = run_pipeline(&config, explorer_client, balance_client, &ledger)
		.await
		.unwrap();

	assert_eq!(summary.files_processed, 2);
	assert_eq!(
		std::fs::read_to_string(&ledger_path).unwrap(),
		format!(
			"eth,{},0.2.8,\neth,{},0.3.7,\n",
			VYPER_ADDRESS, OTHER_VYPER_ADDRESS
		)
	);
}
