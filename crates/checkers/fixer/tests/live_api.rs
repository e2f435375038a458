//! Contract tests against the live Fixer service.
//!
//! Ignored by default: they need network access, and the valid-key battery
//! needs `FIXER_ACCESS_KEY` in the environment. Run with
//! `cargo test -p fixer-contract --test live_api -- --ignored`.

use std::path::{Path, PathBuf};

use fixer_contract::common::credential::FixerCredential;
use fixer_contract::config::FixerConfig;
use fixer_contract::contract::{
    assert_content_type_json, assert_error_shape, check_latest_contract, ContractChecker,
};
use fixer_contract::fixtures::load_error_cases;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/access_key_error_responses.yaml")
}

fn live_checker() -> ContractChecker {
    ContractChecker::new(&FixerConfig::default()).expect("client must build")
}

#[tokio::test]
#[ignore = "requires network access"]
async fn live_access_key_error_table() {
    let cases = load_error_cases(fixture_path()).expect("error fixture table must load");
    let checker = live_checker();

    for case in &cases {
        let response = checker
            .fetch_latest(&case.access_key)
            .await
            .expect("endpoint must be reachable");

        assert_content_type_json(&response).unwrap();
        assert_error_shape(&response, &case.expected.error).unwrap();
    }
}

#[tokio::test]
#[ignore = "requires network access and FIXER_ACCESS_KEY"]
async fn live_valid_key_contract() {
    let credential = FixerCredential::from_env().expect("FIXER_ACCESS_KEY must be set");
    let checker = live_checker();

    let response = checker
        .fetch_latest(&credential.access_key)
        .await
        .expect("endpoint must be reachable");

    assert_eq!(response.status, 200);
    let violations = check_latest_contract(&response);
    assert!(violations.is_empty(), "contract violations: {violations:?}");

    // Rates move between calls; assert presence, never values.
    let rates = response
        .decode()
        .expect("body must decode")
        .into_result()
        .expect("expected a success envelope");
    assert!(!rates.rates.is_empty());
}
