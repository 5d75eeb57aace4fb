use crate::result::{BenchResult, RunOutcome};

#[test]
fn test_parse_harness_output() {
    let input = br#"{
        "client": "geth",
        "state_root": "0xabc123",
        "accounts_created": 100,
        "contracts_created": 10,
        "storage_slots": 500,
        "elapsed_ms": 1234,
        "trie_time_ms": 800,
        "db_write_time_ms": 400,
        "peak_memory_bytes": 104857600
    }"#;

    let result = BenchResult::from_harness_output("geth", input).unwrap();
    assert_eq!(result.client, "geth");
    assert_eq!(result.state_root, "0xabc123");
    assert_eq!(result.accounts_created, 100);
    assert_eq!(result.contracts_created, 10);
    assert_eq!(result.storage_slots, 500);
    assert_eq!(result.elapsed_ms, 1234);
    assert_eq!(result.trie_time_ms, 800);
    assert_eq!(result.db_write_time_ms, 400);
    assert_eq!(result.peak_memory_bytes, 104_857_600);
    assert_eq!(result.db_size_bytes, 0, "db size is never self-reported");
}

#[test]
fn test_missing_client_is_filled() {
    let result = BenchResult::from_harness_output("reth", br#"{"state_root": "0xdef"}"#).unwrap();
    assert_eq!(result.client, "reth");
    assert_eq!(result.state_root, "0xdef");
}

#[test]
fn test_empty_client_is_filled() {
    let result = BenchResult::from_harness_output("erigon", br#"{"client": "", "state_root": "0x1"}"#).unwrap();
    assert_eq!(result.client, "erigon");
}

#[test]
fn test_reported_client_is_kept() {
    let result = BenchResult::from_harness_output("alias", br#"{"client": "besu"}"#).unwrap();
    assert_eq!(result.client, "besu");
}

#[test]
fn test_trailing_newline_is_accepted() {
    assert!(BenchResult::from_harness_output("x", b"{\"state_root\":\"0x1\"}\n").is_ok());
}

#[test]
fn test_invalid_json() {
    assert!(BenchResult::from_harness_output("test", b"not json at all").is_err());
    assert!(BenchResult::from_harness_output("test", b"").is_err());
}

#[test]
fn test_more_than_one_object_is_rejected() {
    let two = b"{\"state_root\":\"0x1\"}\n{\"state_root\":\"0x2\"}\n";
    assert!(BenchResult::from_harness_output("test", two).is_err());
}

#[test]
fn test_outcome_json_shapes() {
    let outcomes = vec![
        RunOutcome::Completed(BenchResult {
            client: "geth".into(),
            state_root: "0xabc".into(),
            db_size_bytes: 10,
            ..Default::default()
        }),
        RunOutcome::Failed { client: "besu".into(), error: "exit status 1".into() },
    ];

    let json = serde_json::to_value(&outcomes).unwrap();
    assert_eq!(json[0]["client"], "geth");
    assert_eq!(json[0]["db_size_bytes"], 10);
    assert_eq!(json[1]["error"], "exit status 1");

    let back: Vec<RunOutcome> = serde_json::from_value(json).unwrap();
    assert_eq!(back, outcomes);
    assert_eq!(back[1].client(), "besu");
    assert!(back[1].completed().is_none());
}
