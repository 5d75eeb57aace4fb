use crate::workload::validate;
use crate::WorkloadError;

const A: &str = "0x00000000000000000000000000000000000000aa";
const B: &str = "0x00000000000000000000000000000000000000bb";

fn workload(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn create(addr: &str) -> String {
    format!(r#"{{"op":"create_account","address":"{addr}","balance":"0x01","nonce":1}}"#)
}

fn code(addr: &str) -> String {
    format!(r#"{{"op":"set_code","address":"{addr}","code":"0x6000"}}"#)
}

fn storage(addr: &str) -> String {
    format!(r#"{{"op":"set_storage","address":"{addr}","slot":"0x01","value":"0x02"}}"#)
}

fn root() -> String {
    r#"{"op":"compute_root"}"#.to_string()
}

fn malformed_line(err: WorkloadError) -> usize {
    match err {
        WorkloadError::Malformed { line, .. } => line,
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn test_valid_hand_written_workload() {
    let text = workload(&[create(A), create(B), code(B), storage(B), storage(B), root()]);
    let summary = validate(text.as_bytes()).unwrap();
    assert_eq!(summary.total_operations, 6);
    assert_eq!(summary.accounts_created, 1);
    assert_eq!(summary.contracts_created, 1);
    assert_eq!(summary.storage_slots, 2);
}

#[test]
fn test_set_code_before_create() {
    let text = workload(&[code(A), create(A), root()]);
    assert_eq!(malformed_line(validate(text.as_bytes()).unwrap_err()), 1);
}

#[test]
fn test_set_storage_unknown_account() {
    let text = workload(&[create(A), storage(B), root()]);
    let err = validate(text.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("unknown account"));
    assert_eq!(malformed_line(err), 2);
}

#[test]
fn test_missing_compute_root() {
    let text = workload(&[create(A)]);
    let err = validate(text.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("without compute_root"));
}

#[test]
fn test_operation_after_compute_root() {
    let text = workload(&[create(A), root(), create(B)]);
    assert_eq!(malformed_line(validate(text.as_bytes()).unwrap_err()), 3);
}

#[test]
fn test_duplicate_create() {
    let text = workload(&[create(A), create(A), root()]);
    assert_eq!(malformed_line(validate(text.as_bytes()).unwrap_err()), 2);
}

#[test]
fn test_unknown_operation() {
    let text = workload(&[create(A), r#"{"op":"transfer"}"#.to_string(), root()]);
    assert_eq!(malformed_line(validate(text.as_bytes()).unwrap_err()), 2);
}

#[test]
fn test_blank_line_is_rejected() {
    let text = format!("{}\n\n{}\n", create(A), root());
    assert_eq!(malformed_line(validate(text.as_bytes()).unwrap_err()), 2);
}

#[test]
fn test_empty_input() {
    assert!(validate("".as_bytes()).is_err());
}
