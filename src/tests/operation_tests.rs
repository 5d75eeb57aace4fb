use crate::operation::Operation;
use crate::types::{Address, Bytes, Word};

fn addr(last: u8) -> Address {
    let mut a = [0u8; 20];
    a[19] = last;
    Address(a)
}

#[test]
fn test_wire_format_create_account() {
    let op = Operation::CreateAccount {
        address: addr(1),
        balance: Some(Word::from_u128(2)),
        nonce: 3,
    };
    let json = serde_json::to_string(&op).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"op":"create_account","#,
            r#""address":"0x0000000000000000000000000000000000000001","#,
            r#""balance":"0x0000000000000000000000000000000000000000000000000000000000000002","#,
            r#""nonce":3}"#
        )
    );
}

#[test]
fn test_zero_nonce_and_missing_balance_are_omitted() {
    let op = Operation::CreateAccount { address: addr(1), balance: None, nonce: 0 };
    let json = serde_json::to_string(&op).unwrap();
    assert_eq!(json, r#"{"op":"create_account","address":"0x0000000000000000000000000000000000000001"}"#);
}

#[test]
fn test_defaults_on_decode() {
    let op: Operation =
        serde_json::from_str(r#"{"op":"create_account","address":"0x0000000000000000000000000000000000000009"}"#)
            .unwrap();
    match &op {
        Operation::CreateAccount { balance, nonce, .. } => {
            assert_eq!(*balance, None);
            assert_eq!(*nonce, 0);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(op.balance_or_default(), Word::ZERO);
}

#[test]
fn test_compute_root_is_bare_tag() {
    assert_eq!(serde_json::to_string(&Operation::ComputeRoot).unwrap(), r#"{"op":"compute_root"}"#);
    let op: Operation = serde_json::from_str(r#"{"op":"compute_root"}"#).unwrap();
    assert_eq!(op, Operation::ComputeRoot);
    assert_eq!(op.address(), None);
}

#[test]
fn test_short_storage_values_are_left_padded() {
    let op: Operation = serde_json::from_str(
        r#"{"op":"set_storage","address":"0x0000000000000000000000000000000000000001","slot":"0x01","value":"0xff"}"#,
    )
    .unwrap();
    match op {
        Operation::SetStorage { slot, value, .. } => {
            assert_eq!(slot, Word::from_u128(1));
            assert_eq!(value, Word::from_u128(255));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_set_code_round_trips_bytes() {
    let op = Operation::SetCode { address: addr(7), code: Bytes(vec![0x60, 0x00]) };
    let json = serde_json::to_string(&op).unwrap();
    assert!(json.contains(r#""code":"0x6000""#));
    assert_eq!(serde_json::from_str::<Operation>(&json).unwrap(), op);
    assert_eq!(op.name(), "set_code");
}

#[test]
fn test_unknown_op_is_rejected() {
    let err = serde_json::from_str::<Operation>(r#"{"op":"self_destruct","address":"0x00"}"#);
    assert!(err.is_err());
}

#[test]
fn test_bad_address_is_rejected() {
    let err = serde_json::from_str::<Operation>(r#"{"op":"set_code","address":"0x1234","code":"0x"}"#);
    assert!(err.is_err());
}
