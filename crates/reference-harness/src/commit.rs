//! BLAKE3 state commitment.
//!
//! Not a Merkle-Patricia trie root: the reference harness only has to agree
//! with itself. Any two runs over the same workload yield the same root.
//!
//! # Hash Input Structure
//! ```text
//! For each account (ascending address):
//!   address (20 bytes)
//!   balance (32 bytes, big-endian)
//!   nonce (u64 BE)
//!   blake3(code) (32 bytes)
//!   storage commitment (32 bytes)
//!
//! storage commitment = blake3 over, for each non-zero slot (ascending slot):
//!   slot (32 bytes)
//!   value (32 bytes)
//! ```

use crate::state::{Account, State};
use statebench::types::codec::encode_prefixed;

/// Root of the whole state as `0x`-prefixed lowercase hex.
pub fn state_root(state: &State) -> String {
    let mut hasher = blake3::Hasher::new();
    for (address, account) in state.accounts() {
        hasher.update(address.as_bytes());
        hasher.update(account.balance.as_bytes());
        hasher.update(&account.nonce.to_be_bytes());
        hasher.update(blake3::hash(account.code.as_slice()).as_bytes());
        hasher.update(&storage_commitment(account));
    }
    encode_prefixed(hasher.finalize().as_bytes())
}

pub fn storage_commitment(account: &Account) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    for (slot, value) in account.storage.iter().filter(|(_, v)| !v.is_zero()) {
        hasher.update(slot.as_bytes());
        hasher.update(value.as_bytes());
    }
    *hasher.finalize().as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use statebench::types::{Address, Word};
    use statebench::Operation;

    fn create(last: u8) -> Operation {
        let mut bytes = [0u8; 20];
        bytes[19] = last;
        Operation::CreateAccount {
            address: Address(bytes),
            balance: Some(Word::from_u128(last as u128)),
            nonce: 1,
        }
    }

    #[test]
    fn test_root_is_independent_of_insertion_order() {
        let mut a = State::default();
        a.apply(create(1)).unwrap();
        a.apply(create(2)).unwrap();

        let mut b = State::default();
        b.apply(create(2)).unwrap();
        b.apply(create(1)).unwrap();

        assert_eq!(state_root(&a), state_root(&b));
    }

    #[test]
    fn test_root_changes_with_state() {
        let mut state = State::default();
        state.apply(create(1)).unwrap();
        let before = state_root(&state);
        assert!(before.starts_with("0x"));
        assert_eq!(before.len(), 66);

        let mut bytes = [0u8; 20];
        bytes[19] = 1;
        state
            .apply(Operation::SetStorage {
                address: Address(bytes),
                slot: Word::from_u128(1),
                value: Word::from_u128(1),
            })
            .unwrap();
        assert_ne!(state_root(&state), before);
    }

    #[test]
    fn test_zero_slots_do_not_contribute() {
        let mut account = Account::default();
        let empty = storage_commitment(&account);
        account.storage.insert(Word::from_u128(1), Word::ZERO);
        assert_eq!(storage_commitment(&account), empty);
    }
}
