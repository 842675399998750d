//! Property tests for the store and the account service.
//!
//! These check invariants that should hold for any sequence of valid
//! operations: balances move exactly as requested, withdrawals never
//! overdraw, the store grows and shrinks with inserts and deletes, and
//! the journal tracks every successful mutation.

use std::collections::HashSet;

use proptest::prelude::*;

use teller::dto::{AccountUpdate, NewAccount, NewUser, UserUpdate};
use teller::models::{AccountUid, RandomUids, SequentialUids, UidSource};
use teller::services::AccountService;
use teller::storage::AccountStore;
use teller::TellerError;

/// A non-negative amount with two decimal places.
fn arb_amount() -> impl Strategy<Value = f64> {
    (0u32..1_000_000u32).prop_map(|cents| f64::from(cents) / 100.0)
}

fn seq_service(store: &AccountStore) -> AccountService<'_> {
    AccountService::with_uid_source(store, Box::new(SequentialUids::new()))
}

fn new_account(iban: String, balance: f64) -> NewAccount {
    NewAccount::new(iban, NewUser::new("Jane", "Doe", "120-44-0101"), balance)
}

// Random uids carry version bits, sequential ones do not, so a stray
// random uid never collides with anything a test service mints.
fn stray_uid() -> AccountUid {
    RandomUids.account_uid()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn inserted_accounts_all_resolve_by_uid(
        balances in prop::collection::vec(arb_amount(), 1..20),
    ) {
        let store = AccountStore::new();
        let service = seq_service(&store);
        let mut uids = Vec::new();

        for (i, balance) in balances.iter().enumerate() {
            let account = service
                .insert_account(new_account(format!("GR{:04}", i), *balance))
                .unwrap();
            uids.push(account.uid());
        }

        prop_assert_eq!(store.len(), balances.len());
        for (uid, balance) in uids.iter().zip(&balances) {
            let stored = store.get(*uid).unwrap();
            prop_assert_eq!(stored.balance, *balance);
        }

        let order: Vec<String> = service.all_accounts().into_iter().map(|a| a.iban).collect();
        let expected: Vec<String> = (0..balances.len()).map(|i| format!("GR{:04}", i)).collect();
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn deposits_accumulate_exactly(
        opening in arb_amount(),
        amounts in prop::collection::vec(arb_amount(), 0..10),
    ) {
        let store = AccountStore::new();
        let service = seq_service(&store);
        let account = service
            .insert_account(new_account("GR0001".to_string(), opening))
            .unwrap();

        let mut expected = opening;
        for amount in &amounts {
            service.deposit(account.uid(), *amount).unwrap();
            expected += *amount;
        }

        prop_assert_eq!(store.get(account.uid()).unwrap().balance, expected);
    }

    #[test]
    fn withdrawals_never_overdraw(
        opening in arb_amount(),
        amounts in prop::collection::vec(arb_amount(), 1..10),
    ) {
        let store = AccountStore::new();
        let service = seq_service(&store);
        let account = service
            .insert_account(new_account("GR0001".to_string(), opening))
            .unwrap();

        for amount in &amounts {
            let before = store.get(account.uid()).unwrap().balance;
            match service.withdraw("GR0001", "120-44-0101", *amount) {
                Ok(updated) => prop_assert_eq!(updated.balance, before - *amount),
                Err(TellerError::InsufficientBalance { balance, amount: rejected }) => {
                    prop_assert_eq!(balance, before);
                    prop_assert_eq!(rejected, *amount);
                    prop_assert_eq!(store.get(account.uid()).unwrap().balance, before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {:?}", other),
            }
            prop_assert!(store.get(account.uid()).unwrap().balance >= 0.0);
        }
    }

    #[test]
    fn fresh_uids_never_collide(count in 1usize..50) {
        let store = AccountStore::new();
        let service = AccountService::new(&store);

        let mut seen = HashSet::new();
        for i in 0..count {
            let account = service
                .insert_account(new_account(format!("GR{:04}", i), 1.0))
                .unwrap();
            seen.insert(account.uid());
        }

        prop_assert_eq!(seen.len(), count);
    }

    #[test]
    fn updates_preserve_the_store_size(
        balances in prop::collection::vec(arb_amount(), 1..10),
        new_balance in arb_amount(),
    ) {
        let store = AccountStore::new();
        let service = seq_service(&store);
        let mut uids = Vec::new();
        for (i, balance) in balances.iter().enumerate() {
            let account = service
                .insert_account(new_account(format!("GR{:04}", i), *balance))
                .unwrap();
            uids.push(account.uid());
        }

        for (i, uid) in uids.iter().enumerate() {
            let data = AccountUpdate::new(
                None,
                format!("GR{:04}", i),
                UserUpdate::new("John", "Smith", "999-99-9999"),
                new_balance,
            );
            service.update_account(*uid, data).unwrap();
            prop_assert_eq!(store.len(), balances.len());
        }
    }

    #[test]
    fn store_size_tracks_inserts_and_deletes(
        ops in prop::collection::vec(any::<bool>(), 1..20),
    ) {
        let store = AccountStore::new();
        let service = seq_service(&store);
        let mut live = Vec::new();
        let mut inserted = 0usize;
        let mut deleted = 0usize;

        for (i, insert) in ops.into_iter().enumerate() {
            if insert {
                let account = service
                    .insert_account(new_account(format!("GR{:04}", i), 1.0))
                    .unwrap();
                live.push(account.uid());
                inserted += 1;
            } else {
                match live.pop() {
                    Some(uid) => {
                        service.delete_account(uid).unwrap();
                        deleted += 1;
                    }
                    None => prop_assert!(service.delete_account(stray_uid()).is_err()),
                }
            }
            prop_assert_eq!(store.len(), inserted - deleted);
        }

        for uid in live {
            prop_assert!(store.get(uid).is_some());
        }
    }

    #[test]
    fn journal_records_one_entry_per_successful_mutation(
        deposit_count in 0usize..10,
        withdraw_count in 0usize..10,
    ) {
        let store = AccountStore::new();
        let service = seq_service(&store);
        let account = service
            .insert_account(new_account("GR0001".to_string(), 1_000_000.0))
            .unwrap();

        for _ in 0..deposit_count {
            service.deposit(account.uid(), 1.0).unwrap();
        }
        for _ in 0..withdraw_count {
            service.withdraw("GR0001", "120-44-0101", 1.0).unwrap();
        }

        prop_assert_eq!(service.activity().len(), 1 + deposit_count + withdraw_count);
    }
}
