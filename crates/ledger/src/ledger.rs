use core::str::FromStr;

use serde::{Deserialize, Serialize};

use bankledger_core::{Amount, CustomerId, LedgerError, LedgerResult};

use crate::account::Account;
use crate::store::AccountStore;

/// How `fund` / `withdraw` treat zero and negative amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountPolicy {
    /// Reject amounts `<= 0` with `InvalidAmount`.
    #[default]
    Strict,
    /// Apply any amount as-is. A negative fund lowers the balance and a
    /// negative withdrawal raises it.
    Permissive,
}

impl AmountPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AmountPolicy::Strict => "strict",
            AmountPolicy::Permissive => "permissive",
        }
    }

    fn check(&self, amount: Amount) -> LedgerResult<()> {
        match self {
            AmountPolicy::Strict if amount <= Amount::ZERO => Err(LedgerError::InvalidAmount),
            _ => Ok(()),
        }
    }
}

impl FromStr for AmountPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(AmountPolicy::Strict),
            "permissive" => Ok(AmountPolicy::Permissive),
            other => Err(format!("unknown amount policy: {other}")),
        }
    }
}

/// The account ledger: the only three permitted state transitions over a store.
///
/// Every mutation runs inside `AccountStore::update` (or `insert_new`), so the
/// existence / sufficiency checks and the balance change happen under one lock.
#[derive(Debug)]
pub struct AccountLedger<S> {
    store: S,
    policy: AmountPolicy,
}

impl<S: AccountStore> AccountLedger<S> {
    pub fn new(store: S) -> Self {
        Self::with_policy(store, AmountPolicy::default())
    }

    pub fn with_policy(store: S, policy: AmountPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> AmountPolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Open an account with a zero balance.
    pub fn create(&self, customer_id: &CustomerId) -> LedgerResult<Account> {
        let account = Account::open(customer_id.clone());
        match self.store.insert_new(account.clone()) {
            Ok(()) => {
                tracing::info!(customer_id = %customer_id, "account created");
                Ok(account)
            }
            Err(e) => {
                log_rejection("create", customer_id, &e);
                Err(e)
            }
        }
    }

    /// Add `amount` to the balance. Returns the new balance.
    pub fn fund(&self, customer_id: &CustomerId, amount: Amount) -> LedgerResult<Amount> {
        let res = self.store.update(customer_id, |account| {
            self.policy.check(amount)?;
            account.credit(amount)
        });

        match res {
            Ok(balance) => {
                tracing::info!(customer_id = %customer_id, %amount, %balance, "account funded");
                Ok(balance)
            }
            Err(e) => {
                log_rejection("fund", customer_id, &e);
                Err(e)
            }
        }
    }

    /// Subtract `amount` from the balance. Returns the new balance.
    ///
    /// Withdrawing exactly the balance is allowed and leaves zero.
    pub fn withdraw(&self, customer_id: &CustomerId, amount: Amount) -> LedgerResult<Amount> {
        let res = self.store.update(customer_id, |account| {
            self.policy.check(amount)?;
            if account.balance() < amount {
                tracing::warn!(
                    customer_id = %customer_id,
                    balance = %account.balance(),
                    %amount,
                    "insufficient balance"
                );
                return Err(LedgerError::InsufficientBalance);
            }
            account.debit(amount)
        });

        match res {
            Ok(balance) => {
                tracing::info!(customer_id = %customer_id, %amount, %balance, "amount withdrawn");
                Ok(balance)
            }
            Err(LedgerError::InsufficientBalance) => Err(LedgerError::InsufficientBalance),
            Err(e) => {
                log_rejection("withdraw", customer_id, &e);
                Err(e)
            }
        }
    }

    /// Current balance of an existing account.
    pub fn balance(&self, customer_id: &CustomerId) -> LedgerResult<Amount> {
        self.store
            .get(customer_id)?
            .map(|account| account.balance())
            .ok_or(LedgerError::AccountNotFound)
    }
}

fn log_rejection(op: &'static str, customer_id: &CustomerId, err: &LedgerError) {
    if err.is_rejection() {
        tracing::warn!(op, customer_id = %customer_id, error = %err, "ledger operation rejected");
    } else {
        tracing::error!(op, customer_id = %customer_id, error = %err, "ledger operation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryAccountStore;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn ledger() -> AccountLedger<InMemoryAccountStore> {
        AccountLedger::new(InMemoryAccountStore::new())
    }

    fn cust(id: &str) -> CustomerId {
        CustomerId::new(id).unwrap()
    }

    fn amt(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn create_twice_is_rejected() {
        let l = ledger();
        let first = l.create(&cust("cust1")).unwrap();
        assert_eq!(first.balance(), Amount::ZERO);

        assert_eq!(l.create(&cust("cust1")), Err(LedgerError::AccountAlreadyExists));
        assert_eq!(l.balance(&cust("cust1")).unwrap(), Amount::ZERO);
    }

    #[test]
    fn fund_unknown_account_is_not_found() {
        let l = ledger();
        assert_eq!(l.fund(&cust("nobody"), amt("10")), Err(LedgerError::AccountNotFound));
    }

    #[test]
    fn fund_adds_to_balance() {
        let l = ledger();
        l.create(&cust("cust1")).unwrap();
        assert_eq!(l.fund(&cust("cust1"), amt("100.0")).unwrap(), amt("100"));
    }

    #[test]
    fn repeated_fund_is_not_absorbed() {
        let l = ledger();
        l.create(&cust("cust1")).unwrap();
        l.fund(&cust("cust1"), amt("25")).unwrap();
        assert_eq!(l.fund(&cust("cust1"), amt("25")).unwrap(), amt("50"));
    }

    #[test]
    fn withdraw_exact_balance_leaves_zero() {
        let l = ledger();
        l.create(&cust("cust1")).unwrap();
        l.fund(&cust("cust1"), amt("50.0")).unwrap();
        assert_eq!(l.withdraw(&cust("cust1"), amt("50.0")).unwrap(), Amount::ZERO);
    }

    #[test]
    fn overdraw_is_rejected_and_balance_unchanged() {
        let l = ledger();
        l.create(&cust("cust1")).unwrap();
        l.fund(&cust("cust1"), amt("30")).unwrap();

        assert_eq!(
            l.withdraw(&cust("cust1"), amt("30.01")),
            Err(LedgerError::InsufficientBalance)
        );
        assert_eq!(l.balance(&cust("cust1")).unwrap(), amt("30"));
    }

    #[test]
    fn withdraw_unknown_account_is_not_found_before_balance_check() {
        let l = ledger();
        assert_eq!(l.withdraw(&cust("nobody"), amt("1000")), Err(LedgerError::AccountNotFound));
    }

    #[test]
    fn create_fund_withdraw_end_to_end() {
        let l = ledger();
        l.create(&cust("cust1")).unwrap();
        l.fund(&cust("cust1"), amt("200.0")).unwrap();
        assert_eq!(l.withdraw(&cust("cust1"), amt("50.0")).unwrap(), amt("150"));
        assert_eq!(l.balance(&cust("cust1")).unwrap(), amt("150.0"));
    }

    #[test]
    fn decimal_amounts_are_exact() {
        let l = ledger();
        l.create(&cust("cust1")).unwrap();
        l.fund(&cust("cust1"), amt("0.1")).unwrap();
        assert_eq!(l.fund(&cust("cust1"), amt("0.2")).unwrap(), amt("0.3"));
    }

    #[test]
    fn strict_policy_rejects_non_positive_amounts() {
        let l = ledger();
        assert_eq!(l.policy(), AmountPolicy::Strict);
        l.create(&cust("cust1")).unwrap();
        l.fund(&cust("cust1"), amt("10")).unwrap();

        assert_eq!(l.fund(&cust("cust1"), Amount::ZERO), Err(LedgerError::InvalidAmount));
        assert_eq!(l.fund(&cust("cust1"), amt("-5")), Err(LedgerError::InvalidAmount));
        assert_eq!(l.withdraw(&cust("cust1"), amt("-5")), Err(LedgerError::InvalidAmount));
        assert_eq!(l.balance(&cust("cust1")).unwrap(), amt("10"));
    }

    #[test]
    fn strict_policy_still_reports_missing_account_first() {
        let l = ledger();
        assert_eq!(l.fund(&cust("nobody"), amt("-1")), Err(LedgerError::AccountNotFound));
    }

    #[test]
    fn permissive_policy_applies_non_positive_amounts() {
        let l = AccountLedger::with_policy(InMemoryAccountStore::new(), AmountPolicy::Permissive);
        l.create(&cust("cust1")).unwrap();

        assert_eq!(l.fund(&cust("cust1"), Amount::ZERO).unwrap(), Amount::ZERO);
        assert_eq!(l.withdraw(&cust("cust1"), amt("-20")).unwrap(), amt("20"));
        assert_eq!(l.fund(&cust("cust1"), amt("-5")).unwrap(), amt("15"));
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!("strict".parse::<AmountPolicy>(), Ok(AmountPolicy::Strict));
        assert_eq!(" Permissive ".parse::<AmountPolicy>(), Ok(AmountPolicy::Permissive));
        assert!("lenient".parse::<AmountPolicy>().is_err());
    }

    #[test]
    fn fund_overflow_is_rejected_and_ledger_keeps_working() {
        let l = ledger();
        l.create(&cust("big")).unwrap();
        l.create(&cust("other")).unwrap();
        let huge = amt("50000000000000000000000000000");

        l.fund(&cust("big"), huge).unwrap();
        assert_eq!(l.fund(&cust("big"), huge), Err(LedgerError::AmountOverflow));
        assert_eq!(l.balance(&cust("big")).unwrap(), huge);

        assert_eq!(l.fund(&cust("other"), amt("1")).unwrap(), amt("1"));
        l.create(&cust("late")).unwrap();
    }

    #[test]
    fn permissive_negative_withdraw_overflow_is_rejected() {
        let l = AccountLedger::with_policy(InMemoryAccountStore::new(), AmountPolicy::Permissive);
        l.create(&cust("cust1")).unwrap();
        let huge = amt("-50000000000000000000000000000");

        assert_eq!(l.withdraw(&cust("cust1"), huge).unwrap(), -huge);
        assert_eq!(l.withdraw(&cust("cust1"), huge), Err(LedgerError::AmountOverflow));
        assert_eq!(l.balance(&cust("cust1")).unwrap(), -huge);
        assert_eq!(l.withdraw(&cust("cust1"), amt("1")).unwrap(), -huge - amt("1"));
    }

    #[test]
    fn concurrent_funds_do_not_lose_updates() {
        let l = Arc::new(ledger());
        l.create(&cust("shared")).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let l = l.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        l.fund(&cust("shared"), Amount::ONE).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(l.balance(&cust("shared")).unwrap(), Amount::from(2000));
    }

    #[test]
    fn ledgers_do_not_share_state() {
        let a = ledger();
        let b = ledger();
        a.create(&cust("cust1")).unwrap();
        assert_eq!(b.balance(&cust("cust1")), Err(LedgerError::AccountNotFound));
        assert!(b.store().is_empty().unwrap());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Fund(i64),
        Withdraw(i64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1i64..10_000i64).prop_map(Op::Fund),
            (1i64..10_000i64).prop_map(Op::Withdraw),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: under the strict policy the balance never goes negative and
        /// always equals accepted deposits minus accepted withdrawals.
        #[test]
        fn balance_tracks_accepted_operations(ops in prop::collection::vec(op_strategy(), 1..50)) {
            let l = ledger();
            let id = cust("prop");
            l.create(&id).unwrap();

            let mut expected = Amount::ZERO;
            for op in ops {
                match op {
                    Op::Fund(cents) => {
                        let amount = Amount::new(cents, 2);
                        expected += amount;
                        prop_assert_eq!(l.fund(&id, amount).unwrap(), expected);
                    }
                    Op::Withdraw(cents) => {
                        let amount = Amount::new(cents, 2);
                        match l.withdraw(&id, amount) {
                            Ok(balance) => {
                                expected -= amount;
                                prop_assert_eq!(balance, expected);
                            }
                            Err(e) => {
                                prop_assert_eq!(e, LedgerError::InsufficientBalance);
                                prop_assert!(expected < amount);
                            }
                        }
                    }
                }
                prop_assert!(l.balance(&id).unwrap() >= Amount::ZERO);
            }

            prop_assert_eq!(l.balance(&id).unwrap(), expected);
        }
    }
}
