use bankledger_ledger::{AccountLedger, AmountPolicy, InMemoryAccountStore};

/// Everything handlers need, shared behind an `Arc`.
///
/// One ledger per process; tests build their own `AppServices` for isolation.
#[derive(Debug)]
pub struct AppServices {
    ledger: AccountLedger<InMemoryAccountStore>,
}

impl AppServices {
    pub fn new(policy: AmountPolicy) -> Self {
        Self {
            ledger: AccountLedger::with_policy(InMemoryAccountStore::new(), policy),
        }
    }

    pub fn ledger(&self) -> &AccountLedger<InMemoryAccountStore> {
        &self.ledger
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new(AmountPolicy::default())
    }
}
