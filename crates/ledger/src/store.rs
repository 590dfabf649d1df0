//! Account storage abstraction + the in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bankledger_core::{CustomerId, Entity, LedgerError, LedgerResult};

use crate::account::Account;

/// Keyed account storage.
///
/// `update` runs the closure while the store holds its write lock, so a
/// check-then-mutate inside it is atomic with respect to other callers.
pub trait AccountStore: Send + Sync {
    /// Insert `account` unless its id is already present.
    fn insert_new(&self, account: Account) -> LedgerResult<()>;

    fn get(&self, customer_id: &CustomerId) -> LedgerResult<Option<Account>>;

    /// Apply `f` to the stored account. Fails with `AccountNotFound` if absent.
    fn update<T>(
        &self,
        customer_id: &CustomerId,
        f: impl FnOnce(&mut Account) -> LedgerResult<T>,
    ) -> LedgerResult<T>;

    fn len(&self) -> LedgerResult<usize>;

    fn is_empty(&self) -> LedgerResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl<S> AccountStore for Arc<S>
where
    S: AccountStore,
{
    fn insert_new(&self, account: Account) -> LedgerResult<()> {
        (**self).insert_new(account)
    }

    fn get(&self, customer_id: &CustomerId) -> LedgerResult<Option<Account>> {
        (**self).get(customer_id)
    }

    fn update<T>(
        &self,
        customer_id: &CustomerId,
        f: impl FnOnce(&mut Account) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        (**self).update(customer_id, f)
    }

    fn len(&self) -> LedgerResult<usize> {
        (**self).len()
    }
}

/// Process-local store. Everything is lost when it is dropped.
#[derive(Debug)]
pub struct InMemoryAccountStore {
    inner: RwLock<HashMap<CustomerId, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<E>(_: E) -> LedgerError {
    LedgerError::store("account store lock poisoned")
}

impl AccountStore for InMemoryAccountStore {
    fn insert_new(&self, account: Account) -> LedgerResult<()> {
        let mut map = self.inner.write().map_err(poisoned)?;
        if map.contains_key(account.id()) {
            return Err(LedgerError::AccountAlreadyExists);
        }
        map.insert(account.id().clone(), account);
        Ok(())
    }

    fn get(&self, customer_id: &CustomerId) -> LedgerResult<Option<Account>> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.get(customer_id).cloned())
    }

    fn update<T>(
        &self,
        customer_id: &CustomerId,
        f: impl FnOnce(&mut Account) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let mut map = self.inner.write().map_err(poisoned)?;
        let account = map
            .get_mut(customer_id)
            .ok_or(LedgerError::AccountNotFound)?;
        f(account)
    }

    fn len(&self) -> LedgerResult<usize> {
        Ok(self.inner.read().map_err(poisoned)?.len())
    }
}
