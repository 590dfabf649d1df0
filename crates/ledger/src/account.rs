use bankledger_core::{Amount, CustomerId, Entity, LedgerError, LedgerResult};

/// A single customer's balance record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    customer_id: CustomerId,
    balance: Amount,
}

impl Account {
    /// Fresh account with a zero balance.
    pub fn open(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            balance: Amount::ZERO,
        }
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Add `amount`. On overflow the balance is left as it was.
    pub(crate) fn credit(&mut self, amount: Amount) -> LedgerResult<Amount> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        Ok(self.balance)
    }

    /// Subtract `amount`. On overflow the balance is left as it was.
    pub(crate) fn debit(&mut self, amount: Amount) -> LedgerResult<Amount> {
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::AmountOverflow)?;
        Ok(self.balance)
    }
}

impl Entity for Account {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.customer_id
    }
}
