use std::cell::RefCell;
use std::collections::HashMap;

use crate::state::{AccountAddress, ContractAddress, Listing, TokenId};

/// Everything the ledger owns: active listings keyed by collection and
/// token, and per-seller unwithdrawn proceeds.
#[derive(Clone, Debug, Default)]
pub struct MarketplaceState {
    pub listings: HashMap<ContractAddress, HashMap<TokenId, Listing>>,
    pub proceeds: HashMap<AccountAddress, u64>,
}

impl MarketplaceState {
    pub fn listing(&self, contract: &ContractAddress, token_id: TokenId) -> Option<&Listing> {
        self.listings.get(contract).and_then(|tokens| tokens.get(&token_id))
    }

    pub fn insert_listing(
        &mut self,
        contract: &ContractAddress,
        token_id: TokenId,
        listing: Listing,
    ) {
        self.listings
            .entry(contract.clone())
            .or_default()
            .insert(token_id, listing);
    }

    pub fn remove_listing(
        &mut self,
        contract: &ContractAddress,
        token_id: TokenId,
    ) -> Option<Listing> {
        self.listings
            .get_mut(contract)
            .and_then(|tokens| tokens.remove(&token_id))
    }

    pub fn proceeds_of(&self, account: &AccountAddress) -> u64 {
        self.proceeds.get(account).copied().unwrap_or_default()
    }
}

/// Owns the mutable ledger state and provides the transaction boundary.
///
/// `begin` snapshots the state, `commit` discards the snapshot and keeps
/// whatever the operation wrote, `rollback` restores the snapshot. Borrows
/// taken through `read`/`write` are released before any collaborator call,
/// so a callback that re-enters the marketplace takes a fresh borrow and
/// observes already-consistent state.
#[derive(Debug, Default)]
pub struct StateStore {
    inner: RefCell<MarketplaceState>,
}

/// An open transaction: the pre-operation snapshot to restore on rollback.
#[must_use]
pub struct Transaction {
    snapshot: MarketplaceState,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Transaction {
        Transaction {
            snapshot: self.inner.borrow().clone(),
        }
    }

    pub fn commit(&self, txn: Transaction) {
        drop(txn);
    }

    pub fn rollback(&self, txn: Transaction) {
        *self.inner.borrow_mut() = txn.snapshot;
    }

    pub fn read<R>(&self, f: impl FnOnce(&MarketplaceState) -> R) -> R {
        f(&self.inner.borrow())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut MarketplaceState) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}
