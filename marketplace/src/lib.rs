//! Fixed-price marketplace ledger for non-fungible assets.
//!
//! It exposes operations for listing an asset, buying a listed asset,
//! cancelling a listing, and withdrawing accumulated sale proceeds.

use std::cell::RefCell;

pub mod errors;
pub mod events;
pub mod external;
pub mod instructions;
pub mod state;
pub mod utils;

pub use errors::{MarketplaceError, Result};
pub use events::MarketEvent;
pub use external::{AssetRegistry, ValueTransfer};
pub use state::{AccountAddress, ContractAddress, Listing, TokenId};

use state::StateStore;

/// The marketplace ledger: all active listings and all accrued seller
/// proceeds, behind a transactional store.
///
/// Each instance owns its state, so independent scenarios run against
/// isolated ledgers. The asset registry and the value-transfer primitive
/// are collaborators handed to the operations that need them; the ledger
/// never stores authoritative ownership itself.
pub struct Marketplace {
    operator: AccountAddress,
    pub(crate) store: StateStore,
    events: RefCell<Vec<MarketEvent>>,
}

impl Marketplace {
    /// Create an empty ledger. `operator` is the account under which the
    /// asset registry knows this marketplace for approval checks.
    pub fn new(operator: AccountAddress) -> Self {
        Self {
            operator,
            store: StateStore::new(),
            events: RefCell::new(Vec::new()),
        }
    }

    /// The account the registry must have approved as operator.
    pub fn operator(&self) -> &AccountAddress {
        &self.operator
    }

    /// Offer an asset for sale at a fixed price. The caller must own the
    /// asset and the registry must already let the marketplace move it.
    pub fn list_item(
        &self,
        registry: &dyn AssetRegistry,
        caller: &AccountAddress,
        contract: &ContractAddress,
        token_id: TokenId,
        price: u64,
    ) -> Result<()> {
        self.transactional(|market| {
            instructions::list_item::list_item(market, registry, caller, contract, token_id, price)
        })
    }

    /// Buy a listed asset by paying exactly its asking price.
    pub fn buy_item(
        &self,
        registry: &dyn AssetRegistry,
        buyer: &AccountAddress,
        contract: &ContractAddress,
        token_id: TokenId,
        paid: u64,
    ) -> Result<()> {
        self.transactional(|market| {
            instructions::buy_item::buy_item(market, registry, buyer, contract, token_id, paid)
        })
    }

    /// Take an active listing off the market. Only the seller may cancel.
    pub fn cancel_listing(
        &self,
        caller: &AccountAddress,
        contract: &ContractAddress,
        token_id: TokenId,
    ) -> Result<()> {
        self.transactional(|market| {
            instructions::cancel_listing::cancel_listing(market, caller, contract, token_id)
        })
    }

    /// Pay out the caller's entire accumulated proceeds.
    pub fn withdraw_proceeds(
        &self,
        bank: &dyn ValueTransfer,
        caller: &AccountAddress,
    ) -> Result<()> {
        self.transactional(|market| {
            instructions::withdraw_proceeds::withdraw_proceeds(market, bank, caller)
        })
    }

    /// Read a listing. Absent keys read back as the zero-value listing.
    pub fn get_listing(&self, contract: &ContractAddress, token_id: TokenId) -> Listing {
        self.store
            .read(|state| state.listing(contract, token_id).cloned())
            .unwrap_or_default()
    }

    /// Read an account's unwithdrawn proceeds, zero when absent.
    pub fn get_proceeds(&self, account: &AccountAddress) -> u64 {
        self.store.read(|state| state.proceeds_of(account))
    }

    /// Return and clear the accumulated notifications, in emission order.
    pub fn drain_events(&self) -> Vec<MarketEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    /// Run one operation as an indivisible transaction: commit on success,
    /// restore the pre-operation state on any failure.
    fn transactional<R>(&self, op: impl FnOnce(&Self) -> Result<R>) -> Result<R> {
        let txn = self.store.begin();
        match op(self) {
            Ok(value) => {
                self.store.commit(txn);
                Ok(value)
            }
            Err(err) => {
                self.store.rollback(txn);
                Err(err)
            }
        }
    }

    pub(crate) fn emit(&self, event: impl Into<MarketEvent>) {
        self.events.borrow_mut().push(event.into());
    }
}
