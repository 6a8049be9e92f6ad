//! Interfaces of the collaborators the ledger consumes but never owns.
//!
//! Both collaborators must be treated as potentially failing or calling
//! back into the marketplace before returning. The ledger mutates its own
//! state before issuing any call through these traits.

use crate::state::{AccountAddress, ContractAddress, TokenId};

/// External authority for asset ownership and transfer authorization.
pub trait AssetRegistry {
    /// Current owner of the asset, if the registry knows it.
    fn owner_of(&self, contract: &ContractAddress, token_id: TokenId) -> Option<AccountAddress>;

    /// Whether `operator` may move every asset `owner` holds.
    fn is_approved_for_all(&self, owner: &AccountAddress, operator: &AccountAddress) -> bool;

    /// The operator approved for this single asset, if any.
    fn get_approved(&self, contract: &ContractAddress, token_id: TokenId)
        -> Option<AccountAddress>;

    /// Move the asset between accounts. Returns false when the registry
    /// refuses, e.g. for an unknown asset or an unauthorized operator.
    fn transfer_from(
        &self,
        from: &AccountAddress,
        to: &AccountAddress,
        contract: &ContractAddress,
        token_id: TokenId,
    ) -> bool;
}

/// Atomic native-currency movement between accounts.
pub trait ValueTransfer {
    /// Deliver `amount` to `to`; false when the payment could not be made.
    fn send(&self, to: &AccountAddress, amount: u64) -> bool;
}
