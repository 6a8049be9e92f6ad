use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{MarketplaceError, Result};
use crate::external::AssetRegistry;
use crate::state::{AccountAddress, ContractAddress, TokenId};
use crate::utils::safe_add;
use crate::Marketplace;

pub fn buy_item(
    market: &Marketplace,
    registry: &dyn AssetRegistry,
    buyer: &AccountAddress,
    contract: &ContractAddress,
    token_id: TokenId,
    paid: u64,
) -> Result<()> {
    let listing = market
        .store
        .read(|state| state.listing(contract, token_id).cloned())
        .ok_or_else(|| MarketplaceError::NotListed {
            contract: contract.clone(),
            token_id,
        })?;

    // Strict equality: overpaying is rejected the same as underpaying.
    if paid != listing.price {
        return Err(MarketplaceError::PriceNotMet {
            price: listing.price,
            offered: paid,
        });
    }

    // Credit the seller and clear the listing before touching the registry.
    // A callback re-entering the ledger from transfer_from must not find
    // the stale listing or an uncredited balance.
    market.store.write(|state| -> Result<()> {
        let balance = state.proceeds.entry(listing.seller.clone()).or_default();
        *balance = safe_add(*balance, listing.price)?;
        state.remove_listing(contract, token_id);
        Ok(())
    })?;

    if !registry.transfer_from(&listing.seller, buyer, contract, token_id) {
        return Err(MarketplaceError::TransferFailed);
    }

    market.emit(ListingSold {
        contract: contract.clone(),
        token_id,
        buyer: buyer.clone(),
        price: listing.price,
    });

    info!("token {} of {} sold for {}", token_id, contract, listing.price);

    Ok(())
}

/// Emitted when a listed asset is bought.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSold {
    pub contract: ContractAddress,
    pub token_id: TokenId,
    pub buyer: AccountAddress,
    pub price: u64,
}
