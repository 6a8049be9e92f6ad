use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{MarketplaceError, Result};
use crate::state::{AccountAddress, ContractAddress, TokenId};
use crate::Marketplace;

pub fn cancel_listing(
    market: &Marketplace,
    caller: &AccountAddress,
    contract: &ContractAddress,
    token_id: TokenId,
) -> Result<()> {
    let listing = market
        .store
        .read(|state| state.listing(contract, token_id).cloned())
        .ok_or_else(|| MarketplaceError::NotListed {
            contract: contract.clone(),
            token_id,
        })?;

    // Seller identity is the authorization check.
    if listing.seller != *caller {
        return Err(MarketplaceError::NotOwner);
    }

    market.store.write(|state| {
        state.remove_listing(contract, token_id);
    });

    market.emit(ListingCancelled {
        contract: contract.clone(),
        token_id,
    });

    info!("listing cancelled for token {} of {}", token_id, contract);

    Ok(())
}

/// Emitted when a seller takes an asset off the market.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingCancelled {
    pub contract: ContractAddress,
    pub token_id: TokenId,
}
