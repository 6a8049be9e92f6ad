use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{MarketplaceError, Result};
use crate::external::AssetRegistry;
use crate::state::{AccountAddress, ContractAddress, Listing, TokenId};
use crate::Marketplace;

pub fn list_item(
    market: &Marketplace,
    registry: &dyn AssetRegistry,
    caller: &AccountAddress,
    contract: &ContractAddress,
    token_id: TokenId,
    price: u64,
) -> Result<()> {
    Listing::validate_price(price)?;

    // Only the registered owner may list; an asset the registry does not
    // know about has no owner to match.
    let owner = registry
        .owner_of(contract, token_id)
        .ok_or(MarketplaceError::NotOwner)?;
    if owner != *caller {
        return Err(MarketplaceError::NotOwner);
    }

    // The registry must already let the marketplace move the asset, so a
    // later purchase needs no further approval from the seller.
    let approved = registry.is_approved_for_all(&owner, market.operator())
        || registry.get_approved(contract, token_id).as_ref() == Some(market.operator());
    if !approved {
        return Err(MarketplaceError::NotApprovedForMarketplace);
    }

    market.store.write(|state| {
        state.insert_listing(contract, token_id, Listing::new(caller.clone(), price));
    });

    market.emit(ListingCreated {
        contract: contract.clone(),
        token_id,
        price,
        seller: caller.clone(),
    });

    info!("listing created for token {} of {} at price {}", token_id, contract, price);

    Ok(())
}

/// Emitted when an asset is put up for sale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingCreated {
    pub contract: ContractAddress,
    pub token_id: TokenId,
    pub price: u64,
    pub seller: AccountAddress,
}
