use serde::{Deserialize, Serialize};

use crate::errors::{MarketplaceError, Result};
use crate::state::AccountAddress;

/// One asset offered for sale at a fixed price.
///
/// The default value (price zero, empty seller) stands for "not listed" on
/// the query surface; every stored listing has a positive price.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub seller: AccountAddress,
    pub price: u64,
}

impl Listing {
    pub fn new(seller: AccountAddress, price: u64) -> Self {
        Self { seller, price }
    }

    pub fn is_listed(&self) -> bool {
        self.price > 0
    }

    pub fn validate_price(price: u64) -> Result<()> {
        if price == 0 {
            return Err(MarketplaceError::PriceMustBeAboveZero);
        }
        Ok(())
    }
}
