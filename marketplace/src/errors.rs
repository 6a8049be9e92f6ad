use thiserror::Error;

use crate::state::{ContractAddress, TokenId};

/// Failures a marketplace operation can abort with. Every variant aborts
/// the whole transaction; the caller observes state as it was before the
/// call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MarketplaceError {
    #[error("price must be above zero")]
    PriceMustBeAboveZero,

    #[error("caller is not the owner of the asset")]
    NotOwner,

    #[error("marketplace is not approved to transfer the asset")]
    NotApprovedForMarketplace,

    #[error("no listing for token {token_id} of {contract}")]
    NotListed {
        contract: ContractAddress,
        token_id: TokenId,
    },

    #[error("sent {offered}, asking price is {price}")]
    PriceNotMet { price: u64, offered: u64 },

    #[error("no proceeds to withdraw")]
    NoProceeds,

    #[error("transfer failed")]
    TransferFailed,

    #[error("math overflow")]
    MathOverflow,
}

/// Result type for marketplace operations.
pub type Result<T> = std::result::Result<T, MarketplaceError>;
