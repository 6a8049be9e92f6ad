use serde::{Deserialize, Serialize};

use crate::instructions::{ListingCancelled, ListingCreated, ListingSold};

/// Notifications the ledger produces for observers. Tests and off-process
/// consumers assert on these, never on internal state directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketEvent {
    Created(ListingCreated),
    Sold(ListingSold),
    Cancelled(ListingCancelled),
}

impl From<ListingCreated> for MarketEvent {
    fn from(event: ListingCreated) -> Self {
        Self::Created(event)
    }
}

impl From<ListingSold> for MarketEvent {
    fn from(event: ListingSold) -> Self {
        Self::Sold(event)
    }
}

impl From<ListingCancelled> for MarketEvent {
    fn from(event: ListingCancelled) -> Self {
        Self::Cancelled(event)
    }
}
