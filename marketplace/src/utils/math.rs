use crate::errors::{MarketplaceError, Result};

/// Checked addition for ledger amounts.
pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(MarketplaceError::MathOverflow)
}
