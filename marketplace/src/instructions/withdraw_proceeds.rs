use tracing::info;

use crate::errors::{MarketplaceError, Result};
use crate::external::ValueTransfer;
use crate::state::AccountAddress;
use crate::Marketplace;

pub fn withdraw_proceeds(
    market: &Marketplace,
    bank: &dyn ValueTransfer,
    caller: &AccountAddress,
) -> Result<()> {
    let amount = market.store.read(|state| state.proceeds_of(caller));
    if amount == 0 {
        return Err(MarketplaceError::NoProceeds);
    }

    // Zero the balance before the external send; a callee re-entering the
    // ledger finds nothing left to withdraw.
    market.store.write(|state| {
        state.proceeds.remove(caller);
    });

    if !bank.send(caller, amount) {
        // Rolled back by the transaction boundary, restoring the balance.
        return Err(MarketplaceError::TransferFailed);
    }

    info!("withdrew {} for {}", amount, caller);

    Ok(())
}
