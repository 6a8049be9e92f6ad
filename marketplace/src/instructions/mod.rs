pub mod list_item;
pub mod buy_item;
pub mod cancel_listing;
pub mod withdraw_proceeds;

pub use list_item::*;
pub use buy_item::*;
pub use cancel_listing::*;
pub use withdraw_proceeds::*;
