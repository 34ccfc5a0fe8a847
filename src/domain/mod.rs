pub mod asset;
pub mod inventory;
pub mod matched;

pub use asset::{AssetId, SteamId};
pub use inventory::{Inventory, InventoryItem, InventoryScope};
pub use matched::Match;
