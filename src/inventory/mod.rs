pub mod steam;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Inventory, InventoryScope, SteamId};

pub use steam::SteamInventoryClient;

/// Loads a user's inventory from the trading platform.
#[async_trait]
pub trait InventoryProvider {
    async fn load(&self, user: &SteamId, scope: &InventoryScope) -> Result<Inventory>;
}
