use url::Url;

use crate::domain::{AssetId, InventoryItem};

pub const DEFAULT_LINK_BASE: &str = "https://backpack.tf";

/// A tainted asset id that is present in the inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub asset_id: AssetId,
    pub item: InventoryItem,
    pub link: String,
}

impl Match {
    pub fn new(asset_id: AssetId, item: InventoryItem, link_base: &Url) -> Self {
        let link = reference_link(link_base, &asset_id);
        Self {
            asset_id,
            item,
            link,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.item.display_name
    }
}

/// Build `<base>/item/<id>`.
pub fn reference_link(base: &Url, id: &AssetId) -> String {
    format!("{}/item/{}", base.as_str().trim_end_matches('/'), id)
}
