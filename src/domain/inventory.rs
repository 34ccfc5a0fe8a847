use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::AssetId;

pub const APP_ID_TF2: u32 = 440;
pub const DEFAULT_CONTEXT_ID: u32 = 2;
pub const DEFAULT_LANGUAGE: &str = "english";

/// An item in a user's inventory.
///
/// Only `identifier` and `display_name` are interpreted; every other
/// attribute the platform returned is kept in `extra` as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub identifier: AssetId,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl InventoryItem {
    pub fn new(identifier: impl Into<AssetId>, display_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub success: bool,
    pub items: HashMap<AssetId, InventoryItem>,
}

impl Inventory {
    pub fn new(success: bool) -> Self {
        Self {
            success,
            items: HashMap::new(),
        }
    }

    pub fn insert(&mut self, item: InventoryItem) {
        self.items.insert(item.identifier.clone(), item);
    }

    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<InventoryItem> for Inventory {
    fn from_iter<I: IntoIterator<Item = InventoryItem>>(iter: I) -> Self {
        let mut inventory = Inventory::new(true);
        for item in iter {
            inventory.insert(item);
        }
        inventory
    }
}

/// Which inventory of a user to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryScope {
    pub app_id: u32,
    pub context_id: u32,
    pub language: String,
}

impl Default for InventoryScope {
    fn default() -> Self {
        Self {
            app_id: APP_ID_TF2,
            context_id: DEFAULT_CONTEXT_ID,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}
