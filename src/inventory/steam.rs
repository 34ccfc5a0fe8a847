//! Steam community inventory client.
//!
//! Uses the `profiles/<steamid>/inventory/json/<app>/<context>/` endpoint,
//! which returns assets keyed by asset id (`rgInventory`) alongside their
//! shared descriptions keyed by `<classid>_<instanceid>` (`rgDescriptions`).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use crate::app::{Result, SweepError};
use crate::domain::{AssetId, Inventory, InventoryItem, InventoryScope, SteamId};
use crate::inventory::InventoryProvider;

pub const DEFAULT_INVENTORY_ENDPOINT: &str = "https://steamcommunity.com";

const UNKNOWN_ITEM: &str = "<unknown item>";

pub struct SteamInventoryClient {
    client: Client,
    endpoint: Url,
}

impl SteamInventoryClient {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn inventory_url(&self, user: &SteamId, scope: &InventoryScope) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/profiles/{}/inventory/json/{}/{}/",
            self.endpoint.as_str().trim_end_matches('/'),
            user,
            scope.app_id,
            scope.context_id
        ))?;
        url.query_pairs_mut().append_pair("l", &scope.language);
        Ok(url)
    }
}

#[async_trait]
impl InventoryProvider for SteamInventoryClient {
    async fn load(&self, user: &SteamId, scope: &InventoryScope) -> Result<Inventory> {
        let url = self.inventory_url(user, scope)?;
        tracing::debug!("Requesting inventory from {}", url);

        let response = self.client.get(url).send().await?;
        response.error_for_status_ref()?;
        let body = response.bytes().await?;

        let raw: RawInventory = serde_json::from_slice(&body)?;
        let inventory = raw.into_inventory()?;
        tracing::info!("Loaded {} inventory items for {}", inventory.len(), user);
        Ok(inventory)
    }
}

#[derive(Debug, Deserialize)]
struct RawInventory {
    #[serde(default)]
    success: bool,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(rename = "rgInventory", default)]
    assets: Option<Value>,
    #[serde(rename = "rgDescriptions", default)]
    descriptions: Option<Value>,
}

impl RawInventory {
    fn into_inventory(self) -> Result<Inventory> {
        if !self.success {
            return Err(SweepError::InventoryUnavailable(
                self.error
                    .unwrap_or_else(|| "request was not successful".to_string()),
            ));
        }

        let assets = match self.assets {
            Some(Value::Object(map)) => map,
            // Steam sends `[]` instead of `{}` for an empty inventory
            Some(Value::Array(list)) if list.is_empty() => Map::new(),
            _ => {
                return Err(SweepError::InventoryUnavailable(
                    "response has no rgInventory".to_string(),
                ))
            }
        };

        let descriptions = match self.descriptions {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };

        let mut inventory = Inventory::new(true);
        for (asset_id, asset) in assets {
            let Value::Object(extra) = asset else {
                tracing::warn!("Skipping malformed inventory entry {}", asset_id);
                continue;
            };

            let display_name = description_key(&extra)
                .and_then(|key| descriptions.get(&key))
                .and_then(display_name)
                .unwrap_or(UNKNOWN_ITEM)
                .to_string();

            inventory.insert(InventoryItem {
                identifier: AssetId::new(asset_id),
                display_name,
                extra,
            });
        }

        Ok(inventory)
    }
}

fn description_key(asset: &Map<String, Value>) -> Option<String> {
    let classid = asset.get("classid")?.as_str()?;
    let instanceid = asset.get("instanceid").and_then(Value::as_str).unwrap_or("0");
    Some(format!("{}_{}", classid, instanceid))
}

fn display_name(description: &Value) -> Option<&str> {
    description
        .get("name")
        .or_else(|| description.get("market_hash_name"))
        .and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const STEAM_ID: &str = "76561198000000000";

    fn client(server: &MockServer) -> SteamInventoryClient {
        SteamInventoryClient::new(Client::new(), Url::parse(&server.uri()).unwrap())
    }

    fn steam_id() -> SteamId {
        STEAM_ID.parse().unwrap()
    }

    #[test]
    fn test_inventory_url() {
        let client = SteamInventoryClient::new(
            Client::new(),
            Url::parse(DEFAULT_INVENTORY_ENDPOINT).unwrap(),
        );
        let url = client
            .inventory_url(&steam_id(), &InventoryScope::default())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://steamcommunity.com/profiles/76561198000000000/inventory/json/440/2/?l=english"
        );
    }

    #[tokio::test]
    async fn test_load_joins_descriptions() {
        let server = MockServer::start().await;
        let body = json!({
            "success": true,
            "rgInventory": {
                "111": {"id": "111", "classid": "10", "instanceid": "0", "amount": "1", "pos": 1},
                "222": {"id": "222", "classid": "20", "instanceid": "5", "amount": "1", "pos": 2},
                "333": {"id": "333", "classid": "99", "instanceid": "0", "amount": "1", "pos": 3}
            },
            "rgDescriptions": {
                "10_0": {"name": "Mann Co. Supply Crate Key"},
                "20_5": {"market_hash_name": "Strange Rocket Launcher"}
            }
        });
        Mock::given(method("GET"))
            .and(path(format!("/profiles/{}/inventory/json/440/2/", STEAM_ID)))
            .and(query_param("l", "english"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let inventory = client(&server)
            .load(&steam_id(), &InventoryScope::default())
            .await
            .unwrap();

        assert!(inventory.success);
        assert_eq!(inventory.len(), 3);
        assert_eq!(inventory.get("111").unwrap().display_name, "Mann Co. Supply Crate Key");
        assert_eq!(inventory.get("222").unwrap().display_name, "Strange Rocket Launcher");
        assert_eq!(inventory.get("333").unwrap().display_name, UNKNOWN_ITEM);
        assert_eq!(inventory.get("111").unwrap().extra["pos"], json!(1));
    }

    #[tokio::test]
    async fn test_load_empty_inventory_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "rgInventory": [],
                "rgDescriptions": []
            })))
            .mount(&server)
            .await;

        let inventory = client(&server)
            .load(&steam_id(), &InventoryScope::default())
            .await
            .unwrap();
        assert!(inventory.success);
        assert!(inventory.is_empty());
    }

    #[tokio::test]
    async fn test_load_unsuccessful() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "Error": "This profile is private."
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .load(&steam_id(), &InventoryScope::default())
            .await
            .unwrap_err();
        assert!(
            matches!(err, SweepError::InventoryUnavailable(ref msg) if msg == "This profile is private.")
        );
    }

    #[tokio::test]
    async fn test_load_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let err = client(&server)
            .load(&steam_id(), &InventoryScope::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SweepError::Http(_)));
    }

    #[tokio::test]
    async fn test_load_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
            .mount(&server)
            .await;

        let err = client(&server)
            .load(&steam_id(), &InventoryScope::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SweepError::InventoryParse(_)));
    }
}
