//! World documents and their legacy market listings

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ToTransport;

/// A shop listing in a world's free market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketListing {
    pub id: u64,
    pub item_id: u32,
    pub quantity: u32,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ToTransport for MarketListing {
    type Transport = MarketListing;

    fn to_transport(&self) -> MarketListing {
        self.clone()
    }
}

// == World ==
/// A game world document, including its market listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub market: Vec<MarketListing>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// JSON form of a [`World`]; listings are served by the market route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldResource {
    pub id: u32,
    pub name: String,
    #[serde(rename = "marketSize")]
    pub market_size: usize,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ToTransport for World {
    type Transport = WorldResource;

    fn to_transport(&self) -> WorldResource {
        WorldResource {
            id: self.id,
            name: self.name.clone(),
            market_size: self.market.len(),
            extra: self.extra.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_world_transport_drops_listings() {
        let world: World = serde_json::from_value(json!({
            "id": 0,
            "name": "Scania",
            "market": [
                { "id": 1, "itemId": 2000000, "quantity": 100, "price": 50, "shopName": "Pots" }
            ],
            "flag": "event"
        }))
        .unwrap();

        let json = serde_json::to_value(world.to_transport()).unwrap();
        assert_eq!(
            json,
            json!({ "id": 0, "name": "Scania", "marketSize": 1, "flag": "event" })
        );
    }

    #[test]
    fn test_listing_camel_case() {
        let listing: MarketListing = serde_json::from_value(json!({
            "id": 9, "itemId": 1302000, "quantity": 1, "price": 1000000,
            "characterName": "Athena"
        }))
        .unwrap();
        assert_eq!(listing.item_id, 1302000);
        assert_eq!(listing.character_name.as_deref(), Some("Athena"));

        let json = serde_json::to_value(listing.to_transport()).unwrap();
        assert!(json.get("shopName").is_none());
        assert_eq!(json["itemId"], 1302000);
    }
}
