//! Item documents
//!
//! Items are stored with PascalCase field names. The icon blobs are base64
//! PNGs and are never part of the item's JSON form.

use std::ops::Range;

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ToTransport;

/// Item IDs reserved for hair styles.
pub const HAIR_ID_RANGE: Range<u32> = 30_000..50_000;

/// Name and flavour text of an item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemDescription {
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Base64-encoded icon images of an item.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemIcon {
    #[serde(rename = "Icon", default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "IconRaw", default, skip_serializing_if = "Option::is_none")]
    pub icon_raw: Option<String>,
}

/// Which of the two icon images to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Inventory icon (`Icon.Icon`)
    Inventory,
    /// Unprocessed icon (`Icon.IconRaw`)
    Raw,
}

// == Item ==
/// A single item document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<ItemDescription>,
    #[serde(rename = "MetaInfo", default, skip_serializing_if = "Option::is_none")]
    pub meta_info: Option<Value>,
    #[serde(rename = "TypeInfo", default, skip_serializing_if = "Option::is_none")]
    pub type_info: Option<Value>,
    #[serde(rename = "Icon", default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<ItemIcon>,
    /// Any other document fields, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    /// Creates a bare item with only an ID.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            description: None,
            meta_info: None,
            type_info: None,
            icon: None,
            extra: Map::new(),
        }
    }

    /// Display name, if the document has one.
    pub fn name(&self) -> Option<&str> {
        self.description.as_ref()?.name.as_deref()
    }

    pub fn is_hair(&self) -> bool {
        HAIR_ID_RANGE.contains(&self.id)
    }

    /// Encoded icon data; empty strings count as absent.
    pub fn icon_data(&self, kind: IconKind) -> Option<&str> {
        let icon = self.icon.as_ref()?;
        let data = match kind {
            IconKind::Inventory => icon.icon.as_deref(),
            IconKind::Raw => icon.icon_raw.as_deref(),
        };
        data.filter(|encoded| !encoded.is_empty())
    }

    /// Decodes an icon into PNG bytes.
    ///
    /// `Ok(None)` means the item has no such icon. A present but malformed
    /// blob is an error.
    pub fn decode_icon(&self, kind: IconKind) -> anyhow::Result<Option<Vec<u8>>> {
        let Some(encoded) = self.icon_data(kind) else {
            return Ok(None);
        };
        let bytes = STANDARD
            .decode(encoded.trim())
            .with_context(|| format!("item {} has a malformed {:?} icon", self.id, kind))?;
        Ok(Some(bytes))
    }

    pub fn summary(&self) -> ItemSummary {
        ItemSummary {
            id: self.id,
            name: self.name().map(str::to_string),
        }
    }
}

/// JSON form of an [`Item`]: the document minus its icon blobs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemResource {
    pub id: u32,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<ItemDescription>,
    #[serde(rename = "MetaInfo", skip_serializing_if = "Option::is_none")]
    pub meta_info: Option<Value>,
    #[serde(rename = "TypeInfo", skip_serializing_if = "Option::is_none")]
    pub type_info: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ToTransport for Item {
    type Transport = ItemResource;

    fn to_transport(&self) -> ItemResource {
        ItemResource {
            id: self.id,
            description: self.description.clone(),
            meta_info: self.meta_info.clone(),
            type_info: self.type_info.clone(),
            extra: self.extra.clone(),
        }
    }
}

// == Item Summary ==
/// Entry of the item listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub id: u32,
    pub name: Option<String>,
}

impl ToTransport for ItemSummary {
    type Transport = ItemSummary;

    fn to_transport(&self) -> ItemSummary {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Item {
        serde_json::from_value(json!({
            "id": 1382223,
            "Description": { "Name": "Maple Staff", "Description": "A staff." },
            "MetaInfo": { "reqLevel": 10 },
            "TypeInfo": { "Category": "Equip" },
            "Icon": { "Icon": "iVBORw0KGgo=", "IconRaw": "" },
            "Origin": "wz"
        }))
        .unwrap()
    }

    #[test]
    fn test_item_deserialize() {
        let item = sample();
        assert_eq!(item.id, 1382223);
        assert_eq!(item.name(), Some("Maple Staff"));
        assert_eq!(item.extra.get("Origin"), Some(&json!("wz")));
    }

    #[test]
    fn test_transport_omits_icon() {
        let json = serde_json::to_value(sample().to_transport()).unwrap();
        assert!(json.get("Icon").is_none());
        assert_eq!(json["id"], 1382223);
        assert_eq!(json["Description"]["Name"], "Maple Staff");
        assert_eq!(json["MetaInfo"]["reqLevel"], 10);
        assert_eq!(json["Origin"], "wz");
    }

    #[test]
    fn test_empty_icon_counts_as_absent() {
        let item = sample();
        assert!(item.icon_data(IconKind::Inventory).is_some());
        assert!(item.icon_data(IconKind::Raw).is_none());
        assert!(Item::new(1).icon_data(IconKind::Inventory).is_none());
    }

    #[test]
    fn test_decode_icon() {
        let bytes = sample().decode_icon(IconKind::Inventory).unwrap().unwrap();
        assert_eq!(bytes, b"\x89PNG\r\n\x1a\n");
        assert!(sample().decode_icon(IconKind::Raw).unwrap().is_none());
    }

    #[test]
    fn test_decode_malformed_icon_is_error() {
        let mut item = Item::new(5);
        item.icon = Some(ItemIcon {
            icon: Some("not base64!!".to_string()),
            icon_raw: None,
        });
        assert!(item.decode_icon(IconKind::Inventory).is_err());
    }

    #[test]
    fn test_hair_range() {
        assert!(Item::new(30_000).is_hair());
        assert!(Item::new(49_999).is_hair());
        assert!(!Item::new(50_000).is_hair());
        assert!(!Item::new(1_302_000).is_hair());
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            sample().summary(),
            ItemSummary {
                id: 1382223,
                name: Some("Maple Staff".to_string())
            }
        );
        assert_eq!(Item::new(7).summary().name, None);
    }
}
