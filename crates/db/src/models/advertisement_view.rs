//! Wire-facing view model for advertisements, plus the conversions to and
//! from the [`Advertisement`] entity.
//!
//! Field names are snake_case on output. Input also accepts the PascalCase
//! and camelCase spellings older clients send. `price` is written as a JSON
//! number and read from either a number or a decimal string.

use annos_core::types::{DbId, Price, Timestamp};
use serde::{Deserialize, Serialize};

use crate::models::advertisement::Advertisement;

/// Request and response payload for a single advertisement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisementView {
    /// Ignored on create; required on full update.
    #[serde(default, alias = "Id")]
    pub id: DbId,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Description")]
    pub description: String,
    #[serde(alias = "Price", serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Price,
    #[serde(
        alias = "DateAdded",
        alias = "dateAdded",
        deserialize_with = "annos_core::timestamp::deserialize"
    )]
    pub date_added: Timestamp,
}

// ---------------------------------------------------------------------------
// Mapping
// ---------------------------------------------------------------------------

impl From<Advertisement> for AdvertisementView {
    fn from(entity: Advertisement) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            date_added: entity.date_added,
        }
    }
}

impl From<AdvertisementView> for Advertisement {
    fn from(view: AdvertisementView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            description: view.description,
            price: view.price,
            date_added: view.date_added,
        }
    }
}

/// Project a batch of entities to views, preserving order.
pub fn to_views(entities: Vec<Advertisement>) -> Vec<AdvertisementView> {
    entities.into_iter().map(AdvertisementView::from).collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use annos_core::timestamp::parse_timestamp;
    use serde_json::json;

    use super::*;

    fn entity() -> Advertisement {
        Advertisement {
            id: 7,
            name: "Banner".into(),
            description: "Front page".into(),
            price: Price::from_str("9.99").unwrap(),
            date_added: parse_timestamp("2024-01-01").unwrap(),
        }
    }

    #[test]
    fn mapping_round_trips_every_field() {
        let view = AdvertisementView::from(entity());
        assert_eq!(view.id, 7);
        assert_eq!(view.name, "Banner");
        assert_eq!(Advertisement::from(view), entity());
    }

    #[test]
    fn to_views_preserves_order() {
        let mut second = entity();
        second.id = 8;
        let views = to_views(vec![entity(), second]);
        let ids: Vec<_> = views.iter().map(|v| v.id).collect();
        assert_eq!(ids, [7, 8]);
    }

    #[test]
    fn deserializes_pascal_case_payload_without_id() {
        let view: AdvertisementView = serde_json::from_value(json!({
            "Name": "Banner",
            "Description": "Front page",
            "Price": 9.99,
            "DateAdded": "2024-01-01"
        }))
        .unwrap();

        assert_eq!(view.id, 0);
        assert_eq!(view.price, Price::from_str("9.99").unwrap());

        let from_string: AdvertisementView = serde_json::from_value(json!({
            "name": "Banner",
            "description": "Front page",
            "price": "9.99",
            "date_added": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(from_string.price, view.price);
        assert_eq!(view.date_added, parse_timestamp("2024-01-01").unwrap());
    }

    #[test]
    fn serializes_snake_case_with_numeric_price() {
        let value = serde_json::to_value(AdvertisementView::from(entity())).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["price"], 9.99);
        assert_eq!(value["date_added"], "2024-01-01T00:00:00Z");
    }
}
