//! Domain DTOs for the food-item API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently;
//! integration tests catch any drift between the two crates. Field names are
//! camelCase on the wire (`expiryDate`, `purchaseDate`); dates travel as
//! `YYYY-MM-DD` strings, which is what `NaiveDate`'s serde impl produces.
//!
//! `purchaseDate` is optional and omitted from JSON when absent; it is
//! presentation-only and never feeds into expiry classification or sorting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single food item returned by the API.
///
/// Server-owned: `id` is assigned on creation and is the delete key. The
/// client treats the record as immutable for the duration of a fetch cycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: u64,
    pub name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: NaiveDate,
}

/// Request payload for creating a new food item. Field values are sent
/// exactly as provided, no transformation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodItem {
    pub name: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: NaiveDate,
}

impl CreateFoodItem {
    /// Pre-flight check against `today`. A rejected payload never reaches
    /// the network.
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        if self.expiry_date < today {
            return Err(ValidationError::PastExpiry(self.expiry_date));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn food_item_serializes_with_camel_case_fields() {
        let item = FoodItem {
            id: 1,
            name: "Milk".to_string(),
            quantity: 2,
            purchase_date: None,
            expiry_date: date(2025, 6, 1),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Milk");
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["expiryDate"], "2025-06-01");
        assert!(json.get("purchaseDate").is_none());
    }

    #[test]
    fn food_item_includes_purchase_date_when_present() {
        let item = FoodItem {
            id: 7,
            name: "Yogurt".to_string(),
            quantity: 4,
            purchase_date: Some(date(2025, 5, 20)),
            expiry_date: date(2025, 6, 1),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["purchaseDate"], "2025-05-20");
    }

    #[test]
    fn food_item_roundtrips_through_json() {
        let item = FoodItem {
            id: 42,
            name: "Eggs".to_string(),
            quantity: 12,
            purchase_date: Some(date(2025, 1, 2)),
            expiry_date: date(2025, 1, 20),
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: FoodItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn food_item_deserializes_without_purchase_date() {
        let item: FoodItem =
            serde_json::from_str(r#"{"id":3,"name":"Butter","quantity":1,"expiryDate":"2025-03-10"}"#)
                .unwrap();
        assert_eq!(item.name, "Butter");
        assert!(item.purchase_date.is_none());
    }

    #[test]
    fn validate_accepts_expiry_today() {
        let input = CreateFoodItem {
            name: "Milk".to_string(),
            quantity: 1,
            purchase_date: None,
            expiry_date: date(2025, 6, 1),
        };
        assert!(input.validate(date(2025, 6, 1)).is_ok());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let input = CreateFoodItem {
            name: String::new(),
            quantity: 1,
            purchase_date: None,
            expiry_date: date(2025, 6, 2),
        };
        assert_eq!(input.validate(date(2025, 6, 1)), Err(ValidationError::EmptyName));
    }

    #[test]
    fn validate_rejects_blank_name() {
        let input = CreateFoodItem {
            name: "   ".to_string(),
            quantity: 1,
            purchase_date: None,
            expiry_date: date(2025, 6, 2),
        };
        assert_eq!(input.validate(date(2025, 6, 1)), Err(ValidationError::EmptyName));
    }

    #[test]
    fn validate_rejects_zero_quantity() {
        let input = CreateFoodItem {
            name: "Milk".to_string(),
            quantity: 0,
            purchase_date: None,
            expiry_date: date(2025, 6, 2),
        };
        assert_eq!(input.validate(date(2025, 6, 1)), Err(ValidationError::ZeroQuantity));
    }

    #[test]
    fn validate_rejects_past_expiry() {
        let input = CreateFoodItem {
            name: "Milk".to_string(),
            quantity: 2,
            purchase_date: None,
            expiry_date: date(2025, 5, 31),
        };
        assert_eq!(
            input.validate(date(2025, 6, 1)),
            Err(ValidationError::PastExpiry(date(2025, 5, 31)))
        );
    }
}
