//! Menu Domain Models
//!
//! This module contains the menu item record and the payloads accepted by
//! the create and update endpoints.

use serde::{Deserialize, Deserializer, Serialize};

/// Confirmation returned by a successful delete
pub const DELETED_MESSAGE: &str = "Menu item deleted successfully";

// =============================================================================
// Records
// =============================================================================

/// A persisted menu item as seen by API clients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Store-assigned identifier (ObjectId hex)
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub price: f64,
}

/// A validated item ready to be inserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl NewMenuItem {
    /// Attaches the identifier the store generated for this item.
    pub fn with_id(self, id: String) -> MenuItem {
        MenuItem {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

/// Validated field replacements for an existing item.
///
/// `None` leaves a field untouched. For `description`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
}

impl MenuItemChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.price.is_none()
    }

    /// Applies the changes in place.
    pub fn apply(self, item: &mut MenuItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
    }
}

// =============================================================================
// Request Payloads
// =============================================================================

/// Body of `POST /menu`
#[derive(Debug, Default, Deserialize)]
pub struct CreateMenuItemInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// Body of `PUT /menu/:id`.
///
/// Each field is `None` when absent and `Some(None)` when sent as `null`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMenuItemInput {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "present")]
    pub price: Option<Option<f64>>,
}

/// Marks a field as present even when its value is `null`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Response for a successful delete
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn update_input_distinguishes_null_from_absent() {
        let input: UpdateMenuItemInput =
            serde_json::from_value(json!({ "description": null, "price": 4.5 })).unwrap();

        assert_eq!(input.name, None);
        assert_eq!(input.description, Some(None));
        assert_eq!(input.price, Some(Some(4.5)));
    }

    #[test]
    fn update_input_rejects_non_numeric_price() {
        let result = serde_json::from_value::<UpdateMenuItemInput>(json!({ "price": "cheap" }));
        assert!(result.is_err());
    }

    #[test]
    fn description_is_omitted_when_absent() {
        let item = NewMenuItem {
            name: "Soup".into(),
            description: None,
            price: 3.0,
        }
        .with_id("65f0c0ffee0000000000abcd".into());

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["_id"], "65f0c0ffee0000000000abcd");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn changes_only_touch_given_fields() {
        let mut item = NewMenuItem {
            name: "Tea".into(),
            description: Some("Green".into()),
            price: 2.0,
        }
        .with_id("id".into());

        MenuItemChanges {
            price: Some(2.5),
            ..Default::default()
        }
        .apply(&mut item);

        assert_eq!(item.name, "Tea");
        assert_eq!(item.description.as_deref(), Some("Green"));
        assert_eq!(item.price, 2.5);
    }
}
