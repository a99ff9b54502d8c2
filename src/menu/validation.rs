//! Schema-on-write checks
//!
//! Applied by the handlers before anything reaches the store, so both store
//! backends see identical constraints.

use mongodb::bson::oid::ObjectId;

use super::models::{CreateMenuItemInput, MenuItemChanges, NewMenuItem, UpdateMenuItemInput};
use crate::error::{ApiError, REQUIRED_FIELDS};

/// Requires a non-empty `name` and a non-zero `price`.
pub fn validate_new_item(input: CreateMenuItemInput) -> Result<NewMenuItem, ApiError> {
    let name = input.name.filter(|n| !n.is_empty());
    let price = input.price.filter(|p| *p != 0.0 && !p.is_nan());

    match (name, price) {
        (Some(name), Some(price)) => Ok(NewMenuItem {
            name,
            description: input.description,
            price,
        }),
        _ => Err(ApiError::validation(REQUIRED_FIELDS)),
    }
}

/// Checks the fields an update supplies. Absent fields are not required.
pub fn validate_changes(input: UpdateMenuItemInput) -> Result<MenuItemChanges, ApiError> {
    let name = match input.name {
        None => None,
        Some(Some(name)) if !name.is_empty() => Some(name),
        Some(_) => return Err(ApiError::validation("Name cannot be empty")),
    };

    let price = match input.price {
        None => None,
        Some(Some(price)) => Some(price),
        Some(None) => return Err(ApiError::validation("Price cannot be null")),
    };

    Ok(MenuItemChanges {
        name,
        description: input.description,
        price,
    })
}

pub fn parse_item_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw)
        .map_err(|_| ApiError::validation(format!("Invalid menu item id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: Option<&str>, price: Option<f64>) -> CreateMenuItemInput {
        CreateMenuItemInput {
            name: name.map(String::from),
            description: None,
            price,
        }
    }

    #[test]
    fn accepts_name_and_price() {
        let item = validate_new_item(create(Some("Pizza"), Some(12.5))).unwrap();
        assert_eq!(item.name, "Pizza");
        assert_eq!(item.price, 12.5);
    }

    #[test]
    fn accepts_negative_price() {
        assert!(validate_new_item(create(Some("Refund"), Some(-1.0))).is_ok());
    }

    #[test]
    fn rejects_falsy_fields() {
        for input in [
            create(None, Some(1.0)),
            create(Some(""), Some(1.0)),
            create(Some("Pizza"), None),
            create(Some("Pizza"), Some(0.0)),
        ] {
            let err = validate_new_item(input).unwrap_err();
            assert_eq!(err.to_string(), REQUIRED_FIELDS);
        }
    }

    #[test]
    fn update_allows_zero_price_but_not_null() {
        let changes = validate_changes(UpdateMenuItemInput {
            price: Some(Some(0.0)),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes.price, Some(0.0));

        assert!(validate_changes(UpdateMenuItemInput {
            price: Some(None),
            ..Default::default()
        })
        .is_err());
    }

    #[test]
    fn update_rejects_blank_name() {
        for name in [Some(None), Some(Some(String::new()))] {
            let result = validate_changes(UpdateMenuItemInput {
                name,
                ..Default::default()
            });
            assert!(matches!(result, Err(ApiError::Validation(_))));
        }
    }

    #[test]
    fn update_passes_description_clear_through() {
        let changes = validate_changes(UpdateMenuItemInput {
            description: Some(None),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes.description, Some(None));
    }

    #[test]
    fn item_ids_must_be_object_ids() {
        assert!(parse_item_id("65f0c0ffee0000000000abcd").is_ok());
        assert!(parse_item_id("not-an-id").is_err());
        assert!(parse_item_id("").is_err());
    }
}
