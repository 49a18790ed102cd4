use rust_decimal::Decimal;

use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::core::error::FieldErrors;
use crate::domain::product::product::Model;
use crate::domain::product::rules::*;
use crate::domain::product::sanitizer::SanitizedProductData;

/// The candidate for a save: sanitized input alone on create, or the stored
/// record overlaid with the sanitized fields that were supplied on edit.
/// Values stay raw strings until field validation has passed.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub price: Option<String>,
    pub status: Option<String>,
}

impl ProductDraft {
    pub fn from_input(data: SanitizedProductData) -> Self {
        Self {
            id: None,
            name: data.name,
            quantity: data.quantity,
            price: data.price,
            status: data.status,
        }
    }

    pub fn from_existing(existing: &Model, data: SanitizedProductData) -> Self {
        Self {
            id: Some(existing.id),
            name: data.name.or_else(|| Some(existing.name.clone())),
            quantity: data.quantity.or_else(|| Some(existing.quantity.to_string())),
            price: data.price.or_else(|| Some(format!("{:.2}", existing.price))),
            status: data.status,
        }
    }
}

/// A candidate that passed field-level validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}

/// Run every field-level rule and collect all violations; the first violation
/// per field wins. Nothing short-circuits, so a caller sees the full error
/// map in one round trip.
pub fn validate_fields(
    draft: &ProductDraft,
    name_is_unique: bool,
) -> Result<ValidatedProduct, FieldErrors> {
    let rules: [&dyn BusinessRuleInterface; 5] = [
        &NameMustBeValid { name: draft.name.clone() },
        &NameMustBeUnique { is_unique: name_is_unique },
        &QuantityMustBeInRange { quantity: draft.quantity.clone() },
        &PriceMustBeValid { price: draft.price.clone() },
        &StatusMustBeKnown { status: draft.status.clone() },
    ];

    let mut errors = FieldErrors::new();
    for rule in rules {
        if let Err(violation) = rule.check_broken() {
            errors.entry(violation.field.to_string()).or_insert(violation.message);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // Field rules guarantee these parses cannot fail.
    Ok(ValidatedProduct {
        name: draft.name.clone().unwrap_or_default(),
        quantity: draft.quantity.as_deref().unwrap_or_default().parse().unwrap_or_default(),
        price: draft.price.as_deref().unwrap_or_default().parse().unwrap_or_default(),
    })
}

/// Cross-field rules, run only once field-level validation has passed and
/// before anything is written.
pub fn validate_cross_field(candidate: &ValidatedProduct) -> Result<(), FieldErrors> {
    let rules: [&dyn BusinessRuleInterface; 2] = [
        &ExpensiveProductMustBeStocked { price: candidate.price, quantity: candidate.quantity },
        &PromotionalProductMustBeCheap {
            name: candidate.name.clone(),
            price: candidate.price,
        },
    ];

    let mut errors = FieldErrors::new();
    for rule in rules {
        if let Err(violation) = rule.check_broken() {
            errors.entry(violation.field.to_string()).or_insert(violation.message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::product::Status;
    use crate::domain::product::sanitizer::sanitize_product_data;
    use chrono::NaiveDate;
    use serde_json::json;

    fn draft(name: &str, quantity: &str, price: &str) -> ProductDraft {
        ProductDraft {
            id: None,
            name: Some(name.to_string()),
            quantity: Some(quantity.to_string()),
            price: Some(price.to_string()),
            status: None,
        }
    }

    fn stored_widget() -> Model {
        let saved_at = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap().and_hms_opt(9, 30, 0);
        Model {
            id: 7,
            name: "Widget".to_string(),
            quantity: 20,
            price: "19.99".parse().unwrap(),
            status: Status::InStock,
            is_deleted: false,
            created_at: saved_at,
            updated_at: saved_at,
            last_updated_at: saved_at,
            deleted_at: None,
        }
    }

    #[test]
    fn valid_product_passes() {
        let validated = validate_fields(&draft("Test Product", "15", "99.99"), true).unwrap();
        assert_eq!(validated.name, "Test Product");
        assert_eq!(validated.quantity, 15);
        assert_eq!(validated.price, "99.99".parse().unwrap());
    }

    #[test]
    fn name_length_boundaries() {
        let errors = validate_fields(&draft("ab", "15", "99.99"), true).unwrap_err();
        assert!(errors.contains_key("name"));

        assert!(validate_fields(&draft("abc", "15", "99.99"), true).is_ok());
        assert!(validate_fields(&draft(&"x".repeat(50), "15", "99.99"), true).is_ok());
        assert!(validate_fields(&draft(&"x".repeat(51), "15", "99.99"), true).is_err());
    }

    #[test]
    fn name_markup_and_charset_are_rejected() {
        let errors = validate_fields(&draft("Evil <b>Name</b>", "15", "99.99"), true).unwrap_err();
        assert_eq!(errors.get("name").unwrap(), "Name cannot contain HTML tags");

        let errors = validate_fields(&draft("curly {name}", "15", "99.99"), true).unwrap_err();
        assert_eq!(errors.get("name").unwrap(), "Name contains invalid characters");
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let errors = validate_fields(&draft("Widget", "15", "99.99"), false).unwrap_err();
        assert_eq!(errors.get("name").unwrap(), "This product name already exists");
    }

    #[test]
    fn quantity_bounds() {
        assert!(validate_fields(&draft("Test Product", "0", "99.99"), true).is_ok());
        assert!(validate_fields(&draft("Test Product", "1000", "99.99"), true).is_ok());

        let errors = validate_fields(&draft("Test Product", "1001", "99.99"), true).unwrap_err();
        assert!(errors.contains_key("quantity"));
        let errors = validate_fields(&draft("Test Product", "-1", "99.99"), true).unwrap_err();
        assert!(errors.contains_key("quantity"));
    }

    #[test]
    fn price_format_and_bounds() {
        assert!(validate_fields(&draft("Test Product", "15", "99.99"), true).is_ok());
        assert!(validate_fields(&draft("Test Product", "15", "100"), true).is_ok());
        assert!(validate_fields(&draft("Test Product", "15", "10000.00"), true).is_ok());

        let errors = validate_fields(&draft("Test Product", "15", "99.999"), true).unwrap_err();
        assert_eq!(errors.get("price").unwrap(), "Price must have exactly 2 decimal places");
        let errors = validate_fields(&draft("Test Product", "15", "99.9"), true).unwrap_err();
        assert!(errors.contains_key("price"));
        let errors = validate_fields(&draft("Test Product", "15", "0.00"), true).unwrap_err();
        assert_eq!(errors.get("price").unwrap(), "Price must be greater than 0");
        let errors = validate_fields(&draft("Test Product", "15", "10000.01"), true).unwrap_err();
        assert!(errors.contains_key("price"));
    }

    #[test]
    fn all_violations_are_collected() {
        let bad = ProductDraft {
            id: None,
            name: Some("ab".to_string()),
            quantity: Some("1001".to_string()),
            price: None,
            status: Some("discontinued".to_string()),
        };
        let errors = validate_fields(&bad, true).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("quantity"));
        assert!(errors.contains_key("price"));
        assert!(errors.contains_key("status"));
    }

    #[test]
    fn supplied_status_is_checked_but_not_required() {
        assert!(validate_fields(&draft("Test Product", "15", "99.99"), true).is_ok());

        let mut with_status = draft("Test Product", "15", "99.99");
        with_status.status = Some("low_stock".to_string());
        assert!(validate_fields(&with_status, true).is_ok());
    }

    #[test]
    fn expensive_product_rule() {
        let candidate = validate_fields(&draft("Expensive Product", "5", "150.00"), true).unwrap();
        let errors = validate_cross_field(&candidate).unwrap_err();
        assert_eq!(errors.get("quantity").unwrap(), "Products over $100 must have at least 10 items");

        let candidate = validate_fields(&draft("Expensive Product", "10", "150.00"), true).unwrap();
        assert!(validate_cross_field(&candidate).is_ok());
    }

    #[test]
    fn promo_pricing_rule() {
        let candidate = validate_fields(&draft("Promo Deal", "15", "75.00"), true).unwrap();
        let errors = validate_cross_field(&candidate).unwrap_err();
        assert_eq!(errors.get("price").unwrap(), "Promotional products must be under $50");

        let candidate = validate_fields(&draft("Promo Deal", "15", "49.99"), true).unwrap();
        assert!(validate_cross_field(&candidate).is_ok());

        // Case-insensitive match.
        let candidate = validate_fields(&draft("SUPER PROMO", "15", "50.00"), true).unwrap();
        assert!(validate_cross_field(&candidate).is_err());
    }

    #[test]
    fn both_cross_field_rules_can_fire_together() {
        let candidate = validate_fields(&draft("Promo Bundle", "5", "150.00"), true).unwrap();
        let errors = validate_cross_field(&candidate).unwrap_err();
        assert!(errors.contains_key("quantity"));
        assert!(errors.contains_key("price"));
    }

    #[test]
    fn merge_keeps_stored_fields_that_were_not_supplied() {
        let existing = stored_widget();
        let data = sanitize_product_data(&json!({ "quantity": "5" }));
        let merged = ProductDraft::from_existing(&existing, data);

        assert_eq!(merged.id, Some(7));
        assert_eq!(merged.name.as_deref(), Some("Widget"));
        assert_eq!(merged.quantity.as_deref(), Some("5"));
        assert_eq!(merged.price.as_deref(), Some("19.99"));
        assert_eq!(merged.status, None);

        let validated = validate_fields(&merged, true).unwrap();
        assert_eq!(validated.quantity, 5);
        assert_eq!(validated.price, existing.price);
    }
}
