use crate::api::domain::business_rule_interface::{BusinessRuleInterface, RuleViolation};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

/// Whole number, or exactly two fractional digits.
static PRICE_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d{2})?$").unwrap());

const MAX_PRICE: i64 = 10000;

pub struct PriceMustBeValid {
    pub price: Option<String>,
}

impl BusinessRuleInterface for PriceMustBeValid {
    fn check_broken(&self) -> Result<(), RuleViolation> {
        let raw = match self.price.as_deref() {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(RuleViolation::new("price", "Price is required")),
        };

        if !PRICE_FORMAT.is_match(raw) {
            return Err(RuleViolation::new("price", "Price must have exactly 2 decimal places"));
        }

        let price: Decimal = raw
            .parse()
            .map_err(|_| RuleViolation::new("price", "Price must be a number"))?;

        if price <= Decimal::ZERO {
            return Err(RuleViolation::new("price", "Price must be greater than 0"));
        }
        if price > Decimal::from(MAX_PRICE) {
            return Err(RuleViolation::new("price", format!("Price must be at most {MAX_PRICE}")));
        }

        Ok(())
    }
}
