use crate::api::domain::business_rule_interface::{BusinessRuleInterface, RuleViolation};

const MIN_QUANTITY: i32 = 0;
const MAX_QUANTITY: i32 = 1000;

pub struct QuantityMustBeInRange {
    pub quantity: Option<String>,
}

impl BusinessRuleInterface for QuantityMustBeInRange {
    fn check_broken(&self) -> Result<(), RuleViolation> {
        let raw = match self.quantity.as_deref() {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Err(RuleViolation::new("quantity", "Quantity is required")),
        };

        let quantity: i32 = raw
            .parse()
            .map_err(|_| RuleViolation::new("quantity", "Quantity must be an integer"))?;

        if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            return Err(RuleViolation::new(
                "quantity",
                format!("Quantity must be between {MIN_QUANTITY} and {MAX_QUANTITY}"),
            ));
        }

        Ok(())
    }
}
