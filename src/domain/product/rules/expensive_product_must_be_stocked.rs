use crate::api::domain::business_rule_interface::{BusinessRuleInterface, RuleViolation};
use rust_decimal::Decimal;

const EXPENSIVE_PRICE: i64 = 100;
const MIN_EXPENSIVE_QUANTITY: i32 = 10;

pub struct ExpensiveProductMustBeStocked {
    pub price: Decimal,
    pub quantity: i32,
}

impl BusinessRuleInterface for ExpensiveProductMustBeStocked {
    fn check_broken(&self) -> Result<(), RuleViolation> {
        if self.price > Decimal::from(EXPENSIVE_PRICE) && self.quantity < MIN_EXPENSIVE_QUANTITY {
            return Err(RuleViolation::new(
                "quantity",
                "Products over $100 must have at least 10 items",
            ));
        }
        Ok(())
    }
}
