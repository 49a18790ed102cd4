use crate::api::domain::business_rule_interface::{BusinessRuleInterface, RuleViolation};
use rust_decimal::Decimal;

const MAX_PROMO_PRICE: i64 = 50;

pub struct PromotionalProductMustBeCheap {
    pub name: String,
    pub price: Decimal,
}

impl BusinessRuleInterface for PromotionalProductMustBeCheap {
    fn check_broken(&self) -> Result<(), RuleViolation> {
        if self.name.to_lowercase().contains("promo") && self.price >= Decimal::from(MAX_PROMO_PRICE)
        {
            return Err(RuleViolation::new("price", "Promotional products must be under $50"));
        }
        Ok(())
    }
}
