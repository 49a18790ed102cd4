use crate::api::domain::business_rule_interface::{BusinessRuleInterface, RuleViolation};

pub struct NameMustBeUnique {
    pub is_unique: bool,
}

impl BusinessRuleInterface for NameMustBeUnique {
    fn check_broken(&self) -> Result<(), RuleViolation> {
        if !self.is_unique {
            return Err(RuleViolation::new("name", "This product name already exists"));
        }
        Ok(())
    }
}
