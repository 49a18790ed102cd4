use crate::api::domain::business_rule_interface::{BusinessRuleInterface, RuleViolation};
use crate::domain::product::sanitizer::strip_tags;

const MIN_NAME_LENGTH: usize = 3;
const MAX_NAME_LENGTH: usize = 50;
const DISALLOWED_CHARS: [char; 8] = ['<', '>', '{', '}', '(', ')', '/', '\\'];

pub struct NameMustBeValid {
    pub name: Option<String>,
}

impl BusinessRuleInterface for NameMustBeValid {
    fn check_broken(&self) -> Result<(), RuleViolation> {
        let name = match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => return Err(RuleViolation::new("name", "Product name is required")),
        };

        let length = name.chars().count();
        if length < MIN_NAME_LENGTH {
            return Err(RuleViolation::new(
                "name",
                format!("Product name must be at least {MIN_NAME_LENGTH} characters"),
            ));
        }
        if length > MAX_NAME_LENGTH {
            return Err(RuleViolation::new(
                "name",
                format!("Product name must be at most {MAX_NAME_LENGTH} characters"),
            ));
        }

        if strip_tags(name) != name {
            return Err(RuleViolation::new("name", "Name cannot contain HTML tags"));
        }

        if name.chars().any(|c| DISALLOWED_CHARS.contains(&c)) {
            return Err(RuleViolation::new("name", "Name contains invalid characters"));
        }

        Ok(())
    }
}
