/// A broken rule names the field it rejects and the message shown for it.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleViolation {
    pub field: &'static str,
    pub message: String,
}

impl RuleViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

pub trait BusinessRuleInterface {
    fn check_broken(&self) -> Result<(), RuleViolation>;
}
