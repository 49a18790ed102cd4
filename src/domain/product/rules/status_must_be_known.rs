use crate::api::domain::business_rule_interface::{BusinessRuleInterface, RuleViolation};
use crate::domain::product::product::Status;

/// Defensive only: a caller-supplied status is never persisted, but it must
/// at least name a known stock status.
pub struct StatusMustBeKnown {
    pub status: Option<String>,
}

impl BusinessRuleInterface for StatusMustBeKnown {
    fn check_broken(&self) -> Result<(), RuleViolation> {
        if let Some(status) = self.status.as_deref() {
            if Status::parse(status).is_none() {
                return Err(RuleViolation::new("status", "Unknown stock status"));
            }
        }
        Ok(())
    }
}
