pub mod business_rule_interface;
pub mod product;
pub mod server;
