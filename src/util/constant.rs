use crate::core::configure::app::AppConfig;
use once_cell::sync::Lazy;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::read().expect("Failed to read the application configuration"));
