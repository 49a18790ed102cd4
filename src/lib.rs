pub mod api;
pub mod application;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod util;
