pub mod product_service;
pub mod product_service_interface;
