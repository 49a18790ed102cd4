pub mod draft;
pub mod product;
pub mod product_repository_interface;
pub mod rules;
pub mod sanitizer;
