mod expensive_product_must_be_stocked;
mod name_must_be_unique;
mod name_must_be_valid;
mod price_must_be_valid;
mod promotional_product_must_be_cheap;
mod quantity_must_be_in_range;
mod status_must_be_known;

pub use expensive_product_must_be_stocked::ExpensiveProductMustBeStocked;
pub use name_must_be_unique::NameMustBeUnique;
pub use name_must_be_valid::NameMustBeValid;
pub use price_must_be_valid::PriceMustBeValid;
pub use promotional_product_must_be_cheap::PromotionalProductMustBeCheap;
pub use quantity_must_be_in_range::QuantityMustBeInRange;
pub use status_must_be_known::StatusMustBeKnown;
