//! Transfer shapes (the fields a client may submit) for each entity kind,
//! with the per-kind mapping and validation plugged into [`crate::crud::RecordService`].

pub mod category;
pub mod customer;
pub mod order;
pub mod product;

pub use category::CategoryDto;
pub use customer::CustomerDto;
pub use order::OrderDto;
pub use product::ProductDto;
