//! Service layer providing the shop's CRUD operations on top of models.
//! - `store`: record store abstraction with SeaORM and in-memory backends.
//! - `crud`: one generic create/read/update/delete contract shared by every entity kind.
//! - `resources`: per-kind transfer shapes and their validation rules.
//! - `customer_query`: the most-orders customer aggregation.

pub mod errors;
pub mod validation;
pub mod store;
pub mod crud;
pub mod resources;
pub mod customer_query;
#[cfg(test)]
pub mod test_support;

pub use crud::{CrudService, RecordService, Transfer};
pub use customer_query::{CustomerQuery, MostOrdersQuery};
pub use errors::ServiceError;
