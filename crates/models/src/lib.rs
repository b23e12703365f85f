//! SeaORM entities for the shop: categories, products, customers and orders.
//! Identifiers are integer primary keys assigned by the database.

pub mod db;
pub mod category;
pub mod customer;
pub mod product;
pub mod order;

#[cfg(test)]
mod tests;
