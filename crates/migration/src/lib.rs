//! Migrator registering entity-specific migrations in dependency order.
//! Parents (category, customer) come before the tables referencing them.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_category;
mod m20240101_000002_create_customer;
mod m20240101_000003_create_product;
mod m20240101_000004_create_order;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_category::Migration),
            Box::new(m20240101_000002_create_customer::Migration),
            Box::new(m20240101_000003_create_product::Migration),
            Box::new(m20240101_000004_create_order::Migration),
        ]
    }
}
