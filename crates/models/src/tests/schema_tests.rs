use crate::db::connect_in_memory;
use crate::{category, customer, order, product};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, NotSet, PaginatorTrait, Set};
use anyhow::Result;
use migration::MigratorTrait;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

async fn seed_category(db: &DatabaseConnection, name: &str) -> Result<category::Model> {
    let am = category::ActiveModel { id: NotSet, name: Set(name.to_string()) };
    Ok(am.insert(db).await?)
}

async fn seed_product(db: &DatabaseConnection, category_id: i32, name: &str) -> Result<product::Model> {
    let am = product::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        price: Set(19.99),
        weight: Set(0.5),
        description: Set(format!("{name} description")),
        category_id: Set(category_id),
    };
    Ok(am.insert(db).await?)
}

/// Identifiers come from the database and increase per insert
#[tokio::test]
async fn test_ids_are_assigned_on_insert() -> Result<()> {
    let db = setup_test_db().await?;

    let first = seed_category(&db, "books").await?;
    let second = seed_category(&db, "games").await?;

    assert!(first.id > 0);
    assert!(second.id > first.id);

    let found = category::Entity::find_by_id(second.id).one(&db).await?;
    assert_eq!(found, Some(second));
    Ok(())
}

/// Product columns survive a write/read cycle
#[tokio::test]
async fn test_product_columns_persist() -> Result<()> {
    let db = setup_test_db().await?;
    let cat = seed_category(&db, "tools").await?;

    let created = seed_product(&db, cat.id, "hammer").await?;
    let found = product::Entity::find_by_id(created.id).one(&db).await?.expect("product");

    assert_eq!(found.name, "hammer");
    assert_eq!(found.price, 19.99);
    assert_eq!(found.weight, 0.5);
    assert_eq!(found.description, "hammer description");
    assert_eq!(found.category_id, cat.id);
    Ok(())
}

/// Relations resolve in both directions
#[tokio::test]
async fn test_relations_resolve() -> Result<()> {
    let db = setup_test_db().await?;
    let cat = seed_category(&db, "garden").await?;
    let rake = seed_product(&db, cat.id, "rake").await?;
    seed_product(&db, cat.id, "shovel").await?;

    let products = cat.find_related(product::Entity).all(&db).await?;
    assert_eq!(products.len(), 2);

    let owner = rake.find_related(category::Entity).one(&db).await?;
    assert_eq!(owner.map(|c| c.id), Some(cat.id));

    let alice = customer::ActiveModel { id: NotSet, name: Set("Alice".into()) }.insert(&db).await?;
    for _ in 0..3 {
        order::ActiveModel {
            id: NotSet,
            customer_id: Set(alice.id),
            product_id: Set(rake.id),
            quantity: Set(1),
        }
        .insert(&db)
        .await?;
    }
    let orders = alice.find_related(order::Entity).count(&db).await?;
    assert_eq!(orders, 3);
    Ok(())
}

/// Dangling category reference is rejected by the foreign key
#[tokio::test]
async fn test_product_requires_existing_category() -> Result<()> {
    let db = setup_test_db().await?;
    let res = seed_product(&db, 4242, "orphan").await;
    assert!(res.is_err());
    Ok(())
}

/// Deleting a category cascades to its products and their orders
#[tokio::test]
async fn test_category_delete_cascades() -> Result<()> {
    let db = setup_test_db().await?;
    let cat = seed_category(&db, "toys").await?;
    let ball = seed_product(&db, cat.id, "ball").await?;
    let bob = customer::ActiveModel { id: NotSet, name: Set("Bob".into()) }.insert(&db).await?;
    order::ActiveModel {
        id: NotSet,
        customer_id: Set(bob.id),
        product_id: Set(ball.id),
        quantity: Set(2),
    }
    .insert(&db)
    .await?;

    category::Entity::delete_by_id(cat.id).exec(&db).await?;

    assert!(product::Entity::find_by_id(ball.id).one(&db).await?.is_none());
    assert_eq!(order::Entity::find().count(&db).await?, 0);
    assert!(customer::Entity::find_by_id(bob.id).one(&db).await?.is_some());
    Ok(())
}
