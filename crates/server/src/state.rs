use std::sync::Arc;

use models::{category, customer, order, product};
use sea_orm::DatabaseConnection;
use service::resources::{CategoryDto, CustomerDto, OrderDto, ProductDto};
use service::store::{MemoryStore, RecordStore, SeaOrmStore};
use service::{CrudService, CustomerQuery, MostOrdersQuery, RecordService};

pub type Crud<E, D> = Arc<dyn CrudService<E, D>>;

/// Services injected into every handler.
#[derive(Clone)]
pub struct ServerState {
    pub categories: Crud<category::Model, CategoryDto>,
    pub customers: Crud<customer::Model, CustomerDto>,
    pub products: Crud<product::Model, ProductDto>,
    pub orders: Crud<order::Model, OrderDto>,
    pub customer_query: Arc<dyn CustomerQuery>,
}

impl ServerState {
    /// Wire one service per entity kind; the customer query shares the
    /// customer and order stores with their CRUD services.
    pub fn from_stores<CatS, CusS, ProS, OrdS>(
        categories: Arc<CatS>,
        customers: Arc<CusS>,
        products: Arc<ProS>,
        orders: Arc<OrdS>,
    ) -> Self
    where
        CatS: RecordStore<category::Model> + 'static,
        CusS: RecordStore<customer::Model> + 'static,
        ProS: RecordStore<product::Model> + 'static,
        OrdS: RecordStore<order::Model> + 'static,
    {
        Self {
            categories: Arc::new(RecordService::<CategoryDto, CatS>::new(categories)),
            customers: Arc::new(RecordService::<CustomerDto, CusS>::new(Arc::clone(&customers))),
            products: Arc::new(RecordService::<ProductDto, ProS>::new(products)),
            orders: Arc::new(RecordService::<OrderDto, OrdS>::new(Arc::clone(&orders))),
            customer_query: Arc::new(MostOrdersQuery::new(customers, orders)),
        }
    }

    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self::from_stores(
            Arc::new(SeaOrmStore::<category::Entity>::new(db.clone())),
            Arc::new(SeaOrmStore::<customer::Entity>::new(db.clone())),
            Arc::new(SeaOrmStore::<product::Entity>::new(db.clone())),
            Arc::new(SeaOrmStore::<order::Entity>::new(db)),
        )
    }

    /// Process-local stores with no database behind them.
    pub fn in_memory() -> Self {
        Self::from_stores(
            Arc::new(MemoryStore::<category::Model>::new()),
            Arc::new(MemoryStore::<customer::Model>::new()),
            Arc::new(MemoryStore::<product::Model>::new()),
            Arc::new(MemoryStore::<order::Model>::new()),
        )
    }
}
