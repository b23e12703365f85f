use serde::{Deserialize, Serialize};

use models::product;

use crate::crud::Transfer;
use crate::errors::ServiceError;
use crate::store::Record;
use crate::validation::check_positive_number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub price: f64,
    pub weight: f64,
    #[serde(default)]
    pub description: String,
    pub category_id: i32,
}

impl Record for product::Model {
    fn id(&self) -> i32 { self.id }
    fn set_id(&mut self, id: i32) { self.id = id; }
}

impl Transfer for ProductDto {
    type Record = product::Model;
    const KIND: &'static str = "product";

    /// Price, weight and category reference must all be positive. Whether the
    /// category exists is left to the store's foreign key.
    fn validate(&self) -> Result<(), ServiceError> {
        check_positive_number(self.price, "price")?;
        check_positive_number(self.weight, "weight")?;
        check_positive_number(self.category_id, "category_id")
    }

    fn into_record(self) -> product::Model {
        product::Model {
            id: 0,
            name: self.name,
            price: self.price,
            weight: self.weight,
            description: self.description,
            category_id: self.category_id,
        }
    }

    fn apply_to(self, record: &mut product::Model) {
        record.name = self.name;
        record.price = self.price;
        record.weight = self.weight;
        record.description = self.description;
        record.category_id = self.category_id;
    }
}
