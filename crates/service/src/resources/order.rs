use serde::{Deserialize, Serialize};

use models::order;

use crate::crud::Transfer;
use crate::errors::ServiceError;
use crate::store::Record;
use crate::validation::check_positive_number;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub customer_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl Record for order::Model {
    fn id(&self) -> i32 { self.id }
    fn set_id(&mut self, id: i32) { self.id = id; }
}

impl Transfer for OrderDto {
    type Record = order::Model;
    const KIND: &'static str = "order";

    fn validate(&self) -> Result<(), ServiceError> {
        check_positive_number(self.customer_id, "customer_id")?;
        check_positive_number(self.product_id, "product_id")?;
        check_positive_number(self.quantity, "quantity")
    }

    fn into_record(self) -> order::Model {
        order::Model {
            id: 0,
            customer_id: self.customer_id,
            product_id: self.product_id,
            quantity: self.quantity,
        }
    }

    fn apply_to(self, record: &mut order::Model) {
        record.customer_id = self.customer_id;
        record.product_id = self.product_id;
        record.quantity = self.quantity;
    }
}
