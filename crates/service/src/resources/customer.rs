use serde::{Deserialize, Serialize};

use models::customer;

use crate::crud::Transfer;
use crate::errors::ServiceError;
use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub name: String,
}

impl Record for customer::Model {
    fn id(&self) -> i32 { self.id }
    fn set_id(&mut self, id: i32) { self.id = id; }
}

impl Transfer for CustomerDto {
    type Record = customer::Model;
    const KIND: &'static str = "customer";

    fn validate(&self) -> Result<(), ServiceError> {
        Ok(())
    }

    fn into_record(self) -> customer::Model {
        customer::Model { id: 0, name: self.name }
    }

    fn apply_to(self, record: &mut customer::Model) {
        record.name = self.name;
    }
}
