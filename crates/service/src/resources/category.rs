use serde::{Deserialize, Serialize};

use models::category;

use crate::crud::Transfer;
use crate::errors::ServiceError;
use crate::store::Record;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: String,
}

impl Record for category::Model {
    fn id(&self) -> i32 { self.id }
    fn set_id(&mut self, id: i32) { self.id = id; }
}

impl Transfer for CategoryDto {
    type Record = category::Model;
    const KIND: &'static str = "category";

    // No numeric fields to check.
    fn validate(&self) -> Result<(), ServiceError> {
        Ok(())
    }

    fn into_record(self) -> category::Model {
        category::Model { id: 0, name: self.name }
    }

    fn apply_to(self, record: &mut category::Model) {
        record.name = self.name;
    }
}
