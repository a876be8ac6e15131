//! Advertisement entity model.

use annos_core::patch::{AdvertField, FieldValue, Patchable};
use annos_core::types::{DbId, Price, Timestamp};
use sqlx::FromRow;

/// A row from the `advertisements` table.
///
/// `id` is assigned by the store; a freshly constructed record that has not
/// been saved yet carries `0`.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Advertisement {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub date_added: Timestamp,
}

impl Patchable for Advertisement {
    fn field_value(&self, field: AdvertField) -> FieldValue {
        match field {
            AdvertField::Name => FieldValue::Name(self.name.clone()),
            AdvertField::Description => FieldValue::Description(self.description.clone()),
            AdvertField::Price => FieldValue::Price(self.price),
            AdvertField::DateAdded => FieldValue::DateAdded(self.date_added),
        }
    }

    fn set_field(&mut self, value: FieldValue) {
        match value {
            FieldValue::Name(name) => self.name = name,
            FieldValue::Description(description) => self.description = description,
            FieldValue::Price(price) => self.price = price,
            FieldValue::DateAdded(date_added) => self.date_added = date_added,
        }
    }
}
