use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::models::{normalize_price, Product, ProductPayload};

/// Sea-ORM entity for the `products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: String,
    pub available: bool,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to the domain Product
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            category: model.category,
            available: model.available,
            price: normalize_price(model.price),
        }
    }
}

// Conversion from a request payload to an insertable ActiveModel;
// the id stays unset so the database assigns it
impl From<ProductPayload> for ActiveModel {
    fn from(input: ProductPayload) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            category: Set(input.category),
            available: Set(input.available),
            price: Set(normalize_price(input.price)),
        }
    }
}
