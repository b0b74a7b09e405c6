//! Product factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test products with customizable fields.
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    price: i64,
    rating: Option<i32>,
    image: Option<String>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`
    /// - price: `10`
    /// - rating: `None`
    /// - image: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Product {}", id),
            price: 10,
            rating: None,
            image: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Builds and inserts the product entity into the database.
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(self.name),
            price: ActiveValue::Set(self.price),
            rating: ActiveValue::Set(self.rating),
            image: ActiveValue::Set(self.image),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}
