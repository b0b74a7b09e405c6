use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{comment::CommentRepository, product::ProductRepository},
    error::AppError,
    model::product::{Comment, CreateCommentParams, CreateProductParams, PriceFilter, Product},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        let product = ProductRepository::new(self.db).create(params).await?;

        tracing::info!(product_id = %product.id, "Added product");

        Ok(product)
    }

    /// Gets every product ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        Ok(ProductRepository::new(self.db).get_all().await?)
    }

    /// Searches products by name substring. A blank query is rejected.
    pub async fn search(&self, name: &str) -> Result<Vec<Product>, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Invalid search index".to_string()));
        }

        Ok(ProductRepository::new(self.db).search_by_name(name).await?)
    }

    pub async fn filter_by_price(
        &self,
        price: i64,
        filter: PriceFilter,
    ) -> Result<Vec<Product>, AppError> {
        Ok(ProductRepository::new(self.db)
            .filter_by_price(price, filter)
            .await?)
    }

    /// Appends a comment to an existing product.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment
    /// - `Err(AppError::NotFound)` - No product with this id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn add_comment(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        self.require_product(params.product_id).await?;

        Ok(CommentRepository::new(self.db).create(params).await?)
    }

    async fn require_product(&self, product_id: Uuid) -> Result<(), AppError> {
        ProductRepository::new(self.db)
            .find_by_id(product_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Product not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that a blank search is refused before querying.
    ///
    /// Expected: BadRequest("Invalid search index")
    #[tokio::test]
    async fn rejects_blank_search() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = ProductService::new(db).search("  ").await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg == "Invalid search index"));

        Ok(())
    }

    /// Tests commenting on a missing and an existing product.
    ///
    /// Expected: NotFound for the missing product; the comment is listed on the existing one
    #[tokio::test]
    async fn adds_comment_to_existing_product() -> Result<(), AppError> {
        let test = TestBuilder::new().with_shop_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let product = factory::create_product(db).await?;
        let service = ProductService::new(db);

        let result = service
            .add_comment(CreateCommentParams {
                product_id: Uuid::new_v4(),
                comment: "Great".to_string(),
                rating: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        service
            .add_comment(CreateCommentParams {
                product_id: product.id,
                comment: "Great".to_string(),
                rating: Some(5),
            })
            .await?;

        let products = service.get_all().await?;
        assert_eq!(products[0].comments.len(), 1);

        Ok(())
    }
}
