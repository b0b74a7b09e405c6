//! Product data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Select,
};
use std::collections::HashMap;
use uuid::Uuid;

use crate::server::{
    model::product::{CreateProductParams, PriceFilter, Product},
    util::query::contains_pattern,
};

pub struct ProductRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new product with no comments.
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, DbErr> {
        let entity = entity::product::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            name: ActiveValue::Set(params.name),
            price: ActiveValue::Set(params.price),
            rating: ActiveValue::Set(params.rating),
            image: ActiveValue::Set(params.image),
        }
        .insert(self.db)
        .await?;

        Ok(Product::from_entity(entity, Vec::new()))
    }

    /// Finds the raw product row by id, without comments.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.db).await
    }

    /// Gets every product with its comments, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Product>, DbErr> {
        let query = entity::prelude::Product::find().order_by_asc(entity::product::Column::Name);

        self.with_comments(query).await
    }

    /// Gets products whose name contains `name` literally, ordered by name. ASCII letters
    /// match case-insensitively.
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<Product>, DbErr> {
        let query = entity::prelude::Product::find()
            .filter(entity::product::Column::Name.like(contains_pattern(name)))
            .order_by_asc(entity::product::Column::Name);

        self.with_comments(query).await
    }

    /// Gets products whose price compares to `price` by `filter`, ordered by price.
    pub async fn filter_by_price(
        &self,
        price: i64,
        filter: PriceFilter,
    ) -> Result<Vec<Product>, DbErr> {
        let column = entity::product::Column::Price;
        let condition = match filter {
            PriceFilter::Eq => column.eq(price),
            PriceFilter::Gte => column.gte(price),
            PriceFilter::Lte => column.lte(price),
        };

        let query = entity::prelude::Product::find()
            .filter(condition)
            .order_by_asc(entity::product::Column::Price)
            .order_by_asc(entity::product::Column::Name);

        self.with_comments(query).await
    }

    /// Runs `query` and attaches each product's comments in creation order.
    async fn with_comments(
        &self,
        query: Select<entity::prelude::Product>,
    ) -> Result<Vec<Product>, DbErr> {
        let products = query.all(self.db).await?;
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();
        let mut comments_by_product: HashMap<Uuid, Vec<entity::comment::Model>> = HashMap::new();
        for comment in entity::prelude::Comment::find()
            .filter(entity::comment::Column::ProductId.is_in(ids))
            .order_by_asc(entity::comment::Column::CreatedAt)
            .all(self.db)
            .await?
        {
            comments_by_product
                .entry(comment.product_id)
                .or_default()
                .push(comment);
        }

        Ok(products
            .into_iter()
            .map(|product| {
                let comments = comments_by_product.remove(&product.id).unwrap_or_default();
                Product::from_entity(product, comments)
            })
            .collect())
    }
}
