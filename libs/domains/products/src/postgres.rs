use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{normalize_price, Product, ProductPayload},
    repository::ProductRepository,
};

/// PostgreSQL implementation of [`ProductRepository`] over Sea-ORM.
///
/// Constructed from an explicit connection handle; there is no ambient
/// session state, so concurrent requests only share the pool.
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the `products` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> ProductResult<()> {
        database::postgres::ensure_table(&self.db, entity::Entity).await?;
        Ok(())
    }

    async fn select_ordered(
        &self,
        query: sea_orm::Select<entity::Entity>,
    ) -> ProductResult<Vec<Product>> {
        let models = query
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: ProductPayload) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: ProductPayload) -> ProductResult<Product> {
        let model = entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let mut active_model: entity::ActiveModel = model.into();
        active_model.name = Set(input.name);
        active_model.category = Set(input.category);
        active_model.available = Set(input.available);
        active_model.price = Set(normalize_price(input.price));

        let updated = active_model.update(&self.db).await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        self.select_ordered(entity::Entity::find()).await
    }

    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.select_ordered(
            entity::Entity::find().filter(entity::Column::Category.eq(category)),
        )
        .await
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        self.select_ordered(entity::Entity::find().filter(entity::Column::Name.eq(name)))
            .await
    }

    async fn find_by_availability(&self, available: bool) -> ProductResult<Vec<Product>> {
        self.select_ordered(
            entity::Entity::find().filter(entity::Column::Available.eq(available)),
        )
        .await
    }
}
