use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductFilter, ProductPayload};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products, honoring at most one filter.
    ///
    /// Precedence when several filters are supplied: `category`, then
    /// `name`, then `available` — the first non-empty one wins. An empty
    /// filter value is treated as absent, matching form-style query strings
    /// where `?category=` carries no value.
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
            return self.repository.find_by_category(category).await;
        }

        if let Some(name) = filter.name.as_deref().filter(|n| !n.is_empty()) {
            return self.repository.find_by_name(name).await;
        }

        if let Some(available) = filter.available {
            return self.repository.find_by_availability(available).await;
        }

        self.repository.find_all().await
    }

    /// Get a product by id
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    pub async fn create_product(&self, input: ProductPayload) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(format!("Invalid product: {}", e)))?;

        self.repository.create(input).await
    }

    /// Replace the business fields of an existing product
    pub async fn update_product(&self, id: i32, input: ProductPayload) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(format!("Invalid product: {}", e)))?;

        self.repository.update(id, input).await
    }

    /// Delete a product.
    ///
    /// A missing record is the already-achieved end state, not an error.
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        self.repository.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    fn chair() -> ProductPayload {
        ProductPayload::from_json(
            br#"{"name": "Chair", "category": "Furniture", "available": true, "price": 49.99}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_list_without_filters_returns_all() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_all().returning(|| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        let products = service.list_products(ProductFilter::default()).await.unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_category_filter_wins_over_name() {
        let mut mock_repo = MockProductRepository::new();
        // Only the category lookup may be called
        mock_repo
            .expect_find_by_category()
            .with(eq("Furniture"))
            .returning(|_| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        let filter = ProductFilter {
            category: Some("Furniture".to_string()),
            name: Some("Chair".to_string()),
            available: Some(true),
        };

        service.list_products(filter).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_category_falls_through_to_name() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_name()
            .with(eq("Chair"))
            .returning(|_| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        let filter = ProductFilter {
            category: Some(String::new()),
            name: Some("Chair".to_string()),
            available: None,
        };

        service.list_products(filter).await.unwrap();
    }

    #[tokio::test]
    async fn test_availability_filter_is_used_last() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_availability()
            .with(eq(false))
            .returning(|_| Ok(vec![]));

        let service = ProductService::new(mock_repo);
        let filter = ProductFilter {
            category: None,
            name: None,
            available: Some(false),
        };

        service.list_products(filter).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_product(42).await;

        assert!(matches!(result, Err(ProductError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_payload_before_storage() {
        // No expectations set: any repository call would panic the test
        let mock_repo = MockProductRepository::new();
        let service = ProductService::new(mock_repo);

        let mut payload = chair();
        payload.price = Decimal::from(-1);

        let result = service.create_product(payload).await;
        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_record_is_ok() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().with(eq(7)).returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        assert!(service.delete_product(7).await.is_ok());
    }

    #[tokio::test]
    async fn test_storage_error_propagates() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_all()
            .returning(|| Err(ProductError::Storage("connection refused".to_string())));

        let service = ProductService::new(mock_repo);
        let result = service.list_products(ProductFilter::default()).await;

        assert!(matches!(result, Err(ProductError::Storage(_))));
    }
}
