use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductPayload};

/// Repository trait for Product persistence.
///
/// The repository is the single point of truth for identity assignment:
/// `create` hands out ids, and nothing else ever changes them. Empty query
/// results are success; only backend failures are errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product, assigning it a fresh unique id
    async fn create(&self, input: ProductPayload) -> ProductResult<Product>;

    /// Overwrite the business fields of an existing product.
    /// Fails with `NotFound` when the id is absent; never changes the id.
    async fn update(&self, id: i32, input: ProductPayload) -> ProductResult<Product>;

    /// Remove a product; returns whether a record was removed.
    /// Removing an absent id is not an error.
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    /// Exact single-record lookup
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Every persisted product, ordered by id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Equality filter on `category`
    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>>;

    /// Equality filter on `name`
    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>>;

    /// Equality filter on `available`
    async fn find_by_availability(&self, available: bool) -> ProductResult<Vec<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

#[derive(Debug, Default)]
struct Store {
    products: HashMap<i32, Product>,
    next_id: i32,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut products: Vec<Product>) -> Vec<Product> {
        products.sort_by_key(|p| p.id);
        products
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductPayload) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.next_id += 1;
        let id = store.next_id;

        let mut product = Product::new(input);
        product.id = Some(id);
        store.products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: i32, input: ProductPayload) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let product = store
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;
        product.apply(input);
        let updated = product.clone();

        tracing::info!(product_id = id, "Updated product");
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(Self::sorted(store.products.values().cloned().collect()))
    }

    async fn find_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(Self::sorted(
            store
                .products
                .values()
                .filter(|p| p.category == category)
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_name(&self, name: &str) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(Self::sorted(
            store
                .products
                .values()
                .filter(|p| p.name == name)
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_availability(&self, available: bool) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(Self::sorted(
            store
                .products
                .values()
                .filter(|p| p.available == available)
                .cloned()
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chair() -> ProductPayload {
        ProductPayload::from_json(
            br#"{"name": "Chair", "category": "Furniture", "available": true, "price": 49.99}"#,
        )
        .unwrap()
    }

    fn television() -> ProductPayload {
        ProductPayload::from_json(
            br#"{"name": "Television", "category": "Electronics", "available": false, "price": 300}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(chair()).await.unwrap();
        let second = repo.create(television()).await.unwrap();

        assert!(first.id.is_some());
        assert!(second.id.is_some());
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_create_then_find_by_id() {
        let repo = InMemoryProductRepository::new();

        let created = repo.create(chair()).await.unwrap();
        let id = created.id.unwrap();

        let fetched = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.find_by_id(999_999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_overwrites_fields() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(chair()).await.unwrap();
        let id = created.id.unwrap();

        let updated = repo.update(id, television()).await.unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, "Television");
        assert_eq!(updated.category, "Electronics");
        assert!(!updated.available);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let result = repo.update(42, chair()).await;
        assert!(matches!(result, Err(ProductError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryProductRepository::new();
        let id = repo.create(chair()).await.unwrap().id.unwrap();

        assert!(repo.delete(id).await.unwrap());
        // A second delete reports nothing removed, but is not an error
        assert!(!repo.delete(id).await.unwrap());
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = InMemoryProductRepository::new();
        repo.create(chair()).await.unwrap();
        repo.create(television()).await.unwrap();
        repo.create(chair()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 3);
        let ids: Vec<_> = all.iter().map(|p| p.id.unwrap()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn test_find_by_category_matches_exactly() {
        let repo = InMemoryProductRepository::new();
        repo.create(chair()).await.unwrap();
        repo.create(television()).await.unwrap();

        let furniture = repo.find_by_category("Furniture").await.unwrap();
        assert_eq!(furniture.len(), 1);
        assert_eq!(furniture[0].name, "Chair");

        // Unknown and empty-string categories are empty results, not errors
        assert!(repo.find_by_category("Toys").await.unwrap().is_empty());
        assert!(repo.find_by_category("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_name_and_availability() {
        let repo = InMemoryProductRepository::new();
        repo.create(chair()).await.unwrap();
        repo.create(television()).await.unwrap();

        let by_name = repo.find_by_name("Television").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].category, "Electronics");

        let available = repo.find_by_availability(true).await.unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].name, "Chair");
    }
}
