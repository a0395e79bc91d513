//! Product service - validation and search for products.

use tracing::info;

use domain::{CreateProduct, DomainError, DomainResult, Page, Product, SearchProductsQuery};

use crate::repository::{paginate, sort_products, MemoryStore, ProductSearch};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Product operations shared by the gRPC and REST adapters.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ProductService: Send + Sync {
    /// Create a product with a fresh id
    fn create_product(&self, input: CreateProduct) -> DomainResult<Product>;

    /// Get a live product by id
    fn get_product(&self, id: &str) -> DomainResult<Product>;

    /// Search products by text, category and price range, ordered by name
    fn search_products(&self, query: SearchProductsQuery) -> DomainResult<Page<Product>>;
}

/// In-memory implementation of [`ProductService`].
#[derive(Debug, Default)]
pub struct ProductManager {
    store: MemoryStore<Product>,
}

impl ProductManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductService for ProductManager {
    fn create_product(&self, input: CreateProduct) -> DomainResult<Product> {
        validate(&input)?;

        let product = self.store.insert(Product::new(input))?;
        info!(product_id = %product.id, name = %product.name, "Product created");
        Ok(product)
    }

    fn get_product(&self, id: &str) -> DomainResult<Product> {
        self.store.get(id)
    }

    fn search_products(&self, query: SearchProductsQuery) -> DomainResult<Page<Product>> {
        let search = ProductSearch::new(&query);
        let mut products = self.store.select(|product| search.matches(product))?;

        sort_products(&mut products);
        Ok(paginate(products, query.page, query.page_size))
    }
}

fn validate(input: &CreateProduct) -> DomainResult<()> {
    if input.name.is_empty() || input.description.is_empty() || input.category.is_empty() {
        return Err(DomainError::validation(
            "fields",
            "name, description, and category are required",
        ));
    }
    if input.price.is_nan() || input.price < 0.0 {
        return Err(DomainError::validation("price", "price must be non-negative"));
    }
    if input.quantity < 0 {
        return Err(DomainError::validation(
            "quantity",
            "quantity must be non-negative",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, price: f64, quantity: i32) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: "desc".to_string(),
            price,
            quantity,
            category: "Tools".to_string(),
        }
    }

    fn field_of(result: DomainResult<Product>) -> String {
        match result {
            Err(DomainError::ValidationFailed { field, .. }) => field,
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[test]
    fn test_create_product_validates_numbers() {
        let manager = ProductManager::new();

        assert_eq!(field_of(manager.create_product(input("a", -0.01, 1))), "price");
        assert_eq!(field_of(manager.create_product(input("a", f64::NAN, 1))), "price");
        assert_eq!(field_of(manager.create_product(input("a", 1.0, -1))), "quantity");
        assert_eq!(field_of(manager.create_product(input("", 1.0, 1))), "fields");
    }

    #[test]
    fn test_zero_price_and_quantity_are_allowed() {
        let manager = ProductManager::new();
        let product = manager.create_product(input("free", 0.0, 0)).unwrap();
        assert_eq!(product.id, "1");
    }

    #[test]
    fn test_search_orders_by_name() {
        let manager = ProductManager::new();
        for name in ["pear", "apple", "fig"] {
            manager.create_product(input(name, 1.0, 1)).unwrap();
        }

        let page = manager.search_products(SearchProductsQuery::default()).unwrap();
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "fig", "pear"]);
    }
}
