//! Product service behaviour against the in-memory store.

use domain::{CreateProduct, DomainError, Product, SearchProductsQuery};
use registry_service_lib::service::{ProductManager, ProductService};

fn create(manager: &ProductManager, name: &str, category: &str, price: f64) -> Product {
    manager
        .create_product(CreateProduct {
            name: name.to_string(),
            description: format!("{} description", name),
            price,
            quantity: 5,
            category: category.to_string(),
        })
        .unwrap()
}

/// Five products priced 10..30 with only the second and third in Electronics.
fn seeded() -> ProductManager {
    let manager = ProductManager::new();
    create(&manager, "Product 1", "Books", 10.0);
    create(&manager, "Product 2", "Electronics", 15.0);
    create(&manager, "Product 3", "Electronics", 20.0);
    create(&manager, "Product 4", "Books", 25.0);
    create(&manager, "Product 5", "Garden", 30.0);
    manager
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_create_and_get_product() {
    let manager = ProductManager::new();
    let created = create(&manager, "Lamp", "Home", 12.5);

    let fetched = manager.get_product(&created.id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.quantity, 5);
}

#[test]
fn test_get_missing_product() {
    let manager = ProductManager::new();
    match manager.get_product("7") {
        Err(DomainError::NotFound { resource, id }) => {
            assert_eq!(resource, "product");
            assert_eq!(id, "7");
        }
        other => panic!("expected not found, got {:?}", other),
    }
}

#[test]
fn test_rejected_product_is_not_stored() {
    let manager = ProductManager::new();
    let result = manager.create_product(CreateProduct {
        name: "Broken".to_string(),
        description: "negative".to_string(),
        price: -1.0,
        quantity: 1,
        category: "Tools".to_string(),
    });

    assert!(matches!(result, Err(DomainError::ValidationFailed { .. })));
    let page = manager.search_products(SearchProductsQuery::default()).unwrap();
    assert_eq!(page.total, 0);
}

#[test]
fn test_search_category_and_price_range() {
    let page = seeded()
        .search_products(SearchProductsQuery {
            category: Some("Electronics".to_string()),
            min_price: Some(15.0),
            max_price: Some(25.0),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(names(&page.items), vec!["Product 2", "Product 3"]);
    assert_eq!(page.total, 2);
}

#[test]
fn test_search_price_range_is_inclusive() {
    let page = seeded()
        .search_products(SearchProductsQuery {
            min_price: Some(15.0),
            max_price: Some(25.0),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(names(&page.items), vec!["Product 2", "Product 3", "Product 4"]);
}

#[test]
fn test_search_category_ignores_case() {
    let page = seeded()
        .search_products(SearchProductsQuery {
            category: Some("eLeCtRoNiCs".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(page.total, 2);
}

#[test]
fn test_search_unknown_category_is_empty() {
    let page = seeded()
        .search_products(SearchProductsQuery {
            category: Some("Toys".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
}

#[test]
fn test_search_query_matches_name_or_description() {
    let manager = ProductManager::new();
    create(&manager, "Desk Lamp", "Home", 20.0);
    manager
        .create_product(CreateProduct {
            name: "Bulb".to_string(),
            description: "Fits any LAMP".to_string(),
            price: 2.0,
            quantity: 10,
            category: "Home".to_string(),
        })
        .unwrap();
    create(&manager, "Chair", "Home", 40.0);

    let page = manager
        .search_products(SearchProductsQuery {
            query: Some("lamp".to_string()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(names(&page.items), vec!["Bulb", "Desk Lamp"]);
}

#[test]
fn test_search_paginates_after_sorting() {
    let page = seeded()
        .search_products(SearchProductsQuery {
            page: 2,
            page_size: 2,
            ..Default::default()
        })
        .unwrap();

    assert_eq!(names(&page.items), vec!["Product 3", "Product 4"]);
    assert_eq!((page.total, page.page, page.page_size), (5, 2, 2));
}
