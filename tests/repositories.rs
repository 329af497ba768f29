use product_costs_api::{
    domain::product::{NewProduct, NewPurchase},
    infrastructure::{
        ProductRepository, PurchaseRepository,
        in_memory_product_repository::InMemoryProductRepository,
        in_memory_purchase_repository::InMemoryPurchaseRepository,
    },
};
use rust_decimal::Decimal;

fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price: Decimal::new(350, 2),
        quantity: 4,
    }
}

#[tokio::test]
async fn find_by_id_returns_the_matching_product() {
    let repository = InMemoryProductRepository::new();
    let beer = repository.create(new_product("Beer")).await.unwrap();
    let wine = repository.create(new_product("Wine")).await.unwrap();

    let found = repository.find_by_id(beer.id).await.unwrap();
    let found = found.expect("beer should be present");
    assert_eq!(found.id, beer.id);
    assert_eq!(found.name, "Beer");

    let found = repository.find_by_id(wine.id).await.unwrap();
    assert_eq!(found.expect("wine should be present").name, "Wine");
}

#[tokio::test]
async fn find_by_id_on_an_empty_store_is_not_found_not_an_error() {
    let repository = InMemoryProductRepository::new();

    let found = repository.find_by_id(999).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn list_all_products_follows_store_iteration_order() {
    let repository = InMemoryProductRepository::new();
    repository.create(new_product("Beer")).await.unwrap();
    repository.create(new_product("Wine")).await.unwrap();
    repository.create(new_product("Water")).await.unwrap();

    let products = repository.list_all().await.unwrap();

    assert_eq!(products.len(), 3);
    let names = products.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Beer", "Wine", "Water"]);
}

#[tokio::test]
async fn create_product_rejects_negative_quantity() {
    let repository = InMemoryProductRepository::new();

    let result = repository
        .create(NewProduct {
            name: "Beer".to_string(),
            price: Decimal::new(350, 2),
            quantity: -1,
        })
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn purchase_list_length_matches_row_count() {
    let repository = InMemoryPurchaseRepository::new();
    assert!(repository.list_all().await.unwrap().is_empty());

    for i in 0..3 {
        repository
            .create(NewPurchase {
                price: Decimal::new(500 + i, 2),
                product: 1,
            })
            .await
            .unwrap();
    }

    let purchases = repository.list_all().await.unwrap();
    assert_eq!(purchases.len(), 3);
}

#[tokio::test]
async fn purchase_ids_are_assigned_by_the_store() {
    let repository = InMemoryPurchaseRepository::new();

    let first = repository
        .create(NewPurchase {
            price: Decimal::new(500, 2),
            product: 1,
        })
        .await
        .unwrap();
    let second = repository
        .create(NewPurchase {
            price: Decimal::new(600, 2),
            product: 1,
        })
        .await
        .unwrap();

    assert!(second.id > first.id);
}
