// tests/catalog_tests.rs
//
// CRUD behavior of the catalog services against a real database. These need
// a running PostgreSQL server (DATABASE_URL), so they are `#[ignore]`d by
// default; run them with `cargo test -- --ignored`.

mod common;

use kasir_pos::errors::AppError;
use kasir_pos::models::{CategoryInput, CheckoutItem, ProductInput, ProductUpdate};
use kasir_pos::services::{CategoryService, CheckoutService, ProductService};
use sqlx::PgPool;

fn category_input(name: &str, description: &str) -> CategoryInput {
  CategoryInput {
    name: name.to_string(),
    description: description.to_string(),
  }
}

fn product_input(name: &str, price: i64, stock: i32) -> ProductInput {
  ProductInput {
    name: name.to_string(),
    price,
    stock,
  }
}

fn product_update(name: &str, price: i64) -> ProductUpdate {
  ProductUpdate {
    name: name.to_string(),
    price,
  }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn create_then_fetch_category_round_trips(pool: PgPool) -> anyhow::Result<()> {
  let service = CategoryService::new(pool);

  let created = service
    .create(category_input("Beverages", "Cold and hot drinks"))
    .await?;
  let fetched = service.get(created.id).await?;

  assert_eq!(fetched.id, created.id);
  assert_eq!(fetched.name, "Beverages");
  assert_eq!(fetched.description, "Cold and hot drinks");
  Ok(())
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn list_categories_is_ordered_by_id(pool: PgPool) -> anyhow::Result<()> {
  let service = CategoryService::new(pool.clone());
  common::seed_category(&pool, "Snacks", "Shelf snacks").await?;
  common::seed_category(&pool, "Beverages", "Drinks").await?;

  let all = service.list().await?;

  assert_eq!(all.len(), 2);
  assert!(all[0].id < all[1].id);
  assert_eq!(all[0].name, "Snacks");
  assert_eq!(all[1].name, "Beverages");
  Ok(())
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn update_category_rewrites_every_field(pool: PgPool) -> anyhow::Result<()> {
  let service = CategoryService::new(pool.clone());
  let created = common::seed_category(&pool, "Snacks", "Shelf snacks").await?;

  let updated = service
    .update(created.id, category_input("Pantry", "Dry goods"))
    .await?;
  assert_eq!(updated.id, created.id);
  assert_eq!(updated.name, "Pantry");

  let fetched = service.get(created.id).await?;
  assert_eq!(fetched.name, "Pantry");
  assert_eq!(fetched.description, "Dry goods");
  Ok(())
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn update_missing_category_is_not_found(pool: PgPool) -> anyhow::Result<()> {
  let service = CategoryService::new(pool);

  let err = service
    .update(4040, category_input("Ghost", "No such row"))
    .await
    .unwrap_err();

  assert!(matches!(err, AppError::NotFound(_)));
  Ok(())
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn delete_category_then_fetch_is_not_found(pool: PgPool) -> anyhow::Result<()> {
  let service = CategoryService::new(pool.clone());
  let created = common::seed_category(&pool, "Seasonal", "Short-lived items").await?;

  service.delete(created.id).await?;

  let err = service.get(created.id).await.unwrap_err();
  assert!(matches!(err, AppError::NotFound(_)));

  // A second delete sees no row either.
  let err = service.delete(created.id).await.unwrap_err();
  assert!(matches!(err, AppError::NotFound(_)));
  Ok(())
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn create_then_fetch_product_round_trips(pool: PgPool) -> anyhow::Result<()> {
  let service = ProductService::new(pool);

  let created = service.create(product_input("Drip Coffee", 2500, 7)).await?;
  let fetched = service.get(created.id).await?;

  assert_eq!(fetched.id, created.id);
  assert_eq!(fetched.name, "Drip Coffee");
  assert_eq!(fetched.price, 2500);
  assert_eq!(fetched.stock, 7);
  Ok(())
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn update_product_rewrites_name_and_price_only(pool: PgPool) -> anyhow::Result<()> {
  let service = ProductService::new(pool.clone());
  let created = common::seed_product(&pool, "Drip Coffee", 2500, 3).await?;

  let updated = service
    .update(created.id, product_update("Pour Over", 2800))
    .await?;

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.name, "Pour Over");
  assert_eq!(updated.price, 2800);
  assert_eq!(updated.stock, 3);

  let fetched = service.get(created.id).await?;
  assert_eq!(fetched.name, "Pour Over");
  assert_eq!(fetched.stock, 3);
  Ok(())
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn update_product_preserves_stock_after_a_sale(pool: PgPool) -> anyhow::Result<()> {
  let products = ProductService::new(pool.clone());
  let checkout = CheckoutService::new(pool.clone());
  let created = common::seed_product(&pool, "Drip Coffee", 2500, 10).await?;

  checkout
    .checkout(&[CheckoutItem {
      product_id: created.id,
      quantity: 2,
    }])
    .await?;
  assert_eq!(common::product_stock(&pool, created.id).await?, 8);

  // A price edit drafted before the sale must not roll the level back.
  let updated = products
    .update(created.id, product_update("Drip Coffee", 2600))
    .await?;

  assert_eq!(updated.price, 2600);
  assert_eq!(updated.stock, 8);
  assert_eq!(common::product_stock(&pool, created.id).await?, 8);
  Ok(())
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn update_missing_product_is_not_found(pool: PgPool) -> anyhow::Result<()> {
  let service = ProductService::new(pool);

  let err = service
    .update(4040, product_update("Ghost", 100))
    .await
    .unwrap_err();

  assert!(matches!(err, AppError::NotFound(_)));
  Ok(())
}

#[sqlx::test(migrations = "./migrations")]
#[ignore]
async fn delete_missing_product_is_not_found(pool: PgPool) -> anyhow::Result<()> {
  let service = ProductService::new(pool);

  let err = service.delete(4040).await.unwrap_err();

  assert!(matches!(err, AppError::NotFound(_)));
  Ok(())
}
