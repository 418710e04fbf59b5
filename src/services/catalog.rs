// src/services/catalog.rs

//! Plain CRUD over the catalog tables. The historical `nama` column backs
//! `Category::name`, so every category query carries the alias.

use sqlx::PgPool;

use crate::errors::{AppError, Result};
use crate::models::{Category, CategoryInput, Product, ProductInput, ProductUpdate};

#[derive(Clone)]
pub struct CategoryService {
  pool: PgPool,
}

impl CategoryService {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn list(&self) -> Result<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
      "SELECT id, nama AS name, description FROM categories ORDER BY id",
    )
    .fetch_all(&self.pool)
    .await?;
    Ok(categories)
  }

  pub async fn get(&self, id: i32) -> Result<Category> {
    sqlx::query_as::<_, Category>(
      "SELECT id, nama AS name, description FROM categories WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("category with id {} not found", id)))
  }

  pub async fn create(&self, input: CategoryInput) -> Result<Category> {
    let category = sqlx::query_as::<_, Category>(
      "INSERT INTO categories (nama, description) VALUES ($1, $2) \
       RETURNING id, nama AS name, description",
    )
    .bind(&input.name)
    .bind(&input.description)
    .fetch_one(&self.pool)
    .await?;
    Ok(category)
  }

  /// Full update. A missing row is detected from the write itself (zero rows
  /// affected), never from a prior read.
  pub async fn update(&self, id: i32, input: CategoryInput) -> Result<Category> {
    let result = sqlx::query("UPDATE categories SET nama = $1, description = $2 WHERE id = $3")
      .bind(&input.name)
      .bind(&input.description)
      .bind(id)
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      return Err(AppError::NotFound(format!("category with id {} not found", id)));
    }

    Ok(Category {
      id,
      name: input.name,
      description: input.description,
    })
  }

  pub async fn delete(&self, id: i32) -> Result<()> {
    let result = sqlx::query("DELETE FROM categories WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      return Err(AppError::NotFound(format!("category with id {} not found", id)));
    }

    Ok(())
  }
}

#[derive(Clone)]
pub struct ProductService {
  pool: PgPool,
}

impl ProductService {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn list(&self) -> Result<Vec<Product>> {
    let products =
      sqlx::query_as::<_, Product>("SELECT id, name, price, stock FROM products ORDER BY id")
        .fetch_all(&self.pool)
        .await?;
    Ok(products)
  }

  pub async fn get(&self, id: i32) -> Result<Product> {
    sqlx::query_as::<_, Product>("SELECT id, name, price, stock FROM products WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?
      .ok_or_else(|| AppError::NotFound(format!("product with id {} not found", id)))
  }

  pub async fn create(&self, input: ProductInput) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
      "INSERT INTO products (name, price, stock) VALUES ($1, $2, $3) \
       RETURNING id, name, price, stock",
    )
    .bind(&input.name)
    .bind(input.price)
    .bind(input.stock)
    .fetch_one(&self.pool)
    .await?;
    Ok(product)
  }

  /// Rewrites name and price. Stock is not part of the update surface (the
  /// checkout engine owns it once the row exists), so the current level is
  /// read back with `RETURNING`. A missing row still surfaces from the write
  /// itself, as an empty result, never from a prior read.
  pub async fn update(&self, id: i32, input: ProductUpdate) -> Result<Product> {
    sqlx::query_as::<_, Product>(
      "UPDATE products SET name = $1, price = $2 WHERE id = $3 \
       RETURNING id, name, price, stock",
    )
    .bind(&input.name)
    .bind(input.price)
    .bind(id)
    .fetch_optional(&self.pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("product with id {} not found", id)))
  }

  pub async fn delete(&self, id: i32) -> Result<()> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;

    if result.rows_affected() == 0 {
      return Err(AppError::NotFound(format!("product with id {} not found", id)));
    }

    Ok(())
  }
}
