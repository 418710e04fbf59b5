// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn falls_back_to_default_host_and_port() {
    env::remove_var("SERVER_HOST");
    env::remove_var("SERVER_PORT");
    env::set_var("DATABASE_URL", "postgres://localhost/pos_test");

    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.server_host, "127.0.0.1");
    assert_eq!(cfg.server_port, 8080);
    assert_eq!(cfg.database_url, "postgres://localhost/pos_test");
  }

  #[test]
  #[serial]
  fn requires_database_url() {
    env::remove_var("DATABASE_URL");

    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
  }

  #[test]
  #[serial]
  fn rejects_non_numeric_port() {
    env::set_var("DATABASE_URL", "postgres://localhost/pos_test");
    env::set_var("SERVER_PORT", "eight-thousand");

    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, AppError::Config(_)));

    env::remove_var("SERVER_PORT");
  }
}
