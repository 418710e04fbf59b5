// src/web/routes.rs

use actix_web::web;

/// Liveness probe. Does not touch the database: a saturated pool must not
/// make the process look dead.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Maps a failed extractor (malformed JSON body, non-numeric path id,
/// missing query parameter) onto the application error type, so rejected
/// requests get the same JSON error shape as everything else.
fn invalid_input(err: impl std::fmt::Display) -> actix_web::Error {
  crate::errors::AppError::InvalidInput(err.to_string()).into()
}

/// Catches PUT/DELETE aimed at a bare collection path. Those verbs need an
/// id segment, and without this route they would fall through to a plain
/// non-JSON 404.
async fn missing_id_handler() -> Result<actix_web::HttpResponse, crate::errors::AppError> {
  Err(crate::errors::AppError::InvalidInput(
    "update and delete require an id in the path".to_string(),
  ))
}

// This function is called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(|err, _req| invalid_input(err)))
    .app_data(web::PathConfig::default().error_handler(|err, _req| invalid_input(err)))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| invalid_input(err)))
    .service(
      web::scope("/api")
        // Health Check Route
        .route("/health", web::get().to(health_check_handler))
        // Category Routes
        .service(
          web::scope("/categories")
            .route(
              "",
              web::get().to(crate::web::handlers::category_handlers::list_categories_handler),
            )
            .route(
              "",
              web::post().to(crate::web::handlers::category_handlers::create_category_handler),
            )
            .route("", web::put().to(missing_id_handler))
            .route("", web::delete().to(missing_id_handler))
            .route(
              "/{id}",
              web::get().to(crate::web::handlers::category_handlers::get_category_handler),
            )
            .route(
              "/{id}",
              web::put().to(crate::web::handlers::category_handlers::update_category_handler),
            )
            .route(
              "/{id}",
              web::delete().to(crate::web::handlers::category_handlers::delete_category_handler),
            ),
        )
        // Product Routes
        .service(
          web::scope("/products")
            .route(
              "",
              web::get().to(crate::web::handlers::product_handlers::list_products_handler),
            )
            .route(
              "",
              web::post().to(crate::web::handlers::product_handlers::create_product_handler),
            )
            .route("", web::put().to(missing_id_handler))
            .route("", web::delete().to(missing_id_handler))
            .route(
              "/{id}",
              web::get().to(crate::web::handlers::product_handlers::get_product_handler),
            )
            .route(
              "/{id}",
              web::put().to(crate::web::handlers::product_handlers::update_product_handler),
            )
            .route(
              "/{id}",
              web::delete().to(crate::web::handlers::product_handlers::delete_product_handler),
            ),
        )
        // Checkout Route
        .service(web::scope("/checkout").route(
          "",
          web::post().to(crate::web::handlers::checkout_handlers::checkout_handler),
        ))
        // Report Routes
        .service(
          web::scope("/reports")
            .route(
              "/daily",
              web::get().to(crate::web::handlers::report_handlers::daily_report_handler),
            )
            .route(
              "/range",
              web::get().to(crate::web::handlers::report_handlers::range_report_handler),
            ),
        ),
    );
}
