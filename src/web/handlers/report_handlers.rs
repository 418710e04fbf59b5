// src/web/handlers/report_handlers.rs

use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::instrument;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct DailyReportQuery {
  pub date: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct RangeReportQuery {
  pub start_date: String,
  pub end_date: String,
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
  NaiveDate::parse_from_str(raw, "%Y-%m-%d")
    .map_err(|_| AppError::InvalidInput(format!("invalid date '{}', expected YYYY-MM-DD", raw)))
}

#[instrument(name = "handler::daily_report", skip(app_state, query_params))]
pub async fn daily_report_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<DailyReportQuery>,
) -> Result<HttpResponse, AppError> {
  let date = match &query_params.date {
    Some(raw) => parse_date(raw)?,
    None => Utc::now().date_naive(),
  };
  let report = app_state.reports.for_day(date).await?;
  Ok(HttpResponse::Ok().json(report))
}

#[instrument(name = "handler::range_report", skip(app_state, query_params))]
pub async fn range_report_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<RangeReportQuery>,
) -> Result<HttpResponse, AppError> {
  let start = parse_date(&query_params.start_date)?;
  let end = parse_date(&query_params.end_date)?;
  let report = app_state.reports.for_range(start, end).await?;
  Ok(HttpResponse::Ok().json(report))
}
