use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::calendar;
use crate::core::error::AppError;
use crate::modules::processors::models::FieldMap;
use crate::modules::processors::services::ProcessorService;

/// Query parameters for the proration endpoint
#[derive(Debug, Deserialize)]
pub struct ProrationQuery {
    /// Evaluate as of this date instead of today
    pub on: Option<NaiveDate>,
}

/// List configured processors
/// GET /processors
pub async fn list_processors(
    service: web::Data<Arc<ProcessorService>>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_processors()))
}

/// Submit a checkout form for a transaction
/// POST /checkout/{transaction_id}
/// Responds with the auto-submitting redirect page
pub async fn checkout(
    service: web::Data<Arc<ProcessorService>>,
    path: web::Path<i64>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    let mut transaction = service.find_transaction(path.into_inner()).await?;
    let fields = FieldMap::from(form.into_inner());

    service.make_purchase_from_form(fields, &mut transaction).await
}

/// Submit a subscription change form
/// POST /subscriptions/change
pub async fn change_subscription(
    service: web::Data<Arc<ProcessorService>>,
    form: web::Form<HashMap<String, String>>,
) -> Result<HttpResponse, AppError> {
    service
        .change_subscription_from_form(FieldMap::from(form.into_inner()))
        .await
}

/// Remaining days and subscription readiness
/// GET /transactions/{id}/proration
pub async fn get_proration(
    service: web::Data<Arc<ProcessorService>>,
    path: web::Path<i64>,
    query: web::Query<ProrationQuery>,
) -> Result<HttpResponse, AppError> {
    let transaction = service.find_transaction(path.into_inner()).await?;
    let today = query.on.unwrap_or_else(calendar::today);

    let proration = service.proration_on(&transaction, today)?;
    Ok(HttpResponse::Ok().json(proration))
}

/// Configure processor routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/processors", web::get().to(list_processors))
        .route("/checkout/{transaction_id}", web::post().to(checkout))
        .route("/subscriptions/change", web::post().to(change_subscription))
        .route("/transactions/{id}/proration", web::get().to(get_proration));
}
