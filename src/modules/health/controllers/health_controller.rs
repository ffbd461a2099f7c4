use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::processors::ProcessorService;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub processors: Vec<String>,
}

/// GET /health - Liveness probe
/// Returns 200 while the application can respond, with the processors it can route to
pub async fn health_check(service: web::Data<Arc<ProcessorService>>) -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: "payee".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        processors: service
            .list_processors()
            .into_iter()
            .map(|p| p.name)
            .collect(),
    };

    HttpResponse::Ok().json(response)
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
