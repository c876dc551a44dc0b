use actix_web::{web, HttpResponse, Responder};

use crate::metrics::ScrapeMetrics;
use crate::state::AppState;

pub async fn get_metrics(data: web::Data<AppState>) -> impl Responder {
    let metrics = match ScrapeMetrics::new() {
        Ok(metrics) => metrics,
        Err(e) => {
            log::error!("Failed to register metrics: {}", e);
            return HttpResponse::InternalServerError().body("Failed to register metrics");
        }
    };

    let outcome = data.collect(&metrics).await;
    log::debug!("Scrape outcome: {:?}", outcome);

    // 渲染 Prometheus metrics
    match metrics.render() {
        Ok(metrics_text) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(metrics_text),
        Err(e) => {
            log::error!("Failed to render metrics: {}", e);
            HttpResponse::InternalServerError().body("Failed to render metrics")
        }
    }
}
