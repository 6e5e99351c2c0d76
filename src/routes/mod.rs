use actix_files as fs;
use actix_web::{web, HttpResponse, Responder};
use log::warn;
use std::path::PathBuf;

use crate::models::AppState;
use crate::table::Snapshot;

/// JSON view of seats, board and outcome
pub async fn status(app_state: web::Data<AppState>) -> impl Responder {
    match app_state.table.send(Snapshot).await {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(e) => {
            warn!("Table did not answer status request: {}", e);
            HttpResponse::ServiceUnavailable().finish()
        }
    }
}

/// Configure the HTTP routes
pub fn configure_routes(cfg: &mut web::ServiceConfig, static_dir: Option<PathBuf>) {
    cfg.service(web::resource("/ws").route(web::get().to(crate::websocket::ws_index)))
        .service(web::resource("/status").route(web::get().to(status)));

    if let Some(dir) = static_dir {
        cfg.service(fs::Files::new("/", dir).index_file("index.html"));
    }
}
