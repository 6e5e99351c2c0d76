use actix::Actor;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use log::info;

use chess_table::config::Config;
use chess_table::models::AppState;
use chess_table::routes::configure_routes;
use chess_table::table::TableServer;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::parse();
    let (host, port) = config.bind_address();
    info!("Starting chess table at http://{}:{}", host, port);
    info!("Table policy: {:?}", config.table);

    // One table actor for the whole process
    let app_state = web::Data::new(AppState {
        table: TableServer::new(config.table).start(),
    });

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        let static_dir = static_dir.clone();
        App::new()
            .app_data(app_state.clone())
            .configure(move |cfg| configure_routes(cfg, static_dir))
    })
    .bind((host, port))?
    .run()
    .await
}
