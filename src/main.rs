mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod utils;

use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::io;
use crate::config::AppConfig;

fn startup_error<E: std::fmt::Display>(context: &str, err: E) -> io::Error {
    log::error!("{}: {}", context, err);
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(|err| startup_error("Invalid configuration", err))?;

    // Initialize the database pool and make sure the table exists
    let pool = db::create_pool(&config)
        .await
        .map_err(|err| startup_error("Failed to connect to the database", err))?;
    db::init_schema(&pool)
        .await
        .map_err(|err| startup_error("Failed to create the employees table", err))?;

    info!("Starting server at {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
