#[macro_use]
extern crate diesel;

mod appointments;
mod auth;
mod booking;
mod config;
mod database;
mod doctor;
mod models;
mod patient;
mod protocol;
mod schema;
mod utils;

use actix_files::{Files, NamedFile};
use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel::{r2d2::ConnectionManager, MysqlConnection};
use tracing_subscriber::EnvFilter;

type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = config::Config::from_env()?;
    let pool = database::build_pool(&config.database_url, config.pool_size)?;

    tracing::info!(bind = %config.bind_addr, "booking server starting");

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        let app = App::new()
            .wrap(Logger::default())
            .data(pool.clone())
            // sign-up, login, role lookup
            .service(web::scope("/auth").configure(auth::config))
            // patient
            .service(web::scope("/patient").configure(patient::config))
            // doctor
            .service(web::scope("/doctor").configure(doctor::config));

        // front-end bundle, unknown paths fall back to index.html
        match &static_dir {
            Some(dir) => {
                let index = format!("{}/index.html", dir);
                app.service(
                    Files::new("/", dir)
                        .index_file("index.html")
                        .default_handler(web::route().to(move || {
                            let index = index.clone();
                            async move { NamedFile::open(index) }
                        })),
                )
            }
            None => app,
        }
    })
    .bind(&config.bind_addr)?
    .run()
    .await?;

    Ok(())
}
