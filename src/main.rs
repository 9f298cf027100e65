use std::io;

use actix_web::cookie::Key;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_flash_messages::storage::CookieMessageStore;
use config::{Config, Environment, File};
use tera::Tera;

use hall_booking::db::{establish_connection_pool, run_migrations};
use hall_booking::models::config::ServerConfig;
use hall_booking::repository::DieselRepository;
use hall_booking::routes::api::{api_v1_availability, api_v1_bookings};
use hall_booking::routes::bookings::{
    book_hall, cancel_booking, check_availability, show_availability_form, show_book_form,
    show_bookings, show_cancel_form, show_update_form, update_booking,
};
use hall_booking::routes::main::index;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name("config/local").required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}

fn signing_key(secret: &str) -> Key {
    if secret.is_empty() {
        log::warn!("No secret configured, flash messages use a random key");
        return Key::generate();
    }
    Key::try_from(secret.as_bytes()).unwrap_or_else(|e| {
        log::warn!("Configured secret is unusable ({e}), flash messages use a random key");
        Key::generate()
    })
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = load_config().map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        io::Error::other(e)
    })?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        log::error!("Failed to open database '{}': {e}", server_config.database_url);
        io::Error::other(e)
    })?;
    run_migrations(&pool).map_err(|e| {
        log::error!("Failed to migrate database: {e}");
        io::Error::other(e)
    })?;

    let tera = Tera::new(&server_config.templates_dir).map_err(|e| {
        log::error!("Failed to load templates: {e}");
        io::Error::other(e)
    })?;

    let message_store = CookieMessageStore::builder(signing_key(&server_config.secret)).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let repo = DieselRepository::new(pool);
    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Starting server at {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(web::scope("/api").service(api_v1_bookings).service(api_v1_availability))
            .service(index)
            .service(show_bookings)
            .service(show_book_form)
            .service(book_hall)
            .service(show_cancel_form)
            .service(cancel_booking)
            .service(show_update_form)
            .service(update_booking)
            .service(show_availability_form)
            .service(check_availability)
    })
    .bind(bind_address)?
    .run()
    .await
}
