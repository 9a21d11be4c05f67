use actix_web::{
    self, App, HttpServer,
    middleware::{Logger, from_fn},
    web,
};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::{RedisCache, connect_database},
    middlewares::authentication,
    modules::{
        block::{repository_pg::BlockRepositoryPg, service::BlockService},
        conversation::{repository_pg::ConversationRepositoryPg, service::ConversationService},
        discovery::{repository_pg::DiscoveryRepositoryPg, service::DiscoveryService},
        location::{repository_pg::LocationRepositoryPg, service::LocationService},
        message::{repository_pg::MessageRepositoryPg, service::MessageService},
        notification,
        premium::repository_pg::PremiumProviderPg,
        profile::repository_pg::ProfileRepositoryPg,
    },
};

mod api;
mod configs;
mod constants;
mod middlewares;
mod modules;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    let redis_cache =
        RedisCache::new().await.map_err(|_| std::io::Error::other("Redis connection error"))?;

    let message_repo = Arc::new(MessageRepositoryPg::new(db_pool.clone()));
    let block_repo = Arc::new(BlockRepositoryPg::new(db_pool.clone()));
    let profile_repo = Arc::new(ProfileRepositoryPg::new(db_pool.clone()));
    let premium = Arc::new(PremiumProviderPg::new(db_pool.clone()));
    let location_repo = Arc::new(LocationRepositoryPg::new(db_pool.clone()));
    let conversation_repo = Arc::new(ConversationRepositoryPg::new(db_pool.clone()));
    let discovery_repo = Arc::new(DiscoveryRepositoryPg::new(db_pool.clone()));

    let (notifier, notifications) = notification::channel();
    actix_web::rt::spawn(notification::run_worker(notifications));

    let message_service = MessageService::with_dependencies(
        message_repo.clone(),
        block_repo.clone(),
        profile_repo,
        premium.clone(),
        notifier,
        ENV.daily_free_message_limit,
    );
    let conversation_service =
        ConversationService::with_dependencies(conversation_repo, message_repo);
    let block_service = BlockService::with_dependencies(block_repo.clone());
    let location_service = LocationService::with_dependencies(location_repo.clone());
    let discovery_service = DiscoveryService::with_dependencies(
        discovery_repo,
        block_repo,
        premium,
        location_repo,
        ENV.default_search_radius_km,
    )
    .with_cache(redis_cache);

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                actix_cors::Cors::default()
                    .allowed_origin(ENV.frontend_url.as_str())
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials(),
            )
            .app_data(web::Data::new(message_service.clone()))
            .app_data(web::Data::new(conversation_service.clone()))
            .app_data(web::Data::new(block_service.clone()))
            .app_data(web::Data::new(location_service.clone()))
            .app_data(web::Data::new(discovery_service.clone()))
            .app_data(web::Data::new(db_pool.clone()))
            .service(health_check)
            .service(
                web::scope("/api")
                    .wrap(from_fn(authentication))
                    .configure(modules::message::route::configure)
                    .configure(modules::conversation::route::configure)
                    .configure(modules::block::route::configure)
                    .configure(modules::location::route::configure)
                    .configure(modules::discovery::route::configure),
            )
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
