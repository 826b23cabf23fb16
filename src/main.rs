use actix_web::{get, middleware::Logger, web, App, HttpServer, Responder};
use pet_clinic::{
    api::state::AppState,
    bootstrap::load_sample_data,
    infrastructure::database::mongo_context::MongoContext,
    routes::{owner_routes, speciality_routes, visit_routes},
    utils::config::{AppConfig, Persistence},
};

#[get("/")]
async fn entry_point() -> impl Responder {
    "This is the Pet Clinic API. Use /owners/find to search for owners."
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::global();

    let state = match (config.persistence, config.database_url.as_deref()) {
        (Persistence::Mongo, Some(url)) => match MongoContext::init(url, &config.database_name).await {
            Ok(context) => {
                log::info!("Using MongoDB database {}", context.database_name());
                AppState::with_mongo(&context)
            },
            Err(e) => {
                log::error!("Failed to connect to MongoDB: {}", e);
                std::process::exit(1);
            }
        },
        _ => {
            log::info!("Using in-memory persistence");
            AppState::in_memory()
        }
    };

    if let Err(e) = load_sample_data(&state).await {
        log::error!("Failed to load sample data: {}", e);
        std::process::exit(1);
    }

    log::info!("Server running at http://{}", config.bind_address);

    let app_state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(owner_routes)
            .configure(visit_routes)
            .configure(speciality_routes)
            .service(entry_point)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
