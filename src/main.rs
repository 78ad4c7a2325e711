use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use quizgen_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
    services::http_helpers::AVAILABLE_ENDPOINTS,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    std::fs::create_dir_all(&config.upload_dir)?;

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let allowed_origins = config.cors_allowed_origins.clone();
    let state = AppState::new(config);

    log::info!("Starting HTTP server on http://{}:{}", host, port);
    for endpoint in AVAILABLE_ENDPOINTS {
        log::info!("  {}", endpoint);
    }

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .wrap(cors)
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found_handler))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
