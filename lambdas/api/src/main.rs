use std::sync::Arc;

use domain::{
    chat::{Assistant, LanguageModel},
    medicines,
};

mod config;
mod error;
mod gemini;
mod routes;

use config::Config;
use gemini::GeminiClient;
use routes::AppState;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_env()?;

    let (catalog, source) = medicines::load_or_fallback(&config.medicines_file);

    let model: Option<Arc<dyn LanguageModel>> =
        match GeminiClient::new(&config.base_url, &config.model, &config.api_key) {
            Ok(client) => {
                tracing::info!("Gemini model {} initialized", config.model);
                Some(Arc::new(client) as Arc<dyn LanguageModel>)
            }
            Err(e) => {
                tracing::error!("Error initializing AI: {}", e);
                None
            }
        };

    tracing::info!(
        "{} starting: {} medicines loaded ({:?}), AI model {}",
        routes::SERVICE_NAME,
        catalog.len(),
        source,
        if model.is_some() { "initialized" } else { "not available" }
    );

    let state = AppState {
        assistant: Assistant::new(Arc::new(catalog), model),
    };
    let app = routes::router(state);

    if config.lambda {
        let app = tower::ServiceBuilder::new()
            .layer(axum_aws_lambda::LambdaLayer::default())
            .service(app);

        lambda_http::run(app).await?;
    } else {
        tracing::info!("Listening on {}", config.addr);

        let listener = tokio::net::TcpListener::bind(&config.addr).await?;
        axum::serve(listener, app).await?;
    }

    Ok(())
}
