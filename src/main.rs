use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use scrawl::api;
use scrawl::server;

#[derive(Parser)]
#[command(name = "scrawl")]
#[command(about = "Handwriting generation API server")]
struct Cli {
    /// Port to run the server on
    #[arg(long, default_value_t = 8001)]
    port: u16,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scrawl API",
        description = "Handwriting generation API server (SVG output)",
        version = "0.3.0",
        license(name = "MIT")
    ),
    paths(api::handle_generate, api::handle_health),
    components(schemas(api::GenerateRequest, api::HealthResponse)),
    tags(
        (name = "Generation", description = "Handwriting rendering"),
        (name = "Status", description = "Server health")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scrawl=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Engine construction happens eagerly, before the listener binds, so
    // the first request never pays for it and a load failure is visible in
    // the startup log.
    tracing::info!("Initializing handwriting model...");
    let state = server::create_app_state(cli.port);

    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Starting handwriting generation server");

    axum::serve(listener, app).await?;

    Ok(())
}
