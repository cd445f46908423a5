use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod mail;
mod middleware;

use config::Config;
use mail::MailNotifier;
use middleware::auth::JwtKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::clubs::handlers::list_clubs,
        features::clubs::handlers::get_club,
        features::clubs::handlers::create_club,
        features::members::handlers::list_members,
        features::members::handlers::get_member,
        features::members::handlers::create_member,
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::get_competition,
        features::competitions::handlers::create_competition,
        features::competitions::handlers::delete_competition,
        features::races::handlers::list_races,
        features::relays::handlers::list_relays,
        features::cryatlons::handlers::list_cryatlons,
        features::orders::handlers::create_order,
        features::orders::handlers::list_orders,
        features::orders::handlers::get_order,
        features::orders::handlers::update_order,
    ),
    components(
        schemas(
            storage::dto::club::CreateClubRequest,
            storage::dto::club::ClubResponse,
            storage::dto::member::CreateMemberRequest,
            storage::dto::member::MemberResponse,
            storage::dto::competition::CreateCompetitionRequest,
            storage::dto::competition::CompetitionResponse,
            storage::dto::race::RaceResponse,
            storage::dto::race::RaceWithEntrants,
            storage::dto::relay::RelayResponse,
            storage::dto::relay::RelayWithEntrants,
            storage::dto::cryatlon::CryatlonResponse,
            storage::dto::cryatlon::CryatlonWithEntrants,
            storage::dto::common::EntrantInfo,
            storage::dto::order::CreateOrderRequest,
            storage::dto::order::UpdateOrderRequest,
            storage::dto::order::OrderResponse,
            storage::models::Club,
            storage::models::Member,
            storage::models::Competition,
            storage::models::Race,
            storage::models::Relay,
            storage::models::Cryatlon,
            storage::models::Order,
            storage::models::OrderStatus,
        )
    ),
    tags(
        (name = "clubs", description = "Club administration endpoints"),
        (name = "members", description = "Member administration endpoints"),
        (name = "competitions", description = "Competition administration endpoints"),
        (name = "races", description = "Public race listings"),
        (name = "relays", description = "Public relay listings"),
        (name = "cryatlons", description = "Public cryatlon listings"),
        (name = "orders", description = "Entry submission and administration"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting competition registration API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let keys = JwtKeys::new(&config.jwt_secret);
    let notifier = MailNotifier::new(&config.mail).context("Failed to build mail notifier")?;

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let competitions = features::competitions::routes::routes(keys.clone())
        .merge(features::races::routes::routes())
        .merge(features::relays::routes::routes())
        .merge(features::cryatlons::routes::routes());

    let app = Router::new()
        .nest("/api/clubs", features::clubs::routes::routes(keys.clone()))
        .nest("/api/members", features::members::routes::routes(keys.clone()))
        .nest("/api/competitions", competitions)
        .nest("/api/orders", features::orders::routes::routes(keys, notifier))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;
    axum::serve(listener, app).await?;

    Ok(())
}
