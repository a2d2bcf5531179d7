use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::clubs::handlers::list_clubs,
        features::clubs::handlers::get_club,
        features::clubs::handlers::get_club_detailed,
        features::clubs::handlers::create_club,
        features::clubs::handlers::update_club,
        features::clubs::handlers::delete_club,
        features::clubs::handlers::add_coach,
        features::categories::handlers::list_categories,
        features::categories::handlers::get_category,
        features::categories::handlers::create_category,
        features::categories::handlers::update_category,
        features::categories::handlers::delete_category,
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::get_athlete,
        features::athletes::handlers::create_athlete,
        features::athletes::handlers::update_athlete,
        features::athletes::handlers::delete_athlete,
        features::tournaments::handlers::list_tournaments,
        features::tournaments::handlers::get_tournament,
        features::tournaments::handlers::get_tournament_detailed,
        features::tournaments::handlers::create_tournament,
        features::tournaments::handlers::update_tournament,
        features::tournaments::handlers::delete_tournament,
        features::tournaments::handlers::add_athletes,
        features::tournaments::handlers::remove_athlete,
        features::rounds::handlers::list_rounds,
        features::rounds::handlers::get_round,
        features::rounds::handlers::check_eligibility,
        features::rounds::handlers::submit_round,
    ),
    components(
        schemas(
            storage::dto::club::ClubResponse,
            storage::dto::club::ClubDetailResponse,
            storage::dto::club::CoachResponse,
            storage::dto::club::CreateClubRequest,
            storage::dto::club::UpdateClubRequest,
            storage::dto::club::CreateCoachRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::UpdateCategoryRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::UpdateAthleteRequest,
            storage::dto::tournament::TournamentResponse,
            storage::dto::tournament::TournamentDetailResponse,
            storage::dto::tournament::GenderGroup,
            storage::dto::tournament::CategoryGroupResponse,
            storage::dto::tournament::CreateTournamentRequest,
            storage::dto::tournament::UpdateTournamentRequest,
            storage::dto::tournament::AddAthletesRequest,
            storage::dto::tournament::RosterEntry,
            storage::dto::round::RoundResponse,
            storage::dto::round::SubmitRoundRequest,
            storage::dto::round::EligibilityCheckRequest,
            storage::dto::round::EligibilityCheckResponse,
            storage::models::Club,
            storage::models::Coach,
            storage::models::Athlete,
            storage::models::WeightCategory,
            storage::models::Tournament,
            storage::models::Round,
            storage::models::Gender,
            storage::models::BeltRank,
            storage::models::KarateStyle,
            storage::models::TournamentKind,
        )
    ),
    tags(
        (name = "clubs", description = "Club and coach endpoints"),
        (name = "categories", description = "Weight category endpoints"),
        (name = "athletes", description = "Athlete registration endpoints"),
        (name = "tournaments", description = "Tournament and roster endpoints"),
        (name = "rounds", description = "Round eligibility and resolution endpoints"),
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
                        .bearer_format("API Key")
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

    tracing::info!("Starting karate tournament API");

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

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/clubs", features::clubs::routes::routes(api_keys.clone()))
        .nest(
            "/api/categories",
            features::categories::routes::routes(api_keys.clone()),
        )
        .nest(
            "/api/athletes",
            features::athletes::routes::routes(api_keys.clone()),
        )
        .nest(
            "/api/tournaments",
            features::tournaments::routes::routes(api_keys.clone()),
        )
        .nest("/api/rounds", features::rounds::routes::routes(api_keys))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;

    axum::serve(listener, app).await?;

    Ok(())
}
