use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::SqliteStore;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        auth::{self, AUTH_TAG},
        client::{self, CLIENT_TAG},
        document::{self, DOCUMENT_TAG},
        invoice::{self, INVOICE_TAG},
        leave::{self, LEAVE_TAG},
        legal_case::{self, CASE_TAG},
        task::{self, TASK_TAG},
        team::{self, TEAM_TAG},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lawnexus API",
        description = "Case, client, billing and team management for a law office"
    ),
    tags(
        (name = AUTH_TAG, description = "Login, logout and team member registration"),
        (name = TEAM_TAG, description = "Team member management"),
        (name = CLIENT_TAG, description = "Client management"),
        (name = CASE_TAG, description = "Cases with allocated case numbers"),
        (name = DOCUMENT_TAG, description = "Case document metadata"),
        (name = TASK_TAG, description = "Tasks and task statistics"),
        (name = INVOICE_TAG, description = "Invoices with allocated invoice numbers"),
        (name = LEAVE_TAG, description = "Leave requests and reviews")
    )
)]
struct ApiDoc;

/// Builds every API route and the Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::me))
        .routes(routes!(auth::update_profile))
        .routes(routes!(auth::change_password))
        .routes(routes!(auth::register))
        .routes(routes!(auth::bootstrap))
        .routes(routes!(team::get_team_members))
        .routes(routes!(
            team::get_team_member,
            team::update_team_member,
            team::delete_team_member
        ))
        .routes(routes!(client::get_clients, client::create_client))
        .routes(routes!(
            client::get_client,
            client::update_client,
            client::delete_client
        ))
        .routes(routes!(legal_case::get_cases, legal_case::create_case))
        .routes(routes!(legal_case::get_case_stats))
        .routes(routes!(
            legal_case::get_case,
            legal_case::update_case,
            legal_case::delete_case
        ))
        .routes(routes!(document::get_documents, document::create_document))
        .routes(routes!(
            document::get_document,
            document::update_document,
            document::delete_document
        ))
        .routes(routes!(task::get_tasks, task::create_task))
        .routes(routes!(task::get_task_stats))
        .routes(routes!(task::get_task, task::update_task, task::delete_task))
        .routes(routes!(invoice::get_invoices, invoice::create_invoice))
        .routes(routes!(
            invoice::get_invoice,
            invoice::update_invoice,
            invoice::delete_invoice
        ))
        .routes(routes!(invoice::update_invoice_status))
        .routes(routes!(leave::get_leave_requests, leave::create_leave_request))
        .routes(routes!(leave::get_leave_request))
        .routes(routes!(leave::review_leave_request))
        .routes(routes!(leave::cancel_leave_request))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Wraps the API routes with the session, CORS and request tracing layers.
///
/// # Returns
/// - `Ok(Router)` - Router ready to be given its state
/// - `Err(ConfigError::InvalidEnvVar)` - `ALLOWED_ORIGIN` is not a valid header value
pub fn app(
    config: &Config,
    session: SessionManagerLayer<SqliteStore>,
) -> Result<Router<AppState>, AppError> {
    let mut app = router().layer(session);

    if let Some(origin) = &config.allowed_origin {
        let origin = origin
            .parse::<HeaderValue>()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: "ALLOWED_ORIGIN".to_string(),
                value: origin.clone(),
            })?;

        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true);

        app = app.layer(cors);
    }

    Ok(app.layer(TraceLayer::new_for_http()))
}
