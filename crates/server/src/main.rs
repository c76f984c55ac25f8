//! Portfolio Server
//!
//! Axum server that embeds and serves the static frontend with API routes.
//! All page data comes from the read-only catalog and profile in
//! crates/core; the only outbound call is the contact-form delivery.

mod api;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Body,
    http::{header, Response, StatusCode, Uri},
    response::IntoResponse,
    routing::{any, get},
    Router,
};
use clap::{Parser, Subcommand};
use portfolio_core::catalog::Catalog;
use portfolio_core::contact::{ContactDispatcher, EmailJsConfig, EmailJsDelivery};
use portfolio_core::profile::Profile;
use rust_embed::RustEmbed;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;

/// Embedded frontend assets
#[derive(RustEmbed)]
#[folder = "../../apps/frontend/dist"]
struct Assets;

/// Application state: the read-only catalog and profile, plus the contact
/// dispatcher
pub struct AppState {
    pub catalog: Catalog,
    pub profile: Profile,
    pub dispatcher: ContactDispatcher,
}

pub type SharedState = Arc<AppState>;

#[derive(Parser, Clone)]
#[command(author, version, about = "Portfolio - personal site server")]
struct Args {
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Clone)]
enum CliCommand {
    /// Start the portfolio server (default)
    Serve {
        /// Run in development mode (proxy to the Vite dev server)
        #[arg(long)]
        dev: bool,
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

// === OpenAPI Definition ===

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "API for the portfolio site: project catalog, owner profile, and contact dispatch"
    ),
    paths(
        api::projects::list_projects,
        api::projects::list_tags,
        api::projects::get_project,
        api::profile::get_profile,
        api::contact::send_contact
    ),
    components(
        schemas(
            api::projects::ProjectListResponse,
            api::projects::ProjectSummary,
            api::projects::ProjectDetailResponse,
            api::projects::ProjectNotFoundResponse,
            api::projects::CodeSnippetResponse,
            api::projects::TagListResponse,
            api::profile::ProfileResponse,
            api::profile::SkillGroupResponse,
            api::profile::TimelineEntryResponse,
            api::profile::SocialLinkResponse,
            api::contact::ContactRequest,
            api::contact::ContactResponse
        )
    ),
    tags(
        (name = "projects", description = "Project catalog and filtering"),
        (name = "profile", description = "Owner profile"),
        (name = "contact", description = "Contact form dispatch")
    )
)]
struct ApiDoc;

async fn serve_openapi() -> impl IntoResponse {
    Response::builder()
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_string_pretty(&ApiDoc::openapi()).unwrap_or_default(),
        ))
        .unwrap()
}

// === Static File Serving ===

async fn proxy_frontend(uri: Uri) -> impl IntoResponse {
    let client = reqwest::Client::new();
    let dev_server_url = "http://localhost:5173";
    let url = format!("{}{}", dev_server_url, uri.path());

    match client.get(&url).send().await {
        Ok(res) => {
            let mut response = Response::builder().status(res.status());

            // Copy headers
            for (key, value) in res.headers() {
                response = response.header(key, value);
            }

            response
                .body(Body::from_stream(res.bytes_stream()))
                .unwrap()
        }
        Err(_) => Response::builder()
            .status(StatusCode::BAD_GATEWAY)
            .body(Body::from("Vite server not ready?"))
            .unwrap(),
    }
}

async fn serve_static(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');

    if let Some(file) = Assets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        return Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime.as_ref())
            .body(Body::from(file.data.to_vec()))
            .unwrap();
    }

    // SPA fallback: unmatched paths (including unknown project ids) render
    // the app shell, never a routing failure
    if let Some(file) = Assets::get("index.html") {
        return Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "text/html")
            .body(Body::from(file.data.to_vec()))
            .unwrap();
    }

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("Not Found"))
        .unwrap()
}

// === Server Entry ===

pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let catalog = Catalog::builtin().context("failed to load project catalog")?;
    tracing::info!(projects = catalog.len(), "catalog loaded");

    let email_config = match EmailJsConfig::from_env() {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(error = %e, "contact delivery disabled");
            None
        }
    };
    let delivery =
        Arc::new(EmailJsDelivery::new().context("failed to build email delivery client")?);
    let dispatcher = ContactDispatcher::new(email_config, delivery);
    tracing::info!(configured = dispatcher.is_configured(), "contact dispatcher ready");

    let state: SharedState = Arc::new(AppState {
        catalog,
        profile: Profile::builtin(),
        dispatcher,
    });

    let args = Args::parse();

    let (dev_mode, server_port) = match args.command {
        Some(CliCommand::Serve { dev, port }) => (dev, port),
        None => (false, 8080),
    };

    let app = Router::new()
        // v1 API routes
        .nest("/api/v1/projects", api::projects::project_routes())
        .nest("/api/v1/profile", api::profile::profile_routes())
        .nest("/api/v1/contact", api::contact::contact_routes())
        .route("/api/v1/openapi.json", get(serve_openapi));

    let app = if dev_mode {
        app.fallback(any(proxy_frontend))
    } else {
        app.fallback(get(serve_static))
    };

    let app = app.with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], server_port));
    println!("🚀 Portfolio server running at http://{}", addr);
    println!("   API v1 Routes:");
    println!("   Projects:  /api/v1/projects, /tags, /:id");
    println!("   Profile:   /api/v1/profile");
    println!("   Contact:   /api/v1/contact (POST)");
    println!("   OpenAPI:   /api/v1/openapi.json");
    if dev_mode {
        println!("   Dev mode:  proxying frontend from http://localhost:5173");
    }

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_server().await
}

// === Test Support ===

#[cfg(test)]
pub fn test_state() -> SharedState {
    let delivery = Arc::new(EmailJsDelivery::new().expect("client builds"));
    Arc::new(AppState {
        catalog: Catalog::builtin().expect("bundled catalog is valid"),
        profile: Profile::builtin(),
        dispatcher: ContactDispatcher::new(None, delivery),
    })
}

/// State whose dispatcher passes the configuration check; used for tests
/// that must reach field validation. Nothing ever hits the network because
/// those tests submit invalid fields.
#[cfg(test)]
pub fn test_state_with_contact() -> SharedState {
    let delivery = Arc::new(EmailJsDelivery::new().expect("client builds"));
    let config = EmailJsConfig {
        service_id: "service_test".to_string(),
        template_id: "template_test".to_string(),
        public_key: "key_test".to_string(),
    };
    Arc::new(AppState {
        catalog: Catalog::builtin().expect("bundled catalog is valid"),
        profile: Profile::builtin(),
        dispatcher: ContactDispatcher::new(Some(config), delivery),
    })
}
