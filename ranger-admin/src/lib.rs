//! Administrative HTTP surface for the Review Ranger plugin usage report.
//!
//! Serves a management menu and the report page. Callers authenticate with
//! a bearer token from the configured user directory; anyone without
//! `manage_options` gets an empty `204` from the report page.

mod config;

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use ranger_host::{ContentStore, PluginRegistry, REPORT_CAPABILITY};
use ranger_model::Catalog;
use ranger_report::{UsageReporter, escape_html};
use serde::Deserialize;
use tracing::{debug, error};

pub use config::{AdminConfig, UserConfig, UserDirectory};

/// Slug of the report page under the Tools menu.
pub const REPORT_PAGE_SLUG: &str = "rr-plugin-usage";

/// Menu and page title of the report.
pub const REPORT_MENU_TITLE: &str = "RR Plugin Usage";

/// Everything a request needs; shared across handlers.
#[derive(Clone)]
pub struct AdminState {
    pub registry: Arc<dyn PluginRegistry>,
    pub content: Arc<dyn ContentStore>,
    pub catalog: Arc<Catalog>,
    pub users: Arc<UserDirectory>,
}

impl AdminState {
    /// State backed by one value implementing both host capabilities.
    pub fn new<H>(host: Arc<H>, catalog: Catalog, users: UserDirectory) -> Self
    where
        H: PluginRegistry + ContentStore + 'static,
    {
        Self {
            registry: host.clone(),
            content: host,
            catalog: Arc::new(catalog),
            users: Arc::new(users),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ToolsQuery {
    page: Option<String>,
}

fn report_url() -> String {
    format!("/wp-admin/tools.php?page={REPORT_PAGE_SLUG}")
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{body}</body>\n</html>\n",
        escape_html(title)
    )
}

async fn menu_handler(State(state): State<AdminState>, headers: HeaderMap) -> Html<String> {
    let caller = state.users.resolve(&headers);
    let tools = if caller.can(REPORT_CAPABILITY) {
        format!(
            "<li>Tools<ul><li><a href=\"{}\">{}</a></li></ul></li>",
            escape_html(&report_url()),
            escape_html(REPORT_MENU_TITLE)
        )
    } else {
        String::new()
    };
    Html(page(
        "Dashboard",
        &format!("<nav class=\"admin-menu\"><ul>{tools}</ul></nav>\n"),
    ))
}

async fn tools_handler(
    State(state): State<AdminState>,
    Query(query): Query<ToolsQuery>,
    headers: HeaderMap,
) -> Response {
    if query.page.as_deref() != Some(REPORT_PAGE_SLUG) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let caller = state.users.resolve(&headers);
    debug!(login = caller.login(), "report page requested");

    let rendered = tokio::task::spawn_blocking(move || {
        UsageReporter::new(state.registry.as_ref(), state.content.as_ref())
            .render(&caller, &state.catalog)
    })
    .await;

    match rendered {
        Ok(Some(body)) => Html(page(REPORT_MENU_TITLE, &body)).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            error!(error = %err, "report render task failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Build the admin router with the given state.
pub fn build_router(state: AdminState) -> Router {
    Router::new()
        .route("/wp-admin/", get(menu_handler))
        .route("/wp-admin/tools.php", get(tools_handler))
        .with_state(state)
}
