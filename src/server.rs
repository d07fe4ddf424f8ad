//! HTTP surface: the locale gate as axum middleware plus the pages behind it.

use crate::config::Config;
use crate::gate::{GateOutcome, LocaleContext, LocaleGate, Location, HEALTH_ROUTE, METRICS_ROUTE};
use crate::i18n::GateMetrics;
use crate::navigation::NavigationMode;
use anyhow::Result;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_LANGUAGE;
use axum::http::{HeaderValue, StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub gate: LocaleGate,
    pub metrics: Arc<GateMetrics>,
}

impl AppState {
    pub fn new(gate: LocaleGate) -> Self {
        Self {
            gate,
            metrics: Arc::new(GateMetrics::new()),
        }
    }
}

/// Build the application router.
///
/// `/health`, `/metrics`, and the language selection page sit outside the
/// gate. Everything else, including unknown paths, goes through it.
pub fn router(state: AppState) -> Router {
    let localized = Router::new()
        .route("/:lang", get(home))
        .route("/:lang/", get(home))
        .route("/:lang/about", get(about))
        .route("/:lang/messages", get(messages))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), locale_gate));

    Router::new()
        .route(HEALTH_ROUTE, get(health))
        .route(METRICS_ROUTE, get(metrics))
        .route(state.gate.config().selection_route(), get(languages_page))
        .merge(localized)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server and run until Ctrl+C.
pub async fn serve(config: &Config) -> Result<()> {
    let gate = LocaleGate::new(config.gate_config()?);
    let supported: Vec<_> = gate.config().supported().map(|l| l.code()).collect();
    info!(
        "Supported languages: {:?} (default: {})",
        supported,
        gate.config().default_language()
    );

    let app = router(AppState::new(gate));
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

/// Gate middleware: redirect, or attach the locale context and continue.
async fn locale_gate(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let location = request_location(request.uri());
    let outcome = state.gate.evaluate(&location);
    state.metrics.record(&outcome);

    match outcome {
        GateOutcome::Render(context) => {
            let code = context.code();
            request.extensions_mut().insert(context);
            let mut response = next.run(request).await;
            response
                .headers_mut()
                .insert(CONTENT_LANGUAGE, HeaderValue::from_static(code));
            response
        }
        outcome => match outcome.redirect() {
            Some((to, mode)) => redirect_response(to, mode),
            None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        },
    }
}

fn request_location(uri: &Uri) -> Location {
    Location::parse(uri.path_and_query().map_or("/", |pq| pq.as_str()))
}

/// HTTP has no history stack, so the two modes map onto redirect statuses:
/// push is a `303 See Other`, replace a method-preserving `307`.
fn redirect_response(to: &str, mode: NavigationMode) -> Response {
    match mode {
        NavigationMode::Push => Redirect::to(to).into_response(),
        NavigationMode::Replace => Redirect::temporary(to).into_response(),
    }
}

// ==================== Handlers ====================

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.metrics.report())
}

async fn languages_page(State(state): State<AppState>) -> Html<String> {
    let items: String = state
        .gate
        .config()
        .supported()
        .map(|lang| {
            format!(
                "<li><a href=\"/{code}\" hreflang=\"{code}\" lang=\"{code}\">{name}</a></li>",
                code = lang.code(),
                name = escape_html(lang.native_name()),
            )
        })
        .collect();

    Html(format!(
        "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>Languages</title></head>\
         <body><ul>{items}</ul></body></html>"
    ))
}

async fn home(State(state): State<AppState>, ctx: LocaleContext) -> Html<String> {
    let body = ctx.format("home.body", &[("language", ctx.language().native_name())]);
    render_page(&state, &ctx, ctx.t("home.heading"), &body)
}

async fn about(State(state): State<AppState>, ctx: LocaleContext) -> Html<String> {
    render_page(&state, &ctx, ctx.t("about.heading"), ctx.t("about.body"))
}

async fn messages(ctx: LocaleContext) -> Json<serde_json::Value> {
    Json(json!({
        "locale": ctx.code(),
        "messages": ctx.catalog(),
    }))
}

async fn not_found(State(state): State<AppState>, ctx: LocaleContext, uri: Uri) -> Response {
    let body = ctx.format("not_found.body", &[("path", uri.path())]);
    let page = render_page(&state, &ctx, ctx.t("not_found.heading"), &body);
    (StatusCode::NOT_FOUND, page).into_response()
}

fn render_page(state: &AppState, ctx: &LocaleContext, heading: &str, body: &str) -> Html<String> {
    let code = ctx.code();
    Html(format!(
        "<!doctype html>\n<html lang=\"{code}\"><head><meta charset=\"utf-8\"><title>{title}</title></head>\
         <body><nav><a href=\"/{code}\">{home}</a> <a href=\"/{code}/about\">{about}</a> \
         <a href=\"{languages}\">{change}</a></nav><h1>{heading}</h1><p>{body}</p></body></html>",
        title = escape_html(ctx.t("app.title")),
        home = escape_html(ctx.t("nav.home")),
        about = escape_html(ctx.t("nav.about")),
        languages = state.gate.config().selection_route(),
        change = escape_html(ctx.t("nav.languages")),
        heading = escape_html(heading),
        body = escape_html(body),
    ))
}

/// Escape text for inclusion in HTML element content or quoted attributes.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
