use axum::extract::State;
use axum::http::{header, StatusCode, Uri};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use dioxus::prelude::*;
use std::ops::Deref;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::components::Sidebar;
use crate::config::{AppConfig, BuildConfig};
use crate::error::AppError;
use crate::feed::TrendingFeed;
use crate::manifest::{public_asset, WebManifest, MANIFEST_CONTENT_TYPE, MANIFEST_PATH};
use crate::menu::destination_title;

#[derive(Clone)]
pub struct AppState(pub Arc<InnerState>);

// deref so you can still access the inner fields easily
impl Deref for AppState {
    type Target = InnerState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub struct InnerState {
    pub config: BuildConfig,
    pub feed: TrendingFeed,
    pub manifest_json: String,
}

impl AppState {
    pub fn new(config: BuildConfig, feed: TrendingFeed) -> Result<Self, AppError> {
        let manifest_json = WebManifest::new(&config.app).to_json()?;
        Ok(Self(Arc::new(InnerState {
            config,
            feed,
            manifest_json,
        })))
    }
}

pub fn app(state: AppState) -> Router {
    let public_dir = state.config.server.public_dir.clone();
    Router::new()
        .route(MANIFEST_PATH, get(manifest_endpoint))
        .nest_service("/public", ServeDir::new(public_dir))
        .fallback(page_endpoint)
        .with_state(state)
}

pub fn html_app<S: AsRef<str>>(content: Element, title: S, app: &AppConfig) -> Html<String> {
    // render the rsx! macro to HTML
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="theme-color" content="{theme_color}">
    <meta name="description" content="{description}">
    <link rel="icon" href="{logo}">
    <link rel="apple-touch-icon" href="{apple_touch_icon}">
    <link rel="mask-icon" href="{mask_icon}" color="{theme_color}">
    <link rel="manifest" href="{MANIFEST_PATH}">
    <link rel="stylesheet" href="{stylesheet}">
    <title>{title} | {name}</title>
</head>
{body}
</html>"#,
        theme_color = app.theme_color,
        description = app.description,
        logo = public_asset(&app.assets.logo),
        apple_touch_icon = public_asset(&app.assets.apple_touch_icon),
        mask_icon = public_asset(&app.assets.mask_icon),
        stylesheet = public_asset("styling/sidebar.css"),
        title = title.as_ref(),
        name = app.name,
        body = dioxus_ssr::render_element(rsx! {
            body {
                class: "layout",
                {content}
            }
        })
    ))
}

async fn manifest_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, MANIFEST_CONTENT_TYPE)],
        state.manifest_json.clone(),
    )
}

/// Renders the shell with the sidebar for whatever path was requested. The
/// destination screens themselves live elsewhere; unknown paths answer 404.
async fn page_endpoint(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    let path = uri.path().to_string();
    let (status, title) = match destination_title(&path) {
        Some(title) => (StatusCode::OK, title),
        None => {
            tracing::debug!("no destination for {path}");
            (StatusCode::NOT_FOUND, String::from("404"))
        }
    };
    let tags = state.feed.tags();

    let content = rsx! {
        Sidebar { current_path: path, tags: tags }
        main {
            class: "content",
            h1 { "{title}" }
        }
    };
    (status, html_app(content, &title, &state.config.app))
}
