use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use clinic_cms::clinic::{AccessInfo, ClinicProfile, DoctorProfile};
use clinic_cms::field_view::describe_fields;
use clinic_cms::news::{NewsEntry, NewsSummary};
use clinic_cms::{CmsClient, CollectionQuery};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::admin_gate::AdminGate;
use crate::config::SiteConfig;
use crate::error::AppError;
use crate::render;

/// Newest first.
const NEWS_ORDER: &str = "-publishedAt";

#[derive(Clone)]
pub struct AppState {
    pub cms: Arc<CmsClient>,
    pub config: Arc<SiteConfig>,
    pub admin_gate: AdminGate,
}

impl AppState {
    pub fn new(cms: CmsClient, config: SiteConfig) -> Self {
        let admin_gate = AdminGate::new(config.admin_token.as_deref());
        Self {
            cms: Arc::new(cms),
            config: Arc::new(config),
            admin_gate,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/treatment", get(treatment))
        .route("/examination", get(examination))
        .route("/doctor", get(doctor))
        .route("/access", get(access))
        .route("/news", get(news_index))
        .route("/news/{id}", get(news_detail))
        .route("/admin", get(admin))
        .route("/health", get(health))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

type PageResult = Result<Html<String>, AppError>;

async fn home(State(state): State<AppState>) -> PageResult {
    let query = CollectionQuery::new()
        .orders(NEWS_ORDER)
        .limit(state.config.home_news_limit);
    let (info, news) = futures::try_join!(
        state.cms.fetch_clinic_info(),
        state.cms.fetch_news_list(&query)
    )?;

    let profile = ClinicProfile::from_record(&info);
    let news = NewsSummary::from_collection(&news);
    Ok(Html(render::home::page(&profile, &news)))
}

async fn about() -> Html<String> {
    Html(render::static_pages::about())
}

async fn treatment() -> Html<String> {
    Html(render::static_pages::treatment())
}

async fn examination() -> Html<String> {
    Html(render::static_pages::examination())
}

async fn doctor(State(state): State<AppState>) -> PageResult {
    let info = state.cms.fetch_clinic_info().await?;
    Ok(Html(render::doctor::page(&DoctorProfile::from_record(&info))))
}

async fn access(State(state): State<AppState>) -> PageResult {
    let info = state.cms.fetch_clinic_info().await?;
    Ok(Html(render::access::page(&AccessInfo::from_record(&info))))
}

async fn news_index(State(state): State<AppState>) -> PageResult {
    let query = CollectionQuery::new()
        .orders(NEWS_ORDER)
        .limit(state.config.news_limit);
    let collection = state.cms.fetch_news_list(&query).await?;
    let news = NewsSummary::from_collection(&collection);
    debug!(shown = news.len(), total = collection.total_count, "news index");
    Ok(Html(render::news::index(&news)))
}

async fn news_detail(State(state): State<AppState>, Path(id): Path<String>) -> PageResult {
    let record = state.cms.fetch_news_detail(&id).await?;
    Ok(Html(render::news::detail(&NewsEntry::from_record(&record))))
}

async fn admin(State(state): State<AppState>, headers: HeaderMap) -> PageResult {
    state.admin_gate.check(&headers)?;
    let info = state.cms.fetch_clinic_info().await?;
    Ok(Html(render::admin::page(&describe_fields(&info))))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn fallback() -> AppError {
    AppError::NotFound
}
