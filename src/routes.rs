//! Page routes and their handlers

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::api::newsdata::DEFAULT_NEWS_CATEGORY;
use crate::calculator::CalculatorForm;
use crate::config::{Credential, EcoConfig};
use crate::{EcoError, pages, services};

/// Read-only state shared by every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<EcoConfig>,
    pub api: ApiClient,
}

impl AppState {
    pub fn new(config: EcoConfig) -> Result<Self, EcoError> {
        let api = ApiClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            api,
        })
    }

    fn require(&self, credential: Credential) -> Result<&str, Response> {
        self.config
            .credentials
            .require(credential)
            .map_err(|e| {
                warn!("Refusing request, {} is not set", credential.env_var());
                config_error(&e)
            })
    }

    fn maps_key(&self) -> Option<&str> {
        self.config.credentials.google_maps.as_deref()
    }
}

/// Missing configuration is reported as plain text, with no page around it
fn config_error(error: &EcoError) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, error.user_message()).into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/sistema-ambiental", get(sistema))
        .route("/futuro", get(futuro))
        .route("/tres-r", get(tres_r))
        .route("/clima", get(clima_get).post(clima_post))
        .route("/calidad-aire", get(calidad_aire_get).post(calidad_aire_post))
        .route("/videos", get(videos))
        .route("/noticias", get(noticias))
        .route("/calculadora", get(calculadora_get).post(calculadora_post))
        .route("/eventos", get(eventos))
        .route("/health", get(health))
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct CityParams {
    pub city: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewsParams {
    pub categoria: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EventParams {
    pub category: Option<String>,
}

/// Form value wins over the query string; blank counts as absent
fn pick_city(form: Option<CityParams>, query: CityParams) -> Option<String> {
    form.and_then(|params| params.city)
        .filter(|city| !city.trim().is_empty())
        .or(query.city)
        .map(|city| city.trim().to_string())
        .filter(|city| !city.is_empty())
}

async fn index() -> Html<String> {
    Html(pages::index())
}

async fn sistema() -> Html<String> {
    Html(pages::sistema())
}

async fn futuro() -> Html<String> {
    Html(pages::futuro())
}

async fn tres_r() -> Html<String> {
    Html(pages::tres_r())
}

async fn health() -> &'static str {
    "ok"
}

async fn clima_get(State(state): State<AppState>, Query(query): Query<CityParams>) -> Response {
    clima(&state, pick_city(None, query)).await
}

async fn clima_post(
    State(state): State<AppState>,
    Query(query): Query<CityParams>,
    Form(form): Form<CityParams>,
) -> Response {
    clima(&state, pick_city(Some(form), query)).await
}

async fn clima(state: &AppState, city: Option<String>) -> Response {
    let api_key = match state.require(Credential::OpenWeather) {
        Ok(key) => key,
        Err(response) => return response,
    };
    let Some(city) = city else {
        return Html(pages::clima(None, None, None, state.maps_key())).into_response();
    };

    info!("Weather lookup for {}", city);
    let page = match services::weather_report(&state.api, api_key, &city).await {
        Ok(report) => pages::clima(Some(&city), Some(&report), None, state.maps_key()),
        Err(e) => {
            warn!("Lookup failed for {}: {}", e.query().unwrap_or(&city), e);
            pages::clima(Some(&city), None, Some(&e.user_message()), state.maps_key())
        }
    };
    Html(page).into_response()
}

async fn calidad_aire_get(State(state): State<AppState>, Query(query): Query<CityParams>) -> Response {
    calidad_aire(&state, pick_city(None, query)).await
}

async fn calidad_aire_post(
    State(state): State<AppState>,
    Query(query): Query<CityParams>,
    Form(form): Form<CityParams>,
) -> Response {
    calidad_aire(&state, pick_city(Some(form), query)).await
}

async fn calidad_aire(state: &AppState, city: Option<String>) -> Response {
    let api_key = match state.require(Credential::OpenWeather) {
        Ok(key) => key,
        Err(response) => return response,
    };
    let Some(city) = city else {
        return Html(pages::calidad_aire(None, None, None, state.maps_key())).into_response();
    };

    info!("Air quality lookup for {}", city);
    let page = match services::air_quality_report(&state.api, api_key, &city).await {
        Ok(report) => pages::calidad_aire(Some(&city), Some(&report), None, state.maps_key()),
        Err(e) => {
            warn!("Lookup failed for {}: {}", e.query().unwrap_or(&city), e);
            pages::calidad_aire(Some(&city), None, Some(&e.user_message()), state.maps_key())
        }
    };
    Html(page).into_response()
}

async fn videos(State(state): State<AppState>) -> Response {
    let api_key = match state.require(Credential::YouTube) {
        Ok(key) => key,
        Err(response) => return response,
    };

    let page = match state.api.search_videos(api_key).await {
        Ok(videos) => pages::videos(&videos, None),
        Err(e) => pages::videos(&[], Some(&e.user_message())),
    };
    Html(page).into_response()
}

async fn noticias(State(state): State<AppState>, Query(params): Query<NewsParams>) -> Response {
    let categoria = params
        .categoria
        .unwrap_or_else(|| DEFAULT_NEWS_CATEGORY.to_string());
    let api_key = match state.require(Credential::NewsData) {
        Ok(key) => key,
        Err(response) => return response,
    };

    let page = match state.api.search_news(api_key, &categoria).await {
        Ok(articles) => pages::noticias(&articles, None, &categoria),
        Err(e) => pages::noticias(&[], Some(&e.user_message()), &categoria),
    };
    Html(page).into_response()
}

async fn calculadora_get() -> Html<String> {
    Html(pages::calculadora(None))
}

async fn calculadora_post(Form(form): Form<CalculatorForm>) -> Html<String> {
    let resultado = form.footprint().map_err(|e| e.user_message());
    Html(pages::calculadora(Some(resultado)))
}

async fn eventos(State(state): State<AppState>, Query(params): Query<EventParams>) -> Html<String> {
    let selected = params.category.filter(|category| !category.is_empty());
    let (listing, categories) = services::event_listing(&state.api, selected.as_deref()).await;
    Html(pages::eventos(&listing, &categories, selected.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(value: &str) -> CityParams {
        CityParams {
            city: Some(value.to_string()),
        }
    }

    #[test]
    fn test_form_city_wins_over_query() {
        assert_eq!(
            pick_city(Some(city("Bogotá")), city("Lima")),
            Some("Bogotá".to_string())
        );
    }

    #[test]
    fn test_blank_form_city_falls_back_to_query() {
        assert_eq!(pick_city(Some(city("  ")), city("Lima")), Some("Lima".to_string()));
        assert_eq!(pick_city(None, CityParams::default()), None);
        assert_eq!(pick_city(None, city("")), None);
    }
}
