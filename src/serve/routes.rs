//! HTTP routes for address lookup.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use townland::{geocode, Gazetteer, MatchRecord};

pub const LOOKUP_PATH: &str = "/api/v1/resources/addresses/";

/// Application state shared across handlers
pub struct AppState {
    pub gazetteer: Gazetteer,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route(LOOKUP_PATH, get(lookup_handler))
        .route(LOOKUP_PATH.trim_end_matches('/'), get(lookup_handler))
        .fallback(not_found_handler)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Informational landing page
async fn home_handler() -> Html<String> {
    Html(format!(
        "<h1>Townland Geocoder</h1>\n\
         <p>A prototype API for geocoding Irish addresses.</p>\n\
         <p>Usage: <a href=\"{path}?address=Johnstown, Bennekerry, Co Carlow\">\
         {path}?address={{address}}</a></p>\n",
        path = LOOKUP_PATH
    ))
}

async fn not_found_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html("<h1>404</h1><p>The resource could not be found.</p>"),
    )
}

/// Address lookup. An unmatched address is a successful empty list.
///
/// A repeated `address` parameter is not an error; the first value is used.
async fn lookup_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<MatchRecord>>, (StatusCode, String)> {
    let address = params
        .into_iter()
        .find_map(|(key, value)| (key == "address").then_some(value));
    let Some(address) = address else {
        debug!("Lookup rejected: no address parameter");
        return Err((
            StatusCode::BAD_REQUEST,
            "missing required query parameter 'address'".to_string(),
        ));
    };

    let result = geocode(&address, &state.gazetteer);
    info!(
        "Lookup '{}': {} match(es) at {} level",
        address,
        result.len(),
        result.level
    );

    Ok(Json(result.records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use townland::{CountyRecord, PlaceRecord};

    fn app() -> Router {
        let gazetteer = Gazetteer::new(
            vec![
                PlaceRecord::new("CARLOW", "JOHNSTOWN", "52.82089152866102", "-6.868629101436554"),
                PlaceRecord::new("CARLOW", "BENNEKERRY", "52.83", "-6.87"),
            ],
            vec![CountyRecord::new("CARLOW", "52.72", "-6.83")],
        );
        router(Arc::new(AppState { gazetteer }))
    }

    async fn request(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_home_page() {
        let (status, body) = request("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(LOOKUP_PATH));
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (status, body) = request("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "<h1>404</h1><p>The resource could not be found.</p>");
    }

    #[tokio::test]
    async fn test_missing_address_is_400() {
        let (status, _) = request(LOOKUP_PATH).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_place_level_lookup() {
        let (status, body) =
            request("/api/v1/resources/addresses/?address=Johnstown%2C%20Bennekerry%2C%20Co%20Carlow").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "County": "CARLOW",
                "English_Name": "JOHNSTOWN",
                "Y": "52.82089152866102",
                "X": "-6.868629101436554"
            }])
        );
    }

    #[tokio::test]
    async fn test_county_level_lookup_without_trailing_slash() {
        let (status, body) = request("/api/v1/resources/addresses?address=Main%20Street%2C%20Carlow").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"County": "CARLOW", "Y": "52.72", "X": "-6.83"}])
        );
    }

    #[tokio::test]
    async fn test_repeated_address_uses_first_value() {
        let (status, body) =
            request("/api/v1/resources/addresses/?address=Carlow&address=Springfield").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"County": "CARLOW", "Y": "52.72", "X": "-6.83"}])
        );
    }

    #[tokio::test]
    async fn test_other_parameters_ignored() {
        let (status, _) = request("/api/v1/resources/addresses/?format=json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) =
            request("/api/v1/resources/addresses/?format=json&address=Carlow").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("CARLOW"));
    }

    #[tokio::test]
    async fn test_unmatched_is_empty_list() {
        let (status, body) = request("/api/v1/resources/addresses/?address=Springfield").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");
    }
}
