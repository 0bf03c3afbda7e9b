//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use gestion_salles_app::ports::SalleRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and exposes `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: SalleRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use gestion_salles_app::services::salle_service::SalleService;
    use gestion_salles_domain::error::{GestionSallesError, NotFoundError};
    use gestion_salles_domain::id::SalleId;
    use gestion_salles_domain::salle::Salle;
    use tower::ServiceExt;

    /// Repository that stores nothing and fails every write to a missing id.
    struct StubSalleRepo;

    impl SalleRepository for StubSalleRepo {
        async fn create(&self, mut salle: Salle) -> Result<Salle, GestionSallesError> {
            salle.id = Some(SalleId::from_raw(1));
            Ok(salle)
        }
        async fn get_by_id(&self, _id: SalleId) -> Result<Option<Salle>, GestionSallesError> {
            Ok(None)
        }
        async fn get_all(&self) -> Result<Vec<Salle>, GestionSallesError> {
            Ok(vec![])
        }
        async fn update(&self, salle: Salle) -> Result<Salle, GestionSallesError> {
            Err(NotFoundError {
                entity: "Salle",
                id: salle.require_id()?.to_string(),
            }
            .into())
        }
        async fn delete(&self, _id: SalleId) -> Result<(), GestionSallesError> {
            Ok(())
        }
        async fn find_by_disponible(
            &self,
            _disponible: bool,
        ) -> Result<Vec<Salle>, GestionSallesError> {
            Ok(vec![])
        }
        async fn find_by_capacite_min(
            &self,
            _minimum: i32,
        ) -> Result<Vec<Salle>, GestionSallesError> {
            Ok(vec![])
        }
    }

    fn app() -> Router {
        build(AppState::new(SalleService::new(StubSalleRepo)))
    }

    async fn status_of(request: Request<Body>) -> StatusCode {
        app().oneshot(request).await.unwrap().status()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        assert_eq!(status_of(get_request("/health")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_not_found_when_salle_missing() {
        assert_eq!(status_of(get_request("/api/salles/7")).await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_bad_request_when_id_is_not_numeric() {
        assert_eq!(
            status_of(get_request("/api/salles/abc")).await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn should_accept_each_list_filter() {
        assert_eq!(status_of(get_request("/api/salles")).await, StatusCode::OK);
        assert_eq!(
            status_of(get_request("/api/salles?disponible=true")).await,
            StatusCode::OK
        );
        assert_eq!(
            status_of(get_request("/api/salles?capacite_min=50")).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn should_reject_combined_list_filters() {
        assert_eq!(
            status_of(get_request("/api/salles?disponible=true&capacite_min=50")).await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn should_return_created_when_posting_salle() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/salles")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"nom":"Salle A","capacite":12}"#))
            .unwrap();
        assert_eq!(status_of(request).await, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_salle() {
        let request = Request::builder()
            .method("PUT")
            .uri("/api/salles/9")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"nom":"Salle A","capacite":12}"#))
            .unwrap();
        assert_eq!(status_of(request).await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_no_content_when_deleting() {
        let request = Request::builder()
            .method("DELETE")
            .uri("/api/salles/3")
            .body(Body::empty())
            .unwrap();
        assert_eq!(status_of(request).await, StatusCode::NO_CONTENT);
    }
}
