//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod salles;

use axum::Router;
use axum::routing::get;

use gestion_salles_app::ports::SalleRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: SalleRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/salles", get(salles::list::<R>).post(salles::create::<R>))
        .route(
            "/salles/{id}",
            get(salles::get::<R>)
                .put(salles::update::<R>)
                .delete(salles::delete::<R>),
        )
}
