//! Shared application state for axum handlers.

use std::sync::Arc;

use gestion_salles_app::ports::SalleRepository;
use gestion_salles_app::services::salle_service::SalleService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Room CRUD service.
    pub salle_service: Arc<SalleService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            salle_service: Arc::clone(&self.salle_service),
        }
    }
}

impl<R> AppState<R>
where
    R: SalleRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(salle_service: SalleService<R>) -> Self {
        Self {
            salle_service: Arc::new(salle_service),
        }
    }
}
