//! Storage port — repository trait for room persistence.

use std::future::Future;

use gestion_salles_domain::error::GestionSallesError;
use gestion_salles_domain::id::SalleId;
use gestion_salles_domain::salle::Salle;

/// Repository for persisting and querying [`Salle`]s.
///
/// Implementations assign identifiers on [`create`](Self::create); list
/// queries return records ordered by ascending identifier.
pub trait SalleRepository {
    /// Insert a new room and return it with its store-assigned identifier.
    fn create(
        &self,
        salle: Salle,
    ) -> impl Future<Output = Result<Salle, GestionSallesError>> + Send;

    /// Get a room by its identifier.
    fn get_by_id(
        &self,
        id: SalleId,
    ) -> impl Future<Output = Result<Option<Salle>, GestionSallesError>> + Send;

    /// Get all rooms.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Salle>, GestionSallesError>> + Send;

    /// Overwrite the stored fields of an existing room.
    ///
    /// Fails with [`GestionSallesError::Validation`] when `salle` has no id,
    /// and with [`GestionSallesError::NotFound`] when no row has its id.
    fn update(
        &self,
        salle: Salle,
    ) -> impl Future<Output = Result<Salle, GestionSallesError>> + Send;

    /// Delete a room by its identifier. Deleting a missing id is not an error.
    fn delete(&self, id: SalleId) -> impl Future<Output = Result<(), GestionSallesError>> + Send;

    /// Get every room whose availability flag equals `disponible`.
    fn find_by_disponible(
        &self,
        disponible: bool,
    ) -> impl Future<Output = Result<Vec<Salle>, GestionSallesError>> + Send;

    /// Get every room with `capacite >= minimum`.
    fn find_by_capacite_min(
        &self,
        minimum: i32,
    ) -> impl Future<Output = Result<Vec<Salle>, GestionSallesError>> + Send;
}
