//! Salle service — use-cases for managing rooms.

use gestion_salles_domain::error::GestionSallesError;
use gestion_salles_domain::id::SalleId;
use gestion_salles_domain::salle::Salle;

use crate::ports::SalleRepository;

/// Application service for room persistence and filtered lookups.
///
/// Every operation is a direct pass-through to the repository: no retry,
/// no batching, no caching.
pub struct SalleService<R> {
    repo: R,
}

impl<R: SalleRepository> SalleService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a room.
    ///
    /// A new room is inserted and returned with its assigned identifier.
    /// A room that already carries an identifier is written back as an
    /// [`update`](Self::update).
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository, or
    /// [`GestionSallesError::NotFound`] when an already-identified room is
    /// missing from the store.
    #[tracing::instrument(skip(self, salle), fields(nom = %salle.nom))]
    pub async fn save(&self, salle: Salle) -> Result<Salle, GestionSallesError> {
        if salle.is_persisted() {
            return self.repo.update(salle).await;
        }
        let saved = self.repo.create(salle).await?;
        tracing::debug!(id = ?saved.id, "salle created");
        Ok(saved)
    }

    /// Write the fields of a persisted room back to the store.
    ///
    /// # Errors
    ///
    /// Returns [`GestionSallesError::Validation`] if the room was never
    /// saved, [`GestionSallesError::NotFound`] if its id is not in the
    /// store, or a storage error from the repository.
    #[tracing::instrument(skip(self, salle), fields(id = ?salle.id))]
    pub async fn update(&self, salle: Salle) -> Result<Salle, GestionSallesError> {
        salle.require_id()?;
        self.repo.update(salle).await
    }

    /// Remove a persisted room from the store.
    ///
    /// Removing a room that is already gone succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`GestionSallesError::Validation`] if the room was never
    /// saved, or a storage error from the repository.
    pub async fn delete(&self, salle: &Salle) -> Result<(), GestionSallesError> {
        let id = salle.require_id()?;
        self.delete_by_id(id).await
    }

    /// Remove a room from the store by identifier.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_by_id(&self, id: SalleId) -> Result<(), GestionSallesError> {
        self.repo.delete(id).await
    }

    /// Look up a room by id. Absence is `Ok(None)`, never an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_id(&self, id: SalleId) -> Result<Option<Salle>, GestionSallesError> {
        self.repo.get_by_id(id).await
    }

    /// List every room.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn find_all(&self) -> Result<Vec<Salle>, GestionSallesError> {
        self.repo.get_all().await
    }

    /// List the rooms whose availability flag equals `disponible`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_disponible(
        &self,
        disponible: bool,
    ) -> Result<Vec<Salle>, GestionSallesError> {
        self.repo.find_by_disponible(disponible).await
    }

    /// List the rooms that hold at least `minimum` people.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn find_by_capacite_minimum(
        &self,
        minimum: i32,
    ) -> Result<Vec<Salle>, GestionSallesError> {
        self.repo.find_by_capacite_min(minimum).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestion_salles_domain::error::{NotFoundError, ValidationError};
    use std::collections::BTreeMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemorySalleRepo {
        store: Mutex<BTreeMap<SalleId, Salle>>,
        next_id: Mutex<i64>,
    }

    impl InMemorySalleRepo {
        fn filtered(&self, predicate: impl Fn(&Salle) -> bool) -> Vec<Salle> {
            let store = self.store.lock().unwrap();
            store.values().filter(|s| predicate(s)).cloned().collect()
        }
    }

    impl SalleRepository for InMemorySalleRepo {
        fn create(
            &self,
            mut salle: Salle,
        ) -> impl Future<Output = Result<Salle, GestionSallesError>> + Send {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let id = SalleId::from_raw(*next_id);
            salle.id = Some(id);
            self.store.lock().unwrap().insert(id, salle.clone());
            async { Ok(salle) }
        }

        fn get_by_id(
            &self,
            id: SalleId,
        ) -> impl Future<Output = Result<Option<Salle>, GestionSallesError>> + Send {
            let result = self.store.lock().unwrap().get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Salle>, GestionSallesError>> + Send {
            let result = self.filtered(|_| true);
            async { Ok(result) }
        }

        fn update(
            &self,
            salle: Salle,
        ) -> impl Future<Output = Result<Salle, GestionSallesError>> + Send {
            let result = salle.require_id().and_then(|id| {
                let mut store = self.store.lock().unwrap();
                match store.get_mut(&id) {
                    Some(slot) => {
                        *slot = salle.clone();
                        Ok(salle)
                    }
                    None => Err(NotFoundError {
                        entity: "Salle",
                        id: id.to_string(),
                    }
                    .into()),
                }
            });
            async { result }
        }

        fn delete(
            &self,
            id: SalleId,
        ) -> impl Future<Output = Result<(), GestionSallesError>> + Send {
            self.store.lock().unwrap().remove(&id);
            async { Ok(()) }
        }

        fn find_by_disponible(
            &self,
            disponible: bool,
        ) -> impl Future<Output = Result<Vec<Salle>, GestionSallesError>> + Send {
            let result = self.filtered(|s| s.disponible == disponible);
            async { Ok(result) }
        }

        fn find_by_capacite_min(
            &self,
            minimum: i32,
        ) -> impl Future<Output = Result<Vec<Salle>, GestionSallesError>> + Send {
            let result = self.filtered(|s| s.capacite >= minimum);
            async { Ok(result) }
        }
    }

    fn make_service() -> SalleService<InMemorySalleRepo> {
        SalleService::new(InMemorySalleRepo::default())
    }

    fn noms(salles: &[Salle]) -> Vec<&str> {
        salles.iter().map(|s| s.nom.as_str()).collect()
    }

    #[tokio::test]
    async fn should_run_full_crud_lifecycle() {
        let svc = make_service();
        let salle = Salle::new("Test chambre", 20)
            .with_description("Test description")
            .with_etage(1);

        let saved = svc.save(salle).await.unwrap();
        let id = saved.id.unwrap();

        let mut found = svc.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.nom, "Test chambre");

        found.capacite = 30;
        svc.update(found).await.unwrap();

        let updated = svc.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(updated.capacite, 30);

        svc.delete(&updated).await.unwrap();
        assert!(svc.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_assign_distinct_ids_on_save() {
        let svc = make_service();
        let a = svc.save(Salle::new("A", 1)).await.unwrap();
        let b = svc.save(Salle::new("B", 2)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn should_update_when_saving_persisted_salle() {
        let svc = make_service();
        let mut saved = svc.save(Salle::new("Salle", 10)).await.unwrap();
        let id = saved.id;

        saved.etage = Some(3);
        let resaved = svc.save(saved).await.unwrap();
        assert_eq!(resaved.id, id);

        let all = svc.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].etage, Some(3));
    }

    #[tokio::test]
    async fn should_return_none_when_salle_missing() {
        let svc = make_service();
        let result = svc.find_by_id(SalleId::from_raw(404)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_reject_update_when_not_persisted() {
        let svc = make_service();
        let result = svc.update(Salle::new("Nouvelle", 5)).await;
        assert!(matches!(
            result,
            Err(GestionSallesError::Validation(ValidationError::NotPersisted))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_deleted_salle() {
        let svc = make_service();
        let saved = svc.save(Salle::new("Ephemere", 5)).await.unwrap();
        svc.delete(&saved).await.unwrap();

        let result = svc.update(saved).await;
        assert!(matches!(result, Err(GestionSallesError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_reject_delete_when_not_persisted() {
        let svc = make_service();
        let result = svc.delete(&Salle::new("Nouvelle", 5)).await;
        assert!(matches!(
            result,
            Err(GestionSallesError::Validation(ValidationError::NotPersisted))
        ));
    }

    #[tokio::test]
    async fn should_delete_twice_without_error() {
        let svc = make_service();
        let saved = svc.save(Salle::new("Salle", 10)).await.unwrap();

        svc.delete(&saved).await.unwrap();
        svc.delete(&saved).await.unwrap();
        assert!(svc.find_by_id(saved.id.unwrap()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_partition_by_disponible() {
        let svc = make_service();
        svc.save(Salle::new("Available chambre", 20).with_disponible(true))
            .await
            .unwrap();
        svc.save(Salle::new("Unavailable chambre", 30).with_disponible(false))
            .await
            .unwrap();

        let available = svc.find_by_disponible(true).await.unwrap();
        assert_eq!(noms(&available), vec!["Available chambre"]);

        let unavailable = svc.find_by_disponible(false).await.unwrap();
        assert_eq!(noms(&unavailable), vec!["Unavailable chambre"]);
    }

    #[tokio::test]
    async fn should_filter_by_capacite_minimum() {
        let svc = make_service();
        for (nom, capacite) in [
            ("Small chambre", 10),
            ("Medium chambre", 50),
            ("Large chambre", 100),
        ] {
            svc.save(Salle::new(nom, capacite)).await.unwrap();
        }

        let min50 = svc.find_by_capacite_minimum(50).await.unwrap();
        assert_eq!(noms(&min50), vec!["Medium chambre", "Large chambre"]);

        let min80 = svc.find_by_capacite_minimum(80).await.unwrap();
        assert_eq!(noms(&min80), vec!["Large chambre"]);
    }
}
