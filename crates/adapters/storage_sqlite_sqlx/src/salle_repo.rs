//! `SQLite` implementation of [`SalleRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use gestion_salles_app::ports::SalleRepository;
use gestion_salles_domain::error::{GestionSallesError, NotFoundError};
use gestion_salles_domain::id::SalleId;
use gestion_salles_domain::salle::Salle;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Salle`].
struct Wrapper(Salle);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Salle> {
        value.map(|w| w.0)
    }

    fn many(values: Vec<Self>) -> Vec<Salle> {
        values.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Salle {
            id: Some(SalleId::from_raw(row.try_get("id")?)),
            nom: row.try_get("nom")?,
            capacite: row.try_get("capacite")?,
            description: row.try_get("description")?,
            etage: row.try_get("etage")?,
            disponible: row.try_get("disponible")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO salles (nom, capacite, description, etage, disponible) VALUES (?, ?, ?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM salles WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM salles ORDER BY id";
const SELECT_BY_DISPONIBLE: &str = "SELECT * FROM salles WHERE disponible = ? ORDER BY id";
const SELECT_BY_CAPACITE_MIN: &str = "SELECT * FROM salles WHERE capacite >= ? ORDER BY id";
const UPDATE: &str = "UPDATE salles SET nom = ?, capacite = ?, description = ?, etage = ?, disponible = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM salles WHERE id = ?";

/// `SQLite`-backed room repository.
pub struct SqliteSalleRepository {
    pool: SqlitePool,
}

impl SqliteSalleRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SalleRepository for SqliteSalleRepository {
    fn create(
        &self,
        mut salle: Salle,
    ) -> impl Future<Output = Result<Salle, GestionSallesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&salle.nom)
                .bind(salle.capacite)
                .bind(salle.description.as_deref())
                .bind(salle.etage)
                .bind(salle.disponible)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            salle.id = Some(SalleId::from_raw(result.last_insert_rowid()));
            Ok(salle)
        }
    }

    fn get_by_id(
        &self,
        id: SalleId,
    ) -> impl Future<Output = Result<Option<Salle>, GestionSallesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Salle>, GestionSallesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn update(
        &self,
        salle: Salle,
    ) -> impl Future<Output = Result<Salle, GestionSallesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let id = salle.require_id()?;
            let result = sqlx::query(UPDATE)
                .bind(&salle.nom)
                .bind(salle.capacite)
                .bind(salle.description.as_deref())
                .bind(salle.etage)
                .bind(salle.disponible)
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "Salle",
                    id: id.to_string(),
                }
                .into());
            }

            Ok(salle)
        }
    }

    fn delete(&self, id: SalleId) -> impl Future<Output = Result<(), GestionSallesError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(DELETE_BY_ID)
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn find_by_disponible(
        &self,
        disponible: bool,
    ) -> impl Future<Output = Result<Vec<Salle>, GestionSallesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_DISPONIBLE)
                .bind(disponible)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }

    fn find_by_capacite_min(
        &self,
        minimum: i32,
    ) -> impl Future<Output = Result<Vec<Salle>, GestionSallesError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CAPACITE_MIN)
                .bind(minimum)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::many(rows))
        }
    }
}
