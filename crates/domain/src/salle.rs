//! Salle — a room that can be booked, described by its name and capacity.

use serde::{Deserialize, Serialize};

use crate::error::{GestionSallesError, ValidationError};
use crate::id::SalleId;

/// A room record.
///
/// A `Salle` is either *new* (`id` is `None`, never saved) or *persisted*
/// (`id` is set by the store on first save and never changes afterwards).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salle {
    #[serde(default)]
    pub id: Option<SalleId>,
    pub nom: String,
    pub capacite: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub etage: Option<i32>,
    #[serde(default = "default_disponible")]
    pub disponible: bool,
}

fn default_disponible() -> bool {
    true
}

impl Salle {
    /// Create a new, not yet persisted room.
    ///
    /// The room starts available, without description or floor.
    #[must_use]
    pub fn new(nom: impl Into<String>, capacite: i32) -> Self {
        Self {
            id: None,
            nom: nom.into(),
            capacite,
            description: None,
            etage: None,
            disponible: default_disponible(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_etage(mut self, etage: i32) -> Self {
        self.etage = Some(etage);
        self
    }

    #[must_use]
    pub fn with_disponible(mut self, disponible: bool) -> Self {
        self.disponible = disponible;
        self
    }

    /// Whether the store has already assigned an identifier.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Return the identifier of a persisted room.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotPersisted`] when the room was never saved.
    pub fn require_id(&self) -> Result<SalleId, GestionSallesError> {
        self.id.ok_or_else(|| ValidationError::NotPersisted.into())
    }
}
