//! JSON REST handlers for rooms.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use gestion_salles_app::ports::SalleRepository;
use gestion_salles_domain::error::{GestionSallesError, NotFoundError, ValidationError};
use gestion_salles_domain::id::SalleId;
use gestion_salles_domain::salle::Salle;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or replacing a room.
#[derive(Deserialize)]
pub struct SalleRequest {
    pub nom: String,
    pub capacite: i32,
    pub description: Option<String>,
    pub etage: Option<i32>,
    pub disponible: Option<bool>,
}

impl SalleRequest {
    fn into_salle(self) -> Salle {
        let mut salle = Salle::new(self.nom, self.capacite);
        salle.description = self.description;
        salle.etage = self.etage;
        if let Some(disponible) = self.disponible {
            salle.disponible = disponible;
        }
        salle
    }
}

/// Optional filters for the list endpoint. At most one may be given.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub disponible: Option<bool>,
    pub capacite_min: Option<i32>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Salle>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Salle>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Salle>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<SalleId, ApiError> {
    SalleId::from_str(raw)
        .map_err(|_| GestionSallesError::from(ValidationError::InvalidId(raw.to_string())).into())
}

/// `GET /api/salles[?disponible=bool | ?capacite_min=n]`
pub async fn list<R>(
    State(state): State<AppState<R>>,
    Query(query): Query<ListQuery>,
) -> Result<ListResponse, ApiError>
where
    R: SalleRepository + Send + Sync + 'static,
{
    let service = &state.salle_service;
    let salles = match (query.disponible, query.capacite_min) {
        (Some(_), Some(_)) => {
            return Err(ApiError::BadRequest(
                "disponible and capacite_min cannot be combined",
            ));
        }
        (Some(disponible), None) => service.find_by_disponible(disponible).await?,
        (None, Some(minimum)) => service.find_by_capacite_minimum(minimum).await?,
        (None, None) => service.find_all().await?,
    };
    Ok(ListResponse::Ok(Json(salles)))
}

/// `GET /api/salles/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    R: SalleRepository + Send + Sync + 'static,
{
    let salle_id = parse_id(&id)?;
    let salle = state
        .salle_service
        .find_by_id(salle_id)
        .await?
        .ok_or_else(|| {
            GestionSallesError::from(NotFoundError {
                entity: "Salle",
                id: salle_id.to_string(),
            })
        })?;
    Ok(GetResponse::Ok(Json(salle)))
}

/// `POST /api/salles`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    Json(req): Json<SalleRequest>,
) -> Result<CreateResponse, ApiError>
where
    R: SalleRepository + Send + Sync + 'static,
{
    let created = state.salle_service.save(req.into_salle()).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/salles/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    Json(req): Json<SalleRequest>,
) -> Result<GetResponse, ApiError>
where
    R: SalleRepository + Send + Sync + 'static,
{
    let mut salle = req.into_salle();
    salle.id = Some(parse_id(&id)?);
    let updated = state.salle_service.update(salle).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/salles/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: SalleRepository + Send + Sync + 'static,
{
    let salle_id = parse_id(&id)?;
    state.salle_service.delete_by_id(salle_id).await?;
    Ok(DeleteResponse::NoContent)
}
