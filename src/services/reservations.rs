//! Reservation lifecycle endpoints.

use crate::common::errors::ApiError;
use crate::models::{
    CreateReservationRequest, Reservation, ReservationStatus, SimulationRequest,
    SimulationResponse, UpdateReservationRequest,
};
use crate::services::api;

/// Server-side price preview; nothing is persisted.
pub async fn simulate(data: &SimulationRequest) -> Result<SimulationResponse, ApiError> {
    api::post_json("/reservas/simulacao", data).await
}

pub async fn create(data: &CreateReservationRequest) -> Result<(), ApiError> {
    api::post_unit("/reservas/", data).await
}

/// The logged-in customer's reservations.
pub async fn list_mine() -> Result<Vec<Reservation>, ApiError> {
    api::get_json("/reservas/minhas").await
}

/// Every reservation (admin view), optionally filtered by status.
pub async fn list_all(status: Option<ReservationStatus>) -> Result<Vec<Reservation>, ApiError> {
    let path = match status {
        Some(status) => format!("/reservas/?status={}", status.as_str()),
        None => "/reservas/".to_string(),
    };
    api::get_json(&path).await
}

pub async fn update(id: i64, data: &UpdateReservationRequest) -> Result<(), ApiError> {
    api::put_unit(&format!("/reservas/{id}"), data).await
}

pub async fn cancel(id: i64) -> Result<(), ApiError> {
    api::put_action(&format!("/reservas/{id}/cancelar")).await
}

pub async fn confirm(id: i64) -> Result<(), ApiError> {
    api::put_action(&format!("/reservas/{id}/confirmar")).await
}

/// Marks the vehicle as picked up (reservation enters `em_andamento`).
pub async fn pick_up(id: i64) -> Result<(), ApiError> {
    api::put_action(&format!("/reservas/{id}/retirar")).await
}

pub async fn finish(id: i64) -> Result<(), ApiError> {
    api::put_action(&format!("/reservas/{id}/finalizar")).await
}
