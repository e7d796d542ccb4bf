//! Fleet endpoints. One function per REST call.

use crate::common::errors::ApiError;
use crate::models::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle, VehicleCategory};
use crate::services::api;

/// Rentable vehicles, optionally narrowed to one category.
pub async fn list(category: Option<VehicleCategory>) -> Result<Vec<Vehicle>, ApiError> {
    let path = match category {
        Some(cat) => format!("/veiculos/?categoria={}", cat.as_str()),
        None => "/veiculos/".to_string(),
    };
    api::get_json(&path).await
}

/// The whole fleet regardless of availability (admin view).
pub async fn list_all_admin() -> Result<Vec<Vehicle>, ApiError> {
    api::get_json("/veiculos/?apenas_disponiveis=false").await
}

pub async fn create(
    category: VehicleCategory,
    data: &CreateVehicleRequest,
) -> Result<(), ApiError> {
    api::post_unit(&format!("/veiculos/{}", category.as_str()), data).await
}

pub async fn update(
    id: i64,
    category: VehicleCategory,
    data: &UpdateVehicleRequest,
) -> Result<(), ApiError> {
    api::put_unit(&format!("/veiculos/{}/{}", category.as_str(), id), data).await
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("/veiculos/{id}")).await
}
