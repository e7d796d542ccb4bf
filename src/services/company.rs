//! Company driver linkage (`/minha-empresa/motoristas`).

use crate::common::errors::ApiError;
use crate::models::AddDriverRequest;
use crate::services::api;

/// Links a driver to the logged-in company by CPF.
pub async fn add_driver(cpf: &str) -> Result<(), ApiError> {
    api::post_unit(
        "/minha-empresa/motoristas",
        &AddDriverRequest {
            cpf_motorista: cpf.to_string(),
        },
    )
    .await
}

pub async fn remove_driver(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("/minha-empresa/motoristas/{id}")).await
}
