//! Customer endpoints: authentication, registration, profile and the admin
//! customer management calls.

use crate::common::errors::ApiError;
use crate::models::{
    AccountStatus, CustomerKind, CustomerProfile, LoginResponse, RegisterPessoaFisica,
    RegisterPessoaJuridica, StatusChangeRequest, UpdateProfileRequest, UserRole,
};
use crate::services::api;

fn me_path(role: UserRole) -> &'static str {
    if role.is_company() {
        "/clientes/pessoas-juridicas/me"
    } else {
        "/clientes/pessoas-fisicas/me"
    }
}

fn kind_path(kind: CustomerKind) -> &'static str {
    match kind {
        CustomerKind::Pf => "/clientes/pessoas-fisicas",
        CustomerKind::Pj => "/clientes/pessoas-juridicas",
    }
}

/// Customer token endpoint (form-encoded credentials).
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    api::post_form_auth(
        "/clientes/token",
        &[("username", email), ("password", password)],
    )
    .await
}

/// Back-office token endpoint.
pub async fn login_admin(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    api::post_form_auth("/auth/token", &[("username", email), ("password", password)]).await
}

pub async fn register_pf(data: &RegisterPessoaFisica) -> Result<(), ApiError> {
    api::post_unit_auth("/clientes/pessoas-fisicas/", data).await
}

pub async fn register_pj(data: &RegisterPessoaJuridica) -> Result<(), ApiError> {
    api::post_unit_auth("/clientes/pessoas-juridicas/", data).await
}

/// The logged-in customer's own profile; the route depends on the role.
pub async fn my_profile(role: UserRole) -> Result<CustomerProfile, ApiError> {
    api::get_json(me_path(role)).await
}

pub async fn update_my_profile(
    role: UserRole,
    data: &UpdateProfileRequest,
) -> Result<(), ApiError> {
    api::put_unit(me_path(role), data).await
}

/// PF and PJ listings fetched concurrently and merged, each row tagged with
/// its flavor for the admin table.
pub async fn list_all() -> Result<Vec<CustomerProfile>, ApiError> {
    let (pf, pj) = futures::future::join(
        api::get_json::<Vec<CustomerProfile>>("/clientes/pessoas-fisicas/"),
        api::get_json::<Vec<CustomerProfile>>("/clientes/pessoas-juridicas/"),
    )
    .await;

    let mut customers = pf?;
    for customer in &mut customers {
        customer.tipo_cliente = CustomerKind::Pf;
    }
    let mut companies = pj?;
    for customer in &mut companies {
        customer.tipo_cliente = CustomerKind::Pj;
    }
    customers.extend(companies);
    Ok(customers)
}

pub async fn set_status(
    id: i64,
    kind: CustomerKind,
    status: AccountStatus,
) -> Result<(), ApiError> {
    api::patch_unit(
        &format!("{}/{id}/status", kind_path(kind)),
        &StatusChangeRequest { novo_status: status },
    )
    .await
}

pub async fn delete(id: i64, kind: CustomerKind) -> Result<(), ApiError> {
    api::delete(&format!("{}/{id}", kind_path(kind))).await
}
