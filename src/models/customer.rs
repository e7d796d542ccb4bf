use serde::{Deserialize, Serialize};

use crate::models::DriverSummary;

/// Account flavor: pessoa física (individual) or pessoa jurídica (company).
///
/// The customer endpoints are split by flavor; the merged admin listing tags
/// each row locally since the server payloads do not carry the flag.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CustomerKind {
    #[serde(rename = "PF")]
    Pf,
    #[serde(rename = "PJ")]
    Pj,
}

impl CustomerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pf => "PF",
            Self::Pj => "PJ",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pf => "Pessoa Física",
            Self::Pj => "Pessoa Jurídica",
        }
    }
}

impl Default for CustomerKind {
    fn default() -> Self {
        Self::Pf
    }
}

impl std::fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account status accepted by the `/status` PATCH endpoints.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Ativo,
    Bloqueado,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ativo => "ativo",
            Self::Bloqueado => "bloqueado",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub cep: String,
    pub rua: String,
    pub numero: String,
    #[serde(default)]
    pub complemento: Option<String>,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
}

/// A customer profile as returned by the `/clientes/...` endpoints. PF and PJ
/// responses share this shape; flavor-specific fields are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id_pessoa: i64,
    pub email: String,
    pub telefone: String,
    pub endereco: Address,
    pub e_ativo: bool,
    pub data_criacao: String,

    // pessoa física
    #[serde(default)]
    pub nome_completo: Option<String>,
    #[serde(default)]
    pub cpf: Option<String>,
    #[serde(default)]
    pub cnh: Option<String>,

    // pessoa jurídica
    #[serde(default)]
    pub razao_social: Option<String>,
    #[serde(default)]
    pub cnpj: Option<String>,
    #[serde(default)]
    pub motoristas: Option<Vec<DriverSummary>>,

    /// Tagged locally after fetch; not part of the server payload.
    #[serde(default)]
    pub tipo_cliente: CustomerKind,
}

impl CustomerProfile {
    pub fn display_name(&self) -> &str {
        self.nome_completo
            .as_deref()
            .or(self.razao_social.as_deref())
            .unwrap_or(&self.email)
    }

    /// CPF or CNPJ, whichever the account carries.
    pub fn document(&self) -> Option<&str> {
        self.cpf.as_deref().or(self.cnpj.as_deref())
    }

    pub fn is_company(&self) -> bool {
        self.tipo_cliente == CustomerKind::Pj
    }

    /// Linked drivers, empty for PF accounts.
    pub fn drivers(&self) -> &[DriverSummary] {
        self.motoristas.as_deref().unwrap_or_default()
    }

    /// Substring search over name, document and email (admin table).
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.display_name().to_lowercase().contains(&term)
            || self.document().is_some_and(|doc| doc.contains(term.as_str()))
            || self.email.to_lowercase().contains(&term)
    }
}

/// Payload for `POST /clientes/pessoas-fisicas/`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterPessoaFisica {
    pub nome_completo: String,
    pub email: String,
    pub cpf: String,
    pub cnh: String,
    pub telefone: String,
    pub senha_texto_puro: String,
    pub endereco: Address,
}

/// Payload for `POST /clientes/pessoas-juridicas/`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterPessoaJuridica {
    pub razao_social: String,
    pub nome_fantasia: String,
    pub email: String,
    pub cnpj: String,
    pub telefone: String,
    pub senha_texto_puro: String,
    pub endereco: Address,
}

/// Payload for `PUT /clientes/.../me` - the fields the profile page edits.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    pub email: String,
    pub telefone: String,
    pub endereco: Address,
}

/// Payload for `PATCH /clientes/.../{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusChangeRequest {
    pub novo_status: AccountStatus,
}

/// Payload for `POST /minha-empresa/motoristas`.
#[derive(Debug, Clone, Serialize)]
pub struct AddDriverRequest {
    pub cpf_motorista: String,
}
