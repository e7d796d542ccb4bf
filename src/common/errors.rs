use thiserror::Error;

/// Failures surfaced by the HTTP service layer.
///
/// Every service call resolves to either data or one of these; pages render
/// `user_message()` and stay interactive, nothing is retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{detail}")]
    Api { status: u16, detail: String },

    #[error("Não foi possível conectar ao servidor. Verifique sua conexão.")]
    Network(#[from] reqwest::Error),

    #[error("Resposta inesperada do servidor.")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Builds an error from a non-2xx response, passing the server's
    /// `detail` field through when the body carries one.
    ///
    /// Accepted shapes: `{"detail": "mensagem"}` and the validation form
    /// `{"detail": [{"msg": "mensagem"}, ...]}`. Anything else falls back to
    /// a generic message.
    pub fn from_status_body(status: u16, body: &str) -> Self {
        let detail = extract_detail(body)
            .unwrap_or_else(|| format!("Erro inesperado do servidor ({status})."));
        ApiError::Api { status, detail }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for direct display.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(|msg| msg.as_str())
            .map(|msg| format!("Erro de validação: {msg}")),
        _ => None,
    }
}

/// Failures while reading the bearer token's claims.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token malformado")]
    Malformed,

    #[error("payload do token ilegível")]
    InvalidPayload,
}
