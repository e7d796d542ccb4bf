use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::common::dates;
use crate::models::Vehicle;

/// Reservation lifecycle status as the API spells it.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Pendente,
    Confirmada,
    EmAndamento,
    Finalizada,
    Cancelada,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pendente => "pendente",
            Self::Confirmada => "confirmada",
            Self::EmAndamento => "em_andamento",
            Self::Finalizada => "finalizada",
            Self::Cancelada => "cancelada",
        }
    }

    /// Label for status badges.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pendente => "Pendente",
            Self::Confirmada => "Confirmada",
            Self::EmAndamento => "Em andamento",
            Self::Finalizada => "Finalizada",
            Self::Cancelada => "Cancelada",
        }
    }

    /// Counts toward the customer's "next trip" card.
    pub fn is_upcoming(&self) -> bool {
        matches!(self, Self::Pendente | Self::Confirmada | Self::EmAndamento)
    }

    /// A reservation that is booked or running.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Confirmada | Self::EmAndamento)
    }

    /// Dates and insurance may still be edited.
    pub fn can_modify(&self) -> bool {
        matches!(self, Self::Pendente | Self::Confirmada | Self::EmAndamento)
    }

    pub fn can_cancel(&self) -> bool {
        matches!(self, Self::Pendente | Self::Confirmada)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for ReservationStatus {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pendente" => Ok(Self::Pendente),
            "confirmada" => Ok(Self::Confirmada),
            "em_andamento" => Ok(Self::EmAndamento),
            "finalizada" => Ok(Self::Finalizada),
            "cancelada" => Ok(Self::Cancelada),
            _ => Err(format!("invalid reservation status: {}", s)),
        }
    }
}

/// Driver attached to a company reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverSummary {
    pub id_pessoa: i64,
    pub nome_completo: String,
    pub cpf: String,
    pub email: String,
}

/// A reservation as returned by `/reservas/`. Timestamps stay as the ISO
/// strings the server sends; `common::dates` parses them on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id_reserva: i64,
    pub data_retirada: String,
    pub data_devolucao: String,
    pub valor_total_estimado: f64,
    pub status: ReservationStatus,

    pub seguro_pessoal: bool,
    pub seguro_terceiros: bool,

    pub veiculo: Vehicle,

    #[serde(default)]
    pub motorista: Option<DriverSummary>,
}

impl Reservation {
    /// Substring search over id, vehicle model and plate (admin table).
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.id_reserva.to_string().contains(&term)
            || self.veiculo.modelo.to_lowercase().contains(&term)
            || self.veiculo.placa.to_lowercase().contains(&term)
    }

    fn pickup_at(&self) -> NaiveDateTime {
        dates::parse_iso(&self.data_retirada).unwrap_or(NaiveDateTime::MAX)
    }
}

/// The earliest upcoming pickup - the customer dashboard's "next trip".
pub fn next_reservation(reservations: &[Reservation]) -> Option<&Reservation> {
    reservations
        .iter()
        .filter(|r| r.status.is_upcoming())
        .min_by_key(|r| r.pickup_at())
}

/// Status filter chips on the customer's reservation history.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum HistoryFilter {
    #[default]
    Todas,
    Ativas,
    Finalizadas,
    Canceladas,
}

impl HistoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Todas => "Todas",
            Self::Ativas => "Ativas",
            Self::Finalizadas => "Finalizadas",
            Self::Canceladas => "Canceladas",
        }
    }

    pub fn accepts(&self, status: ReservationStatus) -> bool {
        match self {
            Self::Todas => true,
            Self::Ativas => status.is_active(),
            Self::Finalizadas => status == ReservationStatus::Finalizada,
            Self::Canceladas => status == ReservationStatus::Cancelada,
        }
    }
}

/// Payload for `POST /reservas/simulacao`.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRequest {
    pub veiculo_id: i64,
    pub data_retirada: String,
    pub data_devolucao: String,
    pub seguro_pessoal: bool,
    pub seguro_terceiros: bool,
}

/// Server-computed price preview; never derived locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResponse {
    pub quantidade_diarias: i64,
    pub valor_diarias: f64,
    pub valor_seguros: f64,
    pub valor_total_estimado: f64,
}

/// Payload for `POST /reservas/`. Same shape as the simulation plus the
/// responsible driver for company accounts.
#[derive(Debug, Clone, Serialize)]
pub struct CreateReservationRequest {
    pub veiculo_id: i64,
    pub data_retirada: String,
    pub data_devolucao: String,
    pub seguro_pessoal: bool,
    pub seguro_terceiros: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motorista_id: Option<i64>,
}

/// Payload for `PUT /reservas/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateReservationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_retirada: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_devolucao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seguro_pessoal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seguro_terceiros: Option<bool>,
}

/// Validation gate the wizard runs before asking the server for a price
/// simulation. Returns the inline message to display when the gate fails.
pub fn simulation_gate(
    is_company: bool,
    driver_id: Option<i64>,
    vehicle_id: Option<i64>,
    data_retirada: &str,
    data_devolucao: &str,
) -> Result<(), &'static str> {
    if is_company && driver_id.is_none() {
        return Err("Selecione o motorista responsável.");
    }
    if vehicle_id.is_none() || data_retirada.is_empty() || data_devolucao.is_empty() {
        return Err("Selecione as datas de retirada e devolução.");
    }
    Ok(())
}
