use serde::{Deserialize, Serialize};

/// Fleet category, as the API spells it in `tipo_veiculo` and in the
/// category-scoped vehicle routes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Passeio,
    Utilitario,
    Motocicleta,
}

impl VehicleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passeio => "passeio",
            Self::Utilitario => "utilitario",
            Self::Motocicleta => "motocicleta",
        }
    }

    /// Human label shown on filter chips and cards.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Passeio => "Passeio",
            Self::Utilitario => "Utilitário",
            Self::Motocicleta => "Motocicleta",
        }
    }
}

impl Default for VehicleCategory {
    fn default() -> Self {
        Self::Passeio
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for VehicleCategory {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for VehicleCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "passeio" => Ok(Self::Passeio),
            "utilitario" => Ok(Self::Utilitario),
            "motocicleta" => Ok(Self::Motocicleta),
            _ => Err(format!("invalid vehicle category: {}", s)),
        }
    }
}

/// Operational status. The API uses accented pt-BR strings on the wire, so
/// every variant carries an explicit rename.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[default]
    #[serde(rename = "disponível")]
    Disponivel,
    #[serde(rename = "reservado")]
    Reservado,
    #[serde(rename = "alugado")]
    Alugado,
    #[serde(rename = "em manutenção")]
    EmManutencao,
    #[serde(rename = "indisponível")]
    Indisponivel,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disponivel => "disponível",
            Self::Reservado => "reservado",
            Self::Alugado => "alugado",
            Self::EmManutencao => "em manutenção",
            Self::Indisponivel => "indisponível",
        }
    }

    /// Anything a customer cannot rent right now.
    pub fn is_occupied(&self) -> bool {
        !matches!(self, Self::Disponivel)
    }

    /// While a vehicle is reserved or rented its status belongs to the
    /// reservation lifecycle and must not be edited directly.
    pub fn blocks_status_edit(&self) -> bool {
        matches!(self, Self::Reservado | Self::Alugado)
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for VehicleStatus {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disponível" => Ok(Self::Disponivel),
            "reservado" => Ok(Self::Reservado),
            "alugado" => Ok(Self::Alugado),
            "em manutenção" => Ok(Self::EmManutencao),
            "indisponível" => Ok(Self::Indisponivel),
            _ => Err(format!("invalid vehicle status: {}", s)),
        }
    }
}

/// A fleet vehicle as returned by `/veiculos/`. Field names mirror the wire
/// format; category-specific attributes are optional and only populated for
/// the matching `tipo_veiculo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id_veiculo: i64,
    pub marca: String,
    pub modelo: String,
    pub ano_fabricacao: i32,
    pub ano_modelo: i32,
    pub cor: String,
    pub placa: String,
    pub valor_diaria: f64,
    #[serde(default)]
    pub imagem_url: Option<String>,
    pub status: VehicleStatus,
    pub tipo_veiculo: VehicleCategory,

    pub chassi: String,
    pub capacidade_tanque: f64,

    // passeio
    #[serde(default)]
    pub tipo_carroceria: Option<String>,
    #[serde(default)]
    pub qtde_portas: Option<i32>,
    #[serde(default)]
    pub qtde_passageiros: Option<i32>,
    #[serde(default)]
    pub cambio_automatico: Option<bool>,
    #[serde(default)]
    pub ar_condicionado: Option<bool>,

    // motocicleta
    #[serde(default)]
    pub cilindrada: Option<i32>,
    #[serde(default)]
    pub tipo_tracao: Option<String>,
    #[serde(default)]
    pub abs: Option<bool>,
    #[serde(default)]
    pub partida_eletrica: Option<bool>,
    #[serde(default)]
    pub modos_pilotagem: Option<String>,

    // utilitario
    #[serde(default)]
    pub tipo_utilitario: Option<String>,
    #[serde(default)]
    pub capacidade_carga_kg: Option<f64>,
    #[serde(default)]
    pub capacidade_carga_m3: Option<f64>,
    #[serde(default)]
    pub tipo_carga: Option<String>,
    #[serde(default)]
    pub qtde_eixos: Option<i32>,
    #[serde(default)]
    pub max_passageiros: Option<i32>,

    #[serde(default)]
    pub motor: Option<String>,
}

impl Vehicle {
    /// Case-insensitive substring match over model and plate, the search the
    /// admin fleet table offers.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.modelo.to_lowercase().contains(&term)
            || self.placa.to_lowercase().contains(&term)
    }
}

/// Payload for `POST /veiculos/{categoria}`. Category-specific fields are
/// omitted from the body when absent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVehicleRequest {
    pub marca: String,
    pub modelo: String,
    pub ano_fabricacao: i32,
    pub ano_modelo: i32,
    pub cor: String,
    pub placa: String,
    pub valor_diaria: f64,
    pub chassi: String,
    pub capacidade_tanque: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imagem_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_carroceria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qtde_portas: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qtde_passageiros: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cambio_automatico: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ar_condicionado: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cilindrada: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_tracao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partida_eletrica: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_utilitario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacidade_carga_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qtde_eixos: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_passageiros: Option<i32>,
}

/// Payload for `PUT /veiculos/{categoria}/{id}` - only the fields the edit
/// form exposes, all optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateVehicleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modelo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_diaria: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ano_modelo: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,
}
