use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use frotanext::models::*;

/// Builds an unsigned JWT-shaped token whose payload is the given JSON.
pub fn make_token(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.assinatura")
}

pub fn seed_vehicle(id: i64, modelo: &str, placa: &str, status: VehicleStatus) -> Vehicle {
    Vehicle {
        id_veiculo: id,
        marca: "Volkswagen".to_string(),
        modelo: modelo.to_string(),
        ano_fabricacao: 2023,
        ano_modelo: 2024,
        cor: "Prata".to_string(),
        placa: placa.to_string(),
        valor_diaria: 180.0,
        imagem_url: None,
        status,
        tipo_veiculo: VehicleCategory::Passeio,
        chassi: "9BWZZZ377VT004251".to_string(),
        capacidade_tanque: 50.0,
        tipo_carroceria: Some("Hatch".to_string()),
        qtde_portas: Some(4),
        qtde_passageiros: Some(5),
        cambio_automatico: Some(false),
        ar_condicionado: Some(true),
        cilindrada: None,
        tipo_tracao: None,
        abs: None,
        partida_eletrica: None,
        modos_pilotagem: None,
        tipo_utilitario: None,
        capacidade_carga_kg: None,
        capacidade_carga_m3: None,
        tipo_carga: None,
        qtde_eixos: None,
        max_passageiros: None,
        motor: Some("1.0 TSI".to_string()),
    }
}

pub fn seed_reservation(
    id: i64,
    status: ReservationStatus,
    data_retirada: &str,
    data_devolucao: &str,
) -> Reservation {
    Reservation {
        id_reserva: id,
        data_retirada: data_retirada.to_string(),
        data_devolucao: data_devolucao.to_string(),
        valor_total_estimado: 540.0,
        status,
        seguro_pessoal: false,
        seguro_terceiros: true,
        veiculo: seed_vehicle(id * 10, "Polo", "BRA2E19", VehicleStatus::Reservado),
        motorista: None,
    }
}

pub fn seed_address() -> Address {
    Address {
        cep: "01310-100".to_string(),
        rua: "Avenida Paulista".to_string(),
        numero: "1578".to_string(),
        complemento: None,
        bairro: "Bela Vista".to_string(),
        cidade: "São Paulo".to_string(),
        estado: "SP".to_string(),
    }
}

pub fn seed_customer_pf(id: i64, nome: &str, cpf: &str, email: &str) -> CustomerProfile {
    CustomerProfile {
        id_pessoa: id,
        email: email.to_string(),
        telefone: "(11) 98765-4321".to_string(),
        endereco: seed_address(),
        e_ativo: true,
        data_criacao: "2025-03-10T14:30:00".to_string(),
        nome_completo: Some(nome.to_string()),
        cpf: Some(cpf.to_string()),
        cnh: Some("12345678900".to_string()),
        razao_social: None,
        cnpj: None,
        motoristas: None,
        tipo_cliente: CustomerKind::Pf,
    }
}

pub fn seed_customer_pj(id: i64, razao_social: &str, cnpj: &str, email: &str) -> CustomerProfile {
    CustomerProfile {
        id_pessoa: id,
        email: email.to_string(),
        telefone: "(11) 4002-8922".to_string(),
        endereco: seed_address(),
        e_ativo: true,
        data_criacao: "2025-01-22T09:00:00".to_string(),
        nome_completo: None,
        cpf: None,
        cnh: None,
        razao_social: Some(razao_social.to_string()),
        cnpj: Some(cnpj.to_string()),
        motoristas: Some(vec![DriverSummary {
            id_pessoa: 900 + id,
            nome_completo: "Carlos Andrade".to_string(),
            cpf: "390.533.447-05".to_string(),
            email: "carlos@empresa.com".to_string(),
        }]),
        tipo_cliente: CustomerKind::Pj,
    }
}
