mod common;

#[cfg(test)]
pub mod model_tests {
    use super::common::*;

    use frotanext::models::*;

    #[test]
    fn test_vehicle_status_wire_names_roundtrip() {
        for status in [
            VehicleStatus::Disponivel,
            VehicleStatus::Reservado,
            VehicleStatus::Alugado,
            VehicleStatus::EmManutencao,
            VehicleStatus::Indisponivel,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let parsed: VehicleStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_vehicle_status_accented_wire_names() {
        assert_eq!(VehicleStatus::Disponivel, "disponível");
        assert_eq!(VehicleStatus::EmManutencao, "em manutenção");
        assert_eq!(VehicleStatus::Indisponivel, "indisponível");
    }

    #[test]
    fn test_vehicle_status_from_str_success() {
        assert_eq!("disponível".parse::<VehicleStatus>(), Ok(VehicleStatus::Disponivel));
        assert_eq!("EM MANUTENÇÃO".parse::<VehicleStatus>(), Ok(VehicleStatus::EmManutencao));
    }

    #[test]
    fn test_vehicle_status_from_str_fails_on_unknown() {
        assert!("quebrado".parse::<VehicleStatus>().is_err());
    }

    #[test]
    fn test_vehicle_status_occupancy() {
        assert!(!VehicleStatus::Disponivel.is_occupied());
        assert!(VehicleStatus::Reservado.is_occupied());
        assert!(VehicleStatus::Alugado.is_occupied());
        assert!(VehicleStatus::EmManutencao.is_occupied());
        assert!(VehicleStatus::Indisponivel.is_occupied());
    }

    #[test]
    fn test_vehicle_status_blocks_status_edit() {
        assert!(VehicleStatus::Reservado.blocks_status_edit());
        assert!(VehicleStatus::Alugado.blocks_status_edit());
        assert!(!VehicleStatus::Disponivel.blocks_status_edit());
        assert!(!VehicleStatus::EmManutencao.blocks_status_edit());
    }

    #[test]
    fn test_vehicle_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&VehicleCategory::Utilitario).unwrap(),
            "\"utilitario\""
        );
        assert_eq!("motocicleta".parse::<VehicleCategory>(), Ok(VehicleCategory::Motocicleta));
        assert!("bicicleta".parse::<VehicleCategory>().is_err());
    }

    #[test]
    fn test_reservation_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::EmAndamento).unwrap(),
            "\"em_andamento\""
        );
        assert_eq!("finalizada".parse::<ReservationStatus>(), Ok(ReservationStatus::Finalizada));
    }

    #[test]
    fn test_reservation_status_gating() {
        assert!(ReservationStatus::Pendente.can_cancel());
        assert!(ReservationStatus::Confirmada.can_cancel());
        assert!(!ReservationStatus::EmAndamento.can_cancel());
        assert!(!ReservationStatus::Finalizada.can_cancel());

        assert!(ReservationStatus::Pendente.can_modify());
        assert!(ReservationStatus::Confirmada.can_modify());
        assert!(ReservationStatus::EmAndamento.can_modify());
        assert!(!ReservationStatus::Cancelada.can_modify());

        assert!(ReservationStatus::Pendente.is_upcoming());
        assert!(!ReservationStatus::Pendente.is_active());
        assert!(ReservationStatus::EmAndamento.is_active());
        assert!(!ReservationStatus::Cancelada.is_upcoming());
    }

    #[test]
    fn test_reservation_deserializes_server_payload() {
        let json = r#"{
            "id_reserva": 15,
            "data_retirada": "2026-08-10T09:00:00",
            "data_devolucao": "2026-08-13T09:00:00",
            "valor_total_estimado": 615.5,
            "status": "confirmada",
            "seguro_pessoal": true,
            "seguro_terceiros": false,
            "veiculo": {
                "id_veiculo": 3,
                "marca": "Honda",
                "modelo": "CG 160",
                "ano_fabricacao": 2024,
                "ano_modelo": 2024,
                "cor": "Vermelha",
                "placa": "XYZ1A23",
                "valor_diaria": 75.0,
                "status": "reservado",
                "tipo_veiculo": "motocicleta",
                "chassi": "9C2KC0810ER400001",
                "capacidade_tanque": 16.1,
                "cilindrada": 162,
                "abs": true
            },
            "motorista": {
                "id_pessoa": 88,
                "nome_completo": "Carlos Andrade",
                "cpf": "390.533.447-05",
                "email": "carlos@empresa.com"
            }
        }"#;

        let reserva: Reservation = serde_json::from_str(json).unwrap();
        assert_eq!(reserva.status, ReservationStatus::Confirmada);
        assert_eq!(reserva.veiculo.tipo_veiculo, VehicleCategory::Motocicleta);
        assert_eq!(reserva.veiculo.cilindrada, Some(162));
        assert!(reserva.veiculo.qtde_portas.is_none());
        assert_eq!(reserva.motorista.unwrap().id_pessoa, 88);
    }

    #[test]
    fn test_customer_kind_defaults_to_pf_when_absent() {
        let json = r#"{
            "id_pessoa": 1,
            "email": "ana@teste.com",
            "telefone": "(11) 98765-4321",
            "endereco": {
                "cep": "01310-100",
                "rua": "Avenida Paulista",
                "numero": "1578",
                "bairro": "Bela Vista",
                "cidade": "São Paulo",
                "estado": "SP"
            },
            "e_ativo": true,
            "data_criacao": "2025-03-10T14:30:00",
            "nome_completo": "Ana Souza",
            "cpf": "111.444.777-35"
        }"#;

        let cliente: CustomerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(cliente.tipo_cliente, CustomerKind::Pf);
        assert!(cliente.endereco.complemento.is_none());
        assert!(cliente.drivers().is_empty());
    }

    #[test]
    fn test_customer_display_name_and_document() {
        let pf = seed_customer_pf(1, "Ana Souza", "111.444.777-35", "ana@teste.com");
        assert_eq!(pf.display_name(), "Ana Souza");
        assert_eq!(pf.document(), Some("111.444.777-35"));
        assert!(!pf.is_company());

        let pj = seed_customer_pj(2, "Transportes Silva", "12.345.678/0001-95", "contato@silva.com");
        assert_eq!(pj.display_name(), "Transportes Silva");
        assert_eq!(pj.document(), Some("12.345.678/0001-95"));
        assert!(pj.is_company());
        assert_eq!(pj.drivers().len(), 1);
    }

    #[test]
    fn test_update_vehicle_request_skips_absent_fields() {
        let data = UpdateVehicleRequest {
            valor_diaria: Some(210.0),
            ..Default::default()
        };
        let json = serde_json::to_value(&data).unwrap();

        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["valor_diaria"], 210.0);
    }

    #[test]
    fn test_create_reservation_request_omits_driver_for_pf() {
        let data = CreateReservationRequest {
            veiculo_id: 3,
            data_retirada: "2026-08-10T09:00:00".to_string(),
            data_devolucao: "2026-08-13T09:00:00".to_string(),
            seguro_pessoal: false,
            seguro_terceiros: true,
            motorista_id: None,
        };
        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("motorista_id").is_none());
    }

    #[test]
    fn test_account_status_wire_names() {
        assert_eq!(serde_json::to_string(&AccountStatus::Ativo).unwrap(), "\"ativo\"");
        assert_eq!(serde_json::to_string(&AccountStatus::Bloqueado).unwrap(), "\"bloqueado\"");
    }
}
