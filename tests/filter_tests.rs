mod common;

#[cfg(test)]
pub mod filter_tests {
    use chrono::NaiveDate;

    use super::common::*;

    use frotanext::models::*;

    #[test]
    fn test_vehicle_search_matches_model_and_plate() {
        let veiculo = seed_vehicle(1, "Polo Track", "RIO2A18", VehicleStatus::Disponivel);

        assert!(veiculo.matches_search("polo"));
        assert!(veiculo.matches_search("TRACK"));
        assert!(veiculo.matches_search("rio2"));
        assert!(veiculo.matches_search(""));
        assert!(!veiculo.matches_search("onix"));
    }

    #[test]
    fn test_reservation_search_matches_id_model_and_plate() {
        let reserva = seed_reservation(
            123,
            ReservationStatus::Confirmada,
            "2026-08-10T09:00:00",
            "2026-08-13T09:00:00",
        );

        assert!(reserva.matches_search("123"));
        assert!(reserva.matches_search("polo"));
        assert!(reserva.matches_search("bra2e19"));
        assert!(!reserva.matches_search("999"));
    }

    #[test]
    fn test_customer_search_matches_name_document_and_email() {
        let cliente = seed_customer_pf(1, "Ana Souza", "111.444.777-35", "ana@teste.com");

        assert!(cliente.matches_search("ana"));
        assert!(cliente.matches_search("souza"));
        assert!(cliente.matches_search("111.444"));
        assert!(cliente.matches_search("TESTE.COM"));
        assert!(!cliente.matches_search("silva"));
    }

    #[test]
    fn test_history_filter_subsets() {
        let statuses = [
            ReservationStatus::Pendente,
            ReservationStatus::Confirmada,
            ReservationStatus::EmAndamento,
            ReservationStatus::Finalizada,
            ReservationStatus::Cancelada,
        ];

        let accepted = |filtro: HistoryFilter| {
            statuses
                .iter()
                .copied()
                .filter(|s| filtro.accepts(*s))
                .collect::<Vec<_>>()
        };

        assert_eq!(accepted(HistoryFilter::Todas).len(), 5);
        assert_eq!(
            accepted(HistoryFilter::Ativas),
            vec![ReservationStatus::Confirmada, ReservationStatus::EmAndamento]
        );
        assert_eq!(accepted(HistoryFilter::Finalizadas), vec![ReservationStatus::Finalizada]);
        assert_eq!(accepted(HistoryFilter::Canceladas), vec![ReservationStatus::Cancelada]);
    }

    #[test]
    fn test_next_reservation_picks_earliest_upcoming() {
        let reservas = vec![
            seed_reservation(1, ReservationStatus::Finalizada, "2026-08-01T09:00:00", "2026-08-02T09:00:00"),
            seed_reservation(2, ReservationStatus::Confirmada, "2026-08-20T09:00:00", "2026-08-22T09:00:00"),
            seed_reservation(3, ReservationStatus::Pendente, "2026-08-12T09:00:00", "2026-08-14T09:00:00"),
            seed_reservation(4, ReservationStatus::Cancelada, "2026-08-05T09:00:00", "2026-08-06T09:00:00"),
        ];

        let proxima = next_reservation(&reservas).unwrap();
        assert_eq!(proxima.id_reserva, 3);
    }

    #[test]
    fn test_next_reservation_none_without_upcoming() {
        let reservas = vec![
            seed_reservation(1, ReservationStatus::Finalizada, "2026-08-01T09:00:00", "2026-08-02T09:00:00"),
            seed_reservation(2, ReservationStatus::Cancelada, "2026-08-05T09:00:00", "2026-08-06T09:00:00"),
        ];

        assert!(next_reservation(&reservas).is_none());
        assert!(next_reservation(&[]).is_none());
    }

    #[test]
    fn test_dashboard_stats_aggregation() {
        let frota = vec![
            seed_vehicle(1, "Polo", "AAA1A11", VehicleStatus::Disponivel),
            seed_vehicle(2, "Onix", "BBB2B22", VehicleStatus::Disponivel),
            seed_vehicle(3, "Strada", "CCC3C33", VehicleStatus::Alugado),
            seed_vehicle(4, "CG 160", "DDD4D44", VehicleStatus::EmManutencao),
        ];
        let reservas = vec![
            // retirada hoje, ainda confirmada
            seed_reservation(1, ReservationStatus::Confirmada, "2026-08-06T10:00:00", "2026-08-08T10:00:00"),
            // em andamento, devolução hoje
            seed_reservation(2, ReservationStatus::EmAndamento, "2026-08-04T10:00:00", "2026-08-06T18:00:00"),
            // em andamento, devolução futura
            seed_reservation(3, ReservationStatus::EmAndamento, "2026-08-05T10:00:00", "2026-08-09T10:00:00"),
            // pendente não conta para a agenda
            seed_reservation(4, ReservationStatus::Pendente, "2026-08-06T10:00:00", "2026-08-07T10:00:00"),
        ];
        let hoje = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        let stats = DashboardStats::compute(&frota, &reservas, hoje);

        assert_eq!(stats.fleet_total, 4);
        assert_eq!(stats.fleet_available, 2);
        assert_eq!(stats.fleet_occupied, 2);
        assert_eq!(stats.reservations_in_progress, 2);
        assert_eq!(stats.revenue_in_progress, 1080.0);
        assert_eq!(stats.pickups_today, 1);
        assert_eq!(stats.returns_today, 1);
        assert_eq!(stats.actions_today(), 2);
    }
}
