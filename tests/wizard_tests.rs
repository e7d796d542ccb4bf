#[cfg(test)]
pub mod wizard_tests {
    use frotanext::common::dates;
    use frotanext::frontend::pages::WizardStep;
    use frotanext::models::simulation_gate;

    #[test]
    fn test_simulation_gate_success() {
        let gate = simulation_gate(false, None, Some(3), "2026-08-10T09:00", "2026-08-13T09:00");
        assert!(gate.is_ok());
    }

    #[test]
    fn test_simulation_gate_success_for_company_with_driver() {
        let gate = simulation_gate(true, Some(88), Some(3), "2026-08-10T09:00", "2026-08-13T09:00");
        assert!(gate.is_ok());
    }

    #[test]
    fn test_simulation_gate_fails_on_company_without_driver() {
        let gate = simulation_gate(true, None, Some(3), "2026-08-10T09:00", "2026-08-13T09:00");
        assert_eq!(gate, Err("Selecione o motorista responsável."));
    }

    #[test]
    fn test_simulation_gate_fails_on_missing_dates() {
        let sem_retirada = simulation_gate(false, None, Some(3), "", "2026-08-13T09:00");
        assert_eq!(sem_retirada, Err("Selecione as datas de retirada e devolução."));

        let sem_devolucao = simulation_gate(false, None, Some(3), "2026-08-10T09:00", "");
        assert_eq!(sem_devolucao, Err("Selecione as datas de retirada e devolução."));
    }

    #[test]
    fn test_simulation_gate_fails_on_missing_vehicle() {
        let gate = simulation_gate(false, None, None, "2026-08-10T09:00", "2026-08-13T09:00");
        assert_eq!(gate, Err("Selecione as datas de retirada e devolução."));
    }

    #[test]
    fn test_simulation_gate_driver_check_comes_first() {
        // A company account with nothing filled in is told about the driver
        // before the dates.
        let gate = simulation_gate(true, None, None, "", "");
        assert_eq!(gate, Err("Selecione o motorista responsável."));
    }

    #[test]
    fn test_wizard_steps_are_linear() {
        assert_eq!(WizardStep::default(), WizardStep::SelectVehicle);
        assert_eq!(WizardStep::SelectVehicle.index(), 1);
        assert_eq!(WizardStep::EnterDetails.index(), 2);
        assert_eq!(WizardStep::ReviewAndConfirm.index(), 3);
    }

    #[test]
    fn test_wizard_progress_percent() {
        assert_eq!(WizardStep::SelectVehicle.progress_percent(), "33%");
        assert_eq!(WizardStep::EnterDetails.progress_percent(), "66%");
        assert_eq!(WizardStep::ReviewAndConfirm.progress_percent(), "100%");
    }

    #[test]
    fn test_normalize_datetime_local_appends_seconds() {
        assert_eq!(
            dates::normalize_datetime_local("2026-08-10T09:30"),
            "2026-08-10T09:30:00"
        );
    }

    #[test]
    fn test_normalize_datetime_local_keeps_full_timestamps() {
        assert_eq!(
            dates::normalize_datetime_local("2026-08-10T09:30:15"),
            "2026-08-10T09:30:15"
        );
        assert_eq!(dates::normalize_datetime_local(""), "");
    }

    #[test]
    fn test_to_input_value_truncates_to_minutes() {
        assert_eq!(dates::to_input_value("2026-08-10T09:30:15"), "2026-08-10T09:30");
        assert_eq!(dates::to_input_value("2026-08-10T09:30"), "2026-08-10T09:30");
        assert_eq!(dates::to_input_value(""), "");
    }

    #[test]
    fn test_parse_iso_accepts_server_and_input_formats() {
        assert!(dates::parse_iso("2026-08-10T09:30").is_some());
        assert!(dates::parse_iso("2026-08-10T09:30:15").is_some());
        assert!(dates::parse_iso("2026-08-10T09:30:15.123456").is_some());
        assert!(dates::parse_iso("2026-08-10T09:30:15Z").is_some());
        assert!(dates::parse_iso("10/08/2026").is_none());
    }

    #[test]
    fn test_format_br_display() {
        assert_eq!(dates::format_br("2026-08-10T09:05:00"), "10/08/2026 09:05");
        assert_eq!(dates::format_br_date("2026-08-10T09:05:00"), "10/08/2026");
        // Unparseable values are echoed back instead of panicking.
        assert_eq!(dates::format_br("data inválida"), "data inválida");
    }
}
