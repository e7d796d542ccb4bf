#[cfg(test)]
pub mod error_tests {
    use frotanext::common::errors::ApiError;

    #[test]
    fn test_detail_string_is_passed_through() {
        let err = ApiError::from_status_body(409, r#"{"detail":"Veículo indisponível no período."}"#);

        assert_eq!(err.status(), Some(409));
        assert_eq!(err.user_message(), "Veículo indisponível no período.");
    }

    #[test]
    fn test_validation_array_uses_first_message() {
        let body = r#"{"detail":[{"loc":["body","data_retirada"],"msg":"data no passado"},{"msg":"outro"}]}"#;
        let err = ApiError::from_status_body(422, body);

        assert_eq!(err.user_message(), "Erro de validação: data no passado");
    }

    #[test]
    fn test_fallback_on_empty_body() {
        let err = ApiError::from_status_body(500, "");
        assert_eq!(err.user_message(), "Erro inesperado do servidor (500).");
    }

    #[test]
    fn test_fallback_on_non_json_body() {
        let err = ApiError::from_status_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.user_message(), "Erro inesperado do servidor (502).");
    }

    #[test]
    fn test_fallback_on_unexpected_detail_shape() {
        let err = ApiError::from_status_body(400, r#"{"detail":{"campo":"valor"}}"#);
        assert_eq!(err.user_message(), "Erro inesperado do servidor (400).");
    }

    #[test]
    fn test_fallback_on_missing_detail_key() {
        let err = ApiError::from_status_body(404, r#"{"mensagem":"não encontrado"}"#);
        assert_eq!(err.user_message(), "Erro inesperado do servidor (404).");
    }
}
