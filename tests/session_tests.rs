mod common;

#[cfg(test)]
pub mod session_tests {
    use super::common::*;

    use frotanext::common::errors::TokenError;
    use frotanext::models::*;

    #[test]
    fn test_decode_claims_success() {
        let token = make_token(
            r#"{"sub":"42","email":"ana@teste.com","tipo":"pessoa_fisica","exp":1767225600}"#,
        );
        let claims = decode_claims(&token).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.email.as_deref(), Some("ana@teste.com"));
        assert_eq!(claims.tipo.as_deref(), Some("pessoa_fisica"));
        assert_eq!(claims.exp, Some(1767225600));
    }

    #[test]
    fn test_decode_claims_success_on_minimal_payload() {
        let token = make_token(r#"{"sub":"admin-1"}"#);
        let claims = decode_claims(&token).unwrap();

        assert_eq!(claims.sub, "admin-1");
        assert!(claims.email.is_none());
        assert!(claims.tipo.is_none());
        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_decode_claims_success_on_expired_token() {
        // Expiry is not checked client-side; the server rejects stale tokens.
        let token = make_token(r#"{"sub":"42","tipo":"pessoa_fisica","exp":1}"#);
        assert!(decode_claims(&token).is_ok());
    }

    #[test]
    fn test_decode_claims_fails_on_missing_segments() {
        assert_eq!(decode_claims("abc.def"), Err(TokenError::Malformed));
        assert_eq!(decode_claims("somente-um-segmento"), Err(TokenError::Malformed));
        assert_eq!(decode_claims(""), Err(TokenError::Malformed));
    }

    #[test]
    fn test_decode_claims_fails_on_extra_segments() {
        assert_eq!(decode_claims("a.b.c.d"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_decode_claims_fails_on_invalid_base64() {
        assert_eq!(decode_claims("cabecalho.%%%.assinatura"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_decode_claims_fails_on_non_json_payload() {
        let token = make_token("isto não é json");
        assert_eq!(decode_claims(&token), Err(TokenError::InvalidPayload));
    }

    #[test]
    fn test_role_from_tipo_pessoa_fisica() {
        assert_eq!(UserRole::from_tipo(Some("pessoa_fisica")), UserRole::ClientePf);
    }

    #[test]
    fn test_role_from_tipo_pessoa_juridica() {
        assert_eq!(UserRole::from_tipo(Some("pessoa_juridica")), UserRole::ClientePj);
    }

    #[test]
    fn test_role_from_tipo_defaults_to_admin() {
        // Admin tokens carry no `tipo` claim.
        assert_eq!(UserRole::from_tipo(None), UserRole::Admin);
        assert_eq!(UserRole::from_tipo(Some("outro")), UserRole::Admin);
    }

    #[test]
    fn test_session_user_from_claims_success() {
        let token = make_token(r#"{"sub":"7","email":"pj@empresa.com","tipo":"pessoa_juridica"}"#);
        let user = SessionUser::from_claims(decode_claims(&token).unwrap());

        assert_eq!(user.id, "7");
        assert_eq!(user.email, "pj@empresa.com");
        assert_eq!(user.role, UserRole::ClientePj);
        assert!(user.is_authenticated);
        assert!(user.role.is_company());
        assert!(!user.role.is_admin());
    }

    #[test]
    fn test_session_user_email_falls_back_to_sub() {
        let token = make_token(r#"{"sub":"admin@frotanext.com"}"#);
        let user = SessionUser::from_claims(decode_claims(&token).unwrap());

        assert_eq!(user.email, "admin@frotanext.com");
        assert_eq!(user.role, UserRole::Admin);
    }
}
