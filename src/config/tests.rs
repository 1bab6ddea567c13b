// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for configuration module

#[cfg(test)]
mod test {
    use super::super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.port, 3001);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3001");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(
            config.cors.allowed_methods,
            vec![
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS
            ]
        );
        assert_eq!(
            config.cors.allowed_headers,
            vec![header::CONTENT_TYPE, header::AUTHORIZATION]
        );
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, defaults::PORT);
        assert_eq!(config.cors.allowed_origins.len(), 1);
    }

    #[test]
    fn test_port_override() {
        let config = Config::from_lookup(lookup_from(&[("PORT", " 8080 ")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr().port(), 8080);
    }

    #[test]
    fn test_invalid_port_rejected() {
        for raw in ["abc", "0", "65536", "-1", ""] {
            let err = Config::from_lookup(lookup_from(&[("PORT", raw)])).unwrap_err();
            assert!(
                matches!(err, AppError::Config(ref msg) if msg.contains("PORT")),
                "PORT={raw:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_origin_list_parsing() {
        let config = Config::from_lookup(lookup_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:3000, https://lingo.example/ ,,",
        )]))
        .unwrap();
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://localhost:3000", "https://lingo.example"]
        );
    }

    #[test]
    fn test_blank_origin_list_keeps_default() {
        let config =
            Config::from_lookup(lookup_from(&[("CORS_ALLOWED_ORIGINS", " , ")])).unwrap();
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let err = Config::from_lookup(lookup_from(&[("CORS_ALLOWED_ORIGINS", "http://a\nb")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_wildcard_origin_rejected() {
        let err = Config::from_lookup(lookup_from(&[("CORS_ALLOWED_ORIGINS", "*")])).unwrap_err();
        assert!(matches!(err, AppError::Config(ref msg) if msg.contains("Wildcard")));
    }
}
