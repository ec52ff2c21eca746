//! # Catalogue Tests
//!
//! Unit tests for the catalogue shape validation: presence checks on the
//! expected array fields, the production-visibility filter, and tolerant
//! handling of optional and mixed-type model fields.

use sensitivities::catalog::{
    parse_manufacturers, parse_models, CatalogClient, CatalogError, SensitivityValue,
};
use sensitivities::config::DataSourcesConfig;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manufacturers_filtered_to_visible() {
        let body = r#"{"manufacturers":[
            {"name":"Acme","model":"acme","showInProductionApp":true},
            {"name":"Hidden","model":"h","showInProductionApp":false}
        ]}"#;

        let manufacturers = parse_manufacturers(body).unwrap();
        assert_eq!(manufacturers.len(), 1);
        assert_eq!(manufacturers[0].display_name, "Acme");
        assert_eq!(manufacturers[0].id, "acme");
    }

    #[test]
    fn test_visibility_flag_defaults_to_hidden() {
        let body = r#"{"manufacturers":[{"name":"NoFlag","model":"nf"}]}"#;
        let manufacturers = parse_manufacturers(body).unwrap();
        assert!(manufacturers.is_empty());
    }

    #[test]
    fn test_missing_manufacturers_field() {
        let body = r#"{"vendors":[]}"#;
        assert!(matches!(
            parse_manufacturers(body),
            Err(CatalogError::MissingField("manufacturers"))
        ));
    }

    #[test]
    fn test_malformed_json_body() {
        assert!(matches!(
            parse_manufacturers("not json at all"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let body = r#"{"manufacturers":[
            {"name":"Acme","model":"acme","showInProductionApp":true},
            {"model":42},
            "not an object"
        ]}"#;

        let manufacturers = parse_manufacturers(body).unwrap();
        assert_eq!(manufacturers.len(), 1);
    }

    #[test]
    fn test_models_with_optional_fields() {
        let body = r#"{"models":[
            {"name":"Phone X2","dpi":480,"fire_button":"right",
             "sensitivities":{"review":100,"collimator":92.5,"free_look":"max"}},
            {"name":"Phone Lite"}
        ]}"#;

        let models = parse_models(body).unwrap();
        assert_eq!(models.len(), 2);

        assert_eq!(models[0].dpi, Some(480));
        assert_eq!(models[0].fire_button.as_deref(), Some("right"));
        assert_eq!(
            models[0].sensitivities.get("review"),
            Some(&SensitivityValue::Number(100.0))
        );
        assert_eq!(
            models[0].sensitivities.get("free_look"),
            Some(&SensitivityValue::Text("max".to_string()))
        );

        assert_eq!(models[1].dpi, None);
        assert_eq!(models[1].fire_button, None);
        assert!(models[1].sensitivities.is_empty());
    }

    #[test]
    fn test_missing_models_field() {
        let body = r#"{"manufacturers":[]}"#;
        assert!(matches!(
            parse_models(body),
            Err(CatalogError::MissingField("models"))
        ));
    }

    #[test]
    fn test_duplicate_model_names_resolve_to_first_in_fetch_order() {
        let body = r#"{"models":[
            {"name":"Phone","dpi":400},
            {"name":"Phone","dpi":800}
        ]}"#;

        let models = parse_models(body).unwrap();
        let found = models.iter().find(|model| model.name == "Phone").unwrap();
        assert_eq!(found.dpi, Some(400));
    }

    #[test]
    fn test_sensitivity_values_render_cleanly() {
        assert_eq!(SensitivityValue::Number(100.0).to_string(), "100");
        assert_eq!(SensitivityValue::Number(92.5).to_string(), "92.5");
        assert_eq!(SensitivityValue::Text("max".to_string()).to_string(), "max");
    }

    #[test]
    fn test_client_builds_from_config() {
        let client = CatalogClient::new(&DataSourcesConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_error_display_names_the_field() {
        let err = CatalogError::MissingField("models");
        assert_eq!(err.to_string(), "Missing expected field: models");
    }
}
