//! # Navigation Tests
//!
//! Unit tests for the callback token codec: every valid token shape decodes
//! to exactly one screen, encode/decode round-trips exactly, and malformed
//! tokens fail without panicking.

use sensitivities::navigation::{DecodeError, Screen};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_round_trip() {
        let screen = Screen::Home;
        assert_eq!(screen.encode(), "home");
        assert_eq!(Screen::decode("home").unwrap(), screen);
    }

    #[test]
    fn test_manufacturer_list_round_trip() {
        for page in [0, 1, 7, 42] {
            let screen = Screen::ManufacturerList { page };
            assert_eq!(Screen::decode(&screen.encode()).unwrap(), screen);
        }
    }

    #[test]
    fn test_model_list_round_trip() {
        for page in [0, 1, 3] {
            let screen = Screen::ModelList {
                manufacturer: "acme".to_string(),
                page,
            };
            assert_eq!(Screen::decode(&screen.encode()).unwrap(), screen);
        }
    }

    #[test]
    fn test_model_detail_round_trip() {
        let screen = Screen::ModelDetail {
            manufacturer: "acme".to_string(),
            model: "Phone X2".to_string(),
        };
        assert_eq!(screen.encode(), "model:acme:Phone X2");
        assert_eq!(Screen::decode(&screen.encode()).unwrap(), screen);
    }

    #[test]
    fn test_model_name_may_contain_colons() {
        let screen = Screen::ModelDetail {
            manufacturer: "acme".to_string(),
            model: "Mark II: Pro".to_string(),
        };
        assert_eq!(Screen::decode(&screen.encode()).unwrap(), screen);
    }

    #[test]
    fn test_explicit_page_tokens_decode() {
        assert_eq!(
            Screen::decode("manufacturers_page:3").unwrap(),
            Screen::ManufacturerList { page: 3 }
        );
        assert_eq!(
            Screen::decode("models_page:acme:2").unwrap(),
            Screen::ModelList {
                manufacturer: "acme".to_string(),
                page: 2
            }
        );
        // Page 0 in explicit form is accepted even though encode prefers
        // the short entry tokens.
        assert_eq!(
            Screen::decode("manufacturers_page:0").unwrap(),
            Screen::ManufacturerList { page: 0 }
        );
        assert_eq!(
            Screen::decode("models_page:acme:0").unwrap(),
            Screen::ModelList {
                manufacturer: "acme".to_string(),
                page: 0
            }
        );
    }

    #[test]
    fn test_unknown_tokens_are_decode_failures() {
        for token in ["", "bogus", "home:extra", "manufacturers:1", "model"] {
            assert!(
                matches!(Screen::decode(token), Err(DecodeError::UnknownScreen(_))),
                "expected UnknownScreen for {token:?}"
            );
        }
    }

    #[test]
    fn test_malformed_parameters_are_decode_failures() {
        for token in [
            "manufacturers_page:",
            "manufacturers_page:abc",
            "manufacturers_page:-1",
            "manufacturers_page:1:2",
            "manufacturer:",
            "models_page:acme",
            "models_page::1",
            "models_page:acme:last",
            "model:acme:",
            "model::Ghost",
        ] {
            assert!(
                matches!(Screen::decode(token), Err(DecodeError::BadParameters(_))),
                "expected BadParameters for {token:?}"
            );
        }
    }

    #[test]
    fn test_decode_error_messages_name_the_token() {
        let err = Screen::decode("manufacturers_page:abc").unwrap_err();
        assert!(err.to_string().contains("manufacturers_page:abc"));
    }
}
