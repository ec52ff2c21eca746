//! Callback token codec for menu navigation
//!
//! Every inline button carries an opaque colon-delimited token. A token maps
//! onto exactly one [`Screen`]; anything else is a [`DecodeError`]. There is
//! no server-side session state: the token alone carries the page number and
//! drill-down parameters needed to rebuild the screen.

use std::fmt;

/// A menu screen together with the parameters needed to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Main menu
    Home,
    /// Paginated manufacturer grid
    ManufacturerList { page: usize },
    /// Paginated model list for one manufacturer
    ModelList { manufacturer: String, page: usize },
    /// Sensitivity details for a single model
    ModelDetail { manufacturer: String, model: String },
}

/// Failure to map a callback token onto a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The token names no known screen
    UnknownScreen(String),
    /// The token matched a screen kind but its parameters are missing or malformed
    BadParameters(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownScreen(token) => write!(f, "Unknown screen token: {token}"),
            DecodeError::BadParameters(token) => write!(f, "Malformed token parameters: {token}"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl Screen {
    /// Render the screen as a callback token understood by [`Screen::decode`].
    ///
    /// Page 0 uses the short entry tokens (`manufacturers`,
    /// `manufacturer:<id>`) so the main menu and footer buttons stay
    /// identical to what the paginated navigation produces for page 0.
    pub fn encode(&self) -> String {
        match self {
            Screen::Home => "home".to_string(),
            Screen::ManufacturerList { page: 0 } => "manufacturers".to_string(),
            Screen::ManufacturerList { page } => format!("manufacturers_page:{page}"),
            Screen::ModelList {
                manufacturer,
                page: 0,
            } => format!("manufacturer:{manufacturer}"),
            Screen::ModelList { manufacturer, page } => {
                format!("models_page:{manufacturer}:{page}")
            }
            Screen::ModelDetail {
                manufacturer,
                model,
            } => format!("model:{manufacturer}:{model}"),
        }
    }

    /// Decode a callback token into a screen.
    pub fn decode(token: &str) -> Result<Screen, DecodeError> {
        let (kind, rest) = match token.split_once(':') {
            Some((kind, rest)) => (kind, Some(rest)),
            None => (token, None),
        };

        match (kind, rest) {
            ("home", None) => Ok(Screen::Home),
            ("manufacturers", None) => Ok(Screen::ManufacturerList { page: 0 }),
            ("manufacturers_page", Some(page)) => Ok(Screen::ManufacturerList {
                page: parse_page(token, page)?,
            }),
            ("manufacturer", Some(id)) => Ok(Screen::ModelList {
                manufacturer: parse_id(token, id)?,
                page: 0,
            }),
            ("models_page", Some(rest)) => {
                let (id, page) = rest
                    .split_once(':')
                    .ok_or_else(|| DecodeError::BadParameters(token.to_string()))?;
                Ok(Screen::ModelList {
                    manufacturer: parse_id(token, id)?,
                    page: parse_page(token, page)?,
                })
            }
            ("model", Some(rest)) => {
                // The model name may itself contain colons, so only the id is
                // split off.
                let (id, name) = rest
                    .split_once(':')
                    .ok_or_else(|| DecodeError::BadParameters(token.to_string()))?;
                if name.is_empty() {
                    return Err(DecodeError::BadParameters(token.to_string()));
                }
                Ok(Screen::ModelDetail {
                    manufacturer: parse_id(token, id)?,
                    model: name.to_string(),
                })
            }
            _ => Err(DecodeError::UnknownScreen(token.to_string())),
        }
    }
}

fn parse_page(token: &str, field: &str) -> Result<usize, DecodeError> {
    field
        .parse::<usize>()
        .map_err(|_| DecodeError::BadParameters(token.to_string()))
}

fn parse_id(token: &str, field: &str) -> Result<String, DecodeError> {
    if field.is_empty() || field.contains(':') {
        return Err(DecodeError::BadParameters(token.to_string()));
    }
    Ok(field.to_string())
}
