//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use tracing::warn;

use crate::catalog::{DeviceModel, Manufacturer};
use crate::config::{LinksConfig, PaginationConfig};
use crate::localization::LocalizationManager;
use crate::navigation::Screen;
use crate::pagination::PageWindow;

/// Build the fixed main-menu keyboard: one navigation button plus the
/// external links from configuration.
pub fn build_main_menu(
    localization: &LocalizationManager,
    links: &LinksConfig,
) -> InlineKeyboardMarkup {
    let mut rows = vec![vec![InlineKeyboardButton::callback(
        localization.translate("sensitivity-settings"),
        Screen::ManufacturerList { page: 0 }.encode(),
    )]];

    let link_rows = [
        ("support", links.support.as_str()),
        ("channel", links.channel.as_str()),
        ("request-settings", links.request_settings.as_str()),
        ("download-app", links.download_app.as_str()),
    ];
    for (key, url) in link_rows {
        if let Some(button) = url_button(localization.translate(key), url) {
            rows.push(vec![button]);
        }
    }

    InlineKeyboardMarkup::new(rows)
}

/// Build the paginated manufacturer grid, `columns` buttons per row.
pub fn build_manufacturers_keyboard(
    manufacturers: &[Manufacturer],
    page: usize,
    localization: &LocalizationManager,
    pagination: &PaginationConfig,
) -> InlineKeyboardMarkup {
    let window = PageWindow::new(page, pagination.manufacturers_per_page, manufacturers.len());
    let columns = pagination.manufacturers_columns.max(1);

    let mut rows: Vec<Vec<InlineKeyboardButton>> = window
        .slice(manufacturers)
        .chunks(columns)
        .map(|chunk| {
            chunk
                .iter()
                .map(|manufacturer| {
                    InlineKeyboardButton::callback(
                        manufacturer.display_name.clone(),
                        Screen::ModelList {
                            manufacturer: manufacturer.id.clone(),
                            page: 0,
                        }
                        .encode(),
                    )
                })
                .collect()
        })
        .collect();

    push_navigation_row(&mut rows, &window, |target_page| {
        Screen::ManufacturerList { page: target_page }.encode()
    });

    rows.push(vec![home_button(localization)]);

    InlineKeyboardMarkup::new(rows)
}

/// Build the paginated model list, one model per row.
pub fn build_models_keyboard(
    models: &[DeviceModel],
    manufacturer: &str,
    page: usize,
    localization: &LocalizationManager,
    pagination: &PaginationConfig,
) -> InlineKeyboardMarkup {
    let window = PageWindow::new(page, pagination.models_per_page, models.len());

    let mut rows: Vec<Vec<InlineKeyboardButton>> = window
        .slice(models)
        .iter()
        .map(|model| {
            vec![InlineKeyboardButton::callback(
                model.name.clone(),
                Screen::ModelDetail {
                    manufacturer: manufacturer.to_string(),
                    model: model.name.clone(),
                }
                .encode(),
            )]
        })
        .collect();

    push_navigation_row(&mut rows, &window, |target_page| {
        Screen::ModelList {
            manufacturer: manufacturer.to_string(),
            page: target_page,
        }
        .encode()
    });

    rows.push(vec![
        InlineKeyboardButton::callback(
            localization.translate("back"),
            Screen::ModelList {
                manufacturer: manufacturer.to_string(),
                page: 0,
            }
            .encode(),
        ),
        home_button(localization),
    ]);

    InlineKeyboardMarkup::new(rows)
}

/// Build the fixed keyboard under a model detail view.
pub fn build_model_details_keyboard(
    manufacturer: &str,
    localization: &LocalizationManager,
) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![
        InlineKeyboardButton::callback(
            localization.translate("back"),
            Screen::ModelList {
                manufacturer: manufacturer.to_string(),
                page: 0,
            }
            .encode(),
        ),
        home_button(localization),
    ]])
}

/// Format the detail text for one model.
///
/// Optional fields fall back to a localized "not specified"; sensitivity
/// keys are localized through the normal lookup, so unknown keys come back
/// verbatim.
pub fn format_model_details(
    model: &DeviceModel,
    manufacturer: &str,
    localization: &LocalizationManager,
) -> String {
    let not_specified = localization.translate("not-specified");
    let dpi = model
        .dpi
        .map(|dpi| dpi.to_string())
        .unwrap_or_else(|| not_specified.clone());
    let fire_button = model.fire_button.clone().unwrap_or(not_specified);

    let sensitivities = model
        .sensitivities
        .iter()
        .map(|(key, value)| format!("• {}: {}", localization.translate(key), value))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\n{}\n\n{}\n{}\n\n{}\n{}",
        localization.translate_with_args("model-details-title", &[("name", &model.name)]),
        localization
            .translate_with_args("model-details-manufacturer", &[("manufacturer", manufacturer)]),
        localization.translate_with_args("model-details-dpi", &[("dpi", &dpi)]),
        localization.translate_with_args("model-details-fire-button", &[("fire", &fire_button)]),
        localization.translate("model-details-sensitivities"),
        sensitivities,
    )
}

fn push_navigation_row(
    rows: &mut Vec<Vec<InlineKeyboardButton>>,
    window: &PageWindow,
    encode_page: impl Fn(usize) -> String,
) {
    let mut nav_row = Vec::new();
    if window.has_previous() {
        nav_row.push(InlineKeyboardButton::callback(
            "⬅️",
            encode_page(window.page - 1),
        ));
    }
    if window.has_next() {
        nav_row.push(InlineKeyboardButton::callback(
            "➡️",
            encode_page(window.page + 1),
        ));
    }
    if !nav_row.is_empty() {
        rows.push(nav_row);
    }
}

fn home_button(localization: &LocalizationManager) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(localization.translate("home"), Screen::Home.encode())
}

fn url_button(label: String, url: &str) -> Option<InlineKeyboardButton> {
    match reqwest::Url::parse(url) {
        Ok(parsed) => Some(InlineKeyboardButton::url(label, parsed)),
        Err(e) => {
            warn!(url = %url, error = %e, "Skipping link button with invalid URL");
            None
        }
    }
}
