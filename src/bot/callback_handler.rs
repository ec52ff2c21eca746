//! Callback Handler module for processing inline keyboard callback queries
//!
//! Navigation always edits the message the user is looking at; a new message
//! is only ever sent for the first `/start` contact. Decode and fetch
//! failures are caught here and rendered as a short localized error screen;
//! a handler fault never takes the process down.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId};
use tracing::{debug, error, warn};

use crate::navigation::Screen;

use super::ui_builder::{
    build_main_menu, build_manufacturers_keyboard, build_model_details_keyboard,
    build_models_keyboard, format_model_details,
};
use super::AppState;

/// Handle callback queries from inline keyboards.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, state: Arc<AppState>) -> Result<()> {
    let token = q.data.as_deref().unwrap_or("");
    debug!(user_id = %q.from.id, token = %token, "Received callback query");

    if let Some(msg) = &q.message {
        let chat_id = msg.chat().id;
        let message_id = msg.id();

        let outcome = match Screen::decode(token) {
            Ok(screen) => render_screen(&bot, chat_id, message_id, screen, &state).await,
            Err(e) => {
                warn!(user_id = %q.from.id, token = %token, error = %e, "Failed to decode callback token");
                edit_screen(
                    &bot,
                    chat_id,
                    message_id,
                    state.localization.translate("error-generic"),
                    None,
                )
                .await
            }
        };

        if let Err(e) = outcome {
            error!(user_id = %q.from.id, token = %token, error = %e, "Callback handling failed");
            // Best effort: the original screen is stale either way.
            if let Err(e) = edit_screen(
                &bot,
                chat_id,
                message_id,
                state.localization.translate("error-generic"),
                None,
            )
            .await
            {
                error!(user_id = %q.from.id, error = %e, "Failed to render error screen");
            }
        }
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;

    Ok(())
}

async fn render_screen(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    screen: Screen,
    state: &Arc<AppState>,
) -> Result<()> {
    match screen {
        Screen::Home => {
            let keyboard = build_main_menu(&state.localization, &state.config.links);
            edit_screen(
                bot,
                chat_id,
                message_id,
                state.localization.translate("start-message"),
                Some(keyboard),
            )
            .await
        }
        Screen::ManufacturerList { page } => {
            handle_manufacturers(bot, chat_id, message_id, page, state).await
        }
        Screen::ModelList { manufacturer, page } => {
            handle_models(bot, chat_id, message_id, &manufacturer, page, state).await
        }
        Screen::ModelDetail {
            manufacturer,
            model,
        } => handle_model_details(bot, chat_id, message_id, &manufacturer, &model, state).await,
    }
}

async fn handle_manufacturers(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    page: usize,
    state: &Arc<AppState>,
) -> Result<()> {
    let manufacturers = match state.catalog.fetch_manufacturers().await {
        Ok(manufacturers) => manufacturers,
        Err(e) => {
            error!(error = %e, "Failed to fetch manufacturer list");
            return edit_screen(
                bot,
                chat_id,
                message_id,
                state.localization.translate("error-manufacturers"),
                None,
            )
            .await;
        }
    };

    let keyboard = build_manufacturers_keyboard(
        &manufacturers,
        page,
        &state.localization,
        &state.config.pagination,
    );

    edit_screen(
        bot,
        chat_id,
        message_id,
        state.localization.translate("select-manufacturer"),
        Some(keyboard),
    )
    .await
}

async fn handle_models(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    manufacturer: &str,
    page: usize,
    state: &Arc<AppState>,
) -> Result<()> {
    let models = match state.catalog.fetch_models(manufacturer).await {
        Ok(models) => models,
        Err(e) => {
            error!(manufacturer = %manufacturer, error = %e, "Failed to fetch model batch");
            return edit_screen(
                bot,
                chat_id,
                message_id,
                state.localization.translate("error-models"),
                None,
            )
            .await;
        }
    };

    let keyboard = build_models_keyboard(
        &models,
        manufacturer,
        page,
        &state.localization,
        &state.config.pagination,
    );
    let text = state
        .localization
        .translate_with_args("select-model", &[("manufacturer", manufacturer)]);

    edit_screen(bot, chat_id, message_id, text, Some(keyboard)).await
}

async fn handle_model_details(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    manufacturer: &str,
    model_name: &str,
    state: &Arc<AppState>,
) -> Result<()> {
    let models = match state.catalog.fetch_models(manufacturer).await {
        Ok(models) => models,
        Err(e) => {
            error!(manufacturer = %manufacturer, error = %e, "Failed to fetch model batch");
            return edit_screen(
                bot,
                chat_id,
                message_id,
                state.localization.translate("error-models"),
                None,
            )
            .await;
        }
    };

    // First match in fetch order wins.
    let Some(model) = models.iter().find(|model| model.name == model_name) else {
        warn!(manufacturer = %manufacturer, model = %model_name, "Model not found in batch");
        return edit_screen(
            bot,
            chat_id,
            message_id,
            state.localization.translate("model-not-found"),
            None,
        )
        .await;
    };

    let text = format_model_details(model, manufacturer, &state.localization);
    let keyboard = build_model_details_keyboard(manufacturer, &state.localization);

    edit_screen(bot, chat_id, message_id, text, Some(keyboard)).await
}

async fn edit_screen(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: String,
    keyboard: Option<InlineKeyboardMarkup>,
) -> Result<()> {
    match keyboard {
        Some(markup) => {
            bot.edit_message_text(chat_id, message_id, text)
                .reply_markup(markup)
                .await?;
        }
        None => {
            bot.edit_message_text(chat_id, message_id, text).await?;
        }
    }
    Ok(())
}
