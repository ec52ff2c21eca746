//! Message Handler module for processing incoming Telegram messages
//!
//! Only the `/start` command is handled; it sends the main menu as a new
//! message. All subsequent navigation happens through callback queries.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

use super::ui_builder::build_main_menu;
use super::AppState;

/// Handle incoming text messages.
pub async fn message_handler(bot: Bot, msg: Message, state: Arc<AppState>) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if !is_start_command(text) {
        return Ok(());
    }

    debug!(user_id = %msg.chat.id, "Received /start command");

    let keyboard = build_main_menu(&state.localization, &state.config.links);
    bot.send_message(msg.chat.id, state.localization.translate("start-message"))
        .reply_markup(keyboard)
        .await?;

    Ok(())
}

/// Accepts `/start`, `/start <payload>` and the `/start@botname` group form.
fn is_start_command(text: &str) -> bool {
    let Some(command) = text.split_whitespace().next() else {
        return false;
    };
    let command = command.split('@').next().unwrap_or(command);
    command == "/start"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_command_forms() {
        assert!(is_start_command("/start"));
        assert!(is_start_command("/start deep-link-payload"));
        assert!(is_start_command("/start@sensitivities_bot"));
        assert!(is_start_command("  /start"));
    }

    #[test]
    fn test_other_messages_are_ignored() {
        assert!(!is_start_command("/help"));
        assert!(!is_start_command("start"));
        assert!(!is_start_command(""));
        assert!(!is_start_command("hello /start"));
    }
}
