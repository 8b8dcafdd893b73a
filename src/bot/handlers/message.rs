use crate::bot::commands::Command;
use crate::database::connection::DatabaseManager;
use crate::services::session_cache::SessionCache;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    db: DatabaseManager,
    cache: SessionCache,
) -> ResponseResult<()> {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            bot.send_message(
                msg.chat.id,
                "👋 Welcome! Use /play_time <ckey> to look up a player's play time per role.\nUse /help to see all commands.",
            )
            .await?;
        }
        Command::PlayTime { ckey } => {
            crate::bot::commands::play_time::handle_play_time(bot, msg, ckey, &db, &cache).await?;
        }
    }
    Ok(())
}
