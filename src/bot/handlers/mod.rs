pub mod callback;
pub mod message;

use crate::bot::commands::Command;
use crate::database::connection::DatabaseManager;
use crate::services::session_cache::SessionCache;
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;

pub struct BotHandler {
    pub db: DatabaseManager,
    pub cache: SessionCache,
}

impl BotHandler {
    pub fn new(db: DatabaseManager, cache: SessionCache) -> Self {
        Self { db, cache }
    }

    pub fn schema(&self) -> UpdateHandler<teloxide::RequestError> {
        let db = self.db.clone();
        let cache = self.cache.clone();
        let cache_callback = self.cache.clone();

        dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let db = db.clone();
                        let cache = cache.clone();
                        async move { message::command_handler(bot, msg, cmd, db, cache).await }
                    }),
            )
            .branch(
                Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                    let cache = cache_callback.clone();
                    async move { callback::callback_handler(bot, q, cache).await }
                }),
            )
    }
}
