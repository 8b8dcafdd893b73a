use crate::services::session_cache::SessionCache;
use crate::utils::pagination::{
    build_navigation_controls, render_page, CURRENT_PAGE_CALLBACK, PAGE_CALLBACK_PREFIX,
    ROLES_PER_PAGE,
};
use teloxide::prelude::*;

/// Handles pagination button presses.
///
/// Only `page_<n>` and the page indicator payload are recognized;
/// anything else is ignored without an answer. Recognized callbacks are
/// answered exactly once, including on error paths, so the client never
/// shows a stuck loading spinner.
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    cache: SessionCache,
) -> ResponseResult<()> {
    let Some(data) = q.data.clone() else {
        return Ok(());
    };
    let Some(message) = q.message.clone() else {
        return Ok(());
    };
    let chat_id = message.chat.id;

    tracing::info!("Callback received: '{}' in chat {}", data, chat_id);

    if let Some(page) = data
        .strip_prefix(PAGE_CALLBACK_PREFIX)
        .and_then(|s| s.parse::<usize>().ok())
    {
        let Some((_, record)) = cache.find_by_chat(chat_id.0).await else {
            bot.answer_callback_query(q.id)
                .text("Data expired. Query the stats again.")
                .await?;
            return Ok(());
        };

        let view = render_page(
            &record.ckey,
            &record.roles,
            record.total_time.as_deref(),
            page,
            ROLES_PER_PAGE,
        );
        let markup = build_navigation_controls(view.current_page, view.total_pages);

        match bot
            .edit_message_text(chat_id, message.id, view.text)
            .reply_markup(markup)
            .await
        {
            Ok(_) => {
                bot.answer_callback_query(q.id).await?;
            }
            Err(e) => {
                tracing::error!("Failed to switch page in chat {}: {}", chat_id, e);
                bot.answer_callback_query(q.id)
                    .text("Something went wrong while switching pages.")
                    .await?;
            }
        }
    } else if data == CURRENT_PAGE_CALLBACK {
        bot.answer_callback_query(q.id).text("Current page").await?;
    }

    Ok(())
}
