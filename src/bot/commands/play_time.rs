use crate::database::connection::DatabaseManager;
use crate::database::models::PlayTimeRow;
use crate::services::session_cache::{SessionCache, SessionKey};
use crate::utils::duration::{format_duration, RawDuration};
use crate::utils::pagination::{build_navigation_controls, render_page, ROLES_PER_PAGE};
use crate::utils::roles::{sort_by_time_desc, strip_role_prefix, RoleEntry};
use teloxide::prelude::*;

pub async fn handle_play_time(
    bot: Bot,
    msg: Message,
    ckey: String,
    db: &DatabaseManager,
    cache: &SessionCache,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let ckey = ckey.trim();

    if ckey.is_empty() {
        bot.send_message(chat_id, "Usage: /play_time <ckey>").await?;
        return Ok(());
    }

    tracing::info!("Looking up play time for '{}' in chat {}", ckey, chat_id);

    let rows = match PlayTimeRow::find_by_ckey(&db.pool, ckey).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Play time query failed for '{}': {}", ckey, e);
            bot.send_message(chat_id, "Something went wrong while querying the database.")
                .await?;
            return Ok(());
        }
    };

    tracing::info!("Found {} play time rows for '{}'", rows.len(), ckey);

    if rows.is_empty() {
        bot.send_message(
            chat_id,
            format!("No play time records found for \"{ckey}\"."),
        )
        .await?;
        return Ok(());
    }

    let (roles, total_time) =
        assemble_report(rows.iter().map(|row| (row.tracker.clone(), row.raw_duration())));

    cache
        .insert(
            SessionKey {
                chat_id: chat_id.0,
                ckey: ckey.to_string(),
            },
            roles.clone(),
            total_time.clone(),
        )
        .await;

    let view = render_page(ckey, &roles, total_time.as_deref(), 0, ROLES_PER_PAGE);
    let markup = build_navigation_controls(view.current_page, view.total_pages);

    bot.send_message(chat_id, view.text)
        .reply_markup(markup)
        .await?;

    Ok(())
}

/// Turns raw tracker rows into display-ready role entries plus the
/// overall total.
///
/// The first row whose cleaned label reads "overall" (any case) becomes
/// the total instead of a role entry; the rest are sorted by time spent,
/// descending.
pub fn assemble_report(
    rows: impl IntoIterator<Item = (String, Option<RawDuration>)>,
) -> (Vec<RoleEntry>, Option<String>) {
    let mut total_time = None;
    let mut roles = Vec::new();

    for (tracker, raw) in rows {
        let role = strip_role_prefix(&tracker).to_string();
        let time_spent = format_duration(raw.as_ref());

        if role.eq_ignore_ascii_case("overall") {
            if total_time.is_none() {
                total_time = Some(time_spent);
            }
        } else {
            roles.push(RoleEntry { role, time_spent });
        }
    }

    sort_by_time_desc(&mut roles);

    (roles, total_time)
}
