use crate::utils::roles::RoleEntry;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Roles shown per page of a play-time report.
pub const ROLES_PER_PAGE: usize = 10;

/// Callback payload sent by the non-functional page indicator button.
pub const CURRENT_PAGE_CALLBACK: &str = "current_page";

/// Prefix of the callback payload sent by prev/next buttons.
pub const PAGE_CALLBACK_PREFIX: &str = "page_";

/// A rendered page of a play-time report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub text: String,
    pub current_page: usize,
    pub total_pages: usize,
}

/// Renders one page of a player's role list as message text.
///
/// The requested page index is clamped to the last page. With no entries
/// at all the header still renders, with an empty body and no footer.
pub fn render_page(
    ckey: &str,
    entries: &[RoleEntry],
    total_time: Option<&str>,
    page: usize,
    per_page: usize,
) -> PageView {
    let total_pages = entries.len().div_ceil(per_page);
    let current_page = if total_pages == 0 {
        0
    } else {
        page.min(total_pages - 1)
    };

    let start = current_page * per_page;
    let end = (start + per_page).min(entries.len());

    let mut text = format!("⌞ {ckey} ⌝\n\n");

    for entry in &entries[start..end] {
        text.push_str(&format!("➤ {}\n{}\n", entry.role, entry.time_spent));
    }

    if let Some(total) = total_time {
        text.push_str(&format!("\n┈➤ Total\n{total}"));
    }

    if total_pages > 1 {
        text.push_str(&format!(
            "\n\nPage {} of {}",
            current_page + 1,
            total_pages
        ));
    }

    PageView {
        text,
        current_page,
        total_pages,
    }
}

/// Builds the prev / indicator / next inline keyboard row.
///
/// Single-page reports get an empty keyboard. The middle button only
/// shows the position and answers with a no-op callback.
pub fn build_navigation_controls(current_page: usize, total_pages: usize) -> InlineKeyboardMarkup {
    let mut keyboard: Vec<Vec<InlineKeyboardButton>> = Vec::new();

    if total_pages > 1 {
        let mut row = Vec::new();

        if current_page > 0 {
            row.push(InlineKeyboardButton::callback(
                "⬅️ Prev",
                format!("{}{}", PAGE_CALLBACK_PREFIX, current_page - 1),
            ));
        }

        row.push(InlineKeyboardButton::callback(
            format!("{}/{}", current_page + 1, total_pages),
            CURRENT_PAGE_CALLBACK,
        ));

        if current_page < total_pages - 1 {
            row.push(InlineKeyboardButton::callback(
                "Next ➡️",
                format!("{}{}", PAGE_CALLBACK_PREFIX, current_page + 1),
            ));
        }

        keyboard.push(row);
    }

    InlineKeyboardMarkup::new(keyboard)
}
