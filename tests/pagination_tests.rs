use playtime_bot::utils::pagination::{
    build_navigation_controls, render_page, CURRENT_PAGE_CALLBACK, ROLES_PER_PAGE,
};
use playtime_bot::utils::roles::RoleEntry;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardButtonKind, InlineKeyboardMarkup};

fn entries(count: usize) -> Vec<RoleEntry> {
    (0..count)
        .map(|i| RoleEntry {
            role: format!("Role{i}"),
            time_spent: format!("{:02}:00:00", count - i),
        })
        .collect()
}

fn callback_data(button: &InlineKeyboardButton) -> &str {
    match &button.kind {
        InlineKeyboardButtonKind::CallbackData(data) => data,
        other => panic!("expected callback button, got {other:?}"),
    }
}

fn buttons(markup: &InlineKeyboardMarkup) -> &[InlineKeyboardButton] {
    assert_eq!(markup.inline_keyboard.len(), 1, "expected a single row");
    &markup.inline_keyboard[0]
}

#[test]
fn test_render_page_slices_middle_page() {
    let all = entries(25);
    let view = render_page("shelby", &all, None, 1, ROLES_PER_PAGE);

    assert_eq!(view.current_page, 1);
    assert_eq!(view.total_pages, 3);
    assert!(view.text.contains("Page 2 of 3"));

    // Exactly entries 11-20 appear on page index 1.
    assert!(!view.text.contains("Role9\n"));
    assert!(view.text.contains("Role10\n"));
    assert!(view.text.contains("Role19\n"));
    assert!(!view.text.contains("Role20\n"));
}

#[test]
fn test_render_page_single_page_has_no_footer() {
    let all = entries(3);
    let view = render_page("shelby", &all, Some("10:00:00"), 0, ROLES_PER_PAGE);

    assert_eq!(view.total_pages, 1);
    assert!(!view.text.contains("Page "));
    assert!(view.text.contains("┈➤ Total\n10:00:00"));
}

#[test]
fn test_render_page_empty_entries_renders_header_only() {
    let view = render_page("shelby", &[], None, 0, ROLES_PER_PAGE);

    assert_eq!(view.total_pages, 0);
    assert_eq!(view.current_page, 0);
    assert!(view.text.contains("shelby"));
    assert!(!view.text.contains("➤ Role"));
    assert!(!view.text.contains("Page "));
}

#[test]
fn test_render_page_clamps_out_of_range_index() {
    let all = entries(25);
    let view = render_page("shelby", &all, None, 99, ROLES_PER_PAGE);

    assert_eq!(view.current_page, 2);
    assert!(view.text.contains("Page 3 of 3"));
}

#[test]
fn test_navigation_first_page_has_next_but_no_prev() {
    let markup = build_navigation_controls(0, 3);
    let row = buttons(&markup);

    assert_eq!(row.len(), 2);
    assert_eq!(row[0].text, "1/3");
    assert_eq!(callback_data(&row[0]), CURRENT_PAGE_CALLBACK);
    assert_eq!(callback_data(&row[1]), "page_1");
}

#[test]
fn test_navigation_last_page_has_prev_but_no_next() {
    let markup = build_navigation_controls(2, 3);
    let row = buttons(&markup);

    assert_eq!(row.len(), 2);
    assert_eq!(callback_data(&row[0]), "page_1");
    assert_eq!(row[1].text, "3/3");
    assert_eq!(callback_data(&row[1]), CURRENT_PAGE_CALLBACK);
}

#[test]
fn test_navigation_middle_page_has_both() {
    let markup = build_navigation_controls(1, 3);
    let row = buttons(&markup);

    assert_eq!(row.len(), 3);
    assert_eq!(callback_data(&row[0]), "page_0");
    assert_eq!(row[1].text, "2/3");
    assert_eq!(callback_data(&row[2]), "page_2");
}

#[test]
fn test_navigation_single_page_is_empty() {
    let markup = build_navigation_controls(0, 1);
    assert!(markup.inline_keyboard.is_empty());

    let markup = build_navigation_controls(0, 0);
    assert!(markup.inline_keyboard.is_empty());
}
