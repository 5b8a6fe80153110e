//! Item display formatting
//!
//! Formats items for terminal output in table and detail views.

use crate::models::Item;

fn status_label(item: &Item, date_format: &str) -> String {
    if item.is_available {
        return "Available".to_string();
    }

    match item.due_date {
        Some(due) => format!("Due {}", due.format(date_format)),
        None => "Borrowed".to_string(),
    }
}

/// Format a list of items as a table
pub fn format_item_list(items: &[&Item], date_format: &str) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }

    // Padding counts chars, so widths must too
    let title_width = items
        .iter()
        .map(|i| i.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);
    let author_width = items
        .iter()
        .map(|i| i.author.chars().count())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<10}  {:<title_width$}  {:<author_width$}  {:<16}  {}\n",
        "ID",
        "Type",
        "Title",
        "Author",
        "Details",
        "Status",
        title_width = title_width,
        author_width = author_width,
    ));

    output.push_str(&format!(
        "{:->4}  {:-<10}  {:-<title_width$}  {:-<author_width$}  {:-<16}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
        author_width = author_width,
    ));

    for item in items {
        let (label, value) = item.variant.detail();
        output.push_str(&format!(
            "{:>4}  {:<10}  {:<title_width$}  {:<author_width$}  {:<16}  {}\n",
            item.id,
            item.item_type(),
            item.title,
            item.author,
            format!("{}: {}", label, value),
            status_label(item, date_format),
            title_width = title_width,
            author_width = author_width,
        ));
    }

    let available = items.iter().filter(|i| i.is_available).count();
    output.push_str(&format!("\n{} items, {} available\n", items.len(), available));

    output
}

/// Format a single item's details
pub fn format_item_details(item: &Item, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", item.display_info()));
    output.push_str(&format!("  Status:   {}\n", status_label(item, date_format)));

    if let Some(borrowed) = item.borrow_date {
        output.push_str(&format!("  Borrowed: {}\n", borrowed.format(date_format)));
    }

    output.push_str(&format!("  Fine per overdue day: {}\n", item.fine_rate));

    output
}
