use bookey_core::{AppViewModel, LoadState, NotificationKind, PreviewRecord};

const RULE: &str = "────────────────────────────────────────";

/// Renders the view model as plain text lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec!["Bookey".to_string(), RULE.to_string()];

    if let Some(notification) = &view.notification {
        let tag = match notification.kind {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
        };
        lines.push(format!("[{tag}] {}", notification.message));
    }

    lines.push(format!(
        "Search: {}  (showing {} of {})",
        if view.search_text.is_empty() {
            "<none>"
        } else {
            view.search_text.as_str()
        },
        view.records.len(),
        view.total_count
    ));

    let mut input_line = format!("Add: {}", view.pending_url);
    if view.is_submitting {
        input_line.push_str("  [adding…]");
    }
    lines.push(input_line);
    lines.push(RULE.to_string());

    match view.load_state {
        LoadState::NotStarted | LoadState::Loading => {
            lines.push("Loading saved links…".to_string());
        }
        LoadState::Loaded | LoadState::Failed if view.records.is_empty() => {
            lines.push(if view.total_count == 0 {
                "No saved links.".to_string()
            } else {
                "No links match the search.".to_string()
            });
        }
        LoadState::Loaded | LoadState::Failed => {}
    }

    for record in &view.records {
        push_card(&mut lines, record);
    }

    lines
}

fn push_card(lines: &mut Vec<String>, record: &PreviewRecord) {
    lines.push(format!("[{}] {}", record.accent(), record.title));
    lines.push(format!("    {}", record.domain));
    if !record.description.is_empty() {
        lines.push(format!("    {}", record.description));
    }
    if !record.tags().is_empty() {
        lines.push(format!("    tags: {}", record.tags().join(", ")));
    }
    lines.push(format!("    {}", record.url));
}
