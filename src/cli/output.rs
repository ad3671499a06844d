//! Output formatting utilities

use crate::domain::PostSummary;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Table cell text: strings as-is, missing or null empty, anything else as JSON
fn cell(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Format post summaries as an `id  date  title` table
pub fn format_summary_list(posts: &[PostSummary]) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let id_width = posts.iter().map(|post| post.id.chars().count()).max().unwrap_or(0);
    let dates: Vec<String> = posts.iter().map(|post| cell(&post.date)).collect();
    let date_width = dates.iter().map(|date| date.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    for (post, date) in posts.iter().zip(&dates) {
        output.push_str(&format!(
            "{:<id_width$}  {:<date_width$}  {}\n",
            post.id,
            date,
            cell(&post.title),
        ));
    }
    output
}

/// Pretty-printed JSON for command output
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
