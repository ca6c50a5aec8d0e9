use std::path::Path;

use crate::domain::MeetingMinutes;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

/// Render minutes as a Markdown document: a title, then one headed section
/// per field in declaration order, each followed by a blank separator
/// paragraph. Headings are derived from the field identifiers.
pub fn render_minutes(minutes: &MeetingMinutes) -> String {
    let mut document = String::from("# Meeting Minutes\n\n");
    for (identifier, body) in minutes.sections() {
        document.push_str(&format!(
            "## {}\n\n{}\n\n",
            heading_from_identifier(identifier),
            body
        ));
    }
    document
}

/// Write the rendered document to `destination`, letting the underlying
/// write fail naturally.
pub async fn save_minutes(minutes: &MeetingMinutes, destination: &Path) -> Result<(), ExportError> {
    let document = render_minutes(minutes);
    tokio::fs::write(destination, document).await?;
    tracing::info!(path = %destination.display(), "Meeting minutes exported");
    Ok(())
}

/// "key_points" -> "Key Points".
fn heading_from_identifier(identifier: &str) -> String {
    identifier
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
