//! System clipboard export of generated tokens.

use anyhow::{Context, Result};

use crate::form::FormState;
use crate::models::TokenColor;

/// Formats every non-empty token set as a titled block of rows.
///
/// Returns `None` when nothing has been generated yet.
#[must_use]
pub fn tokens_text(form: &FormState) -> Option<String> {
    let blocks: Vec<String> = TokenColor::ALL
        .into_iter()
        .filter(|color| !form.tokens(*color).is_empty())
        .map(|color| format!("{}\n{}", color.title(), form.tokens(color).to_text()))
        .collect();

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n\n"))
    }
}

/// Places `text` on the system clipboard.
pub fn copy_text(text: String) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to copy to clipboard")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldName;

    #[test]
    fn test_nothing_to_copy_before_generate() {
        assert_eq!(tokens_text(&FormState::new()), None);
    }

    #[test]
    fn test_copies_rows_per_color() {
        let mut form = FormState::new();
        for (field, value) in [
            (FieldName::NumberOfBlue, "3"),
            (FieldName::BluePrefix, "B"),
            (FieldName::BluePerRow, "2"),
            (FieldName::NumberOfRed, "2"),
            (FieldName::RedPrefix, "R"),
            (FieldName::RedPerRow, "2"),
        ] {
            form.update_field(field, value);
        }
        assert!(form.generate().is_generated());

        assert_eq!(
            tokens_text(&form).as_deref(),
            Some("Blue Tokens\nB1 B2\nB3\n\nRed Tokens\nR1 R2")
        );
    }
}
