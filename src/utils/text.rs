//! Text processing utilities.
//!
//! This module contains the word-wrap helper used to truncate product
//! descriptions to a fixed number of card lines.

/// Greedily wrap `text` to `width` columns, keeping at most `max_lines`
/// lines. When the text does not fit, the last kept line ends with an
/// ellipsis.
///
/// Width is counted in characters, which is close enough for the catalog's
/// copy; precise grapheme handling is left to the terminal.
///
pub fn wrap_truncate(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return vec![];
    }

    let mut lines: Vec<String> = vec![];
    let mut current = String::new();
    let mut truncated = false;

    for word in text.split_whitespace() {
        let candidate_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if candidate_len <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if lines.len() + 1 == max_lines {
            truncated = true;
            break;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        // A single word longer than the width is hard-cut
        if word.chars().count() > width {
            current = word.chars().take(width.saturating_sub(1)).collect();
            truncated = true;
            break;
        }
        current.push_str(word);
    }

    if truncated {
        while current.chars().count() >= width {
            current.pop();
        }
        current.push('…');
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_short_text_single_line() {
        let lines = wrap_truncate("petit texte", 40, 2);
        assert_eq!(lines, vec!["petit texte"]);
    }

    #[test]
    fn test_wrap_splits_on_word_boundaries() {
        let lines = wrap_truncate("un deux trois quatre", 9, 4);
        assert_eq!(lines, vec!["un deux", "trois", "quatre"]);
    }

    #[test]
    fn test_wrap_truncates_with_ellipsis() {
        let lines = wrap_truncate("un deux trois quatre cinq six sept huit", 10, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'));
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap_truncate(
            "Casque circum-aural à réduction de bruit active avec étui",
            18,
            2,
        );
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line.chars().count() <= 18);
        }
    }

    #[test]
    fn test_wrap_hard_cuts_long_words() {
        let lines = wrap_truncate("anticonstitutionnellement", 10, 2);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].chars().count() <= 10);
        assert!(lines[0].ends_with('…'));
    }

    #[test]
    fn test_wrap_degenerate_bounds() {
        assert!(wrap_truncate("texte", 0, 2).is_empty());
        assert!(wrap_truncate("texte", 10, 0).is_empty());
        assert!(wrap_truncate("", 10, 2).is_empty());
    }
}
