use unicode_width::UnicodeWidthChar;

/// Shorten a string to at most `max_width` display columns, appending "..."
/// when it was cut. Safe on multi-byte text.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(1)).sum();
    if width <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(1);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Visual (line, column) of the cursor at `cursor_index` (a char index) when
/// `text` is rendered wrapped at `max_width` columns. Mirrors the paragraph
/// widget's greedy character wrapping so the terminal cursor can be placed
/// over the input box.
pub fn wrapped_cursor_position(text: &str, cursor_index: usize, max_width: usize) -> (usize, usize) {
    if max_width == 0 {
        return (0, 0);
    }

    let mut line = 0;
    let mut col = 0;
    for (i, c) in text.chars().enumerate() {
        if i == cursor_index {
            break;
        }
        let w = c.width().unwrap_or(1);
        if col + w > max_width {
            line += 1;
            col = w;
        } else {
            col += w;
        }
    }
    if col >= max_width {
        // cursor sits past the last column, wrap it to the next line
        (line + 1, 0)
    } else {
        (line, col)
    }
}
