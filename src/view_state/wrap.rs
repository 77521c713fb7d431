//! Greedy word wrapping measured in terminal columns.

use unicode_width::UnicodeWidthStr;

/// Wrap `text` into lines no wider than `width` columns.
///
/// Literal line breaks are honoured first (a trailing `\r` is dropped).
/// A line that already fits is emitted verbatim, including its inner
/// spacing. Longer lines are packed greedily from whitespace-delimited
/// words; a word wider than `width` gets its own line and is never split.
/// A whitespace-only line that does not fit becomes an empty line.
///
/// Empty text yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::new();
    for raw in text.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.width() <= width {
            out.push(line.to_string());
            continue;
        }
        pack_words(line, width, &mut out);
    }
    out
}

fn pack_words(line: &str, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;
    let mut emitted = false;

    for word in line.split_whitespace() {
        let word_width = word.width();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            out.push(std::mem::take(&mut current));
            emitted = true;
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        out.push(current);
    } else if !emitted {
        out.push(String::new());
    }
}
