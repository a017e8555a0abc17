//! vCard line folding.

use super::options::LineEnding;

/// Maximum line length in characters (Unicode code points).
pub const MAX_LINE_CHARS: usize = 75;

/// Folds a line to the maximum length.
///
/// A line break followed by a single space is inserted before every 75th
/// character, so the first physical line holds 75 characters and each
/// continuation holds the space plus up to 75 more. Length is counted in
/// code points, never splitting a multi-byte character.
#[must_use]
pub fn fold_line(line: &str, line_ending: LineEnding) -> String {
    let char_count = line.chars().count();
    if char_count <= MAX_LINE_CHARS {
        return line.to_string();
    }

    let breaks = (char_count - 1) / MAX_LINE_CHARS;
    let mut result =
        String::with_capacity(line.len() + breaks * (line_ending.as_str().len() + 1));

    for (i, c) in line.chars().enumerate() {
        if i > 0 && i % MAX_LINE_CHARS == 0 {
            result.push_str(line_ending.as_str());
            result.push(' ');
        }
        result.push(c);
    }

    result
}
