//! Snippet and line-number extraction.

/// Default number of context lines on each side of a snippet.
pub const DEFAULT_CONTEXT_LINES: usize = 2;

/// Returns the contiguous run of lines
/// `[line_number - context_lines, line_number + context_lines]`, clamped to
/// file bounds. Line numbers are 1-indexed.
pub fn extract_snippet(content: &str, line_number: usize, context_lines: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    if lines.is_empty() {
        return String::new();
    }

    let line_number = line_number.clamp(1, lines.len());
    let start = line_number.saturating_sub(context_lines).max(1);
    let end = (line_number + context_lines).min(lines.len());

    lines[start - 1..end].join("\n")
}

/// 1-based line number of a character offset: 1 plus the count of newline
/// characters strictly before `char_offset`.
pub fn line_number(content: &str, char_offset: usize) -> usize {
    let end = char_offset.min(content.len());
    1 + content.as_bytes()[..end]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
}
