/// Configuration options for normalising rendered text
#[derive(Debug, Clone, Copy)]
pub struct TextOptions {
    /// Whether to keep line breaks (otherwise lines are joined with spaces)
    pub preserve_line_breaks: bool,
    /// Whether to collapse runs of whitespace inside a line into a single space
    pub normalize_whitespace: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            preserve_line_breaks: true,
            normalize_whitespace: true,
        }
    }
}

impl TextOptions {
    /// Everything on one line with single spaces
    pub fn single_line() -> Self {
        Self {
            preserve_line_breaks: false,
            normalize_whitespace: true,
        }
    }
}

/// Normalises text with default options
///
/// - Trims whitespace from each line
/// - Removes empty lines
/// - Collapses whitespace within a line into single spaces
/// - Keeps one newline between the remaining lines
pub fn normalize(text: &str) -> String {
    normalize_with_options(text, &TextOptions::default())
}

/// Normalises text with specific options
pub fn normalize_with_options(text: &str, options: &TextOptions) -> String {
    // Handle empty input
    if text.trim().is_empty() {
        return String::new();
    }

    let lines = split_into_lines(text);
    let processed = process_lines(&lines, options);
    join_lines(&processed, options)
}

/// Splits text into trimmed, non-empty lines
pub fn split_into_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Processes lines according to options
pub fn process_lines(lines: &[&str], options: &TextOptions) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            if options.normalize_whitespace {
                normalize_whitespace_in_segment(line)
            } else {
                line.to_string()
            }
        })
        .collect()
}

/// Joins processed lines into a single string
pub fn join_lines(lines: &[String], options: &TextOptions) -> String {
    if options.preserve_line_breaks {
        lines.join("\n")
    } else {
        lines.join(" ")
    }
}

/// Normalizes whitespace within a single line
pub fn normalize_whitespace_in_segment(segment: &str) -> String {
    segment.split_whitespace().collect::<Vec<_>>().join(" ")
}
