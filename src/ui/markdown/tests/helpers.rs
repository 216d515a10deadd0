use crate::ui::markdown::Segment;

pub fn line_texts(lines: &[ratatui::text::Line<'static>]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// Underlying text of a segment list, line breaks read as newlines.
pub fn joined_text(segments: &[Segment<'_>]) -> String {
    segments.iter().map(Segment::text).collect()
}

pub fn strip_markers(s: &str) -> String {
    s.chars().filter(|c| *c != '`' && *c != '*').collect()
}
