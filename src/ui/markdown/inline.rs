use super::segment::{push_plain_lines, Segment};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InlineKind {
    Code,
    Bold,
    Italic,
}

/// A formatted span found in a plain-text region. `start..end` includes the
/// markers; `inner` is the text between them.
#[derive(Clone, Copy, Debug)]
struct InlineMatch<'a> {
    start: usize,
    end: usize,
    kind: InlineKind,
    inner: &'a str,
}

impl InlineMatch<'_> {
    fn contains_start_of(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

struct InlinePatterns {
    code: Regex,
    bold: Regex,
    italic: Regex,
}

fn patterns() -> &'static InlinePatterns {
    static PATTERNS: OnceLock<InlinePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| InlinePatterns {
        code: Regex::new(r"`([^`]+)`").expect("inline code pattern is valid"),
        bold: Regex::new(r"\*\*([^*]+)\*\*").expect("bold pattern is valid"),
        italic: Regex::new(r"\*([^*]+)\*").expect("italic pattern is valid"),
    })
}

/// Scan `text` with `re`, skipping every candidate whose start offset lies
/// inside one of `reserved`. Scanning resumes at the end of the reserved span
/// that rejected the candidate.
///
/// Only the start offset is checked: a candidate that begins before a
/// reserved span and runs into it is accepted.
fn scan_unreserved<'a>(
    re: &Regex,
    text: &'a str,
    kind: InlineKind,
    reserved: &[InlineMatch<'a>],
) -> Vec<InlineMatch<'a>> {
    let mut found = Vec::new();
    let mut pos = 0;
    while pos <= text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        if let Some(blocker) = reserved.iter().find(|r| r.contains_start_of(whole.start())) {
            pos = blocker.end;
            continue;
        }
        found.push(InlineMatch {
            start: whole.start(),
            end: whole.end(),
            kind,
            inner: inner.as_str(),
        });
        pos = whole.end();
    }
    found
}

/// Split a fence-free region into plain runs, line breaks and inline code,
/// bold and italic spans.
///
/// Inline code is claimed first, then bold, then italic; a later match is
/// dropped when its start falls inside an earlier one. Input that contains no
/// complete marker pair comes back as plain text.
pub fn format_inline(text: &str) -> Vec<Segment<'_>> {
    let patterns = patterns();

    let mut matches: Vec<InlineMatch<'_>> = patterns
        .code
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(InlineMatch {
                start: whole.start(),
                end: whole.end(),
                kind: InlineKind::Code,
                inner: inner.as_str(),
            })
        })
        .collect();

    let bold = scan_unreserved(&patterns.bold, text, InlineKind::Bold, &matches);
    matches.extend(bold);
    let italic = scan_unreserved(&patterns.italic, text, InlineKind::Italic, &matches);
    matches.extend(italic);

    let mut out = Vec::new();
    if matches.is_empty() {
        push_plain_lines(text, &mut out);
        return out;
    }

    matches.sort_by_key(|m| m.start);

    let mut cursor = 0;
    for m in &matches {
        if m.start > cursor {
            push_plain_lines(&text[cursor..m.start], &mut out);
        }
        out.push(match m.kind {
            InlineKind::Code => Segment::InlineCode(m.inner),
            InlineKind::Bold => Segment::Bold(m.inner),
            InlineKind::Italic => Segment::Italic(m.inner),
        });
        cursor = m.end;
    }
    if cursor < text.len() {
        push_plain_lines(&text[cursor..], &mut out);
    }
    out
}
