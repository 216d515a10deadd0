/// Language label used when a fence carries no language word.
pub const DEFAULT_CODE_LANGUAGE: &str = "text";

/// A fenced code block after its delimiters and surrounding whitespace have
/// been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    pub language: &'a str,
    pub code: &'a str,
}

/// One render-ready unit of a chat message.
///
/// Segments borrow from the message they were parsed from and live for a
/// single render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A run of plain text. Never contains a newline.
    PlainText(&'a str),
    /// Explicit line break produced for each newline in a plain run.
    LineBreak,
    InlineCode(&'a str),
    Bold(&'a str),
    Italic(&'a str),
    CodeBlock(CodeBlock<'a>),
}

impl<'a> Segment<'a> {
    /// The text this segment displays, with markup removed. Line breaks read
    /// as `"\n"`; code blocks yield their trimmed code.
    pub fn text(&self) -> &'a str {
        match self {
            Segment::PlainText(text)
            | Segment::InlineCode(text)
            | Segment::Bold(text)
            | Segment::Italic(text) => text,
            Segment::LineBreak => "\n",
            Segment::CodeBlock(block) => block.code,
        }
    }

    #[inline]
    pub fn is_code_block(&self) -> bool {
        matches!(self, Segment::CodeBlock(_))
    }

    #[inline]
    pub fn code_block(&self) -> Option<&CodeBlock<'a>> {
        match self {
            Segment::CodeBlock(block) => Some(block),
            _ => None,
        }
    }
}

/// Push `text` as plain runs separated by [`Segment::LineBreak`]. Empty runs
/// between consecutive newlines are dropped; the breaks are kept.
pub(super) fn push_plain_lines<'a>(text: &'a str, out: &mut Vec<Segment<'a>>) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push(Segment::LineBreak);
        }
        if !line.is_empty() {
            out.push(Segment::PlainText(line));
        }
    }
}
