use super::segment::{CodeBlock, DEFAULT_CODE_LANGUAGE};
use regex::Regex;
use std::sync::OnceLock;

/// A fenced code block located in a message.
///
/// `start..end` covers the whole fence, delimiters included, and always falls
/// on character boundaries of the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    pub start: usize,
    pub end: usize,
    pub language: &'a str,
    pub code: &'a str,
}

impl<'a> FencedBlock<'a> {
    pub fn as_code_block(&self) -> CodeBlock<'a> {
        CodeBlock {
            language: self.language,
            code: self.code,
        }
    }
}

// Three backticks, an optional word, a newline, then the shortest body up to
// the next three backticks. The language word is ASCII-only.
fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| {
        Regex::new(r"```([A-Za-z0-9_]+)?\n((?s:.*?))```").expect("fence pattern is valid")
    })
}

/// Find every fenced code block in `content`, left to right and without
/// overlap. An opening fence with no closing fence after it is not a block.
pub fn extract_code_blocks(content: &str) -> Vec<FencedBlock<'_>> {
    fence_regex()
        .captures_iter(content)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let language = caps
                .get(1)
                .map(|m| m.as_str())
                .unwrap_or(DEFAULT_CODE_LANGUAGE);
            let code = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            Some(FencedBlock {
                start: whole.start(),
                end: whole.end(),
                language,
                code,
            })
        })
        .collect()
}
