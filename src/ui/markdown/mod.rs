//! Chat message formatting.
//!
//! Messages are split into fenced code blocks and the regions between them;
//! each region is then scanned for inline code, bold and italic spans. The
//! result is a flat list of [`Segment`]s that [`render_message`] turns into
//! terminal lines.

mod fence;
mod inline;
mod render;
mod segment;

#[cfg(test)]
mod tests;

pub use fence::{extract_code_blocks, FencedBlock};
pub use inline::format_inline;
pub use render::{
    render_message, render_message_with_copy_states, MessageRenderConfig, COPIED_MARK, COPY_MARK,
    USER_PREFIX,
};
pub use segment::{CodeBlock, Segment, DEFAULT_CODE_LANGUAGE};

/// Parse a raw message into display segments in document order.
///
/// Never fails: unmatched markers and unterminated fences stay literal text.
pub fn parse_message(content: &str) -> Vec<Segment<'_>> {
    let blocks = extract_code_blocks(content);
    if blocks.is_empty() {
        return format_inline(content);
    }

    let mut segments = Vec::new();
    let mut last = 0;
    for block in &blocks {
        if block.start > last {
            segments.extend(format_inline(&content[last..block.start]));
        }
        segments.push(Segment::CodeBlock(block.as_code_block()));
        last = block.end;
    }
    if last < content.len() {
        segments.extend(format_inline(&content[last..]));
    }
    segments
}
