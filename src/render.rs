//! Code-block segmentation of message text
//!
//! A fenced block is three backticks, an optional language tag running to
//! the end of that line, a newline, then everything up to the next three
//! backticks. The first closing fence wins. A tag stops at any line break
//! (`\r`, U+2028 and U+2029 included), and only a plain `\n` may follow it;
//! otherwise scanning resumes at the next fence. A fence with no newline
//! after it, or no closing fence, is left in the text as-is.

const FENCE: &str = "```";

/// Label shown over code blocks that have no language tag
pub const DEFAULT_CODE_LABEL: &str = "Code";

/// One piece of rendered message content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text, rendered verbatim
    Text(String),
    /// Fenced code block; `code` is trimmed
    Code {
        language: Option<String>,
        code: String,
    },
}

impl Segment {
    pub fn text(s: impl Into<String>) -> Self {
        Segment::Text(s.into())
    }

    pub fn code(language: Option<&str>, code: impl Into<String>) -> Self {
        Segment::Code {
            language: language.map(str::to_string),
            code: code.into(),
        }
    }

    /// Header label for code segments
    pub fn label(&self) -> Option<&str> {
        match self {
            Segment::Text(_) => None,
            Segment::Code { language, .. } => {
                Some(language.as_deref().unwrap_or(DEFAULT_CODE_LABEL))
            }
        }
    }

    pub fn is_code(&self) -> bool {
        matches!(self, Segment::Code { .. })
    }
}

/// Split `text` into plain and code segments, in original order.
/// Empty plain runs between adjacent blocks are dropped.
pub fn format_content(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(block) = find_code_block(rest) {
        let (before, from_block) = rest.split_at(block.start);
        push_text(&mut segments, before);

        let language = Some(block.language).filter(|tag| !tag.is_empty());
        segments.push(Segment::code(language, block.body.trim()));

        rest = from_block.split_at(block.len).1;
    }

    push_text(&mut segments, rest);
    segments
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        segments.push(Segment::text(text));
    }
}

/// Location of a fenced block within a string
struct CodeBlock<'a> {
    /// Byte offset of the opening fence
    start: usize,
    /// Byte length from opening fence through closing fence
    len: usize,
    language: &'a str,
    body: &'a str,
}

fn find_code_block(text: &str) -> Option<CodeBlock<'_>> {
    let mut from = 0;
    loop {
        let start = from + text.split_at(from).1.find(FENCE)?;
        let after_open = text.split_at(start + FENCE.len()).1;

        // With no line break left, no later fence can open a block either.
        let line_end = after_open.find(is_line_break)?;
        let (language, from_break) = after_open.split_at(line_end);
        if !from_break.starts_with('\n') {
            // The tag ended on some other line break; retry one byte on,
            // since a fence can begin inside a longer run of backticks.
            from = start + 1;
            continue;
        }
        let body_and_rest = from_break.split_at(1).1;

        // The body may hold anything, so a missing close ends the search.
        let close = body_and_rest.find(FENCE)?;
        let body = body_and_rest.split_at(close).0;

        return Some(CodeBlock {
            start,
            len: FENCE.len() + line_end + 1 + close + FENCE.len(),
            language,
            body,
        });
    }
}

/// Characters that end a language tag
fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
