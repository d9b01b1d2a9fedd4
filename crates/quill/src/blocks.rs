//! Splitting raw message content into prose and fenced-code blocks.

use once_cell::sync::Lazy;
use regex::Regex;

/// A fenced region: triple-backtick opener with optional language tag,
/// non-greedy body (may be empty), triple-backtick closer.
static FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```(\w*)\n?(.*?)```").unwrap());

/// Kind of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Text,
    Code,
}

/// A segment of message content, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub content: String,
    /// Language tag, present on code blocks only.
    pub language: Option<String>,
}

impl Block {
    fn text(content: &str) -> Self {
        Self {
            kind: BlockKind::Text,
            content: content.to_string(),
            language: None,
        }
    }

    fn code(content: &str, language: &str) -> Self {
        Self {
            kind: BlockKind::Code,
            content: content.to_string(),
            language: Some(language.to_string()),
        }
    }
}

/// Split content into an ordered sequence of text and code blocks.
///
/// Text fragments are trimmed and dropped when empty. Code blocks carry
/// their fence's language tag, defaulting to `"text"`; a fence with an
/// empty body produces no block at all.
pub fn segment(content: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut last_end = 0;

    for caps in FENCE_RE.captures_iter(content) {
        let whole = caps.get(0).unwrap();

        let before = content[last_end..whole.start()].trim();
        if !before.is_empty() {
            blocks.push(Block::text(before));
        }

        let lang = match &caps[1] {
            "" => "text",
            tag => tag,
        };
        let body = caps[2].trim();
        if !body.is_empty() {
            blocks.push(Block::code(body, lang));
        }

        last_end = whole.end();
    }

    let rest = content[last_end..].trim();
    if !rest.is_empty() {
        blocks.push(Block::text(rest));
    }

    tracing::trace!(blocks = blocks.len(), "segmented content");
    blocks
}

/// Whether content contains an unterminated fence (an odd number of
/// triple-backtick delimiters). Callers rendering streamed text use this
/// to defer rendering until the fence closes.
pub fn has_unterminated_fence(content: &str) -> bool {
    content.matches("```").count() % 2 != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fences_single_text_block() {
        let blocks = segment("  hello world  ");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].kind, BlockKind::Text);
        assert_eq!(blocks[0].content, "hello world");
        assert_eq!(blocks[0].language, None);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\t  ").is_empty());
    }

    #[test]
    fn test_text_code_text_order() {
        let blocks = segment("a```js\ncode```b");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].kind, BlockKind::Text);
        assert_eq!(blocks[0].content, "a");
        assert_eq!(blocks[1].kind, BlockKind::Code);
        assert_eq!(blocks[1].content, "code");
        assert_eq!(blocks[1].language.as_deref(), Some("js"));
        assert_eq!(blocks[2].kind, BlockKind::Text);
        assert_eq!(blocks[2].content, "b");
    }

    #[test]
    fn test_missing_language_defaults_to_text() {
        let blocks = segment("```\nlet x = 1;\n```");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].language.as_deref(), Some("text"));
        assert_eq!(blocks[0].content, "let x = 1;");
    }

    #[test]
    fn test_empty_fence_body_skipped() {
        let blocks = segment("before\n```js\n```\nafter");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].content, "before");
        assert_eq!(blocks[1].content, "after");
    }

    #[test]
    fn test_multiple_fences() {
        let blocks = segment("```py\na\n```\nmiddle\n```rs\nb\n```");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].language.as_deref(), Some("py"));
        assert_eq!(blocks[1].content, "middle");
        assert_eq!(blocks[2].language.as_deref(), Some("rs"));
    }

    #[test]
    fn test_unterminated_fence_predicate() {
        assert!(!has_unterminated_fence(""));
        assert!(!has_unterminated_fence("no fences here"));
        assert!(has_unterminated_fence("```js\nstill streaming"));
        assert!(!has_unterminated_fence("```js\ndone\n```"));
        assert!(has_unterminated_fence("```a``` and ```b"));
    }
}
