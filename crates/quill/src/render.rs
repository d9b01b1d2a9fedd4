//! Markdown to richtext markup conversion.
//!
//! A fixed pipeline of regex rewrites over escaped text. Stage order is
//! load-bearing: later patterns must not re-match markup inserted by
//! earlier stages, and headers run h6 to h1 so a longer prefix is never
//! partially consumed by a shorter one.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::escape::escape_text;
use crate::theme::ThemeColors;

static H6_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^###### (.*)$").unwrap());
static H5_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^##### (.*)$").unwrap());
static H4_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#### (.*)$").unwrap());
static H3_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static H2_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static H1_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static HR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(?:---|\*\*\*|___)\s*$").unwrap());
// `>` was escaped in stage one, so quotes match on the entity.
static QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^&gt; (.*)$").unwrap());
static LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static STRIKE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"~~(.*?)~~").unwrap());
static BOLD_STAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static BOLD_UNDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());
static ITALIC_STAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*\n]+)\*").unwrap());
static ITALIC_UNDER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([^_\n]+)_").unwrap());
static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static TASK_DONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- \[x\] (.*)$").unwrap());
static TASK_TODO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- \[ \] (.*)$").unwrap());
static UL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^([ \t]*)[-*] (.*)$").unwrap());
static OL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^([ \t]*)(\d+)\. (.*)$").unwrap());

/// Convert markdown text to richtext markup.
///
/// Unrecognized constructs pass through as plain escaped text; colors come
/// from the caller's theme with built-in defaults for any omitted key.
pub fn render_markdown(text: &str, colors: &ThemeColors) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = escape_text(text);

    out = H6_RE
        .replace_all(
            &out,
            r#"<h6 style="font-size: 10px; font-weight: bold; margin: 4px 0;">${1}</h6>"#,
        )
        .into_owned();
    out = H5_RE
        .replace_all(
            &out,
            r#"<h5 style="font-size: 11px; font-weight: bold; margin: 4px 0;">${1}</h5>"#,
        )
        .into_owned();
    out = H4_RE
        .replace_all(
            &out,
            r#"<h4 style="font-size: 12px; font-weight: bold; margin: 4px 0;">${1}</h4>"#,
        )
        .into_owned();
    out = H3_RE
        .replace_all(
            &out,
            r#"<h3 style="font-size: 13px; font-weight: bold; margin: 6px 0;">${1}</h3>"#,
        )
        .into_owned();
    out = H2_RE
        .replace_all(
            &out,
            r#"<h2 style="font-size: 14px; font-weight: bold; margin: 6px 0;">${1}</h2>"#,
        )
        .into_owned();
    out = H1_RE
        .replace_all(
            &out,
            r#"<h1 style="font-size: 16px; font-weight: bold; margin: 8px 0;">${1}</h1>"#,
        )
        .into_owned();

    let hr = format!(
        r#"<hr style="border: none; border-top: 1px solid {}; margin: 8px 0;">"#,
        colors.border
    );
    out = HR_RE.replace_all(&out, hr.as_str()).into_owned();

    let quote = format!(
        r#"<blockquote style="border-left: 3px solid {}; padding-left: 8px; margin: 4px 0; color: {}; font-style: italic;">${{1}}</blockquote>"#,
        colors.primary, colors.foreground_muted
    );
    out = QUOTE_RE.replace_all(&out, quote.as_str()).into_owned();

    let link = format!(
        r#"<a href="${{2}}" style="color: {}; text-decoration: underline;">${{1}}</a>"#,
        colors.primary
    );
    out = LINK_RE.replace_all(&out, link.as_str()).into_owned();

    out = STRIKE_RE.replace_all(&out, "<s>${1}</s>").into_owned();
    out = BOLD_STAR_RE.replace_all(&out, "<b>${1}</b>").into_owned();
    out = BOLD_UNDER_RE.replace_all(&out, "<b>${1}</b>").into_owned();

    out = italic_pass(&out, &ITALIC_STAR_RE, '*');
    out = italic_pass(&out, &ITALIC_UNDER_RE, '_');

    let code = format!(
        r#"<code style="background-color: {}; color: {}; padding: 1px 4px; border-radius: 3px; font-family: monospace;">${{1}}</code>"#,
        colors.background_alt, colors.accent
    );
    out = CODE_RE.replace_all(&out, code.as_str()).into_owned();

    let done = format!(
        r#"<span style="color: {};">✓</span> <s>${{1}}</s>"#,
        colors.success
    );
    out = TASK_DONE_RE.replace_all(&out, done.as_str()).into_owned();
    let todo = format!(
        r#"<span style="color: {};">☐</span> ${{1}}"#,
        colors.foreground_muted
    );
    out = TASK_TODO_RE.replace_all(&out, todo.as_str()).into_owned();

    out = UL_RE
        .replace_all(&out, |caps: &Captures| {
            let level = caps[1].len() / 2;
            format!(
                r#"{}<span style="color: {};">•</span> {}"#,
                "  ".repeat(level),
                colors.primary,
                &caps[2]
            )
        })
        .into_owned();

    out = OL_RE
        .replace_all(&out, |caps: &Captures| {
            let level = caps[1].len() / 2;
            format!(
                r#"{}<span style="color: {};">{}.</span> {}"#,
                "  ".repeat(level),
                colors.accent,
                &caps[2],
                &caps[3]
            )
        })
        .into_owned();

    out.replace('\n', "<br>")
}

/// Italic emphasis with the bounds check the pattern itself cannot express:
/// a match is rejected when the character before it is a `*`/`_`/word
/// character, or the character after it is the delimiter or a word
/// character. This approximates "not adjacent to a bold or list marker" and
/// can still misfire next to punctuation; full emphasis parsing is out of
/// scope.
fn italic_pass(input: &str, pattern: &Regex, delim: char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut copied = 0;
    let mut search = 0;

    while let Some(caps) = pattern.captures_at(input, search) {
        let m = caps.get(0).unwrap();
        let before = input[..m.start()].chars().next_back();
        let after = input[m.end()..].chars().next();

        let blocked = before.is_some_and(|c| c == '*' || c == '_' || c.is_ascii_alphanumeric())
            || after.is_some_and(|c| c == delim || c == '_' || c.is_ascii_alphanumeric());

        if blocked {
            // The match starts with the ASCII delimiter, so +1 stays on a
            // character boundary.
            search = m.start() + 1;
            continue;
        }

        out.push_str(&input[copied..m.start()]);
        out.push_str("<i>");
        out.push_str(&caps[1]);
        out.push_str("</i>");
        copied = m.end();
        search = m.end();
    }

    out.push_str(&input[copied..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        render_markdown(text, &ThemeColors::default())
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn test_plain_text_passes_through_escaped() {
        let out = render("just some text");
        assert_eq!(out, "just some text");
    }

    #[test]
    fn test_script_tag_never_survives() {
        let out = render("<script>alert('x')</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
        assert!(out.contains("&#039;x&#039;"));
    }

    #[test]
    fn test_heading_levels_not_nested() {
        let out = render("###### six");
        assert!(out.contains(r#"<h6 style="font-size: 10px"#));
        assert!(!out.contains("<h3"));
        assert!(!out.contains("###"));

        let out = render("# one");
        assert!(out.contains(r#"<h1 style="font-size: 16px"#));
        assert_eq!(out.matches("<h1").count(), 1);
    }

    #[test]
    fn test_horizontal_rule_uses_border_color() {
        let out = render("---");
        assert!(out.contains("border-top: 1px solid #6e6a86"));

        let out = render("***");
        assert!(out.contains("<hr"));
    }

    #[test]
    fn test_blockquote_on_escaped_marker() {
        let out = render("> quoted");
        assert!(out.contains("<blockquote"));
        assert!(out.contains(">quoted</blockquote>"));
        assert!(out.contains("border-left: 3px solid #c4a7e7"));
    }

    #[test]
    fn test_link() {
        let out = render("[docs](https://example.com)");
        assert!(out.contains(r#"<a href="https://example.com""#));
        assert!(out.contains(">docs</a>"));
    }

    #[test]
    fn test_bold_and_italic_independent() {
        let out = render("**bold** and *italic*");
        assert!(out.contains("<b>bold</b>"));
        assert!(out.contains("<i>italic</i>"));
    }

    #[test]
    fn test_bold_underscore() {
        let out = render("__strong__");
        assert!(out.contains("<b>strong</b>"));
    }

    #[test]
    fn test_italic_skips_snake_case() {
        let out = render("a snake_case_name here");
        assert!(!out.contains("<i>"));
        assert!(out.contains("snake_case_name"));
    }

    #[test]
    fn test_strikethrough() {
        let out = render("~~gone~~");
        assert!(out.contains("<s>gone</s>"));
    }

    #[test]
    fn test_inline_code_escapes_content() {
        let out = render("`<tag>`");
        assert!(out.contains("monospace"));
        assert!(out.contains("&lt;tag&gt;</code>"));
    }

    #[test]
    fn test_task_list_items() {
        let out = render("- [x] done\n- [ ] todo");
        assert!(out.contains("✓"));
        assert!(out.contains("<s>done</s>"));
        assert!(out.contains("☐"));
        assert!(out.contains("☐</span> todo"));
    }

    #[test]
    fn test_unordered_list_bullet_and_indent() {
        let out = render("- top\n    - nested");
        assert!(out.contains("•</span> top"));
        // two levels of 2-space indentation become repeated padding
        assert!(out.contains("    <span"));
        assert!(out.contains("•</span> nested"));
    }

    #[test]
    fn test_ordered_list_number_in_accent() {
        let out = render("1. first");
        assert!(out.contains(r#"<span style="color: #ebbcba;">1.</span> first"#));
    }

    #[test]
    fn test_newlines_become_breaks() {
        let out = render("a\nb");
        assert_eq!(out, "a<br>b");
    }

    #[test]
    fn test_theme_override() {
        let colors = ThemeColors {
            primary: "#010203".into(),
            ..ThemeColors::default()
        };
        let out = render_markdown("[x](y)", &colors);
        assert!(out.contains("color: #010203"));
    }
}
