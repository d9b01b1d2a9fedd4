//! Regex-driven code highlighting with overlap resolution.

use crate::escape::{escape_code, escaped_index};
use crate::languages::{self, CATEGORY_PRIORITY};
use crate::theme::SyntaxColors;

/// A candidate highlight region, in raw-code byte offsets.
#[derive(Debug)]
struct Span<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    color: &'a str,
}

/// Highlight code for richtext display.
///
/// Runs every category rule of the resolved language over the raw source,
/// resolves overlapping matches in category priority order, and splices
/// colored spans into the HTML-escaped text. An unrecognized language
/// yields escaped code with line breaks and no coloring.
pub fn highlight_code(code: &str, language: &str, colors: Option<&SyntaxColors>) -> String {
    if code.is_empty() {
        return String::new();
    }

    let fallback;
    let colors = match colors {
        Some(c) => c,
        None => {
            fallback = SyntaxColors::default();
            &fallback
        }
    };

    let Some(def) = languages::resolve(language) else {
        tracing::debug!(language, "no definition for language, rendering plain");
        return escape_code(code).replace('\n', "<br>");
    };

    let mut spans = Vec::new();
    for &category in CATEGORY_PRIORITY {
        let Some(rule) = def.rule(category) else {
            continue;
        };
        for caps in rule.pattern.captures_iter(code) {
            let Some(m) = caps.get(rule.group()) else {
                continue;
            };
            if m.start() == m.end() {
                continue;
            }
            spans.push(Span {
                start: m.start(),
                end: m.end(),
                text: m.as_str(),
                color: colors.role(category.role()),
            });
        }
    }

    // Start ascending, end descending; the stable sort keeps earlier
    // categories first at identical positions.
    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    // Greedy left-to-right sweep: a span survives only if it begins at or
    // after the end of the last kept span, so overlaps are dropped whole.
    let mut kept: Vec<Span<'_>> = Vec::new();
    let mut last_end = 0;
    for span in spans {
        if span.start >= last_end {
            last_end = span.end;
            kept.push(span);
        }
    }

    // Apply from the last span backwards so earlier offsets stay valid.
    let mut result = escape_code(code);
    for span in kept.iter().rev() {
        let start = escaped_index(code, span.start);
        let end = escaped_index(code, span.end);
        let colored = format!(
            "<span style=\"color: {};\">{}</span>",
            span.color,
            escape_code(span.text)
        );
        result.replace_range(start..end, &colored);
    }

    result.replace('\n', "<br>")
}
