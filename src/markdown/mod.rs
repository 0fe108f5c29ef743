// src/markdown/mod.rs

mod entities;

use once_cell::sync::Lazy;
use regex::Regex;

/// One pattern-to-replacement rewrite, applied once over the whole input.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

// The rewrite pipeline, in application order. The order is load-bearing:
// code fences must capture their content before emphasis and link rules see
// it, and the unconditional tag strip at the end must run after every
// structure-preserving rule has already claimed its targets.
static REWRITE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    [
        // WordPress block annotations carry structure hints, not content
        (r"<!-- wp:[^>]+ -->", ""),
        (r"<!-- /wp:[^>]+ -->", ""),
        // Code blocks
        (r"(?s)<pre[^>]*><code[^>]*>(.*?)</code></pre>", "\n```\n${1}\n```\n"),
        (r"<code>(.*?)</code>", "`${1}`"),
        // Headings
        (r"(?s)<h1[^>]*>(.*?)</h1>", "\n# ${1}\n"),
        (r"(?s)<h2[^>]*>(.*?)</h2>", "\n## ${1}\n"),
        (r"(?s)<h3[^>]*>(.*?)</h3>", "\n### ${1}\n"),
        (r"(?s)<h4[^>]*>(.*?)</h4>", "\n#### ${1}\n"),
        // Bold and italic
        (r"(?s)<strong>(.*?)</strong>", "**${1}**"),
        (r"(?s)<b>(.*?)</b>", "**${1}**"),
        (r"(?s)<em>(.*?)</em>", "*${1}*"),
        (r"(?s)<i>(.*?)</i>", "*${1}*"),
        // Links
        (r#"(?s)<a[^>]*href="([^"]*)"[^>]*>(.*?)</a>"#, "[${2}](${1})"),
        // Images. The first pattern only matches src-before-alt; tags with
        // the attributes the other way around fall through to the fallback
        // and lose their alt text.
        (r#"<img[^>]*src="([^"]*)"[^>]*alt="([^"]*)"[^>]*/?\s*>"#, "![${2}](${1})"),
        (r#"<img[^>]*src="([^"]*)"[^>]*/?\s*>"#, "![image](${1})"),
        // Lists. Every item becomes a dash; ordered-list numbering is not
        // reconstructed.
        (r"(?s)<li[^>]*>(.*?)</li>", "- ${1}\n"),
        (r"<ul[^>]*>", ""),
        (r"</ul>", "\n"),
        (r"<ol[^>]*>", ""),
        (r"</ol>", "\n"),
        // Paragraphs and breaks
        (r"(?s)<p[^>]*>(.*?)</p>", "${1}\n\n"),
        (r"<br\s*/?>", "\n"),
        (r"<hr\s*/?>", "\n---\n"),
        // Quotes get a single prefix, even when the content spans lines
        (r"(?s)<blockquote[^>]*>(.*?)</blockquote>", "\n> ${1}\n"),
        // Anything still wearing angle brackets is noise by now
        (r"<[^>]+>", ""),
    ]
    .into_iter()
    .map(|(pattern, replacement)| Rule {
        pattern: Regex::new(pattern).expect("Failed to compile rewrite pattern"),
        replacement,
    })
    .collect()
});

static EXCESS_BLANK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n{3,}").expect("Failed to compile EXCESS_BLANK_RE")
});

static HORIZONTAL_WS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t]+").expect("Failed to compile HORIZONTAL_WS_RE")
});

/// Rewrites exported post HTML into plain Markdown.
///
/// This is a pure function over the input string: a fixed sequence of
/// regex substitutions, each applied once with the previous stage's output
/// feeding the next, followed by entity decoding and whitespace cleanup.
/// There is no real HTML parser behind it. Unbalanced markup degrades
/// gracefully: constructs that fail to pair up are swept away by the final
/// tag strip instead of raising an error.
pub fn html_to_markdown(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    let mut text = html.to_string();
    for rule in REWRITE_RULES.iter() {
        text = rule.pattern.replace_all(&text, rule.replacement).into_owned();
    }

    text = entities::decode_entities(&text);

    // Collapse runs of blank lines to a single one, and runs of spaces/tabs
    // to a single space
    text = EXCESS_BLANK_RE.replace_all(&text, "\n\n").into_owned();
    text = HORIZONTAL_WS_RE.replace_all(&text, " ").into_owned();

    text.trim().to_string()
}
