// src/markdown/entities.rs
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Named entities that actually show up in exported post content.
// `&amp;` is handled last so double-encoded text is not decoded twice.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&nbsp;", "\u{a0}"),
    ("&hellip;", "\u{2026}"),
    ("&mdash;", "\u{2014}"),
    ("&ndash;", "\u{2013}"),
    ("&ldquo;", "\u{201c}"),
    ("&rdquo;", "\u{201d}"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
];

static DECIMAL_REF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&#([0-9]+);").expect("Failed to compile DECIMAL_REF_RE")
});

static HEX_REF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&#[xX]([0-9A-Fa-f]+);").expect("Failed to compile HEX_REF_RE")
});

/// Decodes HTML text entities to their literal characters.
/// Covers the common named entities plus decimal and hexadecimal numeric
/// character references; anything unrecognized is left untouched.
pub fn decode_entities(text: &str) -> String {
    let mut out = text.to_string();
    for (entity, literal) in NAMED_ENTITIES {
        out = out.replace(entity, literal);
    }
    out = HEX_REF_RE
        .replace_all(&out, |caps: &Captures| decode_ref(&caps[1], 16, &caps[0]))
        .into_owned();
    out = DECIMAL_REF_RE
        .replace_all(&out, |caps: &Captures| decode_ref(&caps[1], 10, &caps[0]))
        .into_owned();
    out.replace("&amp;", "&")
}

fn decode_ref(digits: &str, radix: u32, original: &str) -> String {
    u32::from_str_radix(digits, radix)
        .ok()
        .and_then(char::from_u32)
        .map(String::from)
        .unwrap_or_else(|| original.to_string())
}
