// src/wxr/document.rs
use std::fs;
use std::path::Path;

use roxmltree::{Document, ExpandedName, Node};

use crate::utils::error::WxrError;

// WXR (WordPress eXtended RSS) namespaces
pub const NS_WP: &str = "http://wordpress.org/export/1.2/";
pub const NS_CONTENT: &str = "http://purl.org/rss/1.0/modules/content/";

/// Reads the export file as UTF-8.
/// Leading whitespace is stripped: real-world exports frequently begin with
/// blank lines, which the XML parser rejects.
pub fn read_export(path: &Path) -> Result<String, WxrError> {
    let raw = fs::read_to_string(path)?;
    Ok(raw.trim_start().to_string())
}

/// Parses the export text into an XML document.
pub fn parse(xml: &str) -> Result<Document<'_>, WxrError> {
    Document::parse(xml).map_err(|e| WxrError::Parse(e.to_string()))
}

/// Locates the `<channel>` container under the RSS root.
/// A document without one is not a WordPress export.
pub fn find_channel<'a, 'input>(doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
    doc.root_element()
        .children()
        .find(|node| node.has_tag_name("channel"))
}

/// Iterates the `<item>` entries of a channel.
pub fn items<'a, 'input>(channel: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    channel.children().filter(|node| node.has_tag_name("item"))
}

/// Safely gets the trimmed text of a named child element.
/// Returns an empty string when the child is missing or has no text.
pub fn child_text<'n, 'm, N>(node: Node<'_, '_>, name: N) -> String
where
    N: Into<ExpandedName<'n, 'm>>,
{
    let name = name.into();
    node.children()
        .find(|child| child.has_tag_name(name))
        .and_then(|child| child.text())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
