// src/extractors/post.rs
use roxmltree::Node;

use crate::wxr::document::{child_text, NS_CONTENT, NS_WP};
use crate::wxr::models::{Comment, Post};

/// Turns `<item>` nodes from the export channel into [`Post`] records.
///
/// Only items whose `wp:post_type` is `post` are retained; pages,
/// attachments and revisions are skipped. Comments are filtered down to the
/// ones written from the configured author address.
pub struct PostExtractor {
    author_email: String,
}

impl PostExtractor {
    pub fn new(author_email: impl Into<String>) -> Self {
        Self {
            author_email: author_email.into(),
        }
    }

    /// Extracts one post from an item node.
    ///
    /// Returns `None` when the item is not a post. That is a filter, not a
    /// failure; the caller just moves on to the next item. Missing child
    /// elements never fail either, they yield empty fields.
    pub fn extract(&self, item: Node) -> Option<Post> {
        let post_type = child_text(item, (NS_WP, "post_type"));
        if post_type != "post" {
            tracing::trace!("Skipping item of type '{}'", post_type);
            return None;
        }

        let mut post = Post {
            id: child_text(item, (NS_WP, "post_id")),
            title: child_text(item, "title"),
            link: child_text(item, "link"),
            date: child_text(item, (NS_WP, "post_date")),
            status: child_text(item, (NS_WP, "status")),
            post_type,
            // Raw export HTML; the markdown pipeline rewrites it later
            content: child_text(item, (NS_CONTENT, "encoded")),
            categories: Vec::new(),
            tags: Vec::new(),
            comments: Vec::new(),
        };

        // Taxonomy labels share the <category> element; the domain attribute
        // routes them. Labels with any other domain are dropped.
        for label in item.children().filter(|node| node.has_tag_name("category")) {
            let name = match label.text() {
                Some(text) if !text.trim().is_empty() => text.trim().to_string(),
                _ => continue,
            };
            match label.attribute("domain").unwrap_or("") {
                "category" => post.categories.push(name),
                "post_tag" => post.tags.push(name),
                _ => {}
            }
        }

        // Keep only the author's own comments, in source order. The address
        // comparison is exact and case-sensitive.
        for comment in item
            .children()
            .filter(|node| node.has_tag_name((NS_WP, "comment")))
        {
            let email = child_text(comment, (NS_WP, "comment_author_email"));
            if email == self.author_email {
                post.comments.push(Comment {
                    author: child_text(comment, (NS_WP, "comment_author")),
                    date: child_text(comment, (NS_WP, "comment_date")),
                    content: child_text(comment, (NS_WP, "comment_content")),
                });
            }
        }

        Some(post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wxr::document;

    const EXPORT: &str = r#"<rss version="2.0"
        xmlns:content="http://purl.org/rss/1.0/modules/content/"
        xmlns:wp="http://wordpress.org/export/1.2/">
      <channel>
        <title>测试博客</title>
        <item>
          <title>About</title>
          <wp:post_type>page</wp:post_type>
        </item>
        <item>
          <title>第一篇</title>
          <link>https://blog.example/1</link>
          <wp:post_id>42</wp:post_id>
          <wp:post_date>2020-01-02 03:04:05</wp:post_date>
          <wp:status>publish</wp:status>
          <wp:post_type>post</wp:post_type>
          <content:encoded><![CDATA[<p>Hello <strong>world</strong></p>]]></content:encoded>
          <category domain="category"><![CDATA[学习历程]]></category>
          <category domain="post_tag"><![CDATA[rust]]></category>
          <category domain="series"><![CDATA[ignored]]></category>
          <wp:comment>
            <wp:comment_author>me</wp:comment_author>
            <wp:comment_author_email>me@example.com</wp:comment_author_email>
            <wp:comment_date>2020-01-03 00:00:00</wp:comment_date>
            <wp:comment_content>first</wp:comment_content>
          </wp:comment>
          <wp:comment>
            <wp:comment_author>someone</wp:comment_author>
            <wp:comment_author_email>other@example.com</wp:comment_author_email>
            <wp:comment_content>not mine</wp:comment_content>
          </wp:comment>
          <wp:comment>
            <wp:comment_author>me</wp:comment_author>
            <wp:comment_author_email>me@example.com</wp:comment_author_email>
            <wp:comment_date>2020-01-04 00:00:00</wp:comment_date>
            <wp:comment_content>second</wp:comment_content>
          </wp:comment>
        </item>
      </channel>
    </rss>"#;

    fn extract_all(extractor: &PostExtractor, xml: &str) -> Vec<Post> {
        let doc = document::parse(xml).unwrap();
        let channel = document::find_channel(&doc).unwrap();
        document::items(channel)
            .filter_map(|item| extractor.extract(item))
            .collect()
    }

    #[test]
    fn test_only_post_typed_items_are_retained() {
        let extractor = PostExtractor::new("me@example.com");
        let posts = extract_all(&extractor, EXPORT);
        assert_eq!(posts.len(), 1, "the page item should have been skipped");
        assert_eq!(posts[0].title, "第一篇");
    }

    #[test]
    fn test_field_extraction() {
        let extractor = PostExtractor::new("me@example.com");
        let posts = extract_all(&extractor, EXPORT);
        let post = &posts[0];
        assert_eq!(post.id, "42");
        assert_eq!(post.link, "https://blog.example/1");
        assert_eq!(post.date, "2020-01-02 03:04:05");
        assert_eq!(post.status, "publish");
        // Content stays raw at this stage
        assert!(post.content.contains("<strong>world</strong>"));
    }

    #[test]
    fn test_taxonomy_routing_by_domain() {
        let extractor = PostExtractor::new("me@example.com");
        let posts = extract_all(&extractor, EXPORT);
        assert_eq!(posts[0].categories, vec!["学习历程"]);
        assert_eq!(posts[0].tags, vec!["rust"]);
    }

    #[test]
    fn test_comment_filter_keeps_source_order() {
        let extractor = PostExtractor::new("me@example.com");
        let posts = extract_all(&extractor, EXPORT);
        let comments = &posts[0].comments;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].content, "first");
        assert_eq!(comments[1].content, "second");
    }

    #[test]
    fn test_comment_filter_with_unmatched_address() {
        let extractor = PostExtractor::new("nobody@example.com");
        let posts = extract_all(&extractor, EXPORT);
        assert!(posts[0].comments.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let xml = r#"<rss xmlns:wp="http://wordpress.org/export/1.2/">
          <channel>
            <item><wp:post_type>post</wp:post_type></item>
          </channel>
        </rss>"#;
        let extractor = PostExtractor::new("me@example.com");
        let posts = extract_all(&extractor, xml);
        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.title, "");
        assert_eq!(post.link, "");
        assert_eq!(post.date, "");
        assert_eq!(post.content, "");
        assert!(post.categories.is_empty());
        assert!(post.comments.is_empty());
    }
}
