// src/render/mod.rs
//! Assembles the output Markdown documents from extracted posts.

use crate::storage::sanitize_filename;
use crate::wxr::models::Post;

/// Renders one post as a block for its category file: title, metadata
/// lines, body, and the retained comments.
pub fn post_markdown(post: &Post) -> String {
    let mut lines: Vec<String> = Vec::new();

    let title = if post.title.is_empty() {
        "无标题"
    } else {
        post.title.as_str()
    };
    lines.push(format!("## {}\n", title));

    if !post.date.is_empty() {
        lines.push(format!("**发布时间**: {}", post.date));
    }
    // Only non-published states get a status line
    if post.status != "publish" {
        lines.push(format!("**状态**: {}", post.status));
    }
    if !post.categories.is_empty() {
        lines.push(format!("**分类**: {}", post.categories.join(", ")));
    }
    if !post.link.is_empty() {
        lines.push(format!("**链接**: {}", post.link));
    }

    lines.push(String::new());

    if post.content.is_empty() {
        lines.push("*（无内容）*".to_string());
    } else {
        lines.push(post.content.clone());
    }

    if !post.comments.is_empty() {
        lines.push("\n### 我的评论\n".to_string());
        for comment in &post.comments {
            lines.push(format!("**{}** ({}):", comment.author, comment.date));
            lines.push(format!("> {}\n", comment.content));
        }
    }

    lines.push("\n---\n".to_string());

    lines.join("\n")
}

/// Renders a full category document: site header, post count, then every
/// post in the order given.
pub fn category_document(site_title: &str, category: &str, posts: &[Post]) -> String {
    let mut lines = vec![
        format!("# {} - {}\n", site_title, category),
        format!("> 共 {} 篇文章\n", posts.len()),
        "---\n".to_string(),
    ];
    for post in posts {
        lines.push(post_markdown(post));
    }
    lines.join("\n")
}

/// Renders the README.md index: one table row per category file, in the
/// order given (busiest first, by convention of the caller).
pub fn index_document(
    site_title: &str,
    total_posts: usize,
    categories: &[(String, usize)],
) -> String {
    let mut lines = vec![
        format!("# {} - 文章索引\n", site_title),
        format!("> 共 {} 篇文章，{} 个分类\n", total_posts, categories.len()),
        "---\n".to_string(),
        "## 分类列表\n".to_string(),
        "| 分类 | 文章数 | 文件 |".to_string(),
        "|------|--------|------|".to_string(),
    ];
    for (category, count) in categories {
        let filename = format!("{}.md", sanitize_filename(category));
        lines.push(format!(
            "| {} | {} | [{}](./{}) |",
            category, count, filename, filename
        ));
    }
    lines.join("\n")
}
