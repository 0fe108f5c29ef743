// src/wxr/models.rs
use serde::Serialize;

// Synthetic buckets for posts that carry no main category
pub const OTHER_CATEGORY: &str = "其他";
pub const UNCATEGORIZED: &str = "未分类";

/// One retained post from the export, with its taxonomy and the
/// self-authored comments that survived filtering.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub link: String,
    pub date: String, // Kept as the export's date string, never parsed
    pub status: String,
    pub post_type: String,
    pub content: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub author: String,
    pub date: String,
    pub content: String,
}

impl Post {
    /// Resolves the single bucket used to group this post for output.
    /// The first of the post's own categories that appears in the main list
    /// wins; posts with only niche categories fall into 其他, posts with no
    /// category at all into 未分类.
    pub fn primary_category(&self, main_categories: &[String]) -> String {
        for category in &self.categories {
            if main_categories.iter().any(|main| main == category) {
                return category.clone();
            }
        }
        if self.categories.is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            OTHER_CATEGORY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with_categories(categories: &[&str]) -> Post {
        Post {
            id: "1".to_string(),
            title: "t".to_string(),
            link: String::new(),
            date: String::new(),
            status: "publish".to_string(),
            post_type: "post".to_string(),
            content: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            tags: Vec::new(),
            comments: Vec::new(),
        }
    }

    fn mains() -> Vec<String> {
        vec!["学习历程".to_string(), "生活流水账".to_string()]
    }

    #[test]
    fn test_primary_category_prefers_main() {
        let post = post_with_categories(&["学习历程", "杂谈"]);
        assert_eq!(post.primary_category(&mains()), "学习历程");
    }

    #[test]
    fn test_primary_category_falls_back_to_other() {
        let post = post_with_categories(&["杂谈"]);
        assert_eq!(post.primary_category(&mains()), OTHER_CATEGORY);
    }

    #[test]
    fn test_primary_category_uncategorized_when_empty() {
        let post = post_with_categories(&[]);
        assert_eq!(post.primary_category(&mains()), UNCATEGORIZED);
    }

    #[test]
    fn test_primary_category_uses_post_order() {
        // The post's own category order decides ties between main categories.
        let post = post_with_categories(&["生活流水账", "学习历程"]);
        assert_eq!(post.primary_category(&mains()), "生活流水账");
    }
}
