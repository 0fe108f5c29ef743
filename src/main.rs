// src/main.rs
mod extractors;
mod markdown;
mod render;
mod storage;
mod utils;
mod wxr;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::Parser;

use extractors::PostExtractor;
use storage::StorageManager;
use utils::error::WxrError;
use utils::AppError;
use wxr::Post;

/// Command Line Interface for the WordPress export cleaner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the WordPress export XML file (defaults to the first .xml file in the current directory)
    input: Option<PathBuf>,

    /// Output directory for the generated Markdown files (defaults to "wordpress_cleaned" beside the input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Comment author email; only comments from this exact address are kept
    #[arg(short = 'e', long, default_value = "your_email@example.com")]
    author_email: String,

    /// Main category names, in priority order, used to group posts
    #[arg(long, value_delimiter = ',', default_value = "学习历程,生活流水账,所思所感,未分类")]
    main_categories: Vec<String>,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting export cleanup for args: {:?}", args);

    let input_path = resolve_input(args.input)?;
    let output_dir = args.output_dir.unwrap_or_else(|| {
        input_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("wordpress_cleaned")
    });

    // 3. Load and parse the export document
    tracing::info!("Reading export file: {}", input_path.display());
    let raw_xml = wxr::document::read_export(&input_path)?;
    let doc = wxr::document::parse(&raw_xml)?;
    let channel = wxr::document::find_channel(&doc).ok_or(WxrError::ChannelNotFound)?;

    let site_title = wxr::document::child_text(channel, "title");
    tracing::info!("Site: {}", site_title);

    // 4. Initialize storage and the extractor
    let storage = StorageManager::new(&output_dir)?;
    let extractor = PostExtractor::new(args.author_email.as_str());

    // 5. Extract posts and group them by primary category
    let mut posts_by_category: BTreeMap<String, Vec<Post>> = BTreeMap::new();
    let mut total_posts = 0usize;
    let mut total_comments = 0usize;

    for item in wxr::document::items(channel) {
        let mut post = match extractor.extract(item) {
            Some(post) => post,
            None => continue, // Not a post (page, attachment, ...), skip it
        };
        post.content = markdown::html_to_markdown(&post.content);

        total_posts += 1;
        total_comments += post.comments.len();

        let bucket = post.primary_category(&args.main_categories);
        posts_by_category.entry(bucket).or_default().push(post);
    }

    tracing::info!(
        "Parsed {} posts with {} self-authored comments, grouped into {} categories",
        total_posts,
        total_comments,
        posts_by_category.len()
    );

    // 6. Write one Markdown file per category
    let mut category_counts: Vec<(String, usize)> = Vec::new();

    for (category, posts) in posts_by_category.iter_mut() {
        // Newest first; the export's date strings sort lexicographically
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        let content = render::category_document(&site_title, category, posts);
        match storage.save_category(category, &content) {
            Ok(path) => tracing::info!(
                "{}: {} posts, {:.1} KB -> {}",
                category,
                posts.len(),
                content.len() as f64 / 1024.0,
                path.display()
            ),
            Err(e) => tracing::error!("Failed to write category file for {}: {}", category, e),
        }

        category_counts.push((category.clone(), posts.len()));
    }

    // 7. Write the index and the run summary, busiest categories first
    category_counts.sort_by(|a, b| b.1.cmp(&a.1));

    let index = render::index_document(&site_title, total_posts, &category_counts);
    let index_path = storage.save_index(&index)?;
    tracing::info!("Wrote index to {}", index_path.display());

    storage.save_summary(&site_title, total_posts, total_comments, &category_counts)?;

    tracing::info!("Conversion finished. Output directory: {}", output_dir.display());
    Ok(())
}

/// Resolves the input path, falling back to the first .xml file in the
/// current directory when none was given on the command line.
fn resolve_input(arg: Option<PathBuf>) -> Result<PathBuf, AppError> {
    if let Some(path) = arg {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "Input file does not exist: {}",
                path.display()
            )));
        }
        return Ok(path);
    }

    let mut xml_files: Vec<PathBuf> = std::fs::read_dir(".")?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "xml"))
        .collect();
    xml_files.sort();

    match xml_files.into_iter().next() {
        Some(path) => {
            tracing::info!("Auto-detected export file: {}", path.display());
            Ok(path)
        }
        None => Err(AppError::Config(
            "No input file given and no .xml file found in the current directory".to_string(),
        )),
    }
}
