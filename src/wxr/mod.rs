// src/wxr/mod.rs
pub mod document;
pub mod models;

pub use models::{Comment, Post};
