// src/lib.rs

//! ikpec archiver library
//!
//! Extracts press-ethics adjudications from monthly list pages and decision
//! pages, and renders them as Markdown documents with per-period indexes.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod services;
pub mod storage;
pub mod utils;
