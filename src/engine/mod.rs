//! Requirement extraction and compatibility scoring engine

pub mod analyzer;
pub mod classifier;
pub mod extractor;
pub mod profile;
pub mod scoring;
pub mod suggestions;
pub mod vocabulary;
