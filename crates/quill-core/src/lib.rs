//! Quill Core Types and Definitions
//!
//! This crate provides the foundational types shared by every stage of the
//! Quill pipeline. It includes:
//!
//! - **Document**: The structured representation of one post ([`document::Document`])
//! - **Limits**: Character limits and their per-document overrides ([`limits::Limits`])
//! - **Rules**: The shared, immutable style rule table ([`rules::StyleRules`])

pub mod document;
pub mod limits;
pub mod rules;
