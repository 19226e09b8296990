// file: src/retrieval/mod.rs
// description: retrieval module exports
// reference: internal module structure

pub mod adapter;

pub use adapter::RetrievalAdapter;
