pub mod checker;
pub mod cleaner;
pub mod config;
pub mod data_models;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod llm;
pub mod validation;
pub mod verifier;
