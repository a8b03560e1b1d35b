// Nexus: structured insight from unstructured text
//
// This is the library root. Each module corresponds to a stage of the
// analysis pipeline, plus the config and output layers around it.

pub mod config;
pub mod document;
pub mod error;
pub mod metrics;
pub mod output;
pub mod pipeline;
pub mod sentiment;
pub mod summary;
pub mod text;
pub mod topics;
