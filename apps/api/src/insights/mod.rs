//! Health log insights: one pipeline for every domain, parameterized by `DomainConfig`.

pub mod composer;
pub mod domains;
pub mod extractor;
pub mod generator;
pub mod guard;
pub mod handlers;
pub mod pipeline;
pub mod prompt_builder;
pub mod prompts;
pub mod requester;
pub mod template;
