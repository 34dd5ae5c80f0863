pub mod analytics;
pub mod demo;
pub mod domain;
pub mod error;
pub mod ingest;
pub mod matching;
pub mod normalize;
pub mod period;
pub mod repo;
pub mod translate;
pub mod validate;
