// Infrastructure layer: solver implementations, file I/O, serde, eventing
pub mod event_ndjson;
pub mod hierholzer;
pub mod matrix_text;
pub mod most_constrained;
pub mod permutation_search;
pub mod report_json;
pub mod schema_validator;
