#[path = "io/json_export.rs"]
mod json_export;
