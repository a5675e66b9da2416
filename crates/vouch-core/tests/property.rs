//! Property test entry point.

#[path = "property/types_properties.rs"]
mod types_properties;
