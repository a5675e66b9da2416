//! Property test entry point.

#[path = "property/compose_properties.rs"]
mod compose_properties;
