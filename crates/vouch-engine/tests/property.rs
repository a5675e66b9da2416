//! Property test entry point.

#[path = "property/blend_properties.rs"]
mod blend_properties;
