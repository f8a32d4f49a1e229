//! UI module - components, the personal details form, and the tree renderer

pub mod components;
pub mod personal_details;
pub mod renderer;
