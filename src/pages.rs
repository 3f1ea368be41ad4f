//! Page generation modules for different view types
//!
//! This module organizes HTML page generators by page type. The landing
//! page composes section cards, guide pages render a single document. Both
//! use shared components from the components module.

pub mod guide;
pub mod landing;
