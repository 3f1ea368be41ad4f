//! Reusable HTML components for page generation
//!
//! This module provides Maud component functions shared by the landing page
//! and guide pages. Components handle specific UI elements with consistent
//! styling, leaving composition rules to the page modules.

pub mod card;
pub mod footer;
pub mod jumbotron;
pub mod layout;
pub mod list_link;
pub mod nav;
