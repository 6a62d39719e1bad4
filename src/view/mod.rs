//! View projection
//!
//! Maps validated briefings onto display models (listing cards and the
//! sectioned detail view) and renders them as HTML for a chosen theme.
//! Projection has no side effects.

pub mod detail;
pub mod html;
pub mod listing;
pub mod theme;

pub use detail::{project_detail, Beat, Block, DetailView, Section};
pub use html::{escape_html, Renderer};
pub use listing::{project_listing, ListingEntry};
pub use theme::{Palette, Theme};
