//! Wikitext rendering.
//!
//! A pure function of the classified document structure: the same inputs
//! always produce byte-identical output. [`wikitext`] assembles the page
//! from fixed sections, [`table`] emits grid markup, and [`signature`]
//! applies the signature spacing conventions.

pub mod signature;
pub mod table;
pub mod wikitext;

pub use wikitext::{render_wikitext, RenderContext};
