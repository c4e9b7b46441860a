//! HTML segmentation and block classification.
//!
//! The parsing pipeline has three steps: extract layout signals from
//! presentational attributes ([`style`]), segment the cleaned DOM into an
//! ordered block sequence ([`segment`]), then assign each block a semantic
//! role via an ordered rule list ([`classify`]). Signature-region parsing
//! ([`signature`]) runs on the classified result.

pub mod classify;
pub mod segment;
pub mod signature;
pub mod style;

pub use classify::classify_blocks;
pub use segment::segment_html;
pub use signature::parse_signature_region;
