//! UI Components for the ServiceHub footer.
//!
//! - [`Footer`] - Page footer: brand, quick links, contact info, team grid
//!   and copyright bar, rendered from a [`FooterContent`](crate::FooterContent)
//!   table
//! - [`Icon`] - SVG glyph for a [`Network`](crate::Network)

mod footer;
mod icons;

pub use footer::*;
pub use icons::*;
