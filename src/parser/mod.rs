//! Nesting state tracker
//!
//! Classifies the token stream of an export into managed object instances.
//! The tracker only knows about three places in a document: outside any
//! `class` block, inside a `class` block, and inside its `attributes` block.
//! Everything else (document metadata, footer) is routed by the converter.

mod moi;
mod state;
mod tracker;

pub use moi::Moi;
pub use state::{transition, NestingState, ATTRIBUTES_TAG, CLASS_TAG};
pub use tracker::NestingTracker;
