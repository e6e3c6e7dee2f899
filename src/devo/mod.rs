//! Main module for devotional text parsing

pub mod document;
pub mod extract;
pub mod input;
pub mod markdown;
pub mod sections;
pub mod title;
pub mod verse;
pub mod verses;

pub use document::{DevotionalDocument, Topic};
pub use extract::extract;
pub use input::RawInput;
pub use title::normalize;
