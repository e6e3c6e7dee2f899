//! # devo
//!
//! A parser for loosely formatted devotional text.
//!
//! Devotional documents arrive as free-form strings produced by a text
//! generator: Portuguese with uppercase section labels, English with
//! bold-marked section labels, or a mix of both, with no language tag and no
//! guaranteed shape. This crate turns such a string into a structured
//! [`DevotionalDocument`](devo::DevotionalDocument) and normalizes raw titles
//! for display.
//!
//! Every entry point is a pure function: no I/O, no shared state, and no
//! failure path for malformed input. Text that matches nothing degrades to an
//! empty document rather than an error.

pub mod devo;
