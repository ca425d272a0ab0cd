//! # bzl-source
//!
//! Source text handling for the `bzl` toolkit.
//!
//! This crate defines the core types used to describe locations in BUILD
//! files: [`Position`] (line, column, byte offset), [`Span`] (a range between
//! two positions) and [`Source`] (a source text with a precomputed line-start
//! table for efficient offset-to-position lookup).
//!
//! Every position stored in a syntax tree produced by the parser is absolute
//! into the original byte stream, which is what allows a formatter to
//! round-trip a file without losing the author's layout.

pub mod types;

pub use types::{Position, Source, Span};
