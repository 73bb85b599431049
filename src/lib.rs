//! This is a pretty printing library in the Wadler/Oppen tradition: you
//! build a [`Doc`] out of text, break hints, indentation, and groups, and
//! the printer renders it to text, deciding at each break hint whether to
//! stay on the current line or start a new one so that the output fits in
//! your desired line width (if possible).
//!
//! Unlike optimal line breakers, the layout engine here is greedy and runs
//! in a single pass: it walks the document once, keeps a couple of cached
//! widths per node, and commits every decision as it goes. It never
//! backtracks after writing output. That makes printing linear in the size
//! of the document, at the cost of occasionally picking a layout an optimal
//! engine would improve on.
//!
//! # Quick Reference
//!
//! - Build documents with the constructors in [`doc_constructors`], and glue
//!   them together with `+`.
//! - Wrap the parts that should break together in
//!   [`group`](doc_constructors::group)s.
//! - Render with [`print`] (chunks go to a write callback) or
//!   [`print_to_string`].
//!
//! ```
//! use one_pass_pretty_printer::doc_constructors::{breakable_space, group, string};
//! use one_pass_pretty_printer::{print_to_string, Eol};
//!
//! let doc = group(string("foo") + breakable_space() + string("bar"));
//! assert_eq!(print_to_string(Eol::Lf, 80, &doc), "foo bar");
//! assert_eq!(print_to_string(Eol::Lf, 5, &doc), "foo\nbar");
//! ```
//!
//! # Groups
//!
//! A [`group`](doc_constructors::group) is the scope of a break decision.
//! The default [`Auto`](GroupKind::Auto) kind is all-or-nothing: if the
//! group fits on the current line it renders flat, otherwise every break
//! hint in it (outside nested groups) becomes a line break. The two fit
//! kinds, [`FitGroups`](GroupKind::FitGroups) and
//! [`FitAll`](GroupKind::FitAll), instead decide each break hint on its own,
//! by peeking at the cached width of the node that follows it.
//!
//! A [`group_breaker`](doc_constructors::group_breaker) anywhere in a group
//! forces that group to break, which is how you say "this construct looks
//! better multi-line even when it would fit".
//!
//! # Widths
//!
//! Every composite node caches its [`Measure`]s at construction, so
//! concatenation and fit checks are O(1) and printing never re-measures.
//! Text width is counted in user-visible columns (unicode-aware) via
//! [`str_width`].

mod doc;
mod geometry;
mod infra;
mod measure;
mod pretty_print;

pub mod doc_constructors;
pub mod doc_examples;

pub use doc::{Doc, GroupKind};
pub use geometry::{str_width, Width};
pub use measure::Measure;
pub use pretty_print::{print, print_to_string, Eol};
