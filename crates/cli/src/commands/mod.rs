//! Command implementations for the solsift CLI
//!
//! A single `scan` command covers the analysis workflow: it runs the rule
//! engine over one file or a directory tree of `.sol` files and renders the
//! four-category report to the console, JSON, or Markdown.

pub mod scan;
