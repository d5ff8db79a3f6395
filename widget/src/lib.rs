//! Terminal memory widget
//!
//! A timeline of memory samples (free, active, inactive, wired) rendered as
//! text rows with usage bars, plus a clock-style demo widget.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod output;
pub mod timeline;
