//! Custom Askama template filters.
//!
//! Modules that derive a template extending `base.html` need
//! `use crate::filters;` so these resolve.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Current year, for the footer: `{{ ""|current_year }}`.
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
