//! Font preferences for a front-end application.
//!
//! A [`service::FontService`] holds the user's UI font, monospace font and
//! base size, validated against a catalog loaded from a JSON manifest. Each
//! change is saved to a key-value store and reflected as CSS custom
//! properties plus `@font-face` rules on a [`style::StyleSink`].

pub mod bindings;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod service;
pub mod storage;
pub mod style;
