// src/lib.rs

//! Lottery site page extraction and winning determination.
//!
//! Saved pages are decoded from EUC-KR, parsed with `scraper`, and turned
//! into typed records. Purchased slots are checked against a draw and the
//! results are collected into a summary that renders as a log report or as
//! a notification mail.

pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
