//! Integration tests
//!
//! These tests use wiremock to stand in for the scraped site and drive the
//! scraper and the HTTP router end-to-end.

mod common;
mod server_tests;
