//! Integration tests for Wiki Time Travel
//!
//! These tests point the API client at a wiremock server and drive the
//! resolver, the revision lookups, and whole sessions end-to-end.

mod common;
mod session_tests;
