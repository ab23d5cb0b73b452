//! Integration tests

mod session_tests;
