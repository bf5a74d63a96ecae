//! Tests for the evaluation driver

mod support;

mod cv_tests;
