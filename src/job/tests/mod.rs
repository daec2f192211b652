//! Unit tests for the job descriptor model.

mod domain_tests;
