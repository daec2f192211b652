//! Unit tests for the service ontology.

mod catalog_tests;
mod domain_tests;
