//! Unit tests for the dispatch layer.
