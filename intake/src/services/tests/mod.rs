//! Tests for intake services
