//! Tests for the member service
