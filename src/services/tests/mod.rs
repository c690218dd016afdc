//! Unit tests for service implementations

mod environment;
