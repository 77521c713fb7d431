//! Internal test modules - whitebox tests with crate access
//!
//! Property tests for the chat viewport and harness-based acceptance tests
//! that drive the real dispatcher, gateway and renderer.

mod viewport_properties;

// Harness-based acceptance tests
mod acceptance_chat;
mod acceptance_projects;
