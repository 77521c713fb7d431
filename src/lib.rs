//! Cortex TUI
//!
//! Terminal chat interface for asking an assistant questions about
//! software projects and browsing each project's information sources.
//!
//! Pure core (`model`, `view_state`, `state`) behind an impure shell
//! (`backend`, `view`, `logging`).

pub mod backend;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
