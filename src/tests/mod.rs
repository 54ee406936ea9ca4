//! Crate-level tests exercising the public surface end to end
//! (draft construction, configuration, helpers). Unit tests for
//! individual modules live at the bottom of their source files.

mod batch_draft_tests;
mod config_validation;
