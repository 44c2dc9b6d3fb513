//! Window management module
//!
//! Provides the window chrome (titlebar, title, close button), drag
//! geometry, and the registry of open windows.

#[allow(clippy::module_inception)]
mod window;
mod config;
mod registry;

pub use window::Window;
pub use config::WindowConfig;
pub use registry::WindowRegistry;

/// Unique window identifier
pub type WindowId = u64;
