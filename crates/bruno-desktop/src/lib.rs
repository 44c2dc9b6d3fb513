//! Retained-mode desktop for Brunotron
//!
//! This crate provides the core desktop environment functionality:
//! - Widget composition (text, buttons, containers)
//! - Windows with a draggable titlebar and a close button
//! - App launcher icons and the open-window registry
//! - Pointer dispatch and the per-frame driver
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Geometry re-exports and frame style constants
//! - [`view`]: The `View` trait and its `Text`, `Button`, `MultiView` widgets
//! - [`window`]: Window chrome, window config and the registry
//! - [`desktop`]: App launchers and the menu bar
//! - [`input`]: Drag session state and dispatch results
//! - [`engine`]: The `Desktop` frame-loop context
//! - [`config`]: Screen, palette, font and menu bar settings
//!
//! Rendering and input go through the `Surface` and `EventSource` traits in
//! `bruno-hal`, so everything here runs headless under `bruno-hal-mock`.
//!
//! ## Example
//!
//! ```rust
//! use bruno_desktop::{App, Button, Desktop, DesktopConfig, Window};
//!
//! let mut desktop = Desktop::new(DesktopConfig::default());
//! let config = desktop.config().window("Hello", 100, 100, 200, 120);
//! let button = Button::new(10, 10, 60, 20, "Press").unwrap();
//! let window = Window::new(config, button).unwrap();
//!
//! let app = desktop.add_app(App::new(10, 40, "hello.png", window));
//! assert!(desktop.launch(app));
//! assert_eq!(desktop.open_windows().count(), 1);
//! ```

pub mod config;
pub mod desktop;
pub mod engine;
pub mod error;
pub mod input;
pub mod math;
pub mod view;
pub mod window;

// Re-export main types
pub use bruno_hal::{Color, EventSource, Font, InputEvent, Surface, SurfaceError};
pub use config::{DesktopConfig, MenuBarConfig, Palette, DEFAULT_SCREEN};
pub use desktop::{App, AppId, MenuBar};
pub use engine::{Desktop, FrameOutcome};
pub use error::DesktopError;
pub use input::{DragSession, InputResult, InputRouter};
pub use math::{Point, Rect, Size, FRAME_STYLE};
pub use view::{Action, Button, MultiView, Text, View};
pub use window::{Window, WindowConfig, WindowId, WindowRegistry};
