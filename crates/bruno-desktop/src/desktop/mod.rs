//! Desktop furniture: app launchers and the menu bar

mod app;
mod menu_bar;

pub use app::App;
pub use menu_bar::MenuBar;

/// Index of an app on the desktop
pub type AppId = usize;
