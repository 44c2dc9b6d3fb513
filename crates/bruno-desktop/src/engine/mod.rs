//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `input`: Pointer event dispatch and drag operations
//! - `rendering`: Frame drawing and the per-frame driver

mod input;
mod rendering;

use crate::config::DesktopConfig;
use crate::desktop::{App, AppId, MenuBar};
use crate::input::InputRouter;
use crate::window::{Window, WindowId, WindowRegistry};

pub use rendering::FrameOutcome;

/// Desktop engine: the frame-loop context
///
/// This is the main entry point for desktop operations, owning:
/// - Configuration (screen, palette, font)
/// - Apps, each with its one window
/// - Window registry (which windows are open, in paint order)
/// - Input router (drag session)
/// - Menu bar
pub struct Desktop {
    config: DesktopConfig,
    apps: Vec<App>,
    registry: WindowRegistry,
    input: InputRouter,
    menu_bar: Option<MenuBar>,
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new(DesktopConfig::default())
    }
}

impl Desktop {
    /// Create an empty desktop
    pub fn new(config: DesktopConfig) -> Self {
        let menu_bar = config
            .menu_bar
            .as_ref()
            .map(|bar| MenuBar::new(bar, &config.palette, config.screen));
        Self {
            config,
            apps: Vec::new(),
            registry: WindowRegistry::new(),
            input: InputRouter::new(),
            menu_bar,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Add an app; its window starts closed
    pub fn add_app(&mut self, app: App) -> AppId {
        self.apps.push(app);
        self.apps.len() - 1
    }

    /// Get an app
    pub fn app(&self, id: AppId) -> Option<&App> {
        self.apps.get(id)
    }

    /// Get an app mutably
    pub fn app_mut(&mut self, id: AppId) -> Option<&mut App> {
        self.apps.get_mut(id)
    }

    /// Get all apps in icon order
    pub fn apps(&self) -> &[App] {
        &self.apps
    }

    /// Get the window registry
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Get the input router
    pub fn input(&self) -> &InputRouter {
        &self.input
    }

    /// Get the menu bar, if enabled
    pub fn menu_bar(&self) -> Option<&MenuBar> {
        self.menu_bar.as_ref()
    }

    /// Open an app's window
    pub fn launch(&mut self, id: AppId) -> bool {
        match self.apps.get(id) {
            Some(app) => app.launch(&mut self.registry),
            None => false,
        }
    }

    /// Close an app's window
    pub fn close(&mut self, id: AppId) -> bool {
        let Some(app) = self.apps.get(id) else {
            return false;
        };
        let closed = app.close(&mut self.registry);
        if closed {
            self.input.forget_window(app.window_id());
        }
        closed
    }

    /// Find a window by id, open or not
    pub fn window(&self, id: WindowId) -> Option<&Window> {
        find_window(&self.apps, id)
    }

    /// Iterate open windows in paint order
    pub fn open_windows(&self) -> impl Iterator<Item = &Window> + '_ {
        self.registry
            .iter()
            .filter_map(move |id| find_window(&self.apps, id))
    }
}

fn find_window(apps: &[App], id: WindowId) -> Option<&Window> {
    apps.iter().map(App::window).find(|w| w.id() == id)
}

fn find_window_mut(apps: &mut [App], id: WindowId) -> Option<&mut Window> {
    apps.iter_mut().map(App::window_mut).find(|w| w.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowConfig;

    fn create_test_app(config: &DesktopConfig, title: &str, icon_y: i32) -> App {
        let window = Window::without_content(config.window(title, 100, 100, 120, 80)).unwrap();
        App::new(10, icon_y, "icon.png", window)
    }

    #[test]
    fn test_desktop_defaults() {
        let desktop = Desktop::default();
        assert!(desktop.apps().is_empty());
        assert!(desktop.registry().is_empty());
        assert_eq!(desktop.menu_bar().map(|b| b.label()), Some("Brunotron"));
    }

    #[test]
    fn test_menu_bar_disabled() {
        let config = DesktopConfig {
            menu_bar: None,
            ..Default::default()
        };
        assert!(Desktop::new(config).menu_bar().is_none());
    }

    #[test]
    fn test_launch_and_close_by_app_id() {
        let mut desktop = Desktop::default();
        let app = create_test_app(desktop.config(), "One", 40);
        let id = desktop.add_app(app);
        let window_id = desktop.app(id).unwrap().window_id();

        assert!(desktop.launch(id));
        assert!(!desktop.launch(id));
        assert_eq!(desktop.open_windows().map(|w| w.id()).collect::<Vec<_>>(), vec![window_id]);

        assert!(desktop.close(id));
        assert!(!desktop.close(id));
        assert_eq!(desktop.open_windows().count(), 0);
        assert!(desktop.window(window_id).is_some());
    }

    #[test]
    fn test_unknown_app_id_is_noop() {
        let mut desktop = Desktop::default();
        assert!(!desktop.launch(3));
        assert!(!desktop.close(3));
        assert!(desktop.app(3).is_none());
    }

    #[test]
    fn test_open_windows_in_launch_order() {
        let mut desktop = Desktop::default();
        let a = desktop.add_app(create_test_app(&DesktopConfig::default(), "A", 40));
        let b = desktop.add_app(create_test_app(&DesktopConfig::default(), "B", 60));

        desktop.launch(b);
        desktop.launch(a);
        let titles: Vec<&str> = desktop.open_windows().map(|w| w.title()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_window_lookup_by_id() {
        let mut desktop = Desktop::default();
        let window = Window::without_content(WindowConfig::new("Solo", 0, 0, 50, 50)).unwrap();
        let window_id = window.id();
        desktop.add_app(App::new(0, 40, "solo.png", window));

        assert_eq!(desktop.window(window_id).map(|w| w.title()), Some("Solo"));
        assert!(find_window_mut(&mut desktop.apps, window_id).is_some());
        assert!(desktop.window(window_id + 1_000_000).is_none());
    }
}
