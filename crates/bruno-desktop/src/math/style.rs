//! Frame style constants

/// Metrics for window chrome and desktop icons
pub struct FrameStyle {
    /// Height of the titlebar strip above the window body
    pub title_bar_height: i32,
    /// Offset of the title text from the window origin
    pub title_inset_x: i32,
    pub title_inset_y: i32,
    /// Side of the square close button at the titlebar's right edge
    pub close_button_size: i32,
    /// Slack around the titlebar that still starts a drag
    pub drag_tolerance: i32,
    /// Side of a square desktop icon
    pub icon_size: i32,
}

/// Default frame style
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 20,
    title_inset_x: 5,
    title_inset_y: 2,
    close_button_size: 20,
    drag_tolerance: 5,
    icon_size: 16,
};
