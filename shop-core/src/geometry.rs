//! Startup window placement.

/// Size and position of the main window, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

impl WindowGeometry {
    /// A window one quarter of the screen in each dimension, offset from the
    /// top-left corner by a quarter of its own size.
    ///
    /// ```
    /// use shop_core::WindowGeometry;
    ///
    /// let geometry = WindowGeometry::quarter_of_screen(1920, 1080);
    /// assert_eq!((geometry.width, geometry.height), (480, 270));
    /// assert_eq!((geometry.x, geometry.y), (120, 67));
    /// ```
    pub fn quarter_of_screen(
        screen_width: u32,
        screen_height: u32,
    ) -> Self {
        let width = screen_width / 4;
        let height = screen_height / 4;
        Self {
            width,
            height,
            x: width / 4,
            y: height / 4,
        }
    }
}
