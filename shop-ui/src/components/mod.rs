pub mod shop_form;
pub mod window;

use gpui::{App, ClickEvent, Pixels, Point, SharedString, Size, Styled, Window, point, px, size};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};
use shop_core::WindowGeometry;

pub use shop_form::ShopForm;
pub use window::ShopWindow;

/// Screen size assumed when the platform reports no primary display.
const FALLBACK_SCREEN: (u32, u32) = (1920, 1080);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPreferences {
    pub origin: Point<Pixels>,
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self::from_geometry(
            WindowGeometry::quarter_of_screen(FALLBACK_SCREEN.0, FALLBACK_SCREEN.1),
            point(px(0.), px(0.)),
        )
    }
}

impl WindowPreferences {
    /// Places `geometry` relative to the top-left corner of a display.
    pub fn from_geometry(
        geometry: WindowGeometry,
        display_origin: Point<Pixels>,
    ) -> Self {
        Self {
            origin: point(
                display_origin.x + px(geometry.x as f32),
                display_origin.y + px(geometry.y as f32),
            ),
            size: size(px(geometry.width as f32), px(geometry.height as f32)),
        }
    }
}

/// Creates a primary-styled button with a custom click handler.
pub fn make_button(
    id: impl Into<SharedString>,
    label: impl Into<SharedString>,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    Button::new(id.into())
        .primary()
        .small()
        .w(px(100.))
        .label(label.into())
        .on_click(on_click)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn preferences_offset_from_display_origin() {
        let geometry = WindowGeometry::quarter_of_screen(1600, 1200);

        let prefs = WindowPreferences::from_geometry(geometry, point(px(100.), px(0.)));

        assert_eq!(prefs.size, size(px(400.), px(300.)));
        assert_eq!(prefs.origin, point(px(200.), px(75.)));
    }

    #[test]
    fn default_preferences_use_fallback_screen() {
        let prefs = WindowPreferences::default();

        assert_eq!(prefs.size, size(px(480.), px(270.)));
        assert_eq!(prefs.origin, point(px(120.), px(67.)));
    }
}
