use gpui::{
    AnyView, App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use shop_core::WindowGeometry;
use tracing::{debug, info};

use crate::{
    Quit,
    components::{ShopWindow, WindowPreferences},
    quit,
};

pub const WINDOW_TITLE: &str = "Shop Menu";

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: WINDOW_TITLE.into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Window size and position derived from the primary display.
fn window_preferences(app_cx: &App) -> WindowPreferences {
    let Some(display) = app_cx.primary_display() else {
        debug!("no primary display reported, using fallback window size");
        return WindowPreferences::default();
    };

    let screen = display.bounds();
    let geometry = WindowGeometry::quarter_of_screen(
        f32::from(screen.size.width) as u32,
        f32::from(screen.size.height) as u32,
    );
    debug!(?geometry, "window geometry from primary display");
    WindowPreferences::from_geometry(geometry, screen.origin)
}

/// Opens the fixed-size main window.
pub fn open_main_window(app_cx: &mut App) -> anyhow::Result<()> {
    let prefs = window_preferences(app_cx);

    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds {
            origin: prefs.origin,
            size: prefs.size,
        })),
        titlebar: Some(TitlebarOptions {
            title: Some(WINDOW_TITLE.into()),
            ..Default::default()
        }),
        is_resizable: false,
        ..Default::default()
    };

    app_cx.open_window(options, |window, cx| {
        let view: AnyView = cx.new(ShopWindow::new).into();
        cx.new(|cx| Root::new(view, window, cx))
    })?;

    info!("main window opened");
    Ok(())
}
