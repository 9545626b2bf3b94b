use gpui::{
    App, AppContext, ClickEvent, Context, Entity, FontWeight, IntoElement, ParentElement, Render,
    Styled, Subscription, Window, div,
};
use gpui_component::{StyledExt, h_flex, v_flex};
use shop_core::ViewState;
use tracing::{info, warn};

use crate::{
    Quit,
    components::{ShopForm, make_button},
    models::ShopViewModel,
    quit,
};

/// Root view of the main window: the menu, or the shop form, plus the total.
pub struct ShopWindow {
    model: ShopViewModel,
    form: Option<Entity<ShopForm>>,
    _window_close_subscription: Subscription,
}

impl ShopWindow {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("Window closed callback");
            quit(&Quit, cx);
        });

        info!("Window constructed");
        Self {
            model: ShopViewModel::new(),
            form: None,
            _window_close_subscription: subscription,
        }
    }

    fn open_shop(
        &mut self,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match self.model.open_shop() {
            Ok(()) => self.form = Some(cx.new(|form_cx| ShopForm::new(window, form_cx))),
            Err(error) => warn!(%error, "navigation ignored"),
        }
        cx.notify();
    }

    fn back(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        match self.model.back() {
            Ok(()) => self.form = None,
            Err(error) => warn!(%error, "navigation ignored"),
        }
        cx.notify();
    }

    fn calculate(
        &mut self,
        cx: &mut Context<Self>,
    ) {
        let Some(form) = self.form.as_ref() else {
            warn!("calculate requested with no shop form open");
            return;
        };
        let raw = form.read(cx).raw_quantities(cx);
        self.model.calculate(&raw);
        cx.notify();
    }

    fn render_menu(
        &self,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        h_flex().justify_center().child(make_button(
            "shop",
            "Shop",
            cx.listener(|this, _: &ClickEvent, window, cx| this.open_shop(window, cx)),
        ))
    }

    fn render_shop_form(
        &self,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex()
            .gap_3()
            .items_center()
            .children(self.form.clone())
            .child(
                h_flex()
                    .gap_4()
                    .child(make_button(
                        "calculate",
                        "Calculate",
                        cx.listener(|this, _: &ClickEvent, _, cx| this.calculate(cx)),
                    ))
                    .child(make_button(
                        "back",
                        "Back",
                        cx.listener(|this, _: &ClickEvent, _, cx| this.back(cx)),
                    )),
            )
    }
}

impl Render for ShopWindow {
    fn render(
        &mut self,
        _: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let body = match self.model.view() {
            ViewState::Menu => self.render_menu(cx).into_any_element(),
            ViewState::ShopForm => self.render_shop_form(cx).into_any_element(),
        };

        div()
            .v_flex()
            .gap_2()
            .p_3()
            .size_full()
            .items_center()
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::BOLD)
                    .child("MENU"),
            )
            .child(body)
            .child(div().text_lg().child(self.model.total_text()))
    }
}
