use gpui::{
    App, AppContext, Context, Div, Entity, IntoElement, ParentElement, Render, SharedString,
    Styled, TextAlign, Window, div, px,
};
use gpui_component::{
    h_flex,
    input::{Input, InputState},
    v_flex,
};
use shop_core::{ItemKind, RawQuantities};

/// Quantity fields for the three catalog items.
///
/// A fresh form is built each time the shop opens, so nothing typed survives
/// a trip back to the menu.
pub struct ShopForm {
    cookie: Entity<InputState>,
    sandwich: Entity<InputState>,
    water: Entity<InputState>,
}

impl ShopForm {
    pub fn new(
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        Self {
            cookie: make_quantity_input(window, cx),
            sandwich: make_quantity_input(window, cx),
            water: make_quantity_input(window, cx),
        }
    }

    fn input(
        &self,
        kind: ItemKind,
    ) -> &Entity<InputState> {
        match kind {
            ItemKind::Cookie => &self.cookie,
            ItemKind::Sandwich => &self.sandwich,
            ItemKind::Water => &self.water,
        }
    }

    /// Current text of every field, unparsed.
    pub fn raw_quantities(
        &self,
        cx: &App,
    ) -> RawQuantities {
        let text = |kind: ItemKind| self.input(kind).read(cx).value().to_string();

        RawQuantities::new(
            text(ItemKind::Cookie),
            text(ItemKind::Sandwich),
            text(ItemKind::Water),
        )
    }
}

impl Render for ShopForm {
    fn render(
        &mut self,
        _window: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        v_flex().gap_2().children(
            ItemKind::ALL
                .iter()
                .map(|&kind| make_input_row(self.input(kind), kind.item().to_string())),
        )
    }
}

fn make_quantity_input(
    window: &mut Window,
    cx: &mut Context<ShopForm>,
) -> Entity<InputState> {
    cx.new(|closure_cx| InputState::new(window, closure_cx).placeholder("0"))
}

fn make_input_row(
    state: &Entity<InputState>,
    label: impl Into<SharedString>,
) -> Div {
    h_flex()
        .items_center()
        .gap_5()
        .child(
            div()
                .min_w(px(120.))
                .text_align(TextAlign::Right)
                .child(label.into()),
        )
        .child(Input::new(state).w(px(80.)))
}
