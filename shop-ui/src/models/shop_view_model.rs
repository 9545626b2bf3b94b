use shop_core::{
    NavAction, NavigationError, Navigator, PricingCalculator, RawQuantities, TotalDisplay,
    ViewState,
};

/// Everything the window displays, independent of the widget tree.
///
/// The window owns one of these and re-renders from it after each action.
#[derive(Debug, Clone, Default)]
pub struct ShopViewModel {
    navigator: Navigator,
    total: TotalDisplay,
    calculator: PricingCalculator,
}

impl ShopViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewState {
        self.navigator.current()
    }

    pub fn total(&self) -> TotalDisplay {
        self.total
    }

    pub fn total_text(&self) -> String {
        self.total.text()
    }

    /// Menu → shop form.
    pub fn open_shop(&mut self) -> Result<(), NavigationError> {
        self.navigator.apply(NavAction::Shop)?;
        Ok(())
    }

    /// Shop form → menu. Clears the total so the menu looks as it did at
    /// startup.
    pub fn back(&mut self) -> Result<(), NavigationError> {
        self.navigator.apply(NavAction::Back)?;
        self.total = TotalDisplay::Initial;
        Ok(())
    }

    /// Recomputes the total from the current field text.
    pub fn calculate(
        &mut self,
        raw: &RawQuantities,
    ) -> TotalDisplay {
        self.total = self.calculator.display(raw);
        self.total
    }
}
