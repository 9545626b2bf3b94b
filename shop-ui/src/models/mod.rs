mod shop_view_model;

pub use shop_view_model::ShopViewModel;
