pub mod palette_view_model;

pub use palette_view_model::PaletteViewModel;
