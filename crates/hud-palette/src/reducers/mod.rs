pub mod app_reducer;
pub mod palette_reducer;

pub use app_reducer::reduce;
