//! Actions module
//!
//! All actions of the application, tagged by the part of the app they target:
//! - Global actions (raw input, terminal resize, quit)
//! - Palette actions that drive the command list
//! - Source actions for loading and executing commands

pub mod global;
pub mod palette;
pub mod source;

pub use global::GlobalAction;
pub use palette::PaletteAction;
pub use source::SourceAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Application-wide actions
    Global(GlobalAction),
    /// Command palette actions
    Palette(PaletteAction),
    /// Action source actions
    Source(SourceAction),
}
