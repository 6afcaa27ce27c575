//! Presentation state: the appearance and category cells, the global view
//! root and the presenter that coalesces changes into render passes.

mod appearance;
mod presenter;
mod selector;
mod view_root;

pub use appearance::{AppearanceController, ModeChanged};
pub use presenter::{Intent, Presenter};
pub use selector::CategorySelector;
pub use view_root::{ApplyGlobalMode, Headless, ViewRoot};
