//! Reusable UI components

mod auth_modal;
mod header;
mod loading;
mod product_grid;
mod toast_stack;

pub use auth_modal::*;
pub use header::*;
pub use loading::*;
pub use product_grid::*;
pub use toast_stack::*;
