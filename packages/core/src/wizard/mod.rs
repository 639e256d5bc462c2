//! Authentication wizard
//!
//! ```text
//! Identify --exists--> Password --success--> (authenticated)
//!    |
//!    +--new--> Verify --success--> Register --success--> (authenticated)
//! ```

mod controller;
mod state;
mod view;

pub use controller::*;
pub use state::*;
pub use view::*;
