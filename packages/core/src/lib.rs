//! Storefront client core
//!
//! Framework-free logic shared by the web and terminal front ends:
//!
//! - [`wizard`]: the four-step authentication wizard and the view capabilities it drives
//! - [`api`]: the data-access seam with HTTP and in-memory transports
//! - [`products`]: product cards and price formatting
//! - [`notification`]: transient toast notifications
//! - [`session`]: the "signed in" marker shown in the page header

pub mod api;
pub mod config;
pub mod error;
pub mod identifier;
pub mod notification;
pub mod products;
pub mod session;
pub mod wizard;

#[cfg(feature = "testing")]
pub mod testing;

pub use api::{
    AuthReply, AuthRequest, ClientTransport, DemoTransport, Endpoint, HttpTransport, StorefrontApi,
    Transport,
};
pub use config::{ClientConfig, Locale};
pub use error::{ClientError, ClientResult};
pub use identifier::IdentifierKind;
pub use notification::{Notification, NotificationCenter, NotificationKind};
pub use products::{Availability, Catalog, Product, ProductCard};
pub use session::Session;
pub use wizard::{
    AuthWizard, Field, FormValues, Notifier, Outcome, PendingSubmit, Step, StepView, Submission,
    WizardState,
};
