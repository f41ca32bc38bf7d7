// Export our modules for use in the binary and tests
pub mod bus;
pub mod config;
pub mod context;
pub mod data;
pub mod domain;
pub mod error;
pub mod search;
pub mod selection;
pub mod step;
pub mod views;

pub use bus::{DashboardEvent, EventBus, EventName};
pub use context::{Dashboard, DashboardState, StepSummary};
pub use data::{DataStore, Extent, Row};
pub use domain::Metric;
pub use error::LoadError;
pub use step::{ScrollDirection, StepFrame};
