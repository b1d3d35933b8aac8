//! Fetch adapter for FRED series served by the econdash proxy, plus the
//! dashboard loader that runs one fetch per indicator concurrently.

pub mod dashboard;
pub mod error;
pub mod fred;

pub use dashboard::{load_dashboard, render_text, Dashboard, DashboardOptions, Panel, PanelStatus};
pub use error::ClientError;
pub use fred::{FetchOutcome, FredClient};
