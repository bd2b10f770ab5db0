//! Filtering and aggregation pipeline behind an incident dashboard.
//!
//! A fixed dataset of events is loaded once into an [`EventStore`]. The
//! timeline is produced by [`pipeline::filter`], regional cards by
//! [`pipeline::group_by_region`] and the summary card by
//! [`pipeline::summarize`]. [`Dashboard`] ties them together with the
//! timeline cursor and region drill-down state.

pub mod app;
pub mod charts;
pub mod config;
pub mod error;
pub mod geo;
pub mod model;
pub mod pipeline;
pub mod selection;
pub mod store;

pub use app::Dashboard;
pub use config::{RegionGroup, RegionTable};
pub use error::{AtlasError, Result};
pub use model::Event;
pub use store::EventStore;
