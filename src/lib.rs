//! statchart: static-chart geometry engine.
//!
//! This crate turns fixed in-memory datasets into backend-agnostic
//! `RenderFrame` scenes for three chart kinds: a line chart, a horizontal
//! bar chart, and a choropleth world map. Scale construction, projection,
//! and geometry mapping are pure and deterministic; drawing backends and
//! geometry transport plug in through the `Renderer` and `GeometryProvider`
//! traits.

pub mod api;
pub mod charts;
pub mod core;
pub mod datasets;
pub mod error;
pub mod geo;
pub mod render;
pub mod telemetry;

pub use api::{Dashboard, DashboardConfig, DashboardReport};
pub use error::{VizError, VizResult};
