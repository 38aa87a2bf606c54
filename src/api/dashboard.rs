use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::charts::{
    BarChart, BarChartConfig, ChoroplethMap, ChoroplethMapConfig, LineChart, LineChartConfig,
};
use crate::core::{CategoryValue, LabelEntry, SeriesPoint};
use crate::datasets;
use crate::error::VizError;
use crate::geo::GeometryProvider;
use crate::render::Renderer;

/// Configuration for all three chart surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    pub line: LineChartConfig,
    pub bar: BarChartConfig,
    pub map: ChoroplethMapConfig,
}

/// Input datasets for one dashboard pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub growth: Vec<SeriesPoint>,
    pub languages: Vec<CategoryValue>,
    pub penetration: IndexMap<String, f64>,
    pub info: Vec<LabelEntry>,
}

impl Default for DashboardData {
    /// The built-in internet adoption datasets.
    fn default() -> Self {
        Self {
            growth: datasets::internet_user_growth(),
            languages: datasets::language_usage(),
            penetration: datasets::internet_penetration(),
            info: datasets::penetration_labels(),
        }
    }
}

/// Result of one pipeline run.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// Frame was built and handed to the renderer.
    Rendered,
    /// Pipeline failed; nothing was drawn for its surface.
    Skipped(VizError),
}

impl PipelineOutcome {
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered)
    }
}

/// Per-pipeline outcomes for one `render_all` pass.
#[derive(Debug)]
pub struct DashboardReport {
    pub line: PipelineOutcome,
    pub bar: PipelineOutcome,
    pub map: PipelineOutcome,
}

impl DashboardReport {
    #[must_use]
    pub fn all_rendered(&self) -> bool {
        self.line.is_rendered() && self.bar.is_rendered() && self.map.is_rendered()
    }
}

/// Runs the three chart pipelines against one renderer.
///
/// Pipelines are independent: each builds its own scales and frame, and
/// one failing never blocks the other two. A surface whose pipeline
/// fails renders nothing at all rather than a partial chart.
#[derive(Debug)]
pub struct Dashboard<R: Renderer> {
    renderer: R,
    config: DashboardConfig,
}

impl<R: Renderer> Dashboard<R> {
    #[must_use]
    pub fn new(renderer: R, config: DashboardConfig) -> Self {
        Self { renderer, config }
    }

    #[must_use]
    pub fn config(&self) -> DashboardConfig {
        self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Consumes the dashboard, handing the renderer back to the host.
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Renders the line, bar, and map surfaces in turn.
    ///
    /// A failed geometry fetch leaves the map blank: the error is logged
    /// and reported, not escalated, so an offline host still gets its
    /// two local charts.
    pub fn render_all(
        &mut self,
        data: &DashboardData,
        provider: &dyn GeometryProvider,
    ) -> DashboardReport {
        let line = self.run_pipeline("line", |config, renderer| {
            let frame = LineChart::new(config.line).render(&data.growth)?;
            renderer.render(&frame)
        });
        let bar = self.run_pipeline("bar", |config, renderer| {
            let frame = BarChart::new(config.bar).render(&data.languages)?;
            renderer.render(&frame)
        });
        let map = self.run_pipeline("map", |config, renderer| {
            let frame =
                ChoroplethMap::new(config.map).render(provider, &data.penetration, &data.info)?;
            renderer.render(&frame)
        });

        DashboardReport { line, bar, map }
    }

    fn run_pipeline(
        &mut self,
        surface: &str,
        run: impl FnOnce(DashboardConfig, &mut R) -> crate::error::VizResult<()>,
    ) -> PipelineOutcome {
        match run(self.config, &mut self.renderer) {
            Ok(()) => {
                debug!(surface, "pipeline rendered");
                PipelineOutcome::Rendered
            }
            Err(err) => {
                warn!(surface, error = %err, "pipeline skipped, surface left blank");
                PipelineOutcome::Skipped(err)
            }
        }
    }
}
