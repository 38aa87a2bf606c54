use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChoroplethColors, LabelEntry, MercatorProjection, Viewport, place_labels};
use crate::error::VizResult;
use crate::geo::GeometryProvider;
use crate::render::{Color, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive};

const INFO_PANEL_RIGHT_INSET_PX: f64 = 250.0;
const INFO_PANEL_BOTTOM_MARGIN_PX: f64 = 20.0;
const INFO_LINE_HEIGHT_PX: f64 = 20.0;
const INFO_FONT_SIZE_PX: f64 = 14.0;

/// Choropleth world map over region-keyed values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethMapConfig {
    pub viewport: Viewport,
    pub projection_scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub gradient_min: f64,
    pub gradient_max: f64,
    pub region_stroke: Color,
}

impl ChoroplethMapConfig {
    /// Config with the stock framing: projection scale 100 and the map
    /// center pulled left and down within the viewport.
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            projection_scale: 100.0,
            translate_x: f64::from(viewport.width) / 2.5,
            translate_y: f64::from(viewport.height) / 1.5,
            gradient_min: 0.0,
            gradient_max: 100.0,
            region_stroke: Color::rgb(1.0, 1.0, 1.0),
        }
    }
}

impl Default for ChoroplethMapConfig {
    fn default() -> Self {
        Self::for_viewport(Viewport::new(900, 400))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChoroplethMap {
    pub config: ChoroplethMapConfig,
}

impl ChoroplethMap {
    #[must_use]
    pub fn new(config: ChoroplethMapConfig) -> Self {
        Self { config }
    }

    /// Fetches region geometry, projects every ring, fills regions from
    /// the value table, and stacks the info panel in the lower right.
    ///
    /// A provider failure propagates as `GeometryFetch`; deciding
    /// whether that is fatal is the caller's call (the dashboard leaves
    /// the map blank and logs).
    pub fn render(
        &self,
        provider: &dyn GeometryProvider,
        values: &IndexMap<String, f64>,
        info: &[LabelEntry],
    ) -> VizResult<RenderFrame> {
        let regions = provider.fetch_regions()?;
        let colors = ChoroplethColors::new(self.config.gradient_min, self.config.gradient_max)?;
        let projection = MercatorProjection::new(
            self.config.projection_scale,
            self.config.translate_x,
            self.config.translate_y,
        )?;

        let mut frame = RenderFrame::new(self.config.viewport);
        let mut skipped_rings = 0_usize;
        for region in regions.values() {
            let fill = colors.color_for(&region.code, values);
            for ring in &region.rings {
                if ring.len() < 3 {
                    skipped_rings += 1;
                    continue;
                }
                let projected = projection
                    .project_ring(ring)
                    .into_iter()
                    .map(|point| (point.x, point.y))
                    .collect();
                frame.paths.push(PathPrimitive::polygon(
                    projected,
                    fill,
                    Some(self.config.region_stroke),
                    1.0,
                ));
            }
        }
        debug!(
            regions = regions.len(),
            rings = frame.paths.len(),
            skipped_rings,
            "projected region geometry"
        );

        let anchor_x = f64::from(self.config.viewport.width) - INFO_PANEL_RIGHT_INSET_PX;
        let anchor_y = f64::from(self.config.viewport.height)
            - (info.len() as f64) * INFO_LINE_HEIGHT_PX
            - INFO_PANEL_BOTTOM_MARGIN_PX;
        for label in place_labels(info, anchor_x, anchor_y, INFO_LINE_HEIGHT_PX)? {
            frame.texts.push(TextPrimitive::new(
                label.text,
                label.x,
                label.y,
                INFO_FONT_SIZE_PX,
                Color::rgb(0.2, 0.2, 0.2),
                TextHAlign::Left,
            ));
        }

        Ok(frame)
    }
}
