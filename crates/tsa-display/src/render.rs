//! Frame assembly: snapshot in, ordered draw primitives out.

use serde::{Deserialize, Serialize};

use tsa_core::constants::*;
use tsa_core::enums::LineCap;
use tsa_core::error::ConfigError;
use tsa_core::primitives::DrawPrimitive;
use tsa_core::state::SimulationState;
use tsa_core::types::{Color, LineSegment, Point2D, Rect, TacticalVector};
use tsa_geometry::shading::ShadedRegionBuilder;
use tsa_geometry::transform::CoordinateTransform;
use tsa_geometry::vectors::{beam_edges, project_vector, ScreenVector};

use crate::picture::TacticalPicture;
use crate::style::DisplayStyle;

/// Display configuration, typically loaded from the host's JSON config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub world_bounds: Rect,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub aspect_preserve: bool,
    pub safety_margin_px: f64,
    pub style: DisplayStyle,
    pub picture: TacticalPicture,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let (min_x, min_y, max_x, max_y) = DEFAULT_WORLD_BOUNDS;
        Self {
            world_bounds: Rect::new(min_x, min_y, max_x, max_y),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            aspect_preserve: true,
            safety_margin_px: DEFAULT_SAFETY_MARGIN_PX,
            style: DisplayStyle::default(),
            picture: TacticalPicture::default(),
        }
    }
}

/// Builds the draw list for one frame.
///
/// Paint order: background, grid, hatch, beam edges and bearing line,
/// markers, then each vector's shaft followed by its head.
#[derive(Debug, Clone)]
pub struct TacticalRenderer {
    transform: CoordinateTransform,
    shading: ShadedRegionBuilder,
    style: DisplayStyle,
    picture: TacticalPicture,
}

impl TacticalRenderer {
    pub fn new(config: DisplayConfig) -> Result<Self, ConfigError> {
        let transform = CoordinateTransform::new(
            config.world_bounds,
            config.viewport_width,
            config.viewport_height,
            config.aspect_preserve,
        )?;
        let renderer = Self {
            transform,
            shading: ShadedRegionBuilder::new(config.safety_margin_px),
            style: config.style,
            picture: config.picture,
        };
        renderer.check_grid_spacing();
        Ok(renderer)
    }

    pub fn render(&self, state: &SimulationState) -> Vec<DrawPrimitive> {
        let viewport = self.transform.viewport();
        let mut frame = Vec::with_capacity(32);

        frame.push(DrawPrimitive::FillRect {
            rect: viewport,
            color: self.style.background,
        });

        if self.style.grid_enabled {
            self.push_grid(&mut frame);
        }

        let vectors: Vec<ScreenVector> = self
            .picture
            .frame_vectors(state, &self.style)
            .iter()
            .map(|v| project_vector(v, &self.transform))
            .collect();

        let beam = self.picture.bearing_line(state, &self.style);
        let sensor = self.transform.to_screen(beam.start);
        let contact = self.transform.to_screen(beam.end);
        let own_ship = self.transform.to_screen(state.own_ship_pos);

        let tips: Vec<Point2D> = vectors.iter().map(|v| v.to).collect();
        let region = self
            .shading
            .build(LineSegment::new(sensor, contact), &viewport, own_ship, &tips);
        if region.polygon.len() >= 3 {
            frame.push(DrawPrimitive::Polygon {
                points: region.polygon,
                pattern: self.style.hatch_pattern,
                color: self.style.hatch_color,
                opacity: self.style.hatch_opacity,
            });
        } else {
            log::debug!("render: tick {} has no hatch region", state.tick);
        }

        if let Some(edges) = beam_edges(sensor, contact, beam.width_deg) {
            for edge in edges {
                frame.push(DrawPrimitive::Line {
                    from: edge.a,
                    to: edge.b,
                    color: self.style.beam_edge_color,
                    width: self.style.beam_edge_width,
                    cap: LineCap::Round,
                });
            }
        }
        frame.push(DrawPrimitive::Line {
            from: sensor,
            to: contact,
            color: beam.color,
            width: beam.line_width,
            cap: LineCap::Round,
        });

        for (center, color) in [
            (own_ship, self.style.own_ship_color),
            (sensor, self.style.sensor_color),
            (contact, self.style.contact_color),
        ] {
            frame.push(DrawPrimitive::Circle {
                center,
                radius: self.style.marker_radius,
                color,
            });
        }

        for v in &vectors {
            frame.push(DrawPrimitive::Line {
                from: v.from,
                to: v.to,
                color: v.color,
                width: v.line_width,
                cap: LineCap::Round,
            });
            frame.push(DrawPrimitive::Triangle {
                points: v.head,
                color: v.color,
            });
        }

        log::trace!("render: tick {} -> {} primitives", state.tick, frame.len());
        frame
    }

    /// Grid lines at multiples of the spacing inside the world bounds.
    fn push_grid(&self, frame: &mut Vec<DrawPrimitive>) {
        let bounds = self.transform.world_bounds();
        let Some(spacing) = grid_spacing(&bounds, self.style.grid_spacing_nm) else {
            return;
        };
        let line = |from: Point2D, to: Point2D, color: Color, width: f64| DrawPrimitive::Line {
            from: self.transform.to_screen(from),
            to: self.transform.to_screen(to),
            color,
            width,
            cap: LineCap::Flat,
        };

        for x in grid_stops(bounds.min_x, bounds.max_x, spacing) {
            frame.push(line(
                Point2D::new(x, bounds.min_y),
                Point2D::new(x, bounds.max_y),
                self.style.grid_color,
                self.style.grid_line_width,
            ));
        }
        for y in grid_stops(bounds.min_y, bounds.max_y, spacing) {
            frame.push(line(
                Point2D::new(bounds.min_x, y),
                Point2D::new(bounds.max_x, y),
                self.style.grid_color,
                self.style.grid_line_width,
            ));
        }
    }

    pub fn set_world_bounds(&mut self, bounds: Rect) -> Result<(), ConfigError> {
        self.transform.set_world_bounds(bounds)?;
        self.check_grid_spacing();
        Ok(())
    }

    fn check_grid_spacing(&self) {
        if !self.style.grid_enabled {
            return;
        }
        let requested = self.style.grid_spacing_nm;
        match grid_spacing(&self.transform.world_bounds(), requested) {
            None => log::warn!("grid spacing {requested} nm is not positive, grid disabled"),
            Some(spacing) if spacing != requested => {
                log::warn!("grid spacing {requested} nm too fine for the world bounds, using {spacing} nm")
            }
            Some(_) => {}
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.transform.resize(width, height);
    }

    pub fn add_vector(&mut self, vector: TacticalVector) {
        self.picture.add_vector(vector);
    }

    pub fn clear_vectors(&mut self) {
        self.picture.clear_vectors();
    }

    pub fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    pub fn style(&self) -> &DisplayStyle {
        &self.style
    }

    pub fn picture(&self) -> &TacticalPicture {
        &self.picture
    }

    pub fn picture_mut(&mut self) -> &mut TacticalPicture {
        &mut self.picture
    }
}

/// Usable grid spacing for `bounds`: `requested` widened by a whole
/// factor until neither axis needs more than [`MAX_GRID_LINES_PER_AXIS`]
/// intervals. `None` for a non-positive or non-finite request.
fn grid_spacing(bounds: &Rect, requested: f64) -> Option<f64> {
    if !(requested.is_finite() && requested > 0.0) {
        return None;
    }
    let span = bounds.width().max(bounds.height());
    let intervals = span / requested;
    let max = MAX_GRID_LINES_PER_AXIS as f64;
    if intervals > max {
        Some(requested * (intervals / max).ceil())
    } else {
        Some(requested)
    }
}

/// Multiples of `spacing` in `[min, max]`.
fn grid_stops(min: f64, max: f64, spacing: f64) -> impl Iterator<Item = f64> {
    let first = (min / spacing).ceil() as i64;
    let last = (max / spacing).floor() as i64;
    (first..=last).map(move |k| k as f64 * spacing)
}
