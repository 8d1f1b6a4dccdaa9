//! World ↔ screen coordinate mapping.
//!
//! World space is nautical miles with y pointing North; screen space is
//! pixels with y pointing down. The map is a scale plus offset with the
//! y axis negated, so North is up on screen:
//!
//! ```text
//! screen.x = offset_x + world.x * scale_x
//! screen.y = offset_y - world.y * scale_y
//! ```

use serde::{Deserialize, Serialize};

use tsa_core::constants::*;
use tsa_core::error::ConfigError;
use tsa_core::types::{Point2D, Rect};

/// Closed-form affine map between world and screen space.
///
/// In aspect-preserving mode `scale_x == scale_y`. Both are always
/// positive once produced by [`CoordinateTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl AffineTransform {
    /// Uniform-scale transform.
    pub fn uniform(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            offset_x,
            offset_y,
        }
    }

    pub fn is_uniform(&self) -> bool {
        self.scale_x == self.scale_y
    }

    /// Both scales positive and every term finite.
    pub fn is_valid(&self) -> bool {
        self.scale_x > 0.0
            && self.scale_y > 0.0
            && [self.scale_x, self.scale_y, self.offset_x, self.offset_y]
                .iter()
                .all(|v| v.is_finite())
    }

    /// The uniform scale (the x scale in non-uniform mode).
    pub fn scale(&self) -> f64 {
        self.scale_x
    }

    /// World → screen.
    pub fn apply(&self, p: Point2D) -> Point2D {
        Point2D::new(
            self.offset_x + p.x * self.scale_x,
            self.offset_y - p.y * self.scale_y,
        )
    }

    /// Screen → world.
    pub fn invert(&self, p: Point2D) -> Point2D {
        Point2D::new(
            (p.x - self.offset_x) / self.scale_x,
            (self.offset_y - p.y) / self.scale_y,
        )
    }
}

/// Viewport-aware coordinate transform.
///
/// Recomputed as a whole whenever the world bounds or the viewport size
/// change; read-only otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateTransform {
    world_bounds: Rect,
    screen_width: f64,
    screen_height: f64,
    aspect_preserve: bool,
    affine: AffineTransform,
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        let (min_x, min_y, max_x, max_y) = DEFAULT_WORLD_BOUNDS;
        let world_bounds = Rect::new(min_x, min_y, max_x, max_y);
        Self {
            world_bounds,
            screen_width: DEFAULT_VIEWPORT_WIDTH,
            screen_height: DEFAULT_VIEWPORT_HEIGHT,
            aspect_preserve: true,
            affine: compute_affine(
                &world_bounds,
                DEFAULT_VIEWPORT_WIDTH,
                DEFAULT_VIEWPORT_HEIGHT,
                true,
            ),
        }
    }
}

impl CoordinateTransform {
    /// Build a configured transform. Fails on zero-area world bounds.
    pub fn new(
        world_bounds: Rect,
        screen_width: f64,
        screen_height: f64,
        aspect_preserve: bool,
    ) -> Result<Self, ConfigError> {
        let mut transform = Self::default();
        transform.configure(world_bounds, screen_width, screen_height, aspect_preserve)?;
        Ok(transform)
    }

    /// Reconfigure bounds, viewport size and scaling mode in one step.
    ///
    /// On error the previous configuration is left untouched.
    pub fn configure(
        &mut self,
        world_bounds: Rect,
        screen_width: f64,
        screen_height: f64,
        aspect_preserve: bool,
    ) -> Result<(), ConfigError> {
        if world_bounds.is_degenerate() {
            return Err(ConfigError::DegenerateWorldBounds {
                width: world_bounds.width(),
                height: world_bounds.height(),
            });
        }

        let (screen_width, screen_height) = clamp_viewport(screen_width, screen_height);
        let affine = compute_affine(&world_bounds, screen_width, screen_height, aspect_preserve);
        if !affine.is_valid() {
            return Err(ConfigError::InvalidScale {
                scale_x: affine.scale_x,
                scale_y: affine.scale_y,
            });
        }
        log::debug!(
            "transform configured: world {:?}, screen {}x{}, scale ({:.3}, {:.3})",
            world_bounds,
            screen_width,
            screen_height,
            affine.scale_x,
            affine.scale_y
        );

        *self = Self {
            world_bounds,
            screen_width,
            screen_height,
            aspect_preserve,
            affine,
        };
        Ok(())
    }

    /// Replace the world bounds, keeping the viewport.
    pub fn set_world_bounds(&mut self, bounds: Rect) -> Result<(), ConfigError> {
        self.configure(bounds, self.screen_width, self.screen_height, self.aspect_preserve)
    }

    /// Viewport resized. A size that would overflow the scale is ignored
    /// with a warning.
    pub fn resize(&mut self, screen_width: f64, screen_height: f64) {
        let (screen_width, screen_height) = clamp_viewport(screen_width, screen_height);
        let affine = compute_affine(
            &self.world_bounds,
            screen_width,
            screen_height,
            self.aspect_preserve,
        );
        if !affine.is_valid() {
            log::warn!("viewport {screen_width}x{screen_height} gives scale ({}, {}), keeping previous size", affine.scale_x, affine.scale_y);
            return;
        }
        self.screen_width = screen_width;
        self.screen_height = screen_height;
        self.affine = affine;
    }

    pub fn to_screen(&self, world: Point2D) -> Point2D {
        self.affine.apply(world)
    }

    pub fn to_world(&self, screen: Point2D) -> Point2D {
        self.affine.invert(screen)
    }

    /// Convert a world distance to pixels, measured along the x axis.
    ///
    /// Direction-independent only when the scale is uniform; in stretch
    /// mode the result reflects horizontal scale.
    pub fn distance_to_screen(&self, world_distance: f64) -> f64 {
        let a = self.to_screen(Point2D::ZERO);
        let b = self.to_screen(Point2D::new(world_distance, 0.0));
        (b - a).length()
    }

    /// Convert a pixel distance to world units, measured along the x axis.
    pub fn distance_to_world(&self, screen_distance: f64) -> f64 {
        let a = self.to_world(Point2D::ZERO);
        let b = self.to_world(Point2D::new(screen_distance, 0.0));
        (b - a).length()
    }

    pub fn world_bounds(&self) -> Rect {
        self.world_bounds
    }

    /// Viewport rectangle in screen space, anchored at (0, 0).
    pub fn viewport(&self) -> Rect {
        Rect::from_size(self.screen_width, self.screen_height)
    }

    pub fn aspect_preserve(&self) -> bool {
        self.aspect_preserve
    }

    pub fn affine(&self) -> AffineTransform {
        self.affine
    }
}

fn clamp_viewport(width: f64, height: f64) -> (f64, f64) {
    let w = width.max(MIN_VIEWPORT_DIMENSION);
    let h = height.max(MIN_VIEWPORT_DIMENSION);
    if w != width || h != height {
        log::warn!("viewport {width}x{height} clamped to {w}x{h}");
    }
    (w, h)
}

/// Scale and center `bounds` inside the viewport. `bounds` must be non-degenerate.
fn compute_affine(bounds: &Rect, screen_width: f64, screen_height: f64, aspect_preserve: bool) -> AffineTransform {
    let world_w = bounds.width();
    let world_h = bounds.height();

    let (scale_x, scale_y) = if aspect_preserve {
        let s = (screen_width / world_w).min(screen_height / world_h);
        (s, s)
    } else {
        (screen_width / world_w, screen_height / world_h)
    };

    let pad_x = (screen_width - world_w * scale_x) / 2.0;
    let pad_y = (screen_height - world_h * scale_y) / 2.0;

    AffineTransform {
        scale_x,
        scale_y,
        offset_x: pad_x - bounds.min_x * scale_x,
        offset_y: pad_y + bounds.max_y * scale_y,
    }
}
