//! PNG rendering of labeled geometry
//!
//! Polygons are filled in their label color at reduced opacity so
//! overlapping pieces stay visible; chaos game points are plotted as
//! single opaque pixels. The y axis points up.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::algorithm::validation::validate_parameter;
use crate::io::configuration::{BACKGROUND_COLOR, LABEL_COLORS, MAX_IMAGE_SIZE, POLYGON_OPACITY};
use crate::io::error::{IfsError, Result};
use crate::io::progress::ProgressManager;
use crate::spatial::geometry::{Bounds, Geometry};
use crate::spatial::polygon::{Point, Polygon};

/// Color for a transform index, wrapping around the palette
pub fn label_color(label: usize) -> [u8; 3] {
    LABEL_COLORS
        .get(label % LABEL_COLORS.len())
        .copied()
        .unwrap_or([0, 0, 0])
}

/// Maps world coordinates onto a square pixel grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    bounds: Bounds,
    size: u32,
}

impl Viewport {
    /// Create a viewport showing `bounds` on a `size`×`size` image
    ///
    /// Degenerate bounds are padded so both extents are positive.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or larger than the supported maximum
    pub fn new(bounds: Bounds, size: u32) -> Result<Self> {
        validate_parameter("size", size, 1, MAX_IMAGE_SIZE)?;
        Ok(Self {
            bounds: bounds.padded(),
            size,
        })
    }

    /// Viewport fitted to the geometry, or the unit square if it is empty
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is zero or larger than the supported maximum
    pub fn fit(geometry: &Geometry, size: u32) -> Result<Self> {
        Self::new(geometry.bounds().unwrap_or(Bounds::UNIT), size)
    }

    /// World region shown
    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Image side length in pixels
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Continuous pixel coordinates of a world point
    pub fn to_pixel(&self, point: Point) -> (f64, f64) {
        let scale = f64::from(self.size);
        (
            (point.x - self.bounds.min_x) / self.bounds.width() * scale,
            (self.bounds.max_y - point.y) / self.bounds.height() * scale,
        )
    }
}

fn blend(pixel: &mut Rgba<u8>, color: [u8; 3], opacity: f64) {
    for (channel, &source) in pixel.0.iter_mut().zip(color.iter()) {
        let mixed = f64::from(source).mul_add(opacity, f64::from(*channel) * (1.0 - opacity));
        *channel = mixed.round().clamp(0.0, 255.0) as u8;
    }
}

// Even-odd scanline fill sampled at pixel centers
fn fill_polygon(image: &mut RgbaImage, viewport: &Viewport, polygon: &Polygon, color: [u8; 3]) {
    let vertices: Vec<(f64, f64)> = polygon.points().map(|p| viewport.to_pixel(p)).collect();
    if vertices.len() < 3 || vertices.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return;
    }

    let size = f64::from(viewport.size());
    let top = vertices.iter().map(|v| v.1).fold(f64::INFINITY, f64::min);
    let bottom = vertices.iter().map(|v| v.1).fold(f64::NEG_INFINITY, f64::max);
    let first_row = (top - 0.5).ceil().max(0.0);
    let last_row = (bottom - 0.5).floor().min(size - 1.0);
    if first_row > last_row {
        return;
    }

    let edges: Vec<((f64, f64), (f64, f64))> = vertices
        .iter()
        .copied()
        .zip(vertices.iter().copied().cycle().skip(1))
        .collect();

    let mut crossings = Vec::with_capacity(edges.len());
    for row in (first_row as u32)..=(last_row as u32) {
        let center_y = f64::from(row) + 0.5;
        crossings.clear();
        for &((x0, y0), (x1, y1)) in &edges {
            if (y0 <= center_y && center_y < y1) || (y1 <= center_y && center_y < y0) {
                crossings.push((center_y - y0).mul_add((x1 - x0) / (y1 - y0), x0));
            }
        }
        crossings.sort_by(f64::total_cmp);

        for span in crossings.chunks_exact(2) {
            let [start, end] = span else { continue };
            let first_col = (start - 0.5).ceil().max(0.0);
            let last_col = (end - 0.5).floor().min(size - 1.0);
            if first_col > last_col {
                continue;
            }
            for col in (first_col as u32)..=(last_col as u32) {
                if let Some(pixel) = image.get_pixel_mut_checked(col, row) {
                    blend(pixel, color, POLYGON_OPACITY);
                }
            }
        }
    }
}

fn plot_point(image: &mut RgbaImage, viewport: &Viewport, point: Point, color: [u8; 3]) {
    let (x, y) = viewport.to_pixel(point);
    if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
        return;
    }
    if let Some(pixel) = image.get_pixel_mut_checked(x.floor() as u32, y.floor() as u32) {
        *pixel = Rgba([color[0], color[1], color[2], 255]);
    }
}

/// Rasterize geometry onto a fresh image
///
/// Items outside the viewport are clipped.
pub fn render(geometry: &Geometry, viewport: &Viewport, progress: &mut ProgressManager) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(viewport.size(), viewport.size(), Rgba(BACKGROUND_COLOR));
    progress.start_render(geometry.len());

    match geometry {
        Geometry::Polygons(polygons) => {
            for item in polygons {
                fill_polygon(&mut image, viewport, &item.polygon, label_color(item.label));
                progress.advance();
            }
        }
        Geometry::Points(points) => {
            for item in points {
                plot_point(&mut image, viewport, item.point, label_color(item.label));
                progress.advance();
            }
        }
    }

    progress.finish_stage();
    image
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| IfsError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| IfsError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
