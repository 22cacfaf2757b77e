//! Engine constants and runtime configuration defaults

// Coefficient bounds applied to a..f of every transform
/// Default inclusive lower bound for transform coefficients
pub const DEFAULT_COEFFICIENT_MIN: f64 = -2.0;
/// Default inclusive upper bound for transform coefficients
pub const DEFAULT_COEFFICIENT_MAX: f64 = 2.0;

/// Maximum number of transforms in a set
pub const MAX_TRANSFORMS: usize = 8;

// Discrete output grows as k^N, so both ceilings bound memory together
/// Maximum number of subdivision rounds in discrete mode
pub const MAX_DISCRETE_ITERATIONS: usize = 8;
/// Maximum number of sampled points in continuous mode
pub const MAX_CONTINUOUS_ITERATIONS: usize = 5000;
/// Maximum number of polygons one discrete computation may produce
///
/// `MAX_TRANSFORMS^MAX_DISCRETE_ITERATIONS` exceeds this, so deep
/// subdivisions of large sets are refused up front.
pub const MAX_DISCRETE_OUTPUT: usize = 1 << 20;
/// Minimum iteration count in either mode
pub const MIN_ITERATIONS: usize = 1;

/// Absolute tolerance for the weight sum check (0.0 means exact equality)
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-9;

/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Default iteration count when none is given
pub const DEFAULT_ITERATIONS: usize = 1;

// Output settings
/// Default output file name
pub const DEFAULT_OUTPUT: &str = "fractal.png";
/// Default side length of the square output image in pixels
pub const DEFAULT_IMAGE_SIZE: u32 = 800;
/// Largest accepted image side length in pixels
pub const MAX_IMAGE_SIZE: u32 = 8192;
/// Opacity of filled polygons in discrete renderings
pub const POLYGON_OPACITY: f64 = 0.5;
/// Background color of rendered images
pub const BACKGROUND_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Qualitative palette indexed by transform index (wraps after ten)
pub const LABEL_COLORS: [[u8; 3]; 10] = [
    [0x33, 0x66, 0xCC],
    [0xDC, 0x39, 0x12],
    [0xFF, 0x99, 0x00],
    [0x10, 0x96, 0x18],
    [0x99, 0x00, 0x99],
    [0x00, 0x99, 0xC6],
    [0xDD, 0x44, 0x77],
    [0x66, 0xAA, 0x00],
    [0xB8, 0x2E, 0x2E],
    [0x31, 0x63, 0x95],
];

/// Threshold of rendered items above which a progress bar is shown
pub const PROGRESS_THRESHOLD: usize = 10_000;
