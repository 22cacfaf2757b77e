//! Command-line interface for computing and rendering a fractal to PNG

use crate::algorithm::engine::{Computation, Engine, EngineConfig, Mode};
use crate::algorithm::validation::{WeightPolicy, validate_tolerance};
use crate::io::configuration::{
    DEFAULT_IMAGE_SIZE, DEFAULT_ITERATIONS, DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_WEIGHT_TOLERANCE,
};
use crate::io::error::{IfsError, Result, invalid_parameter};
use crate::io::image::{Viewport, export_png, render};
use crate::io::progress::ProgressManager;
use crate::math::affine::AffineTransform;
use crate::math::probability::label_frequencies;
use crate::spatial::geometry::Bounds;
use crate::spatial::polygon::Polygon;
use crate::spatial::presets::Preset;
use crate::spatial::transform_set::TransformSet;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Instant;

/// Parse a seed polygon vertex given as `x,y`
///
/// # Errors
///
/// Returns an error unless the input is exactly two comma-separated numbers
pub fn parse_vertex(s: &str) -> Result<(f64, f64)> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| invalid_parameter("vertex", &s, &"expected x,y"))?;
    let x = x
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid_parameter("vertex", &s, &e))?;
    let y = y
        .trim()
        .parse::<f64>()
        .map_err(|e| invalid_parameter("vertex", &s, &e))?;
    Ok((x, y))
}

#[derive(Parser)]
#[command(name = "fractal-ifs")]
#[command(
    author,
    version,
    about = "Draw iterated function system fractals by subdivision or the chaos game"
)]
/// Command-line arguments for the fractal renderer
// strict, fit, quiet and verbose are independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Algorithm: polygon subdivision or chaos game
    #[arg(short, long, value_enum, default_value_t = Mode::Discrete)]
    pub mode: Mode,

    /// Subdivision rounds (discrete, 1-8) or sampled points (continuous, 1-5000)
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Transformation as a,b,c,d,e,f[,p]; repeat for each transformation
    #[arg(
        short,
        long = "transform",
        value_name = "A,B,C,D,E,F[,P]",
        allow_hyphen_values = true,
        conflicts_with = "preset"
    )]
    pub transforms: Vec<AffineTransform>,

    /// Built-in transformation set, used when no transformation is given
    #[arg(short, long, value_enum)]
    pub preset: Option<Preset>,

    /// Seed polygon vertex as x,y for discrete mode; repeat in drawing order (default: unit square)
    #[arg(long = "vertex", value_name = "X,Y", value_parser = parse_vertex, allow_hyphen_values = true)]
    pub vertices: Vec<(f64, f64)>,

    /// Reject weights that do not sum to one instead of replacing them
    #[arg(long)]
    pub strict: bool,

    /// Accepted deviation of the weight sum from one (0 demands exact equality)
    #[arg(long, default_value_t = DEFAULT_WEIGHT_TOLERANCE)]
    pub tolerance: f64,

    /// Random seed for reproducible sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output PNG file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Side length of the square output image in pixels
    #[arg(long, default_value_t = DEFAULT_IMAGE_SIZE)]
    pub size: u32,

    /// Fit the view to the output instead of the unit square
    #[arg(short, long)]
    pub fit: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log computation details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level selected by the verbosity flags
    pub const fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Error
        } else {
            log::LevelFilter::Warn
        }
    }

    /// Engine configuration selected by the flags
    pub fn engine_config(&self) -> EngineConfig {
        let weight_policy = if self.strict {
            WeightPolicy::Strict
        } else {
            WeightPolicy::AutoNormalize
        };
        EngineConfig {
            weight_policy,
            weight_tolerance: self.tolerance,
            ..EngineConfig::default()
        }
    }

    /// Transformations given on the command line, else the preset (Sierpinski by default)
    pub fn transform_set(&self) -> TransformSet {
        if self.transforms.is_empty() {
            self.preset.unwrap_or(Preset::Sierpinski).transform_set()
        } else {
            TransformSet::from_transforms(self.transforms.clone())
        }
    }

    /// Seed polygon from `--vertex` flags, if any were given
    pub fn seed_polygon(&self) -> Option<Polygon> {
        (!self.vertices.is_empty()).then(|| Polygon::from_pairs(&self.vertices))
    }
}

/// Runs one computation and writes the rendered image
pub struct FractalProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl FractalProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Compute the fractal, render it and save the PNG
    ///
    /// Returns the computation so callers can inspect the geometry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Validation of transformations, weights or iteration count fails
    /// - The image size is out of range
    /// - The image cannot be written
    pub fn process(&mut self) -> Result<Computation> {
        let start_time = Instant::now();
        let set = self.cli.transform_set();
        let engine = Engine::new(self.cli.engine_config());
        let seed_polygon = self.cli.seed_polygon();
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        self.progress_manager
            .start_compute(&format!("Computing {} fractal", self.cli.mode));
        let computation = engine.compute(
            &set,
            self.cli.mode,
            self.cli.iterations,
            seed_polygon.as_ref(),
            &mut rng,
        );
        self.progress_manager.finish_stage();
        let computation = computation?;

        if self.cli.mode == Mode::Continuous {
            let shares = label_frequencies(computation.geometry.labels(), set.len());
            log::debug!("Label shares {shares:.3?} for weights {:?}", set.weights());
        }

        let viewport = if self.cli.fit {
            Viewport::fit(&computation.geometry, self.cli.size)?
        } else {
            Viewport::new(Bounds::UNIT, self.cli.size)?
        };

        let image = render(&computation.geometry, &viewport, &mut self.progress_manager);
        export_png(&image, &self.cli.output)?;

        log::info!(
            "Wrote {} items to '{}' in {:.2?}",
            computation.geometry.len(),
            self.cli.output.display(),
            start_time.elapsed()
        );

        Ok(computation)
    }

    /// Arguments in use
    pub const fn cli(&self) -> &Cli {
        &self.cli
    }
}

impl TryFrom<Cli> for FractalProcessor {
    type Error = IfsError;

    /// Build a processor after checking arguments that the engine does not see
    fn try_from(cli: Cli) -> Result<Self> {
        validate_tolerance(cli.tolerance)?;
        Ok(Self::new(cli))
    }
}
