//! Command-line interface and the run that turns arguments into an SVG file

use crate::geometry::Point;
use crate::io::configuration::{
    BACKGROUND_HEX, CANVAS_SIZE, CAPTION_HEX, DEFAULT_ANGLE, DEFAULT_LEVEL, DEFAULT_PALETTE,
    DEFAULT_THRESHOLD, FLAG_MAX,
};
use crate::io::error::{Result, configuration_error};
use crate::io::progress::SubdivisionProgress;
use crate::io::svg::SvgDocument;
use crate::render::{Color, ColorRamp, Coloring, DrawingSink, HoleThreshold, LayerRenderer, Palette};
use crate::subdivision::seed::angle_offset;
use crate::subdivision::{Rule, generate};
use clap::{Parser, ValueEnum};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::time::Instant;

/// Bucket strategy selectable from the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColoringMode {
    /// Five-color palette fed by repartition tables
    Repartition,
    /// Eleven-color ramp indexed by flag
    Ramp,
    /// Ramp per structural kind (primary and secondary tiles)
    KindRamp,
}

#[derive(Parser, Debug)]
#[command(name = "subtiling")]
#[command(
    author,
    version,
    about = "Generate layered substitution tilings as SVG"
)]
/// Command-line arguments for the tiling generator
pub struct Cli {
    /// Output SVG file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Substitution rule family
    #[arg(short, long, value_enum, default_value_t = Rule::Golden)]
    pub rule: Rule,

    /// Number of subdivision rounds
    #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
    pub level: u32,

    /// Rotate the seed by Pi/ANGLE (0 keeps it unrotated)
    #[arg(short, long, default_value_t = DEFAULT_ANGLE)]
    pub angle: u32,

    /// Preset palette (0: light blue, 1: deep blue, 2: orange, 3: red)
    #[arg(short = 'c', long, conflicts_with_all = ["color_begin", "color_end"])]
    pub palette: Option<usize>,

    /// First palette color in hex (requires --color-end)
    #[arg(long, requires = "color_end")]
    pub color_begin: Option<String>,

    /// Last palette color in hex (requires --color-begin)
    #[arg(long, requires = "color_begin")]
    pub color_end: Option<String>,

    /// Overlay the coarse tile outlines
    #[arg(short, long)]
    pub strokes: bool,

    /// Hole threshold for the fine layer [0, 10] (0: no holes)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_THRESHOLD,
        value_parser = clap::value_parser!(u8).range(0..=i64::from(FLAG_MAX))
    )]
    pub threshold: u8,

    /// How tiles are grouped into colored paths
    #[arg(long, value_enum, default_value_t = ColoringMode::Repartition)]
    pub coloring: ColoringMode,

    /// Side of the square canvas
    #[arg(long, default_value_t = CANVAS_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub canvas: u32,

    /// Text drawn in the bottom-left corner
    #[arg(long)]
    pub caption: Option<String>,

    /// Random seed for a reproducible image (drawn from the OS otherwise)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Resolve the palette from the preset index or the explicit endpoints
    ///
    /// # Errors
    ///
    /// Returns an error if both sources are given, only one endpoint is
    /// given, an endpoint is not a hex color, or the preset does not exist
    pub fn palette(&self) -> Result<Palette> {
        match (self.palette, &self.color_begin, &self.color_end) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(configuration_error(
                &"--palette is exclusive with --color-begin/--color-end",
            )),
            (_, Some(begin), Some(end)) => Ok(Palette::interpolate(
                Color::parse_hex(begin)?,
                Color::parse_hex(end)?,
            )),
            (_, Some(_), None) | (_, None, Some(_)) => Err(configuration_error(
                &"--color-begin and --color-end must be given together",
            )),
            (index, None, None) => Palette::preset(index.unwrap_or(DEFAULT_PALETTE)),
        }
    }

    /// Bucket strategy for the renderer
    ///
    /// # Errors
    ///
    /// Propagates palette resolution errors
    pub fn coloring(&self) -> Result<Coloring> {
        // Validate color options even when a ramp ignores them
        let palette = self.palette()?;
        Ok(match self.coloring {
            ColoringMode::Repartition => Coloring::repartition(palette),
            ColoringMode::Ramp => Coloring::Ramp {
                primary: ColorRamp::warm(),
                secondary: None,
            },
            ColoringMode::KindRamp => Coloring::Ramp {
                primary: ColorRamp::warm(),
                secondary: Some(ColorRamp::cool()),
            },
        })
    }

    /// Full renderer settings
    ///
    /// # Errors
    ///
    /// Returns an error if the color options or threshold are invalid
    pub fn renderer(&self) -> Result<LayerRenderer> {
        Ok(LayerRenderer {
            coloring: self.coloring()?,
            strokes: self.strokes,
            threshold: HoleThreshold::new(self.threshold)?,
        })
    }
}

/// Counts reported after a successful run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Tiles in the coarse generation
    pub coarse_tiles: usize,
    /// Tiles in the fine generation (0 when the rule has none)
    pub fine_tiles: usize,
    /// Path commands written
    pub paths: usize,
}

/// Runs one generation from parsed arguments to the saved SVG
pub struct TilingRunner {
    cli: Cli,
}

impl TilingRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Validate options, subdivide, render and save
    ///
    /// Configuration is checked before any geometry work starts.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid color options or when the output file
    /// cannot be written
    pub fn run(&self) -> Result<RunSummary> {
        let renderer = self.cli.renderer()?;
        let start_time = Instant::now();

        let mut rng = self
            .cli
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let canvas_size = f64::from(self.cli.canvas);
        let seed = self
            .cli
            .rule
            .seed(canvas_size, angle_offset(self.cli.angle));
        info!(
            "{:?} rule: {} seed tiles, {} rounds",
            self.cli.rule,
            seed.len(),
            self.cli.level
        );

        let progress =
            SubdivisionProgress::new(u64::from(self.cli.level), self.cli.should_show_progress());
        let generations = generate(seed, self.cli.rule, self.cli.level, &mut rng, |round, tiles| {
            progress.round_done(round, tiles);
        });
        progress.finish();

        let coarse_tiles = generations.coarse.len();
        let fine_tiles = generations.fine.as_ref().map_or(0, Vec::len);
        info!("coarse: {coarse_tiles} tiles, fine: {fine_tiles} tiles");

        let mut document = SvgDocument::new(
            self.cli.canvas,
            self.cli.canvas,
            Color::from_hex(BACKGROUND_HEX),
        );
        let paths = renderer.render(
            &mut document,
            &generations.coarse,
            generations.fine_tiles(),
            &mut rng,
        );

        if let Some(caption) = &self.cli.caption {
            document.add_text(
                caption,
                Point::new(canvas_size * 0.02, canvas_size * 0.97),
                Color::from_hex(CAPTION_HEX),
            );
        }

        document.save(&self.cli.output)?;
        info!(
            "finished in {:.2} ms",
            start_time.elapsed().as_secs_f64() * 1000.0
        );

        Ok(RunSummary {
            coarse_tiles,
            fine_tiles,
            paths,
        })
    }
}
