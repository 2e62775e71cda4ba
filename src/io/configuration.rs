//! Generation constants and runtime configuration defaults

// Canvas
/// Side of the square canvas in user units
pub const CANVAS_SIZE: u32 = 2000;
/// Background painted behind every layer (black)
pub const BACKGROUND_HEX: u32 = 0x00_00_00;

// Default values for configurable parameters
/// Number of subdivision rounds applied to the seed set
pub const DEFAULT_LEVEL: u32 = 11;
/// Hole threshold applied to the fine layer
pub const DEFAULT_THRESHOLD: u8 = 9;
/// Angle divisor for the seed rotation (0 keeps the seeds unrotated)
pub const DEFAULT_ANGLE: u32 = 0;
/// Preset palette used when no explicit colors are given
pub const DEFAULT_PALETTE: usize = 0;

// Flags
/// Largest flag value; flags span `0..=FLAG_MAX`
pub const FLAG_MAX: u8 = 10;
/// Number of distinct flag values
pub const FLAG_COUNT: usize = FLAG_MAX as usize + 1;

// Layer repartition
/// Number of colors in a palette
pub const PALETTE_SIZE: usize = 5;
/// Flag values per palette color for the coarse generation
pub const COARSE_REPARTITION: [u8; PALETTE_SIZE] = [2, 2, 2, 2, 3];
// Fewer light and more dark flags on the fine layer
/// Flag values per palette color for the fine generation
pub const FINE_REPARTITION: [u8; PALETTE_SIZE] = [0, 3, 2, 2, 4];

// Strokes
/// Stroke width is the first coarse edge length divided by this
pub const STROKE_WIDTH_DIVISOR: f64 = 20.0;
/// Stroke color for the outline overlay (black)
pub const STROKE_HEX: u32 = 0x00_00_00;

// Pleasing split distribution
/// Mean ratio along the longest edge
pub const SPLIT_RATIO_MEAN: f64 = 0.5;
/// Standard deviation of the split ratio
pub const SPLIT_RATIO_STD_DEV: f64 = 0.3;
/// Lower clamp of the split ratio
pub const SPLIT_RATIO_MIN: f64 = 0.3;
/// Upper clamp of the split ratio
pub const SPLIT_RATIO_MAX: f64 = 0.7;

// Annotation
/// Font size of the optional caption, in user units
pub const CAPTION_FONT_SIZE: f64 = 32.0;
/// Caption fill color (white)
pub const CAPTION_HEX: u32 = 0xFF_FF_FF;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
