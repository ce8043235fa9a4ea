pub const MAX_COMPRESS_LEVEL: u8 = 9;
pub const DEFAULT_COMPRESS_LEVEL: u8 = 6;

/// JPEG entries are always re-encoded at the maximum quality setting;
/// the compression level only steers PNG encoder effort.
pub const JPEG_QUALITY: u8 = 100;

pub const MAX_OXIPNG_PRESET: u8 = 6;
pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_MAX_LEVEL: u8 = 12;

// Temporary siblings are written next to the original so the final
// rename stays on one filesystem.
pub const TEMP_PREFIX: &str = ".reexport-";
pub const TEMP_SUFFIX: &str = ".tmp";
