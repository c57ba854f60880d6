/// How much of the analysis buffer the frequency-based scorers look at.
///
/// Validity checks for multi-byte encodings always run over the whole buffer;
/// this only bounds the n-gram, ISO-2022 and C1 statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSize {
    /// Analyse at most this many bytes.
    Bytes(usize),
    /// Analyse the entire buffer.
    ///
    /// # Warning
    ///
    /// Statistics over multi-megabyte inputs rarely change the verdict and cost
    /// time proportional to the input. Prefer [`SampleSize::Bytes`] for large buffers.
    All,
}

/// Default statistics window, in bytes.
pub const DEFAULT_SAMPLE_BYTES: usize = 8192;

impl Default for SampleSize {
    fn default() -> Self {
        SampleSize::Bytes(DEFAULT_SAMPLE_BYTES)
    }
}

impl SampleSize {
    /// Returns the byte limit, or None for All.
    pub fn bytes(&self) -> Option<usize> {
        match self {
            SampleSize::Bytes(n) => Some(*n),
            SampleSize::All => None,
        }
    }

    /// Clamp `data` to the sample window.
    pub fn window<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        match self {
            SampleSize::Bytes(n) => &data[..data.len().min(*n)],
            SampleSize::All => data,
        }
    }
}

/// Per-session detector configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Strip HTML/XML markup before statistical analysis.
    pub strip_tags: bool,
    /// Encoding the caller believes the input is in. Used as evidence only.
    pub declared_encoding: Option<String>,
    /// Statistics window.
    pub sample_size: SampleSize,
}

impl DetectorConfig {
    /// Create a configuration with tag stripping off and no declared encoding.
    pub fn new() -> Self {
        Self::default()
    }
}
