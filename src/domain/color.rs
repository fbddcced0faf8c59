//! Display colors for chart categories and short URLs.
//!
//! Two sources exist:
//!
//! - [`platform_color`] - fixed colors for well-known user-agent platforms
//! - [`ColorSequence`] - a fresh, unseeded stream for everything else

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Color reserved for the aggregate "total" series of a target URL.
pub const TOTAL_COLOR: &str = "#444444";

/// Colors yielded first by every [`ColorSequence`], before random ones.
pub const PALETTE: [&str; 4] = ["#0000ff", "#ff00e0", "#ff8f00", "#0087ff"];

/// Returns the dedicated color of a known platform category.
///
/// Categories are the buckets produced by the shortener when it classifies
/// the `User-Agent` header of a visit. Unknown categories return `None`.
pub fn platform_color(category: &str) -> Option<&'static str> {
    match category {
        "linux" => Some("#ffc500"),
        "windows" => Some("#00a4ef"),
        "android" => Some("#3ddc84"),
        "ios" => Some("#aee1cd"),
        "mac" => Some("#6534ff"),
        "other" => Some("#6a6a6a"),
        _ => None,
    }
}

/// An infinite stream of `#RRGGBB` colors.
///
/// Yields the four [`PALETTE`] colors in order, then uniformly random 24-bit
/// colors forever. Random colors may collide with each other or with the
/// palette. Each sequence owns its state; create a new one with
/// [`ColorSequence::new`] whenever a fresh set of colors is needed.
#[derive(Debug)]
pub struct ColorSequence<R = StdRng> {
    position: usize,
    rng: R,
}

impl ColorSequence {
    /// Creates a sequence backed by an OS-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for ColorSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ColorSequence<R> {
    /// Creates a sequence drawing its random tail from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { position: 0, rng }
    }

    /// Returns the next color. Never runs out.
    pub fn next_color(&mut self) -> String {
        if let Some(color) = PALETTE.get(self.position) {
            self.position += 1;
            return (*color).to_string();
        }

        let value: u32 = self.rng.random_range(0..1 << 24);
        format!("#{value:06x}")
    }
}

impl<R: Rng> Iterator for ColorSequence<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_color())
    }
}
