//! Per-package display colors

use dashmap::DashMap;
use rand::Rng;

/// Channel values are drawn below this bound so labels stay legible
const CHANNEL_CAP: u8 = 192;

/// Lazily assigned, run-stable color for every package path
#[derive(Debug, Default)]
pub struct ColorTable {
    colors: DashMap<String, [u8; 3]>,
}

impl ColorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `#rrggbb` color for `package`, allocated on first request
    pub fn color_for(&self, package: &str) -> String {
        let rgb = *self
            .colors
            .entry(package.to_string())
            .or_insert_with(random_rgb);
        format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
    }

    /// Number of packages that have a color
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn random_rgb() -> [u8; 3] {
    let mut rng = rand::rng();
    [
        rng.random_range(0..CHANNEL_CAP),
        rng.random_range(0..CHANNEL_CAP),
        rng.random_range(0..CHANNEL_CAP),
    ]
}
