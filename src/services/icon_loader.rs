//! Icon asset loading.
//!
//! The asset is optional. When it is present and decodes, the same pixels go
//! to the window and the tray; otherwise the tray gets a generated "info"
//! glyph and the window keeps the toolkit default.

use std::path::Path;

use tracing::{debug, warn};

use crate::types::errors::IconError;

/// Side length of the generated fallback icon.
pub const FALLBACK_ICON_SIZE: u32 = 32;

/// Raw RGBA8 pixels, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl IconImage {
    pub fn from_rgba(rgba: Vec<u8>, width: u32, height: u32) -> Result<Self, IconError> {
        let expected = width as usize * height as usize * 4;
        if width == 0 || height == 0 || rgba.len() != expected {
            return Err(IconError::InvalidDimensions(width, height));
        }
        Ok(Self { rgba, width, height })
    }
}

/// Where the tray icon pixels came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconOrigin {
    Asset,
    Fallback,
}

/// Icons for the window and the tray, decided once at startup.
#[derive(Debug, Clone)]
pub struct IconPlan {
    /// `None` leaves the toolkit's default window icon in place.
    pub window: Option<IconImage>,
    pub tray: IconImage,
    pub origin: IconOrigin,
}

impl IconPlan {
    /// Builds the plan from an optional asset path. Never fails: a missing or
    /// broken asset degrades to the fallback.
    pub fn resolve(path: Option<&Path>) -> Self {
        let loaded = match path {
            Some(p) => match load_icon_asset(p) {
                Ok(icon) => icon,
                Err(e) => {
                    warn!(path = %p.display(), error = %e, "ignoring unusable icon asset");
                    None
                }
            },
            None => None,
        };

        match loaded {
            Some(icon) => Self {
                window: Some(icon.clone()),
                tray: icon,
                origin: IconOrigin::Asset,
            },
            None => Self {
                window: None,
                tray: fallback_icon(),
                origin: IconOrigin::Fallback,
            },
        }
    }
}

/// Reads and decodes the asset. A missing file is `Ok(None)`, not an error.
pub fn load_icon_asset(path: &Path) -> Result<Option<IconImage>, IconError> {
    if !path.is_file() {
        debug!(path = %path.display(), "no icon asset");
        return Ok(None);
    }

    let decoded = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(io) => IconError::Io(io.to_string()),
        other => IconError::Decode(other.to_string()),
    })?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    IconImage::from_rgba(rgba.into_raw(), width, height).map(Some)
}

/// Generic information glyph: white "i" on a blue disc.
pub fn fallback_icon() -> IconImage {
    let size = FALLBACK_ICON_SIZE;
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);
    let center = (size as f32 - 1.0) / 2.0;
    let radius = size as f32 / 2.0 - 1.0;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let inside = dx * dx + dy * dy <= radius * radius;
            let on_stem = dx.abs() <= 2.0 && (13..=25).contains(&y);
            let on_dot = dx.abs() <= 2.0 && (6..=9).contains(&y);

            let pixel = if !inside {
                [0, 0, 0, 0]
            } else if on_stem || on_dot {
                [255, 255, 255, 255]
            } else {
                [13, 110, 253, 255]
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    IconImage { rgba, width: size, height: size }
}
