use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use exif::{In, Reader, Tag, Value};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// One slide on disk: the image and the caption shown while it is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSource {
    pub path: PathBuf,
    pub caption: String,
}

impl SlideSource {
    pub fn new(path: PathBuf) -> Self {
        let caption = caption_for(&path);
        Self { path, caption }
    }
}

/// "01_voice-commands.jpg" reads as "voice commands".
pub fn caption_for(path: &Path) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let stem = stem.trim_start_matches(|c: char| c.is_ascii_digit()).trim_start_matches(['_', '-', ' ']);
    stem.replace(['_', '-'], " ").trim().to_string()
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Image files of `dir`, sorted by file name or shuffled.
pub fn load_slide_sources(dir: &Path, shuffle: bool) -> Result<Vec<SlideSource>> {
    let entries = fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        bail!("no image files found in directory {}", dir.display());
    }

    if shuffle {
        paths.shuffle(&mut rand::rng());
    } else {
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    Ok(paths.into_iter().map(SlideSource::new).collect())
}

/// Quarter turns baked into the texture for an EXIF orientation value.
/// Mirrored orientations are left as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Clockwise,
    HalfTurn,
    CounterClockwise,
}

impl Rotation {
    pub fn from_orientation(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::HalfTurn,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }
}

fn read_orientation(path: &Path, bytes: &[u8]) -> u16 {
    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read EXIF data");
            return 1;
        }
    };

    match exif.get_field(Tag::Orientation, In::PRIMARY).map(|field| &field.value) {
        Some(Value::Short(values)) => values.first().copied().unwrap_or(1),
        _ => 1,
    }
}

/// Loads the image, applies its EXIF rotation (JPEG only) and uploads it.
pub fn load_texture(rl: &mut RaylibHandle, thread: &RaylibThread, path: &Path) -> Result<Texture2D> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;

    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or_default().to_lowercase();
    let rotation = if extension == "jpg" || extension == "jpeg" {
        Rotation::from_orientation(read_orientation(path, &bytes))
    } else {
        Rotation::None
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &bytes)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("failed to decode {}", path.display()))?;

    match rotation {
        Rotation::HalfTurn => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Rotation::Clockwise => image.rotate_cw(),
        Rotation::CounterClockwise => image.rotate_ccw(),
        Rotation::None => {}
    }
    if rotation != Rotation::None {
        debug!(path = %path.display(), ?rotation, "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("failed to create texture for {}", path.display()))?;

    Ok(texture)
}
