//! Optional font for the Arabic labels
//!
//! egui's bundled fonts have no Arabic glyphs, so a font file can be named
//! in the config. It is appended as a fallback to both font families.

use std::path::{Path, PathBuf};

use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use thiserror::Error;

const FONT_NAME: &str = "arabic-fallback";

/// Errors that can occur while loading a font file
#[derive(Error, Debug)]
pub enum FontError {
    #[error("Failed to read font: {0}")]
    Io(#[from] std::io::Error),

    #[error("Font file is empty: {}", .0.display())]
    Empty(PathBuf),
}

/// Default font definitions with the file at `path` added as a fallback
pub fn definitions_with(path: &Path) -> Result<FontDefinitions, FontError> {
    let bytes = std::fs::read(path)?;
    if bytes.is_empty() {
        return Err(FontError::Empty(path.to_path_buf()));
    }

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(FONT_NAME.to_owned(), FontData::from_owned(bytes));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FONT_NAME.to_owned());
    }
    Ok(fonts)
}

/// Install the configured font, keeping egui's defaults on failure
pub fn install(ctx: &egui::Context, path: Option<&Path>) {
    let Some(path) = path else {
        log::info!("No font configured, Arabic text may not render");
        return;
    };

    match definitions_with(path) {
        Ok(fonts) => {
            log::info!("Loaded font {}", path.display());
            ctx.set_fonts(fonts);
        }
        Err(e) => log::warn!("{}, keeping default fonts", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("duality-rs-font-{}-{}.ttf", tag, std::process::id()))
    }

    #[test]
    fn test_font_appended_as_fallback() {
        let path = temp_path("ok");
        std::fs::write(&path, [0u8, 1, 0, 0]).unwrap();
        let fonts = definitions_with(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(fonts.font_data.contains_key(FONT_NAME));
        let proportional = &fonts.families[&FontFamily::Proportional];
        assert_eq!(proportional.last().map(String::as_str), Some(FONT_NAME));
    }

    #[test]
    fn test_empty_font_rejected() {
        let path = temp_path("empty");
        std::fs::write(&path, b"").unwrap();
        let result = definitions_with(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(FontError::Empty(_))));
    }

    #[test]
    fn test_missing_font() {
        let path = temp_path("missing");
        assert!(matches!(definitions_with(&path), Err(FontError::Io(_))));
    }
}
