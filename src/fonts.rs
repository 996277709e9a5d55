//! Font setup: Phosphor icons plus a system CJK font for the Chinese labels

use crate::constants::FONT_ENV_VAR;
use eframe::egui;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

const CJK_FONT_NAME: &str = "cjk";

#[cfg(target_os = "windows")]
const SYSTEM_CANDIDATES: &[&str] = &[
    r"C:\Windows\Fonts\msyh.ttc",
    r"C:\Windows\Fonts\msyh.ttf",
    r"C:\Windows\Fonts\simhei.ttf",
    r"C:\Windows\Fonts\simsun.ttc",
];

#[cfg(target_os = "macos")]
const SYSTEM_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/Hiragino Sans GB.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "/Library/Fonts/Arial Unicode.ttf",
];

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const SYSTEM_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
    "/usr/share/fonts/truetype/droid/DroidSansFallbackFull.ttf",
];

/// Paths to try, in order: the env override first, then the platform list.
fn candidate_paths(env_override: Option<&str>) -> Vec<PathBuf> {
    env_override
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .into_iter()
        .chain(SYSTEM_CANDIDATES.iter().map(PathBuf::from))
        .collect()
}

/// Read the first candidate that exists and is non-empty.
fn load_first(paths: &[PathBuf]) -> Option<(PathBuf, Vec<u8>)> {
    paths.iter().find_map(|path| match std::fs::read(path) {
        Ok(bytes) if !bytes.is_empty() => Some((path.clone(), bytes)),
        Ok(_) => None,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Font candidate unavailable");
            None
        }
    })
}

/// Register a font as the last fallback of the proportional and monospace families.
fn add_fallback(fonts: &mut egui::FontDefinitions, name: &str, bytes: Vec<u8>) {
    fonts
        .font_data
        .insert(name.to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push(name.to_owned());
    }
}

/// Build font definitions and install them on the context.
pub fn install(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    let env_override = std::env::var(FONT_ENV_VAR).ok();
    let candidates = candidate_paths(env_override.as_deref());
    match load_first(&candidates) {
        Some((path, bytes)) => {
            info!(path = %path.display(), "Using CJK font");
            add_fallback(&mut fonts, CJK_FONT_NAME, bytes);
        }
        None => warn!(
            tried = candidates.len(),
            "No CJK font found, labels may not render; set {} to a font file",
            FONT_ENV_VAR
        ),
    }

    ctx.set_fonts(fonts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_comes_first() {
        let paths = candidate_paths(Some("/tmp/custom.ttf"));
        assert_eq!(paths[0], PathBuf::from("/tmp/custom.ttf"));
        assert_eq!(paths.len(), SYSTEM_CANDIDATES.len() + 1);
    }

    #[test]
    fn blank_override_is_ignored() {
        assert_eq!(candidate_paths(Some("   ")).len(), SYSTEM_CANDIDATES.len());
        assert_eq!(candidate_paths(None).len(), SYSTEM_CANDIDATES.len());
    }

    #[test]
    fn load_first_skips_missing_and_empty_files() {
        let dir = std::env::temp_dir().join(format!("ngg-fonts-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let empty = dir.join("empty.ttf");
        let real = dir.join("real.ttf");
        std::fs::write(&empty, b"").unwrap();
        std::fs::write(&real, b"not really a font").unwrap();

        let paths = vec![dir.join("missing.ttf"), empty, real.clone()];
        let (path, bytes) = load_first(&paths).unwrap();
        assert_eq!(path, real);
        assert_eq!(bytes, b"not really a font");

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn fallback_is_appended_after_existing_fonts() {
        let mut fonts = egui::FontDefinitions::default();
        let before = fonts.families[&egui::FontFamily::Proportional].len();
        add_fallback(&mut fonts, "cjk", vec![0u8; 4]);
        let prop = &fonts.families[&egui::FontFamily::Proportional];
        assert_eq!(prop.len(), before + 1);
        assert_eq!(prop.last().map(String::as_str), Some("cjk"));
        assert_eq!(
            fonts.families[&egui::FontFamily::Monospace].last().map(String::as_str),
            Some("cjk")
        );
        assert!(fonts.font_data.contains_key("cjk"));
    }
}
