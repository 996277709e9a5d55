//! Utility functions

use tracing::warn;

// Square viewBox, for window/taskbar icons: two paired rows joined to a last row
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect x="2" y="2" width="60" height="60" rx="12" fill="#18181b" stroke="#2dd4bf" stroke-width="3"/><rect x="14" y="15" width="22" height="6" rx="3" fill="#ffffff"/><rect x="14" y="29" width="22" height="6" rx="3" fill="#ffffff"/><rect x="14" y="43" width="36" height="6" rx="3" fill="#2dd4bf"/><path d="M40 18h6v28" fill="none" stroke="#2dd4bf" stroke-width="3" stroke-linecap="round"/><path d="M40 32h6" fill="none" stroke="#2dd4bf" stroke-width="3" stroke-linecap="round"/></svg>"##;

/// Rasterize the icon SVG to a square RGBA image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = match resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default()) {
        Ok(tree) => tree,
        Err(e) => {
            warn!(error = %e, "Failed to parse icon SVG");
            return None;
        }
    };
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Window icon for the viewport builder
pub fn window_icon() -> Option<eframe::egui::IconData> {
    let (rgba, width, height) = rasterize_icon(64)?;
    Some(eframe::egui::IconData { rgba, width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_rasterizes_to_requested_square() {
        let (pixels, w, h) = rasterize_icon(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
        // Center falls inside the opaque background.
        let center = ((16 * 32 + 16) * 4) as usize;
        assert_eq!(pixels[center + 3], 255);
    }

    #[test]
    fn zero_size_icon_is_none() {
        assert!(rasterize_icon(0).is_none());
    }

    #[test]
    fn transparent_pixels_stay_zeroed() {
        let pixmap = resvg::tiny_skia::Pixmap::new(2, 2).unwrap();
        assert_eq!(premul_to_straight(&pixmap), vec![0u8; 16]);
    }
}
