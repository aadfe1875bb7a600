//! Raster preview of traced paths

use crate::error::{CamToolError, CamToolResult};
use image::{Rgb, RgbImage};
use std::path::Path as StdPath;
use svgprint_core::{BoundingBox, Path, Waypoint};

const BACKGROUND: Rgb<u8> = Rgb([128, 128, 128]);
const STROKE: Rgb<u8> = Rgb([255, 255, 255]);
const PADDING: f64 = 10.0;

/// Render paths into a `width` x `height` image.
///
/// Deposit segments are drawn white on grey; travel moves are not drawn.
/// The design is scaled uniformly and centred. Image Y grows downward,
/// which matches SVG coordinates.
pub fn render_preview(paths: &[Path], width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    let Some(bounds) = BoundingBox::from_paths(paths) else {
        return img;
    };

    let avail_width = (width as f64 - 2.0 * PADDING).max(1.0);
    let avail_height = (height as f64 - 2.0 * PADDING).max(1.0);
    let data_width = bounds.width();
    let data_height = bounds.height();

    let scale = match (data_width > 0.0, data_height > 0.0) {
        (true, true) => (avail_width / data_width).min(avail_height / data_height),
        (true, false) => avail_width / data_width,
        (false, true) => avail_height / data_height,
        (false, false) => 1.0,
    };

    let offset_x = PADDING + (avail_width - data_width * scale) / 2.0 - bounds.min_x * scale;
    let offset_y = PADDING + (avail_height - data_height * scale) / 2.0 - bounds.min_y * scale;
    let to_pixel = |x: f64, y: f64| ((x * scale + offset_x) as i32, (y * scale + offset_y) as i32);

    for path in paths {
        let mut current = None;
        for waypoint in path {
            let p = waypoint.point();
            let target = to_pixel(p.x, p.y);
            if let (Waypoint::Line { .. }, Some((x0, y0))) = (waypoint, current) {
                draw_line_segment(&mut img, x0, y0, target.0, target.1, STROKE);
            }
            current = Some(target);
        }
    }

    img
}

/// Render and save a PNG preview
pub fn save_preview<P: AsRef<StdPath>>(
    paths: &[Path],
    file: P,
    width: u32,
    height: u32,
) -> CamToolResult<()> {
    let file = file.as_ref();
    render_preview(paths, width, height)
        .save(file)
        .map_err(|e| CamToolError::ImageError(format!("{}: {}", file.display(), e)))?;
    tracing::info!(file = %file.display(), width, height, "Saved preview");
    Ok(())
}

fn draw_line_segment(img: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && x < img.width() as i32 && y >= 0 && y < img.height() as i32 {
            img.put_pixel(x as u32, y as u32, color);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
