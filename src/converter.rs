use anyhow::Result;
use resvg::usvg::{self, Tree};
use std::path::Path;
use tiny_skia::Pixmap;

/// Rasterization settings for PNG export
#[derive(Debug, Clone, Copy)]
pub struct PngOptions {
    /// Background color as RGBA; None renders on opaque white
    pub background: Option<(u8, u8, u8, u8)>,
    /// PNG compression quality, 0-100
    pub quality: u8,
    /// Target DPI; None keeps the SVG's native 96 DPI size
    pub dpi: Option<u32>,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            background: None,
            quality: 75,
            dpi: None,
        }
    }
}

pub fn convert_svg_to_png(svg_content: &str, output_path: &Path, options: &PngOptions) -> Result<()> {
    let tree = Tree::from_str(svg_content, &usvg::Options::default(), &usvg::fontdb::Database::new())?;

    // Scale relative to the SVG's native 96 DPI
    const SOURCE_DPI: f32 = 96.0;
    let scale = options.dpi.map(|d| d as f32 / SOURCE_DPI).unwrap_or(1.0);

    let size = tree.size();
    let width = ((size.width() * scale).ceil() as u32).max(1);
    let height = ((size.height() * scale).ceil() as u32).max(1);

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| anyhow::anyhow!("Failed to create {width}x{height} pixmap"))?;

    let (r, g, b, a) = options.background.unwrap_or((255, 255, 255, 255));
    if a > 0 {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        pixmap.fill_rect(
            tiny_skia::Rect::from_xywh(0.0, 0.0, width as f32, height as f32)
                .ok_or_else(|| anyhow::anyhow!("Invalid pixmap dimensions"))?,
            &paint,
            tiny_skia::Transform::identity(),
            None,
        );
    }

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    save_png_with_quality(&pixmap, output_path, options.quality)
}

/// Save a pixmap to PNG, mapping quality 0-100 to PNG compression:
/// 0-25 fast, 26-75 default, 76-100 best.
fn save_png_with_quality(pixmap: &Pixmap, output_path: &Path, quality: u8) -> Result<()> {
    use std::fs::File;
    use std::io::BufWriter;

    let file = File::create(output_path)
        .map_err(|e| anyhow::anyhow!("Failed to create PNG file: {e}"))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_filter(png::FilterType::Paeth);
    encoder.set_compression(if quality <= 25 {
        png::Compression::Fast
    } else if quality <= 75 {
        png::Compression::Default
    } else {
        png::Compression::Best
    });

    let mut writer = encoder
        .write_header()
        .map_err(|e| anyhow::anyhow!("Failed to write PNG header: {e}"))?;
    writer
        .write_image_data(pixmap.data())
        .map_err(|e| anyhow::anyhow!("Failed to write PNG data: {e}"))?;

    Ok(())
}
