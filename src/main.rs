use annoshape::color_utils::parse_color_result;
use annoshape::{
    convert_svg_to_png, generate_svg, insert_midpoint, toggle_corner, AnnotationData, PngOptions,
    Shape,
};
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "annoshape")]
#[command(about = "Edit and export image-annotation shapes", long_about = None)]
struct Args {
    /// Path to the annotation JSON file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output file path (defaults to input filename with .svg extension)
    /// Use .json to write the edited annotations, .svg or .png to export
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Id of the polyline annotation to edit (defaults to the first polyline)
    #[arg(long, value_name = "ID")]
    annotation: Option<String>,

    /// Toggle the point at this index between corner and curve
    #[arg(long, value_name = "INDEX")]
    toggle: Option<usize>,

    /// Insert a new point at the midpoint of this segment
    #[arg(long, value_name = "SEGMENT")]
    insert: Option<usize>,

    /// Viewport scale used to size curve control handles
    #[arg(long, default_value_t = 1.0, value_parser = parse_scale)]
    scale: f64,

    /// Background color for PNG export (hex or "transparent")
    #[arg(long, value_parser = parse_color_result)]
    background: Option<(u8, u8, u8, u8)>,

    /// PNG compression quality (0-100)
    #[arg(long, default_value_t = 75)]
    quality: u8,

    /// Target DPI for PNG export
    #[arg(long)]
    dpi: Option<u32>,
}

fn parse_scale(s: &str) -> Result<f64, String> {
    let scale: f64 = s
        .parse()
        .map_err(|_| format!("Invalid viewport scale: {s}"))?;
    if scale > 0.0 {
        Ok(scale)
    } else {
        Err("Viewport scale must be greater than zero".to_string())
    }
}

/// Apply the requested point edits to the selected polyline annotation
fn edit_polyline(data: &mut AnnotationData, args: &Args) -> Result<()> {
    let annotation = match &args.annotation {
        Some(id) => data
            .annotations
            .iter_mut()
            .find(|a| &a.id == id)
            .with_context(|| format!("No annotation with id {id:?}"))?,
        None => data
            .annotations
            .iter_mut()
            .find(|a| matches!(a.shape, Shape::Polyline(_)))
            .context("No polyline annotation in input")?,
    };

    match &mut annotation.shape {
        Shape::Polyline(polyline) => {
            if let Some(index) = args.toggle {
                *polyline = toggle_corner(polyline, index, args.scale)?;
            }
            if let Some(segment) = args.insert {
                *polyline = insert_midpoint(polyline, segment)?;
            }
            Ok(())
        }
        _ => bail!("Annotation {:?} is not a polyline", annotation.id),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Read the JSON file
    let json_content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {:?}", args.input))?;

    let mut data: AnnotationData =
        serde_json::from_str(&json_content).context("Failed to parse annotation JSON")?;

    if args.toggle.is_some() || args.insert.is_some() {
        edit_polyline(&mut data, &args)?;
    }

    // Determine output path
    let output_path = args.output.clone().unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("svg");
        path
    });

    let extension = output_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("svg");

    match extension.to_lowercase().as_str() {
        "json" => {
            let json =
                serde_json::to_string_pretty(&data).context("Failed to serialize annotations")?;
            fs::write(&output_path, json)
                .with_context(|| format!("Failed to write JSON file: {output_path:?}"))?;
        }
        "png" => {
            let svg_content = generate_svg(&data);
            let options = PngOptions {
                background: args.background,
                quality: args.quality,
                dpi: args.dpi,
            };
            convert_svg_to_png(&svg_content, &output_path, &options)
                .with_context(|| format!("Failed to render PNG: {output_path:?}"))?;
        }
        _ => {
            let svg_content = generate_svg(&data);
            fs::write(&output_path, svg_content)
                .with_context(|| format!("Failed to write SVG file: {output_path:?}"))?;
        }
    }

    println!(
        "Successfully wrote {} to {}",
        args.input.display(),
        output_path.display()
    );

    Ok(())
}
