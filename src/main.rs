use anyhow::Context;
use clap::{ArgAction, Parser};
use gullwings::document::Document;
use gullwings::export;
use gullwings::geometry::{Size, brace_path};
use gullwings::host::Target;
use gullwings::settings::{ColorSpec, Direction, Options, Settings};
use gullwings::util::color_to_hex;
use gullwings::{Config, render_settings};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gullwings")]
#[command(version, about = "Draw curly-brace decorations onto Cairo surfaces")]
struct Cli {
    /// Container width in logical pixels
    #[arg(long, short = 'W', value_name = "PX")]
    width: Option<u32>,

    /// Container height in logical pixels
    #[arg(long, short = 'H', value_name = "PX")]
    height: Option<u32>,

    /// Side the brace tips face
    #[arg(long, short = 'd', value_enum)]
    direction: Option<Direction>,

    /// Stroke width in pixels
    #[arg(long, short = 't', allow_negative_numbers = true)]
    thickness: Option<f64>,

    /// Pointer position: up to 1.0 is a fraction of the brace length, above that pixels
    #[arg(long, short = 'p', allow_negative_numbers = true)]
    point: Option<f64>,

    /// Stroke color: a name, #rrggbb or #rrggbbaa
    #[arg(long, short = 'c')]
    color: Option<String>,

    /// Corner sharpness (corner radius shrinks as this grows)
    #[arg(long, short = 's', allow_negative_numbers = true)]
    sharpness: Option<f64>,

    /// Device pixel ratio; the image is rendered at this multiple of the logical size
    #[arg(long, value_name = "RATIO")]
    scale: Option<f64>,

    /// PNG file to write (defaults to the configured output directory)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Read configuration from this file instead of ~/.config/gullwings/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Refuse settings that would draw a degenerate brace
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Print the path commands instead of writing an image
    #[arg(long, action = ArgAction::SetTrue)]
    print_path: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            direction: self.direction,
            thickness: self.thickness,
            point: self.point,
            color: self.color.as_deref().map(ColorSpec::from),
            sharpness: self.sharpness,
            ..Options::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let options = config.brace.overlay(&cli.options());
    let settings = Settings::resolve(&options);
    if cli.strict {
        settings.validate().context("Rejected by --strict")?;
    }

    let width = cli.width.unwrap_or(config.surface.width);
    let height = cli.height.unwrap_or(config.surface.height);
    log::debug!(
        "Brace {} {}x{}: thickness {}, point {}, sharpness {}, color {}",
        settings.direction,
        width,
        height,
        settings.thickness,
        settings.point,
        settings.sharpness,
        color_to_hex(&settings.color)
    );

    if cli.print_path {
        let path = brace_path(Size::new(width as f64, height as f64), &settings);
        print!("{}", path);
        return Ok(());
    }

    let ratio = cli.scale.unwrap_or(config.surface.device_pixel_ratio);
    let mut document = Document::new(width, height)
        .with_device_pixel_ratio(ratio)
        .with_backing_store_ratio(config.surface.backing_store_ratio);
    let root = document.root();
    let container = document.append_element(root, "div", width, height);

    let created = render_settings(&mut document, &Target::element(container), &settings)?;
    let surface = *created
        .first()
        .context("Renderer did not create a surface")?;
    let canvas = document
        .canvas_mut(surface)
        .context("Rendered element has no drawing surface")?;

    if !canvas.has_ink() {
        log::warn!("Brace produced no visible pixels; check thickness, point and size");
    }

    let output = match cli.output {
        Some(path) => path,
        None => config.output_directory().join(export::generate_filename(
            &config.output.filename_template,
            "png",
        )),
    };
    let saved = export::save_png(canvas, &output)?;
    println!("{}", saved.display());

    Ok(())
}
