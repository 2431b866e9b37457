//! bubble-sim: view, rasterize, or dump speech-bubble layouts.
//!
//! Usage:
//!   bubble-sim show demos/bubbles.xml
//!   bubble-sim render demos/bubbles.xml -o out.png --name Greeting --pressed
//!   bubble-sim outline demos/bubbles.xml --name Reply

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use image::RgbaImage;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use speech_bubble::config::ViewerConfig;
use speech_bubble::geometry::OutlinePath;
use speech_bubble::iced_app::run_iced_ui;
use speech_bubble::render::software::save_image;
use speech_bubble::render::SoftwareSurface;
use speech_bubble::xml::{find_bubble, load_bubbles_file, BubbleDecl};
use speech_bubble::{BubbleFrame, PointerEvent};

/// Margin around a composed layout, in pixels.
const LAYOUT_MARGIN: f32 = 8.0;

#[derive(Parser)]
#[command(name = "bubble-sim")]
#[command(about = "Speech-bubble layout viewer and rasterizer")]
struct Cli {
    /// Pixels per dp; saved to the viewer config for later runs
    #[arg(long, global = true)]
    density: Option<f32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive viewer
    Show {
        /// Layout XML file
        file: PathBuf,
    },

    /// Rasterize bubbles to an image file
    Render {
        /// Layout XML file
        file: PathBuf,

        /// Output image (format from extension)
        #[arg(short, long, default_value = "bubbles.png")]
        output: PathBuf,

        /// Render only the named bubble, at its own size
        #[arg(short, long)]
        name: Option<String>,

        /// Paint bubbles in the pressed state
        #[arg(long)]
        pressed: bool,
    },

    /// Print outline segments as JSON
    Outline {
        /// Layout XML file
        file: PathBuf,

        /// Only the named bubble
        #[arg(short, long)]
        name: Option<String>,
    },
}

#[derive(Serialize)]
struct OutlineDump<'a> {
    name: Option<&'a str>,
    width: f32,
    height: f32,
    outline: OutlinePath,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut config = ViewerConfig::load();
    if let Some(density) = cli.density {
        config.override_density(density);
    }

    match cli.command {
        Commands::Show { file } => {
            let bubbles = load_bubbles_file(&file, config.density)?;
            run_iced_ui(bubbles, Some(file), config)?;
        }
        Commands::Render { file, output, name, pressed } => {
            let bubbles = select(&file, name.as_deref(), config.density)?;
            let image = match name {
                Some(_) => render_single(&bubbles[0], pressed, &config)?,
                None => render_layout(&bubbles, pressed, &config)?,
            };
            save_image(&image, &output)?;
            println!("Wrote {} ({}x{})", output.display(), image.width(), image.height());
        }
        Commands::Outline { file, name } => {
            let bubbles = select(&file, name.as_deref(), config.density)?;
            let dumps: Vec<_> = bubbles.iter().map(outline_dump).collect();
            println!("{}", serde_json::to_string_pretty(&dumps)?);
        }
    }

    Ok(())
}

/// Load the layout, narrowed to one bubble when `name` is given.
fn select(
    file: &Path,
    name: Option<&str>,
    density: f32,
) -> speech_bubble::Result<Vec<BubbleDecl>> {
    let bubbles = load_bubbles_file(file, density)?;
    match name {
        Some(name) => Ok(vec![find_bubble(&bubbles, name)?.clone()]),
        None => Ok(bubbles),
    }
}

fn frame_for(decl: &BubbleDecl, pressed: bool) -> BubbleFrame {
    let mut frame = BubbleFrame::new(decl.style);
    if pressed {
        let (w, h) = (decl.rect.width, decl.rect.height);
        frame.dispatch_pointer(&PointerEvent::Down { x: w / 2.0, y: h / 2.0 }, w, h, |_| false);
    }
    frame
}

fn render_single(
    decl: &BubbleDecl,
    pressed: bool,
    config: &ViewerConfig,
) -> speech_bubble::Result<RgbaImage> {
    let mut frame = frame_for(decl, pressed);
    let (w, h) = (decl.rect.width.ceil() as u32, decl.rect.height.ceil() as u32);
    let mut surface = SoftwareSurface::new(w, h, config.background_color())?;
    frame.draw(decl.rect.width, decl.rect.height, &mut surface);
    Ok(surface.into_image())
}

/// Compose every bubble at its declared position.
fn render_layout(
    bubbles: &[BubbleDecl],
    pressed: bool,
    config: &ViewerConfig,
) -> speech_bubble::Result<RgbaImage> {
    let width = bubbles.iter().map(|b| b.rect.right()).fold(0.0, f32::max) + LAYOUT_MARGIN;
    let height = bubbles.iter().map(|b| b.rect.bottom()).fold(0.0, f32::max) + LAYOUT_MARGIN;
    let (w, h) = (width.ceil() as u32, height.ceil() as u32);
    let mut surface = SoftwareSurface::new(w, h, config.background_color())?;
    for decl in bubbles {
        let mut frame = frame_for(decl, pressed);
        surface.set_offset(decl.rect.x, decl.rect.y);
        frame.draw(decl.rect.width, decl.rect.height, &mut surface);
    }
    Ok(surface.into_image())
}

fn outline_dump(decl: &BubbleDecl) -> OutlineDump<'_> {
    let mut frame = BubbleFrame::new(decl.style);
    let outline = frame.outline(decl.rect.width, decl.rect.height).clone();
    OutlineDump {
        name: decl.name.as_deref(),
        width: decl.rect.width,
        height: decl.rect.height,
        outline,
    }
}
