use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use shapescriber::config::{Config, Unit};
use shapescriber::draw::{self, Canvas, ShapeKind, ShapeParams};
use shapescriber::{export, scene, util};

/// Package version plus the short git hash embedded by the build script.
const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SHAPESCRIBER_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "shapescriber")]
#[command(version = VERSION, about = "Geometric shape renderer with annotated measurements")]
struct Cli {
    /// Shape to draw (circle, square, rectangle, triangle, star, pentagon,
    /// hexagon, polygon, line)
    #[arg(long, short = 's', default_value = "circle", value_name = "NAME")]
    shape: String,

    /// Shape size in pixels (diameter, side length, or overall scale)
    #[arg(long, default_value_t = 200.0, value_name = "PX")]
    size: f64,

    /// Border stroke width in pixels
    #[arg(long, default_value_t = 3.0, value_name = "PX")]
    stroke_width: f64,

    /// Number of sides when --shape polygon is used
    #[arg(long, short = 'n', default_value_t = 6, value_name = "N")]
    sides: u32,

    /// Fill color: a palette name (see --list-colors) or #RRGGBB
    #[arg(long, short = 'c', default_value = "tomato", value_name = "COLOR")]
    color: String,

    /// Output PNG path (defaults to the configured export directory)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Report measurements in centimeters instead of pixels
    #[arg(long, action = ArgAction::SetTrue)]
    centimeters: bool,

    /// Print the property report as JSON instead of plain text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// List the palette color names and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list_colors: bool,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list_colors {
        for (color, name) in draw::PALETTE {
            println!("{name:<15} {}", util::color_hex(&color));
        }
        return Ok(());
    }

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created {}", path.display());
        return Ok(());
    }

    let mut config = Config::load().context("Failed to load configuration")?;
    if cli.centimeters {
        config.report.unit = Unit::Cm;
    }

    let fill_color = util::parse_color(&cli.color).with_context(|| {
        format!(
            "Unknown color '{}' (try --list-colors, or a #RRGGBB value)",
            cli.color
        )
    })?;

    let kind = ShapeKind::from_name(&cli.shape, cli.sides)?;
    let params = ShapeParams {
        kind,
        size: cli.size,
        stroke_width: cli.stroke_width,
        fill_color,
    };

    let canvas = Canvas::new(config.canvas.width, config.canvas.height)
        .context("Failed to allocate image surface")?;

    log::info!(
        "Rendering {} (size {}, stroke {})",
        kind.display_name(),
        cli.size,
        cli.stroke_width
    );
    let report = scene::render(&canvas, &params, &config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    let saved_path = match &cli.output {
        Some(path) => {
            export::save_image_to(&canvas, path)?;
            path.clone()
        }
        None => export::save_image(&canvas, kind, &config.export)?,
    };
    println!("Saved {}", saved_path.display());

    Ok(())
}
