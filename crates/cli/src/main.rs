#![deny(unsafe_code)]
//! CLI binary for the hue wheel engine.
//!
//! Subcommands:
//! - `pick <x> <y>` — hit-test a pointer and print the picked color
//! - `convert <hex>` — show a hex color as RGB and HSV
//! - `hue <angle>` — show the color at an HSV triple
//! - `segments` — list hue bands with fill and SVG path data
//! - `svg` — write the wheel (or the swatch fallback) as SVG
//! - `render` — write the wheel as a PNG snapshot
//! - `schema` — print the accepted config keys

mod error;

use clap::{ArgAction, Args, Parser, Subcommand};
use error::CliError;
use hue_wheel_core::{
    hsv_to_rgb, rgb_to_hex, HexColor, Hsv, PickOutcome, PickerState, Point, WheelConfig,
    WheelModel,
};
use hue_wheel_render::{render_document, snapshot, Backend};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "hue-wheel", about = "Hue wheel color picker engine")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    wheel: WheelArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct WheelArgs {
    /// Wheel config as a JSON object (see `schema`).
    #[arg(long, global = true, default_value = "{}")]
    config: String,

    /// Side of the square the wheel is drawn in.
    #[arg(long, global = true)]
    size: Option<f64>,

    /// Thickness of the hue band.
    #[arg(long, global = true)]
    stroke_width: Option<f64>,

    /// Number of hue bands.
    #[arg(long, global = true)]
    segments: Option<usize>,
}

#[derive(Subcommand)]
enum Command {
    /// Hit-test a pointer in wheel-local coordinates.
    #[command(allow_negative_numbers = true)]
    Pick {
        x: f64,
        y: f64,

        /// Currently selected color, kept on a miss.
        #[arg(long)]
        value: Option<String>,
    },
    /// Show a #rrggbb color as RGB and HSV.
    Convert { hex: String },
    /// Show the color at a hue angle (degrees, wraps).
    #[command(allow_negative_numbers = true)]
    Hue {
        angle: f64,

        /// HSV saturation in [0, 1].
        #[arg(short, long, default_value_t = 1.0)]
        saturation: f64,

        /// HSV value (brightness) in [0, 1].
        #[arg(short = 'V', long = "value", default_value_t = 1.0)]
        brightness: f64,
    },
    /// List hue bands with fill color and SVG path data.
    Segments,
    /// Write the wheel as an SVG document.
    Svg {
        /// Output file path; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Selected color to place the marker at.
        #[arg(long)]
        value: Option<String>,

        /// Draw the preset swatch grid instead of the wheel.
        #[arg(long)]
        fallback: bool,
    },
    /// Write the wheel as a PNG snapshot.
    Render {
        /// Output file path.
        #[arg(short, long, default_value = "wheel.png")]
        output: PathBuf,

        /// Selected color to place the marker at.
        #[arg(long)]
        value: Option<String>,
    },
    /// Print the accepted config keys with types and defaults.
    Schema,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Merges `--config` with the per-field flags, then validates.
fn load_config(args: &WheelArgs) -> Result<WheelConfig, CliError> {
    let mut params: Value = serde_json::from_str(&args.config)
        .map_err(|e| CliError::Config(format!("invalid --config JSON: {e}")))?;
    if !params.is_object() {
        return Err(CliError::Config("--config must be a JSON object".into()));
    }
    if let Some(size) = args.size {
        params["size"] = json!(size);
    }
    if let Some(stroke_width) = args.stroke_width {
        params["stroke_width"] = json!(stroke_width);
    }
    if let Some(segments) = args.segments {
        params["segments"] = json!(segments);
    }
    let config = WheelConfig::from_json(&params)?;
    log::debug!("wheel config: {}", config.params());
    Ok(config)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(&cli.wheel)?;
    let initial =
        |value: Option<String>| PickerState::new(value.as_deref().unwrap_or(&config.value));

    match cli.command {
        Command::Pick { x, y, value } => {
            let state = initial(value);
            match state.press(&config.spec(), Point::new(x, y)) {
                PickOutcome::Selected { state: next, angle } => {
                    if cli.json {
                        let color = next.selected();
                        print_json(&json!({
                            "hit": true,
                            "angle": angle,
                            "hex": color,
                            "rgb": color.as_ref().map(HexColor::to_rgb),
                        }))?;
                    } else {
                        println!("angle: {angle:.2}");
                        println!("hex:   {}", next.display_value());
                    }
                }
                PickOutcome::Ignored => {
                    if cli.json {
                        print_json(&json!({"hit": false, "hex": state.value()}))?;
                    } else {
                        println!("miss");
                    }
                }
            }
        }
        Command::Convert { hex } => {
            let color = HexColor::parse(&hex)?;
            let rgb = color.to_rgb();
            let hsv = color.to_hsv();
            if cli.json {
                print_json(&json!({
                    "hex": color,
                    "display": color.to_display(),
                    "rgb": rgb,
                    "hsv": hsv,
                }))?;
            } else {
                println!("hex: {} ({})", color, color.to_display());
                println!("rgb: {rgb}");
                println!("hsv: h={:.2} s={:.4} v={:.4}", hsv.h, hsv.s, hsv.v);
            }
        }
        Command::Hue {
            angle,
            saturation,
            brightness,
        } => {
            let rgb = hsv_to_rgb(angle, saturation, brightness);
            let hex = rgb_to_hex(rgb);
            if cli.json {
                print_json(&json!({
                    "hsv": Hsv::new(angle, saturation, brightness),
                    "rgb": rgb,
                    "hex": hex,
                }))?;
            } else {
                println!("rgb: {rgb}");
                println!("hex: {hex}");
            }
        }
        Command::Segments => {
            let model = WheelModel::build(&config, &initial(None))?;
            if cli.json {
                let bands: Vec<Value> = model
                    .bands
                    .iter()
                    .map(|b| {
                        json!({
                            "start_angle": b.segment.start_angle,
                            "end_angle": b.segment.end_angle,
                            "fill": b.fill,
                            "hex": rgb_to_hex(b.fill),
                            "path": b.path.to_string(),
                        })
                    })
                    .collect();
                print_json(&Value::Array(bands))?;
            } else {
                for b in &model.bands {
                    println!(
                        "{:>7.2} {:>7.2}  {}  {}",
                        b.segment.start_angle,
                        b.segment.end_angle,
                        rgb_to_hex(b.fill),
                        b.path
                    );
                }
            }
        }
        Command::Svg {
            output,
            value,
            fallback,
        } => {
            let model = WheelModel::build(&config, &initial(value))?;
            let backend = if fallback {
                Backend::Swatches
            } else {
                Backend::Vector
            };
            let doc = render_document(backend, &model)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, doc).map_err(|e| CliError::unwritable(&path, e))?;
                    if cli.json {
                        print_json(&json!({"output": path.display().to_string()}))?;
                    } else {
                        eprintln!("wrote svg -> {}", path.display());
                    }
                }
                None => print!("{doc}"),
            }
        }
        Command::Render { output, value } => {
            let model = WheelModel::build(&config, &initial(value))?;
            snapshot::write_png(&model, &output).map_err(|e| CliError::writing(&output, e))?;
            if cli.json {
                print_json(&json!({
                    "size": config.size,
                    "stroke_width": config.stroke_width,
                    "segments": config.segments,
                    "output": output.display().to_string(),
                }))?;
            } else {
                eprintln!(
                    "rendered wheel ({} px, stroke {}, {} segments) -> {}",
                    config.size,
                    config.stroke_width,
                    config.segments,
                    output.display()
                );
            }
        }
        Command::Schema => print_json(&WheelConfig::param_schema())?,
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
