mod telemetry;

use ascii_svg::{Canvas, ConvertError, Drawable, SvgRenderOptions};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Convert(ConvertError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Convert(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ConvertError> for CliError {
    fn from(value: ConvertError) -> Self {
        Self::Convert(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Render,
    Shapes,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    out: Option<String>,
    config: Option<String>,
    font_names: Option<String>,
    font_size: Option<String>,
    color_light_scheme: Option<String>,
    color_dark_scheme: Option<String>,
    pretty: bool,
}

#[derive(Serialize)]
struct ShapesOut {
    width: i32,
    height: i32,
    drawables: Vec<Drawable>,
}

fn usage() -> &'static str {
    "ascii-svg\n\
\n\
USAGE:\n\
  ascii-svg [render] [-i <path>] [-o <path>] [--config <json>] [--fontnames <list>] [--fontsize <size>] [--sls|--svg-color-light-scheme <color>] [--sds|--svg-color-dark-scheme <color>] [<path>|-]\n\
  ascii-svg shapes [--pretty] [-o <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - render prints SVG to stdout by default; use -o to write a file.\n\
  - --config reads a JSON object with any of fontNames, fontSize, colorLightScheme,\n\
    colorDarkScheme; flags given on the command line take precedence.\n\
  - The dark-scheme color is used when the viewer prefers a dark color scheme\n\
    (CSS @media prefers-color-scheme), the light-scheme color otherwise.\n\
  - shapes prints the detected drawables as JSON.\n\
  - Set RUST_LOG=debug to trace the conversion on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        let mut value = || it.next().cloned().ok_or(CliError::Usage(usage()));
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "render" => args.command = Command::Render,
            "shapes" => args.command = Command::Shapes,
            "--pretty" => args.pretty = true,
            "-i" | "--input" => {
                let path = value()?;
                if args.input.replace(path).is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-o" | "--out" => args.out = Some(value()?),
            "--config" => args.config = Some(value()?),
            "--fontnames" => args.font_names = Some(value()?),
            "--fontsize" => args.font_size = Some(value()?),
            "--sls" | "--svg-color-light-scheme" => args.color_light_scheme = Some(value()?),
            "--sds" | "--svg-color-dark-scheme" => args.color_dark_scheme = Some(value()?),
            "-" => {
                if args.input.replace("-".to_string()).is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.replace(path.to_string()).is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

/// Config file first, then individual flags on top.
fn render_options(args: &Args) -> Result<SvgRenderOptions, CliError> {
    let mut options = match args.config.as_deref() {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => SvgRenderOptions::default(),
    };
    if let Some(v) = &args.font_names {
        options.font_names = v.clone();
    }
    if let Some(v) = &args.font_size {
        options.font_size = v.clone();
    }
    if let Some(v) = &args.color_light_scheme {
        options.color_light_scheme = v.clone();
    }
    if let Some(v) = &args.color_dark_scheme {
        options.color_dark_scheme = v.clone();
    }
    Ok(options)
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;

    match args.command {
        Command::Render => {
            let options = render_options(&args)?;
            let svg = ascii_svg::convert(&text, &options)?;
            write_text(&svg, args.out.as_deref())
        }
        Command::Shapes => {
            let canvas = Canvas::parse(&text).map_err(ConvertError::from)?;
            let shapes = ShapesOut {
                width: canvas.width(),
                height: canvas.height(),
                drawables: canvas.drawables().iter().collect(),
            };
            let mut json = if args.pretty {
                serde_json::to_string_pretty(&shapes)?
            } else {
                serde_json::to_string(&shapes)?
            };
            json.push('\n');
            write_text(&json, args.out.as_deref())
        }
    }
}

fn main() {
    telemetry::init_tracing("warn");

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        tracing::debug!(error = ?err, "conversion failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
