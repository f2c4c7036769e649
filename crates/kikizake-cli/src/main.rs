use kikizake::render::{SvgRenderOptions, render_flavor_svg, sanitize_svg_id};
use kikizake::{AXIS_COUNT, ChartSpec, ChartVariant, FlavorVector};
use serde::Serialize;
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Chart(kikizake::render::ChartError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Chart(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<kikizake::render::ChartError> for CliError {
    fn from(value: kikizake::render::ChartError) -> Self {
        Self::Chart(value)
    }
}

impl From<kikizake::Error> for CliError {
    fn from(value: kikizake::Error) -> Self {
        Self::Chart(value.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Parse,
    Drawing,
    Render,
}

#[derive(Debug)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    variant: ChartVariant,
    size: Option<f64>,
    labels: Option<[String; AXIS_COUNT]>,
    no_labels: bool,
    chart_id: Option<String>,
    out: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::default(),
            input: None,
            pretty: false,
            variant: ChartVariant::Full,
            size: None,
            labels: None,
            no_labels: false,
            chart_id: None,
            out: None,
        }
    }
}

fn usage() -> &'static str {
    "kikizake-cli\n\
\n\
USAGE:\n\
  kikizake-cli [parse] [--pretty] [<path>|-]\n\
  kikizake-cli drawing [--pretty] [--preset full|mini] [--size <px>] [--no-labels] [<path>|-]\n\
  kikizake-cli render [--preset full|mini] [--size <px>] [--labels a,b,c,d,e,f] [--no-labels] [--id <svg-id>] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is a JSON mapping with keys f1..f6 (numbers or decimal strings).\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - parse prints the normalized flavor vector as JSON.\n\
  - drawing prints the chart drawing (geometry + style tags) as JSON.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
"
}

fn parse_labels(raw: &str) -> Result<[String; AXIS_COUNT], CliError> {
    let parts: Vec<String> = raw.split(',').map(|s| s.trim().to_string()).collect();
    let parts: [String; AXIS_COUNT] = parts.try_into().map_err(|_| CliError::Usage(usage()))?;
    Ok(parts)
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "parse" => args.command = Command::Parse,
            "drawing" => args.command = Command::Drawing,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--no-labels" => args.no_labels = true,
            "--preset" => {
                let Some(preset) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.variant = preset
                    .parse::<ChartVariant>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--size" => {
                let Some(size) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let size = size.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
                args.size = Some(size);
            }
            "--labels" => {
                let Some(labels) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.labels = Some(parse_labels(labels)?);
            }
            "--id" => {
                let Some(id) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.chart_id = Some(id.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
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

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
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

fn build_spec(args: &Args) -> ChartSpec {
    let mut spec = args.variant.spec();
    if let Some(size) = args.size {
        spec = spec.with_size(size);
    }
    if let Some(labels) = &args.labels {
        spec.labels = Some(labels.clone());
    }
    if args.no_labels {
        spec = spec.without_labels();
    }
    spec
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let flavor = FlavorVector::from_json_str(&text)?;

    match args.command {
        Command::Parse => {
            write_json(&flavor, args.pretty)?;
            Ok(())
        }
        Command::Drawing => {
            let spec = build_spec(&args);
            let drawing = kikizake::render::render(&flavor, &spec)
                .map_err(|e| CliError::Chart(e.into()))?;
            write_json(&drawing, args.pretty)?;
            Ok(())
        }
        Command::Render => {
            let spec = build_spec(&args);
            let options = SvgRenderOptions {
                chart_id: args.chart_id.as_deref().map(sanitize_svg_id),
                ..Default::default()
            };
            let svg = render_flavor_svg(&flavor, &spec, &options)?;
            write_text(&svg, args.out.as_deref())?;
            Ok(())
        }
    }
}

fn main() {
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

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
