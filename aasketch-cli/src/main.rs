use std::fs;
use std::io::{self, Read, Write};

use aasketch::{Figure, ParseOptions};
use facet::Facet;
use facet_args as args;
use log::{debug, info};

mod svg;

/// Turn an ASCII art sketch into an SVG drawing or a list of figures
#[derive(Facet, Debug)]
struct Args {
    /// Input file (reads from stdin if not provided)
    #[facet(default, args::positional)]
    input: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[facet(default, args::named, args::short = 'o')]
    output: Option<String>,

    /// Output format: svg (default), json, list, or ascii
    #[facet(default, args::named, args::short = 'f')]
    format: Option<String>,

    /// Expand tabs to this many columns instead of treating them as text
    #[facet(default, args::named)]
    tab_width: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Svg,
    Json,
    List,
    Ascii,
}

impl Format {
    fn from_arg(arg: Option<&str>) -> Option<Self> {
        match arg {
            None | Some("svg") => Some(Format::Svg),
            Some("json") => Some(Format::Json),
            Some("list") => Some(Format::List),
            Some("ascii") => Some(Format::Ascii),
            Some(_) => None,
        }
    }
}

fn render(figures: &[Figure], format: Format) -> Result<String, serde_json::Error> {
    Ok(match format {
        Format::Svg => svg::render(figures),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(figures)?;
            json.push('\n');
            json
        }
        Format::List => figures.iter().map(|f| format!("{f}\n")).collect(),
        Format::Ascii => aasketch::to_ascii(figures),
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = match args::from_std_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    let format = Format::from_arg(args.format.as_deref()).unwrap_or_else(|| {
        eprintln!(
            "Unknown format {:?}, expected one of: svg, json, list, ascii",
            args.format.as_deref().unwrap_or_default()
        );
        std::process::exit(1);
    });

    let input = match &args.input {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).unwrap_or_else(|e| {
                eprintln!("Failed to read stdin: {}", e);
                std::process::exit(1);
            });
            buf
        }
    };

    let options = ParseOptions::new().with_tab_width(args.tab_width);
    let figures = aasketch::parse_with_options(&input, &options).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    info!("extracted {} figures", figures.len());

    let rendered = render(&figures, format).unwrap_or_else(|e| {
        eprintln!("Failed to serialize figures: {}", e);
        std::process::exit(1);
    });
    debug!("rendered {} bytes as {:?}", rendered.len(), format);

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered).unwrap_or_else(|e| {
                eprintln!("Failed to write {}: {}", path, e);
                std::process::exit(1);
            });
        }
        None => {
            io::stdout().write_all(rendered.as_bytes()).unwrap_or_else(|e| {
                eprintln!("Failed to write stdout: {}", e);
                std::process::exit(1);
            });
        }
    }
}
