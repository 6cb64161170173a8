//! Nutgen command line entry point
//!
//! Generates silhouettes for a seed and prints the path token streams, or a
//! minimal SVG document wrapping them, to stdout.
//!
//! Usage: nutgen [OPTIONS] <seed>
//!   --width <N>     viewport width (default 400)
//!   --height <N>    viewport height (default 400)
//!   --kind <K>      shell | meat | both (default both)
//!   --config <F>    JSON file overriding the generator configuration
//!   --svg           emit an SVG document instead of raw path data

use std::fmt::Write as _;
use std::process::ExitCode;

use nutgen::{Generator, GeneratorConfig, Path, ShapeKind};

struct Args {
    seed: String,
    width: f64,
    height: f64,
    kind: Option<ShapeKind>,
    config: Option<String>,
    svg: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        seed: String::new(),
        width: 400.0,
        height: 400.0,
        kind: None,
        config: None,
        svg: false,
    };
    let mut seed = None;

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--width" => {
                let value = iter.next().ok_or("--width needs a value")?;
                args.width = value.parse().map_err(|_| format!("bad width: {value}"))?;
            }
            "--height" => {
                let value = iter.next().ok_or("--height needs a value")?;
                args.height = value.parse().map_err(|_| format!("bad height: {value}"))?;
            }
            "--kind" => {
                let value = iter.next().ok_or("--kind needs a value")?;
                if value == "both" {
                    args.kind = None;
                } else {
                    args.kind = Some(
                        ShapeKind::from_str(&value).ok_or(format!("unknown kind: {value}"))?,
                    );
                }
            }
            "--config" => args.config = Some(iter.next().ok_or("--config needs a value")?),
            "--svg" => args.svg = true,
            other if other.starts_with("--") => return Err(format!("unknown option: {other}")),
            other => {
                if seed.replace(other.to_string()).is_some() {
                    return Err("only one seed argument is allowed".to_string());
                }
            }
        }
    }

    args.seed = seed.ok_or("usage: nutgen [OPTIONS] <seed>")?;
    Ok(args)
}

fn load_config(path: Option<&str>) -> Result<GeneratorConfig, String> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read config {path}: {e}"))?;
            serde_json::from_str(&json).map_err(|e| format!("bad config {path}: {e}"))
        }
        None => Ok(GeneratorConfig::default()),
    }
}

/// Wrap path data in a minimal standalone SVG document
fn svg_document(paths: &[Path], width: f64, height: f64) -> String {
    let mut doc = String::new();
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">"#
    );
    for path in paths {
        let _ = writeln!(
            doc,
            r##"  <path d="{path}" stroke="#ffffff" stroke-width="1" fill="none"/>"##
        );
    }
    doc.push_str("</svg>");
    doc
}

fn run(args: &Args) -> Result<(), String> {
    let generator = Generator::new(load_config(args.config.as_deref())?);

    let kinds = match args.kind {
        Some(kind) => vec![kind],
        None => vec![ShapeKind::Shell, ShapeKind::Meat],
    };

    let mut paths = Vec::new();
    for &kind in &kinds {
        let mut generated = generator
            .generate(kind, &args.seed, args.width, args.height)
            .map_err(|e| e.to_string())?;
        log::info!(
            "generated {} ({} sub-path{})",
            kind.as_str(),
            generated.len(),
            if generated.len() == 1 { "" } else { "s" }
        );
        paths.append(&mut generated);
    }

    if args.svg {
        println!("{}", svg_document(&paths, args.width, args.height));
    } else {
        for path in &paths {
            println!("{path}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            log::error!("{message}");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
