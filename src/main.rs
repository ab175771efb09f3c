//! Command-line front end for the font preference service.
//!
//! Loads a manifest, applies the requested selection changes, and writes the
//! resulting stylesheet. Selections persist between runs in a file store.

use anyhow::{Context, Result, anyhow};
use font_prefs::catalog::SourceCatalogLoader;
use font_prefs::config::load_options;
use font_prefs::service::FontService;
use font_prefs::storage::FileStore;
use font_prefs::style::StyleSheet;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const USAGE: &str = "Usage: font-prefs [--options <file.toml>] [--store <dir>] <manifest> \
[--ui <id>] [--mono <id>] [--size <n>] [--reset] [--css <out.css>] [--json]";

#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    options_path: Option<PathBuf>,
    store_dir: Option<PathBuf>,
    manifest: String,
    ui_font: Option<String>,
    mono_font: Option<String>,
    font_size: Option<i64>,
    reset: bool,
    css_out: Option<PathBuf>,
    json: bool,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let options = load_options(
        args.options_path
            .as_deref()
            .unwrap_or_else(|| std::path::Path::new("conf/fonts.toml")),
    );
    set_log_level(reload_handle, options.log_level.as_filter_str());

    let store_dir = args
        .store_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(".cache/font-prefs"));
    info!(store = %store_dir.display(), manifest = %args.manifest, "Starting font-prefs");

    let loader = SourceCatalogLoader::new()?;
    let mut service = FontService::new(options, FileStore::new(store_dir), loader, StyleSheet::new());
    service.load_fonts(&args.manifest);
    if service.fonts().is_empty() {
        return Err(anyhow!("No fonts available from {}", args.manifest));
    }

    if args.reset {
        service.reset_to_defaults();
    }
    if let Some(id) = &args.ui_font {
        if !service.set_ui_font(id) {
            warn!(%id, "Not a sans-serif font in this catalog; keeping current UI font");
        }
    }
    if let Some(id) = &args.mono_font {
        if !service.set_mono_font(id) {
            warn!(%id, "Not a monospace font in this catalog; keeping current mono font");
        }
    }
    if let Some(size) = args.font_size {
        service.set_font_size(size);
    }

    let css = service.sink().render();
    match &args.css_out {
        Some(path) => {
            fs::write(path, &css).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote stylesheet");
        }
        None if !args.json => print!("{css}"),
        None => {}
    }
    if args.json {
        let view = serde_json::to_string_pretty(&service.snapshot())
            .context("Failed to serialize font settings")?;
        println!("{view}");
    }
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut manifest = None;
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| anyhow!("{flag} needs a value\n{USAGE}"))
        };
        match arg.as_str() {
            "--options" => parsed.options_path = Some(PathBuf::from(value("--options")?)),
            "--store" => parsed.store_dir = Some(PathBuf::from(value("--store")?)),
            "--ui" => parsed.ui_font = Some(value("--ui")?),
            "--mono" => parsed.mono_font = Some(value("--mono")?),
            "--size" => {
                let raw = value("--size")?;
                let size = raw
                    .parse::<i64>()
                    .with_context(|| format!("Invalid font size: {raw}"))?;
                parsed.font_size = Some(size);
            }
            "--css" => parsed.css_out = Some(PathBuf::from(value("--css")?)),
            "--reset" => parsed.reset = true,
            "--json" => parsed.json = true,
            flag if flag.starts_with("--") => return Err(anyhow!("Unknown flag {flag}\n{USAGE}")),
            _ if manifest.is_none() => manifest = Some(arg.clone()),
            _ => return Err(anyhow!("Unexpected argument {arg}\n{USAGE}")),
        }
    }
    parsed.manifest = manifest.ok_or_else(|| anyhow!(USAGE))?;
    Ok(parsed)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    if env::var_os("RUST_LOG").is_some() {
        return;
    }
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from options: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn parses_full_command_line() {
        let parsed = parse_args(args(&[
            "--store", "/tmp/s", "fonts.json", "--ui", "inter", "--mono", "fira-code",
            "--size", "25", "--reset", "--css", "out.css", "--json",
        ]))
        .expect("parse");
        assert_eq!(parsed.manifest, "fonts.json");
        assert_eq!(parsed.store_dir, Some(PathBuf::from("/tmp/s")));
        assert_eq!(parsed.ui_font.as_deref(), Some("inter"));
        assert_eq!(parsed.mono_font.as_deref(), Some("fira-code"));
        assert_eq!(parsed.font_size, Some(25));
        assert!(parsed.reset);
        assert!(parsed.json);
        assert_eq!(parsed.css_out, Some(PathBuf::from("out.css")));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["fonts.json", "--size", "big"])).is_err());
        assert!(parse_args(args(&["fonts.json", "--ui"])).is_err());
        assert!(parse_args(args(&["fonts.json", "--bold"])).is_err());
        assert!(parse_args(args(&["a.json", "b.json"])).is_err());
    }
}
