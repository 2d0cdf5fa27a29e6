#![allow(clippy::uninlined_format_args)]

use anyhow::Context;
use clap::Parser;
use signet_rs::signet_canvas2d::FontConfig;
use signet_rs::style::PALETTE;
use signet_rs::{BackgroundMode, Session, Severity, StyleDescriptor};
use std::path::PathBuf;

/// signet: Render a typed name as a stylized signature PNG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name to render
    #[arg(short, long)]
    name: Option<String>,

    /// Font family: a built-in family, or an uploaded font's name or family id
    #[arg(short, long)]
    font: Option<String>,

    /// Font file (.ttf or .otf) to upload. May be repeated; the last upload is
    /// selected unless --font is given
    #[arg(long = "font-file")]
    font_files: Vec<String>,

    /// Font size in pixels (30-150, step 5)
    #[arg(short, long)]
    size: Option<u32>,

    /// Ink color as any CSS color
    #[arg(short, long)]
    color: Option<String>,

    /// Background: a CSS color such as "white", or "transparent"
    #[arg(short, long)]
    background: Option<BackgroundMode>,

    /// Render in bold
    #[arg(long)]
    bold: bool,

    /// Add a soft drop shadow
    #[arg(long)]
    shadow: bool,

    /// Underline the signature
    #[arg(long)]
    underline: bool,

    /// JSON style preset. Command line options override its fields
    #[arg(long)]
    style: Option<String>,

    /// Additional directory to load fonts from. May be repeated
    #[arg(long = "font-dir")]
    font_dirs: Vec<String>,

    /// Do not load system fonts
    #[arg(long)]
    no_system_fonts: bool,

    /// Directory the PNG is written to
    #[arg(short, long, default_value = ".")]
    output_dir: String,

    /// List available font families and exit
    #[arg(long)]
    list_fonts: bool,

    /// List the preset ink colors and exit
    #[arg(long)]
    list_colors: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_colors {
        for color in PALETTE {
            println!("{}", color);
        }
        return Ok(());
    }

    let font_config = FontConfig {
        load_system_fonts: !args.no_system_fonts,
        font_dirs: args.font_dirs.iter().map(|dir| expand_path(dir)).collect(),
        ..FontConfig::default()
    };
    let mut session =
        Session::with_font_config(&font_config).context("Failed to create signature surface")?;

    let mut style = match &args.style {
        Some(path) => {
            let path = expand_path(path);
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read style preset {}", path.display()))?;
            StyleDescriptor::from_json(&json)?
        }
        None => StyleDescriptor::default(),
    };

    for file in &args.font_files {
        let path = expand_path(file);
        let result = session.upload_font(&path).await;
        report_notices(&mut session);
        result.with_context(|| format!("Failed to upload {}", path.display()))?;
    }
    if !session.registry().is_empty() {
        style.font_family = session.font_family().to_string();
    }

    if args.list_fonts {
        for option in session.font_options() {
            println!("{}\t{}", option.display_name, option.family_id);
        }
        return Ok(());
    }

    if let Some(font) = &args.font {
        style.font_family = font.clone();
    }
    // Uploaded fonts may be named by display name
    if let Some(font) = session.registry().find(&style.font_family) {
        style.font_family = font.family_id.clone();
    }
    if !session.registry().is_known_family(&style.font_family) {
        log::warn!(
            "Unknown font family {:?}, the default font will be used",
            style.font_family
        );
    }

    if let Some(name) = args.name {
        style.text = name;
    }
    if let Some(size) = args.size {
        style.font_size_px = size;
    }
    if let Some(color) = args.color {
        style.ink_color = color;
    }
    if let Some(background) = args.background {
        style.background = background;
    }
    style.bold |= args.bold;
    style.shadow |= args.shadow;
    style.underline |= args.underline;

    session.apply_style(style)?;

    let output_dir = expand_path(&args.output_dir);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let result = session.download(&output_dir);
    report_notices(&mut session);
    let path = result?;
    println!("{}", path.display());
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path.trim()).as_ref())
}

/// Print error notices to stderr and log the rest.
fn report_notices(session: &mut Session) {
    for notice in session.take_notices() {
        match notice.severity {
            Severity::Error => eprintln!("{}: {}", notice.title, notice.description),
            Severity::Info => log::info!("{}: {}", notice.title, notice.description),
        }
    }
}
