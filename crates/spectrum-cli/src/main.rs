use serde::Serialize;
use spectrum::leads::{capture_lead, stored_leads};
use spectrum::render::raster::{self, RasterError, RasterOptions};
use spectrum::render::{
    HeadlessError, SvgRenderOptions, Theme, layout_options_from_config, layout_spectrum,
    render_assessment_result, render_level_detail, render_roadmap, render_svg, sanitize_svg_id,
};
use spectrum::share::{SharePlatform, share_url};
use spectrum::{
    AssessmentStore, FileStorage, InteractionState, LevelCatalog, LevelId, Questionnaire,
    RoadmapTable, SpectrumConfig,
};
use std::io::Write as _;
use std::str::FromStr;

const DEFAULT_STORE_DIR: &str = ".spectrum";

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Spectrum(spectrum::Error),
    Headless(HeadlessError),
    Raster(RasterError),
    Json(serde_json::Error),
    NoTransition(LevelId),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Spectrum(err) => write!(f, "{err}"),
            CliError::Headless(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::NoTransition(level) => {
                write!(f, "Level {level} is the highest level; there is no next level")
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<spectrum::Error> for CliError {
    fn from(value: spectrum::Error) -> Self {
        Self::Spectrum(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Headless(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
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
    Levels,
    Layout,
    Render,
    Questions,
    Assess,
    Roadmap,
    Detail,
    Lead,
    Share,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
    Pdf,
}

impl RenderFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pdf => "pdf",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "pdf" => Ok(Self::Pdf),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    positional: Vec<String>,
    pretty: bool,
    json: bool,
    config: Option<String>,
    catalog: Option<String>,
    store: Option<String>,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    theme: Theme,
    active: Option<LevelId>,
    hover: Option<LevelId>,
    assessed: Option<LevelId>,
    from_store: bool,
    no_animate: bool,
    diagram_id: Option<String>,
    out: Option<String>,
    save: bool,
    email: Option<String>,
    list: bool,
    url: Option<String>,
}

fn usage() -> &'static str {
    "spectrum-cli\n\
\n\
USAGE:\n\
  spectrum-cli [levels] [--pretty] [--catalog <path>]\n\
  spectrum-cli layout [--pretty] [--config <path>] [--catalog <path>]\n\
  spectrum-cli render [--format svg|png|jpg|pdf] [--scale <n>] [--background <css-color>] [--theme light|dark] [--active <id>] [--hover <id>] [--assessed <id> | --from-store] [--no-animate] [--id <diagram-id>] [--out <path>] [--config <path>] [--store <dir>]\n\
  spectrum-cli questions [--pretty]\n\
  spectrum-cli assess [--json] [--save] [--store <dir>] <answer>...\n\
  spectrum-cli roadmap [--json] [--store <dir>] [<level>]\n\
  spectrum-cli detail [--store <dir>] [<level>]\n\
  spectrum-cli lead --email <address> [--config <path>] [--store <dir>] [<level>]\n\
  spectrum-cli lead --list [--store <dir>]\n\
  spectrum-cli share x|facebook [--url <page-url>] [--config <path>]\n\
\n\
NOTES:\n\
  - Answers are level ids, one per question, separated by spaces or commas.\n\
  - roadmap/detail/lead default to the saved assessment level when <level> is omitted.\n\
  - The store directory defaults to config `storage.dir`, then ./.spectrum.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG/JPG/PDF output defaults to ./spectrum.<ext>; use --out - for stdout.\n\
  - Set SPECTRUM_LOG (e.g. SPECTRUM_LOG=debug) for diagnostics on stderr.\n\
"
}

fn next_value<'a>(it: &mut impl Iterator<Item = &'a String>) -> Result<&'a String, CliError> {
    it.next().ok_or(CliError::Usage(usage()))
}

fn parse_level(raw: &str) -> Result<LevelId, CliError> {
    raw.trim()
        .parse::<u32>()
        .map(LevelId)
        .map_err(|_| CliError::Usage(usage()))
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        render_scale: 1.0,
        ..Default::default()
    };

    let mut command_seen = false;
    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        let command = match a.as_str() {
            "levels" => Some(Command::Levels),
            "layout" => Some(Command::Layout),
            "render" => Some(Command::Render),
            "questions" => Some(Command::Questions),
            "assess" => Some(Command::Assess),
            "roadmap" => Some(Command::Roadmap),
            "detail" => Some(Command::Detail),
            "lead" => Some(Command::Lead),
            "share" => Some(Command::Share),
            _ => None,
        };
        if let Some(command) = command.filter(|_| !command_seen) {
            args.command = command;
            command_seen = true;
            continue;
        }

        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--json" => args.json = true,
            "--save" => args.save = true,
            "--list" => args.list = true,
            "--from-store" => args.from_store = true,
            "--no-animate" => args.no_animate = true,
            "--config" => args.config = Some(next_value(&mut it)?.clone()),
            "--catalog" => args.catalog = Some(next_value(&mut it)?.clone()),
            "--store" => args.store = Some(next_value(&mut it)?.clone()),
            "--id" => args.diagram_id = Some(next_value(&mut it)?.clone()),
            "--out" => args.out = Some(next_value(&mut it)?.clone()),
            "--email" => args.email = Some(next_value(&mut it)?.trim().to_string()),
            "--url" => args.url = Some(next_value(&mut it)?.trim().to_string()),
            "--active" => args.active = Some(parse_level(next_value(&mut it)?)?),
            "--hover" => args.hover = Some(parse_level(next_value(&mut it)?)?),
            "--assessed" => args.assessed = Some(parse_level(next_value(&mut it)?)?),
            "--format" => {
                args.render_format = next_value(&mut it)?
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--theme" => {
                args.theme =
                    Theme::parse(next_value(&mut it)?).ok_or(CliError::Usage(usage()))?;
            }
            "--scale" => {
                args.render_scale = next_value(&mut it)?
                    .parse::<f32>()
                    .map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let bg = next_value(&mut it)?;
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--" => {
                args.positional.extend(it.by_ref().cloned());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            value => args.positional.push(value.to_string()),
        }
    }

    Ok(args)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn write_bytes(bytes: &[u8], out: Option<&str>, format: RenderFormat) -> Result<(), CliError> {
    match out {
        Some("-") => {
            std::io::stdout().lock().write_all(bytes)?;
            Ok(())
        }
        Some(path) => Ok(std::fs::write(path, bytes)?),
        None => Ok(std::fs::write(
            format!("spectrum.{}", format.extension()),
            bytes,
        )?),
    }
}

fn load_config(path: Option<&str>) -> Result<SpectrumConfig, CliError> {
    match path {
        None => Ok(SpectrumConfig::default()),
        Some(path) => Ok(SpectrumConfig::from_json_str(&std::fs::read_to_string(
            path,
        )?)?),
    }
}

fn load_catalog(path: Option<&str>) -> Result<LevelCatalog, CliError> {
    match path {
        None => Ok(LevelCatalog::reference()),
        Some(path) => Ok(LevelCatalog::from_json_str(&std::fs::read_to_string(
            path,
        )?)?),
    }
}

fn open_store(args: &Args, config: &SpectrumConfig) -> AssessmentStore<FileStorage> {
    let dir = args
        .store
        .as_deref()
        .or(config.storage_dir())
        .unwrap_or(DEFAULT_STORE_DIR);
    tracing::debug!(dir, "opening assessment store");
    AssessmentStore::load(FileStorage::new(dir))
}

/// The explicit `<level>` argument, else the saved assessment result.
fn resolve_level(
    args: &Args,
    store: &AssessmentStore<FileStorage>,
    catalog: &LevelCatalog,
) -> Result<LevelId, CliError> {
    let level = match args.positional.as_slice() {
        [raw] => parse_level(raw)?,
        [] => store
            .result()
            .map(|r| r.primary_level)
            .ok_or(CliError::Usage(usage()))?,
        _ => return Err(CliError::Usage(usage())),
    };
    if !catalog.contains(level) {
        return Err(spectrum::Error::UnknownLevel { id: level }.into());
    }
    Ok(level)
}

fn parse_answers(positional: &[String]) -> Result<Vec<LevelId>, CliError> {
    positional
        .iter()
        .flat_map(|arg| arg.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_level)
        .collect()
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(args.config.as_deref())?;
    let catalog = load_catalog(args.catalog.as_deref())?;

    match args.command {
        Command::Levels => write_json(&catalog, args.pretty),
        Command::Layout => {
            let layout = layout_spectrum(&catalog, &layout_options_from_config(&config))
                .map_err(HeadlessError::from)?;
            write_json(&layout, args.pretty)
        }
        Command::Questions => write_json(&Questionnaire::reference(), args.pretty),
        Command::Assess => {
            let answers = parse_answers(&args.positional)?;
            let result = Questionnaire::reference().assess(&answers, &catalog)?;
            if args.save {
                let mut store = open_store(&args, &config);
                store.set_result(result.clone());
            }
            if args.json {
                write_json(&result, args.pretty)
            } else {
                write_text(&render_assessment_result(&result), None)
            }
        }
        Command::Roadmap => {
            let store = open_store(&args, &config);
            let level = resolve_level(&args, &store, &catalog)?;
            let roadmap = RoadmapTable::reference();
            let text = render_roadmap(&catalog, &roadmap, level).map_err(HeadlessError::from)?;
            if roadmap.is_terminal(level) {
                write_text(&text, None)?;
                return Err(CliError::NoTransition(level));
            }
            match roadmap.transition_for_level(level).filter(|_| args.json) {
                Some(transition) => write_json(transition, args.pretty),
                None => write_text(&text, None),
            }
        }
        Command::Detail => {
            let store = open_store(&args, &config);
            let level = resolve_level(&args, &store, &catalog)?;
            let Some(level) = catalog.get(level) else {
                return Err(spectrum::Error::UnknownLevel { id: level }.into());
            };
            write_text(&render_level_detail(level), None)
        }
        Command::Lead => {
            let store = open_store(&args, &config);
            if args.list {
                return write_json(&stored_leads(store.storage()), args.pretty);
            }
            let Some(email) = args.email.as_deref() else {
                return Err(CliError::Usage(usage()));
            };
            let current = resolve_level(&args, &store, &catalog)?;
            let target = RoadmapTable::reference()
                .transition_for_level(current)
                .map_or(current, |t| t.to_level);
            let lead = capture_lead(store.storage(), &config, email, current, target)?;
            write_json(&lead, args.pretty)
        }
        Command::Share => {
            let [platform] = args.positional.as_slice() else {
                return Err(CliError::Usage(usage()));
            };
            let platform = SharePlatform::parse(platform).ok_or(CliError::Usage(usage()))?;
            let page_url = args
                .url
                .as_deref()
                .or(config.share_page_url())
                .ok_or(CliError::Usage(usage()))?;
            println!("{}", share_url(platform, page_url)?);
            Ok(())
        }
        Command::Render => render(&args, &config, &catalog),
    }
}

fn render(args: &Args, config: &SpectrumConfig, catalog: &LevelCatalog) -> Result<(), CliError> {
    if !args.positional.is_empty() {
        return Err(CliError::Usage(usage()));
    }

    let assessed = match args.assessed {
        Some(level) => Some(level),
        None if args.from_store => open_store(args, config).result().map(|r| r.primary_level),
        None => None,
    };

    let mut state = InteractionState::for_catalog(catalog, args.active.or(assessed));
    if let Some(level) = args.hover {
        state.hover(level);
    }

    let layout_options = layout_options_from_config(config);
    let svg_options = SvgRenderOptions {
        diagram_id: args.diagram_id.as_deref().map(sanitize_svg_id),
        theme: args.theme,
        assessed_level: assessed,
        animate: !args.no_animate,
        include_tooltip: true,
    };
    let raster_options = RasterOptions {
        scale: args.render_scale,
        background: args.background.clone(),
        ..RasterOptions::default()
    };

    let out = args.out.as_deref();
    match args.render_format {
        RenderFormat::Svg => {
            let svg = render_svg(catalog, &state, &layout_options, &svg_options)?;
            write_text(&svg, out)
        }
        RenderFormat::Png => {
            let bytes = raster::render_png(
                catalog,
                &state,
                &layout_options,
                &svg_options,
                &raster_options,
            )?;
            write_bytes(&bytes, out, RenderFormat::Png)
        }
        RenderFormat::Jpeg => {
            let bytes = raster::render_jpeg(
                catalog,
                &state,
                &layout_options,
                &svg_options,
                &raster_options,
            )?;
            write_bytes(&bytes, out, RenderFormat::Jpeg)
        }
        RenderFormat::Pdf => {
            let bytes = raster::render_pdf(catalog, &state, &layout_options, &svg_options)?;
            write_bytes(&bytes, out, RenderFormat::Pdf)
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("SPECTRUM_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();

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
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err @ CliError::NoTransition(_)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
