use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use question_core::{CategoryMap, Question};
use services::{EditorConfig, EditorMode, InMemorySubmitter, QuestionSubmitter};
use tracing_subscriber::{EnvFilter, fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

const SAMPLE_CATEGORIES: &str = r#"{
    "Algebra": ["Linear Equations", "Quadratic Equations", "Polynomials"],
    "Geometry": ["Triangles", "Circles", "Coordinate Geometry"],
    "Mechanics": ["Kinematics", "Laws of Motion", "Work and Energy"]
}"#;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidMode { raw: String },
    InvalidBannerMs { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidMode { raw } => write!(f, "invalid --mode value: {raw}"),
            ArgsError::InvalidBannerMs { raw } => write!(f, "invalid --banner-ms value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    categories: CategoryMap,
    mode: EditorMode,
    editor_config: EditorConfig,
    initial_question: Option<Question>,
    submitter: Arc<InMemorySubmitter>,
}

impl UiApp for DesktopApp {
    fn categories(&self) -> CategoryMap {
        self.categories.clone()
    }

    fn mode(&self) -> EditorMode {
        self.mode
    }

    fn editor_config(&self) -> EditorConfig {
        self.editor_config
    }

    fn submitter(&self) -> Arc<dyn QuestionSubmitter> {
        self.submitter.clone()
    }

    fn initial_question(&self) -> Option<Question> {
        self.initial_question.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    categories: Option<PathBuf>,
    question: Option<PathBuf>,
    config: Option<PathBuf>,
    mode: EditorMode,
    /// Overrides the config file.
    banner_duration: Option<Duration>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  cargo run -p app -- [--categories <json>] [--question <json>] [--config <json>] [--mode <add|edit|filter>] [--banner-ms <n>]"
    );
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --categories  built-in sample mapping");
    eprintln!("  --mode add");
    eprintln!("  --config      none (banner_ms 3000)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUESTION_CATEGORIES, QUESTION_CONFIG, QUESTION_MODE, QUESTION_BANNER_MS, RUST_LOG");
}

fn parse_mode(raw: &str) -> Result<EditorMode, ArgsError> {
    raw.parse()
        .map_err(|_| ArgsError::InvalidMode { raw: raw.to_string() })
}

fn parse_banner_ms(raw: &str) -> Result<Duration, ArgsError> {
    EditorConfig::parse_banner_ms(raw).map_err(|_| ArgsError::InvalidBannerMs { raw: raw.to_string() })
}

impl Args {
    /// Environment first, then flags on top.
    fn parse(
        env: impl Fn(&str) -> Option<String>,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Parsed, ArgsError> {
        let mut parsed = Self::default();
        if let Some(path) = env("QUESTION_CATEGORIES") {
            parsed.categories = Some(PathBuf::from(path));
        }
        if let Some(path) = env("QUESTION_CONFIG") {
            parsed.config = Some(PathBuf::from(path));
        }
        if let Some(raw) = env("QUESTION_MODE") {
            parsed.mode = parse_mode(&raw)?;
        }
        if let Some(raw) = env("QUESTION_BANNER_MS") {
            parsed.banner_duration = Some(parse_banner_ms(&raw)?);
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--categories" => {
                    parsed.categories = Some(PathBuf::from(require_value(args, "--categories")?));
                }
                "--question" => {
                    parsed.question = Some(PathBuf::from(require_value(args, "--question")?));
                }
                "--config" => {
                    parsed.config = Some(PathBuf::from(require_value(args, "--config")?));
                }
                "--mode" => parsed.mode = parse_mode(&require_value(args, "--mode")?)?,
                "--banner-ms" => {
                    parsed.banner_duration =
                        Some(parse_banner_ms(&require_value(args, "--banner-ms")?)?);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(parsed))
    }
}

fn load_categories(path: Option<&PathBuf>) -> Result<CategoryMap, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        tracing::info!("using built-in sample categories");
        return Ok(CategoryMap::from_json_str(SAMPLE_CATEGORIES)?);
    };
    let file = std::fs::File::open(path)?;
    let categories = CategoryMap::from_json_reader(std::io::BufReader::new(file))?;
    tracing::info!(path = %path.display(), categories = categories.len(), "loaded categories");
    Ok(categories)
}

fn load_question(path: Option<&PathBuf>) -> Result<Option<Question>, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let raw = std::fs::read_to_string(path)?;
    let question: Question = serde_json::from_str(&raw)?;
    tracing::info!(path = %path.display(), "loaded question");
    Ok(Some(question))
}

fn load_editor_config(
    path: Option<&PathBuf>,
    banner_override: Option<Duration>,
) -> Result<EditorConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            let config = EditorConfig::from_json_reader(std::io::BufReader::new(file))?;
            tracing::info!(path = %path.display(), "loaded editor config");
            config
        }
        None => EditorConfig::default(),
    };
    Ok(match banner_override {
        Some(duration) => config.with_banner_duration(duration),
        None => config,
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(log_fmt::layer().with_target(false))
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(|key| std::env::var(key).ok(), &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    init_tracing();

    let categories = load_categories(args.categories.as_ref())?;
    let initial_question = load_question(args.question.as_ref())?;
    let editor_config = load_editor_config(args.config.as_ref(), args.banner_duration)?;
    tracing::info!(mode = %args.mode, "starting question editor");

    let app = DesktopApp {
        categories,
        mode: args.mode,
        editor_config,
        initial_question,
        submitter: Arc::new(InMemorySubmitter::accepting()),
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // Some tao setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.mode.title())
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
