//! Storybook - terminal host for the component catalog
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin storybook -- list
//! cargo run --bin storybook -- search badge
//! cargo run --bin storybook -- --theme dark show button.primary --set text=Save --set enabled=false
//! cargo run --bin storybook -- docs badge.error
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use composebook::config::{self, Config};
use composebook::error::StorybookError;
use composebook::logging;
use composebook::stories::sample_registry;
use composebook::storybook::{
    ControlEditor, ControlView, StoryEnvironment, StoryRegistry, StorySession, ThemeMode,
};

#[derive(Parser)]
#[command(
    name = "storybook",
    version,
    about = "Browse, tweak and document component stories"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Theme to preview in (overrides the config file).
    #[arg(long, value_enum, global = true)]
    theme: Option<ThemeArg>,

    /// Locale tag, e.g. "fr-FR" (overrides the config file).
    #[arg(long, value_name = "TAG", global = true)]
    locale: Option<String>,

    /// Device profile name, e.g. "Tablet" (overrides the config file).
    #[arg(long, value_name = "NAME", global = true)]
    device: Option<String>,

    /// Config file to load instead of ~/.composebook/config.json.
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// List stories grouped by category.
    List,

    /// Find stories whose name or id contains QUERY.
    Search {
        #[arg(value_name = "QUERY")]
        query: String,
    },

    /// Render a story, optionally after editing its controls.
    Show {
        #[arg(value_name = "ID")]
        id: String,

        /// Control edit as key=value; applied in order.
        #[arg(long = "set", value_name = "KEY=VALUE")]
        edits: Vec<String>,

        /// Render without inspection mode.
        #[arg(long = "no-inspection")]
        no_inspection: bool,
    },

    /// Print a story's documentation.
    Docs {
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logging::init();

    let config = match &cli.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => config::load_config(),
    };
    let environment = resolve_environment(&cli, &config)?;

    let registry = Arc::new(sample_registry()?);
    info!(
        event_type = "app_lifecycle",
        action = "catalog_loaded",
        stories = registry.len(),
        "Sample catalog registered"
    );
    logging::log(
        "APP",
        &format!("{} stories, environment {}", registry.len(), environment.device),
    );

    let inspection_mode = config.get_inspection_mode();
    let mut session = StorySession::new(registry, environment).with_inspection_mode(inspection_mode);

    let outcome = match cli.command {
        Command::List => {
            list(&session);
            Ok(())
        }
        Command::Search { query } => {
            search(&session, &query);
            Ok(())
        }
        Command::Show {
            id,
            edits,
            no_inspection,
        } => {
            if no_inspection {
                session = session.with_inspection_mode(false);
            }
            show(&mut session, &id, &edits)
        }
        Command::Docs { id } => docs(&mut session, &id),
    };

    if let Err(e) = &outcome {
        if let Some(err) = e.downcast_ref::<StorybookError>() {
            warn!(severity = ?err.severity(), "{}", err.user_message());
        }
    }
    outcome
}

/// Config environment with command-line overrides applied
fn resolve_environment(cli: &Cli, config: &Config) -> Result<StoryEnvironment> {
    let mut environment = config.environment();
    if let Some(theme) = cli.theme {
        environment = environment.with_theme(theme.into());
    }
    if let Some(locale) = cli.locale.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        environment = environment.with_locale(locale);
    }
    if let Some(name) = &cli.device {
        let Some(device) = config::find_device(&config.get_devices(), name) else {
            let known: Vec<String> = config.get_devices().into_iter().map(|d| d.name).collect();
            bail!("unknown device '{}' (known: {})", name, known.join(", "));
        };
        environment = environment.with_device(device);
    }
    Ok(environment)
}

fn list(session: &StorySession<String>) {
    for line in listing(session) {
        println!("{}", line);
    }
}

/// Category headers in first-registration order, stories sorted by name
fn listing(session: &StorySession<String>) -> Vec<String> {
    if session.stories().is_empty() {
        return vec!["No stories registered".to_string()];
    }
    let registry = session.registry();
    let mut lines = Vec::new();
    for category in registry.categories() {
        lines.push(category.clone());
        for story in registry.stories_by_category(&category) {
            lines.push(format!("  {:<18} {}", story.id().as_str(), story.name()));
        }
    }
    lines
}

fn search(session: &StorySession<String>, query: &str) {
    let matches = session.registry().search(query);
    if matches.is_empty() {
        println!("No stories match '{}'", query);
        return;
    }
    for story in matches {
        println!("{:<18} {}", story.id(), story.name());
    }
}

fn show(session: &mut StorySession<String>, id: &str, edits: &[String]) -> Result<()> {
    session.select(id)?;
    logging::log_session_event(id, "select", None);

    for raw in edits {
        let (key, value) = parse_assignment(raw)?;
        let view = session
            .controls()
            .into_iter()
            .find(|c| c.key == key)
            .ok_or_else(|| StorybookError::UnknownControl {
                story: id.to_string(),
                key: key.to_string(),
            })?;
        let Some(parsed) = view.parse_value(value) else {
            logging::log_control_edit(id, key, value, false);
            bail!("'{}' is not a valid value for control '{}'", value, key);
        };
        let result = session.edit(key, parsed);
        logging::log_control_edit(id, key, value, result.is_ok());
        result?;
    }

    let environment = session.environment();
    println!(
        "{} [{} | {} | {}]",
        id, environment.theme, environment.locale, environment.device
    );
    println!();
    if let Some(rendered) = session.render() {
        println!("{}", rendered);
    }
    println!();
    for control in session.controls() {
        println!("  {}", describe_control(&control));
    }
    Ok(())
}

fn docs(session: &mut StorySession<String>, id: &str) -> Result<()> {
    session.select(id)?;
    let documentation = session.documentation().unwrap_or_default();
    if documentation.is_empty() {
        println!("No documentation available");
        return Ok(());
    }
    for (section, text) in documentation.sections() {
        println!("## {}", section.title());
        if section.is_code() {
            for line in text.lines() {
                println!("    {}", line);
            }
        } else {
            println!("{}", text);
        }
        println!();
    }
    Ok(())
}

/// One editor line; kinds this host does not know are reported, not dropped
fn describe_control(control: &ControlView) -> String {
    let kind = match &control.editor {
        ControlEditor::Text { .. } => "text",
        ControlEditor::Boolean { .. } => "boolean",
        ControlEditor::Enum { .. } => "enum",
        _ => return format!("{:<12} unsupported control", control.key),
    };
    let mut line = format!(
        "{:<12} {:<8} {} = {}",
        control.key,
        kind,
        control.label,
        control.display_value()
    );
    if let ControlEditor::Enum { options, .. } = &control.editor {
        line.push_str(&format!("  [{}]", options.join("|")));
    }
    if let Some(description) = &control.description {
        line.push_str(&format!("  - {}", description));
    }
    line
}

fn parse_assignment(raw: &str) -> Result<(&str, &str)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => bail!("expected KEY=VALUE, got '{}'", raw),
    }
}
