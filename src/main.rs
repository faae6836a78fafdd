//! SwipeHire - Swipe-card gesture trace tool
//!
//! Replays recorded gesture traces through the swipe engine and reports the
//! decisions they resolve to.

use swipehire::app::cli::{Cli, Commands, ConfigAction};
use swipehire::app::config::Config;
use swipehire::deck::JobDeck;
use swipehire::gesture::SwipeDirection;
use swipehire::trace::GestureTrace;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        Config::load(path)?
    } else {
        Config::load_default()?
    };

    match cli.command {
        Commands::Replay { input, feed } => run_replay(&input, feed.as_deref(), &config)?,
        Commands::Validate { trace } => run_validate(&trace)?,
        Commands::List { detailed } => run_list(detailed)?,
        Commands::Init { force } => run_init(force, &config)?,
        Commands::Delete { name, force } => run_delete(&name, force)?,
        Commands::Config { action } => run_config(action, &config)?,
    }

    Ok(())
}

fn run_replay(
    input: &std::path::Path,
    feed: Option<&std::path::Path>,
    config: &Config,
) -> anyhow::Result<()> {
    if !input.exists() {
        anyhow::bail!("Trace file not found: {:?}", input);
    }

    let trace = GestureTrace::load(input)?;
    info!(
        "Loaded trace '{}' with {} samples over {} ms",
        trace.metadata.name,
        trace.len(),
        trace.metadata.duration_ms
    );

    let direction = trace.replay(config);
    match direction {
        Some(SwipeDirection::Right) => println!("Decision: APPLY (swipe right)"),
        Some(SwipeDirection::Left) => println!("Decision: SKIP (swipe left)"),
        None => println!("Decision: none (gesture abandoned, card returned to rest)"),
    }

    if let Some(feed_path) = feed {
        let jobs = swipehire::jobs::load_feed(feed_path)?;
        let mut deck = JobDeck::new(jobs);
        let top = deck
            .top()
            .map(|job| format!("{} at {}", job.title, job.company));
        match (direction, top) {
            (Some(direction), Some(title)) => {
                deck.resolve(direction);
                println!("Top card: {}", title);
                println!(
                    "Deck: {} applied, {} skipped, {} remaining",
                    deck.applied().len(),
                    deck.skipped().len(),
                    deck.remaining()
                );
            }
            (_, None) => println!("Feed is empty"),
            (None, _) => println!("Deck unchanged"),
        }
    }

    Ok(())
}

fn run_validate(trace_path: &std::path::Path) -> anyhow::Result<()> {
    if !trace_path.exists() {
        anyhow::bail!("Trace file not found: {:?}", trace_path);
    }

    match GestureTrace::load(trace_path) {
        Ok(trace) => {
            println!("Validation PASSED");
            println!("  Name: {}", trace.metadata.name);
            println!("  Samples: {}", trace.len());
            println!("  Duration: {} ms", trace.metadata.duration_ms);
            Ok(())
        }
        Err(e) => {
            println!("Validation FAILED: {}", e);
            anyhow::bail!("Trace validation failed")
        }
    }
}

fn run_list(detailed: bool) -> anyhow::Result<()> {
    let traces_dir = Cli::traces_dir();

    if !traces_dir.exists() {
        println!("No traces found in {}", traces_dir.display());
        return Ok(());
    }

    println!("Traces in {:?}:", traces_dir);

    let mut entries: Vec<_> = std::fs::read_dir(&traces_dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();

    entries.sort_by_key(|e| e.path());

    for entry in &entries {
        let path = entry.path();
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();

        if detailed {
            match GestureTrace::load(&path) {
                Ok(trace) => {
                    let m = &trace.metadata;
                    println!(
                        "  {}  ({} samples, {} ms, recorded {})",
                        file_name,
                        m.sample_count,
                        m.duration_ms,
                        m.created_at.format("%Y-%m-%d %H:%M")
                    );
                }
                Err(_) => {
                    let fs_meta = entry.metadata()?;
                    println!("  {}  ({} bytes, failed to parse)", file_name, fs_meta.len());
                }
            }
        } else {
            println!("  {}", file_name);
        }
    }

    if entries.is_empty() {
        println!("  (none)");
    }

    Ok(())
}

fn run_init(force: bool, config: &Config) -> anyhow::Result<()> {
    let config_path = Config::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    config.save_default()?;
    println!("Created config at {:?}", config_path);
    println!("\nConfig content:\n{}", config.to_toml()?);

    std::fs::create_dir_all(Cli::traces_dir())?;
    println!("Created traces directory: {:?}", Cli::traces_dir());

    Ok(())
}

fn run_delete(name: &str, force: bool) -> anyhow::Result<()> {
    let traces_dir = Cli::traces_dir();

    // Try exact filename first, then add .json extension
    let candidates = vec![
        traces_dir.join(name),
        traces_dir.join(format!("{}.json", name)),
    ];

    let target = candidates
        .into_iter()
        .find(|p| p.exists())
        .ok_or_else(|| anyhow::anyhow!("Trace '{}' not found in {:?}", name, traces_dir))?;

    if !force {
        let file_size = std::fs::metadata(&target)?.len();
        println!("Will delete: {} ({} bytes)", target.display(), file_size);
        println!("Use --force to skip this prompt, or re-run with -f");
        return Ok(());
    }

    std::fs::remove_file(&target)?;
    info!("Deleted trace: {}", target.display());
    println!("Deleted: {}", target.display());

    Ok(())
}

fn run_config(action: ConfigAction, config: &Config) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("Configuration ({:?}):\n", Config::default_path());
            println!("{}", config.to_toml()?);
        }
        ConfigAction::Get { key } => {
            let value = lookup_toml_key(&config.to_toml()?, &key)
                .ok_or_else(|| anyhow::anyhow!("Configuration key '{}' not found", key))?;
            println!("{} = {}", key, value);
        }
        ConfigAction::Set { key, value } => {
            let config_path = Config::default_path();
            if !config_path.exists() {
                anyhow::bail!("No config file found. Run 'swipehire init' first.");
            }

            let content = std::fs::read_to_string(&config_path)?;
            let mut document: toml::Value = toml::from_str(&content)?;
            if !set_toml_key(&mut document, &key, &value) {
                anyhow::bail!("Failed to set '{}'. Key may not exist in config.", key);
            }

            // Re-validate before persisting
            let updated: Config = document.try_into()?;
            updated.validate()?;
            updated.save(&config_path)?;
            println!("Set {} = {}", key, value);
        }
        ConfigAction::Reset { force } => {
            let config_path = Config::default_path();

            if config_path.exists() && !force {
                println!("Config exists at {:?}", config_path);
                println!("Use --force to reset to defaults");
                return Ok(());
            }

            Config::default().save_default()?;
            println!("Configuration reset to defaults at {:?}", config_path);
        }
    }

    Ok(())
}

/// Look up a dotted key in a TOML document, returning its display form
fn lookup_toml_key(toml_str: &str, key: &str) -> Option<String> {
    let document: toml::Value = toml::from_str(toml_str).ok()?;
    let mut node = &document;
    for part in key.split('.') {
        node = node.get(part)?;
    }
    Some(node.to_string())
}

/// Set a dotted key in a TOML document. The key must already exist; the new
/// value is parsed with the type of the existing one.
fn set_toml_key(document: &mut toml::Value, key: &str, value: &str) -> bool {
    let mut node = document;
    let parts: Vec<&str> = key.split('.').collect();
    let (leaf, path) = match parts.split_last() {
        Some(split) => split,
        None => return false,
    };
    for part in path {
        node = match node.get_mut(part) {
            Some(next) => next,
            None => return false,
        };
    }
    let Some(existing) = node.get_mut(leaf) else {
        return false;
    };
    let parsed = match existing {
        toml::Value::Integer(_) => value.parse::<i64>().map(toml::Value::Integer).ok(),
        toml::Value::Float(_) => value.parse::<f64>().map(toml::Value::Float).ok(),
        toml::Value::Boolean(_) => value.parse::<bool>().map(toml::Value::Boolean).ok(),
        toml::Value::String(_) => Some(toml::Value::String(value.to_string())),
        _ => None,
    };
    match parsed {
        Some(parsed) => {
            *existing = parsed;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_toml_key() {
        let toml_str = Config::default().to_toml().unwrap();
        let value = lookup_toml_key(&toml_str, "gesture.commit_threshold_px").unwrap();
        assert_eq!(value, "100.0");
    }

    #[test]
    fn test_lookup_missing_key() {
        let toml_str = Config::default().to_toml().unwrap();
        assert!(lookup_toml_key(&toml_str, "gesture.nonexistent").is_none());
    }

    #[test]
    fn test_set_toml_key_preserves_type() {
        let mut document: toml::Value =
            toml::from_str(&Config::default().to_toml().unwrap()).unwrap();
        assert!(set_toml_key(&mut document, "gesture.exit_delay_ms", "250"));
        let updated: Config = document.try_into().unwrap();
        assert_eq!(updated.gesture.exit_delay_ms, 250);
    }

    #[test]
    fn test_set_toml_key_rejects_wrong_type() {
        let mut document: toml::Value =
            toml::from_str(&Config::default().to_toml().unwrap()).unwrap();
        assert!(!set_toml_key(&mut document, "gesture.exit_delay_ms", "soon"));
    }

    #[test]
    fn test_set_toml_key_rejects_unknown_key() {
        let mut document: toml::Value =
            toml::from_str(&Config::default().to_toml().unwrap()).unwrap();
        assert!(!set_toml_key(&mut document, "gesture.unknown", "1"));
    }
}
