mod app;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use arena_tx::shared::config::Config;

#[derive(Parser, Debug)]
#[command(version, about = "Build an unsigned create_arena transaction for the arena Move package")]
pub struct Args {
    /// Object id of the hero entering the arena
    #[arg(long)]
    hero_id: String,

    /// Id of the published arena package (overrides config)
    #[arg(long)]
    package_id: Option<String>,

    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,

    /// Sender address recorded in the transaction
    #[arg(long)]
    sender: Option<String>,

    /// Gas budget recorded in the transaction
    #[arg(long)]
    gas_budget: Option<u64>,

    /// Reject ids that are not valid hex addresses
    #[arg(long)]
    strict: bool,

    /// Print the transaction on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let base_config = load_config(args.config.as_deref())?;
    let app_cfg = app::AppCfg::resolve(args, base_config)?;
    app::run(app_cfg)
}

fn load_config(path: Option<&str>) -> Result<Option<Config>> {
    path.map(|config_path| {
        Config::from_file(config_path).with_context(|| format!("load config {}", config_path))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "arena-tx",
            "--hero-id",
            "0xHero1",
            "--package-id",
            "0xABC",
            "--gas-budget",
            "100",
            "--strict",
        ])
        .unwrap();

        assert_eq!(args.hero_id, "0xHero1");
        assert_eq!(args.package_id.as_deref(), Some("0xABC"));
        assert_eq!(args.gas_budget, Some(100));
        assert!(args.strict);
        assert!(!args.compact);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_hero_id_is_required() {
        assert!(Args::try_parse_from(["arena-tx", "--package-id", "0xABC"]).is_err());
    }

    #[test]
    fn test_load_config_names_the_file() {
        assert!(load_config(None).unwrap().is_none());

        let err = load_config(Some("/nonexistent/arena-tx.toml")).unwrap_err();
        assert_eq!(err.to_string(), "load config /nonexistent/arena-tx.toml");
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }
}
