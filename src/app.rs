// src/app.rs
use anyhow::Result;
use tracing::info;

use arena_tx::shared::config::Config;
use arena_tx::shared::errors::AppError;
use arena_tx::shared::types::{ObjectId, PackageId};
use arena_tx::{create_arena, create_arena_checked, Transaction};

use crate::Args;

#[derive(Debug, Clone, PartialEq)]
pub struct AppCfg {
    pub package_id: String,
    pub hero_id: String,
    pub sender: Option<String>,
    pub gas_budget: Option<u64>,
    pub pretty: bool,
    pub strict_ids: bool,
}

impl AppCfg {
    pub fn from_config(cfg: Config, hero_id: String) -> Self {
        Self {
            package_id: cfg.contract.package_id,
            hero_id,
            sender: cfg.transaction.sender,
            gas_budget: cfg.transaction.gas_budget,
            pretty: cfg.output.pretty,
            strict_ids: cfg.output.strict_ids,
        }
    }

    pub fn from_cli_args(package_id: String, hero_id: String) -> Self {
        Self {
            package_id,
            hero_id,
            sender: None,
            gas_budget: None,
            pretty: true,
            strict_ids: false,
        }
    }

    /// Merge CLI args over the config file. Priority: CLI args > Config file > Defaults
    pub fn resolve(args: Args, config: Option<Config>) -> Result<Self> {
        let mut app_cfg = match config {
            Some(cfg) => {
                let mut app_cfg = Self::from_config(cfg, args.hero_id);
                if let Some(package_id) = args.package_id {
                    app_cfg.package_id = package_id;
                }
                app_cfg
            }
            None => {
                let package_id = args
                    .package_id
                    .ok_or_else(|| anyhow::anyhow!("--package-id is required when not using --config"))?;
                Self::from_cli_args(package_id, args.hero_id)
            }
        };

        if let Some(sender) = args.sender {
            app_cfg.sender = Some(sender);
        }
        if let Some(gas_budget) = args.gas_budget {
            app_cfg.gas_budget = Some(gas_budget);
        }
        if args.strict {
            app_cfg.strict_ids = true;
        }
        if args.compact {
            app_cfg.pretty = false;
        }

        Ok(app_cfg)
    }
}

/// Build the create_arena transaction described by `cfg`
pub fn build_transaction(cfg: &AppCfg) -> Result<Transaction, AppError> {
    let mut tx = if cfg.strict_ids {
        let package_id: PackageId = cfg.package_id.parse()?;
        let hero_id: ObjectId = cfg.hero_id.parse()?;
        create_arena_checked(&package_id, &hero_id)?
    } else {
        create_arena(&cfg.package_id, &cfg.hero_id)?
    };

    if let Some(sender) = &cfg.sender {
        tx.set_sender(sender.as_str());
    }
    if let Some(gas_budget) = cfg.gas_budget {
        tx.set_gas_budget(gas_budget);
    }

    Ok(tx)
}

pub fn render(tx: &Transaction, pretty: bool) -> Result<String, AppError> {
    let json = if pretty {
        serde_json::to_string_pretty(tx)?
    } else {
        serde_json::to_string(tx)?
    };
    Ok(json)
}

pub fn run(cfg: AppCfg) -> Result<()> {
    info!("🔨 Building create_arena transaction");
    info!("📦 Package: {}", cfg.package_id);
    info!("🦸 Hero: {}", cfg.hero_id);

    let tx = build_transaction(&cfg)?;
    info!(
        "✅ Built transaction with {} input(s) and {} command(s)",
        tx.inputs().len(),
        tx.commands().len()
    );

    println!("{}", render(&tx, cfg.pretty)?);
    Ok(())
}
