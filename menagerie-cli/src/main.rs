//! Menagerie command-line client
//!
//! Lists and edits the records of a Menagerie REST service: people,
//! specialists, enclosures and tracked animals.
//!
//! Usage:
//!   menagerie list enclosures
//!   menagerie update enclosure e1 --set capacity=15
//!
//! Rendered records go to stdout; logs and notifications go to stderr.

mod config;
mod fields;
mod prompt;
mod render;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use config::ClientConfig;
use menagerie_sync::{HttpResourceApi, Outcome, SessionController};
use menagerie_types::{RecordId, ResourceKind};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "menagerie")]
#[command(about = "Menagerie record service client")]
struct Args {
    /// Path to a TOML config file (default: ./menagerie.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Service base URL, overrides the config file
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token, overrides the config file
    #[arg(long)]
    token: Option<String>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the record kinds and their required fields
    Kinds,

    /// Fetch and print every record of a kind
    List { kind: ResourceKind },

    /// Fetch and print one record as JSON
    Show { kind: ResourceKind, id: String },

    /// Create a record from key=value fields
    Create {
        kind: ResourceKind,
        /// Field assignment, e.g. --set capacity=12
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        fields: Vec<String>,
        /// Send the record even if required text fields are blank
        #[arg(long)]
        allow_empty: bool,
    },

    /// Change fields of an existing record
    Update {
        kind: ResourceKind,
        id: String,
        #[arg(short, long = "set", value_name = "KEY=VALUE", required = true)]
        fields: Vec<String>,
    },

    /// Delete a record after confirmation
    Delete {
        kind: ResourceKind,
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let config = ClientConfig::load(args.config.as_deref())?
        .with_overrides(args.base_url, args.token);

    if let Command::Kinds = args.command {
        for kind in ResourceKind::ALL {
            println!("{}", render::kind_line(kind));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let api = HttpResourceApi::new(config.api).context("failed to configure service client")?;
    let controller = SessionController::new(Arc::new(api), config.session);

    let outcome = run(&controller, args.command).await?;
    report(&controller).await;

    Ok(match outcome {
        Outcome::Succeeded => ExitCode::SUCCESS,
        Outcome::Failed => ExitCode::FAILURE,
    })
}

async fn run(controller: &SessionController, command: Command) -> Result<Outcome> {
    match command {
        Command::Kinds => Ok(Outcome::Succeeded),

        Command::List { kind } => {
            let outcome = controller.select(kind).await;
            if outcome.is_success() {
                let records = controller.records(kind).await;
                if records.is_empty() {
                    info!("No {} yet", kind.plural());
                }
                for record in &records {
                    println!("{}", render::record_line(record));
                }
            }
            Ok(outcome)
        }

        Command::Show { kind, id } => {
            let id = RecordId::new(id);
            let outcome = controller.select(kind).await;
            if !outcome.is_success() {
                return Ok(outcome);
            }
            match controller.find_record(kind, &id).await {
                Some(record) => {
                    println!("{}", render::record_json(&record)?);
                    Ok(Outcome::Succeeded)
                }
                None => bail!("no {} with id {}", kind.label().to_lowercase(), id),
            }
        }

        Command::Create {
            kind,
            fields,
            allow_empty,
        } => {
            let draft = fields::build_draft(kind, None, &fields)?;
            let missing = draft.missing_fields();
            if !missing.is_empty() && !allow_empty {
                bail!(
                    "required {} fields are blank: {} (pass --allow-empty to send anyway)",
                    kind.label().to_lowercase(),
                    missing.join(", ")
                );
            }
            Ok(controller.create(kind, &draft).await?)
        }

        Command::Update { kind, id, fields } => {
            let id = RecordId::new(id);
            let outcome = controller.select(kind).await;
            if !outcome.is_success() {
                return Ok(outcome);
            }
            let Some(record) = controller.find_record(kind, &id).await else {
                controller.cancel_edit().await;
                bail!("no {} with id {}", kind.label().to_lowercase(), id);
            };

            controller.begin_edit(kind, id.clone()).await?;
            let draft = match fields::build_draft(kind, Some(&record.to_draft()), &fields) {
                Ok(draft) => draft,
                Err(e) => {
                    controller.cancel_edit().await;
                    return Err(e);
                }
            };
            debug!("Updating {} {} with {:?}", kind.label(), id, draft);
            Ok(controller.update(kind, &id, &draft).await?)
        }

        Command::Delete { kind, id, yes } => {
            let id = RecordId::new(id);
            if !yes {
                let question = format!("Delete {} {}?", kind.label(), id);
                let confirmed =
                    prompt::confirm(&question, &mut io::stdin().lock(), &mut io::stderr())?;
                if !confirmed {
                    info!("Nothing deleted");
                    return Ok(Outcome::Succeeded);
                }
            }
            Ok(controller.remove(kind, &id).await?)
        }
    }
}

/// Prints the live notification, if any.
async fn report(controller: &SessionController) {
    if let Some(notification) = controller.notification().await {
        eprintln!("{}", render::notification_line(&notification));
    }
}
