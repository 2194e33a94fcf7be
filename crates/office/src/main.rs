//! virtual-office CLI
//!
//! Drives the office scene headlessly: inspect and move objects, save,
//! export, import and reset the layout, and talk to the teammates' agents.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::Vec3;
use virtual_office_lib::agent::AgentId;
use virtual_office_lib::command::execute_json;
use virtual_office_lib::state::{AppSettings, EmbedSlot, ImportOutcome, OfficeSession};

#[derive(Parser)]
#[command(name = "virtual-office")]
#[command(about = "Headless virtual office: scene layout persistence and teammate agents", long_about = None)]
struct Cli {
    /// Directory holding saved scene data (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every object and where the layout came from
    Show,
    /// Change an object's transform
    Move {
        id: String,
        /// New position as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        position: Option<Vec3>,
        /// New rotation in radians as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        rotation: Option<Vec3>,
        /// New scale as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        scale: Option<Vec3>,
        /// Save the layout afterwards
        #[arg(long)]
        save: bool,
    },
    /// Save the current layout
    Save,
    /// Write the layout to virtual-office-scene.json
    Export {
        /// Target directory (default: current directory)
        #[arg(long, conflicts_with = "dialog")]
        out: Option<PathBuf>,
        /// Choose the location with a file dialog
        #[arg(long)]
        dialog: bool,
    },
    /// Replace the saved layout with a file's contents
    Import {
        #[arg(required_unless_present = "dialog", conflicts_with = "dialog")]
        file: Option<PathBuf>,
        /// Choose the file with a file dialog
        #[arg(long)]
        dialog: bool,
    },
    /// Forget the saved layout and return to the default arrangement
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show, set or clear the embed URL of the AL or AD panel
    EmbedUrl {
        #[arg(value_parser = parse_slot)]
        slot: EmbedSlot,
        url: Option<String>,
        #[arg(long, conflicts_with = "url")]
        clear: bool,
    },
    /// Send a message to an agent (al, ad, manager, alex, sara, kevin, julia)
    Chat {
        #[arg(value_parser = parse_agent)]
        agent: AgentId,
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },
    /// Run a JSON command (or an array of commands)
    Exec { json: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "virtual_office=info,virtual_office_lib=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = AppSettings::load();
    if let Some(dir) = cli.data_dir {
        settings.data_dir = Some(dir);
    }
    let mut session = OfficeSession::open(settings);

    match cli.command {
        Commands::Show => show(&session),
        Commands::Move {
            id,
            position,
            rotation,
            scale,
            save,
        } => {
            session
                .scene
                .set_transform(&id, position, rotation, scale)
                .with_context(|| format!("Cannot move '{id}'"))?;
            if let Some(object) = session.scene.get(&id) {
                println!(
                    "{id}: position {} rotation {} scale {}",
                    fmt_vec3(object.position()),
                    fmt_vec3(object.rotation()),
                    fmt_vec3(object.scale())
                );
            }
            if save {
                session.save_scene().context("Save failed")?;
                println!("Saved layout");
            }
        }
        Commands::Save => {
            session.save_scene().context("Save failed")?;
            println!("Saved {} objects", session.scene.objects.len());
        }
        Commands::Export { out, dialog } => {
            if dialog {
                match session.export_scene_with_dialog().await? {
                    Some(path) => println!("Exported to {}", path.display()),
                    None => println!("Export cancelled"),
                }
            } else {
                let dir = match out {
                    Some(dir) => dir,
                    None => std::env::current_dir()?,
                };
                let path = session.export_scene(&dir)?;
                println!("Exported to {}", path.display());
            }
        }
        Commands::Import { file, dialog } => {
            let outcome = match (file, dialog) {
                (_, true) => session.import_scene_with_dialog().await,
                (Some(path), false) => session.import_scene(&path).await,
                (None, false) => anyhow::bail!("No file given"),
            };
            match outcome? {
                ImportOutcome::Delivered => println!("Imported layout saved; it applies on next start"),
                ImportOutcome::Cancelled => println!("Import cancelled"),
                ImportOutcome::Busy => anyhow::bail!("Another import is in progress"),
                ImportOutcome::Failed => anyhow::bail!("Import failed; saved layout unchanged"),
            }
        }
        Commands::Reset { yes } => {
            if !yes && !confirm("Reset the scene to the default layout? This cannot be undone.")? {
                println!("Reset cancelled");
                return Ok(());
            }
            let pending = session.reset_scene();
            let source = session.finish_reset(pending);
            println!("Scene reset ({source:?} layout)");
        }
        Commands::EmbedUrl { slot, url, clear } => {
            if clear {
                session.clear_embed_url(slot)?;
                println!("Cleared {slot} embed URL");
            } else if let Some(url) = url {
                session.set_embed_url(slot, &url)?;
                println!("Set {slot} embed URL");
            } else {
                match session.store.embed_url(slot) {
                    Some(url) => println!("{url}"),
                    None => println!("No {slot} embed URL set"),
                }
            }
        }
        Commands::Chat { agent, message } => {
            let text = message.join(" ");
            if let Some(reply) = session.send_message(agent, &text).await {
                println!("{}: {reply}", agent.profile().name);
            }
            if let Some(url) = session.embed_panel_for(agent) {
                println!("[panel] {url}");
            }
        }
        Commands::Exec { json } => {
            if json.trim_start().starts_with('[') {
                let responses = virtual_office_lib::command::execute_json_batch(&mut session, &json)
                    .map_err(anyhow::Error::msg)?;
                println!("{}", serde_json::to_string_pretty(&responses)?);
            } else {
                let response = execute_json(&mut session, &json).map_err(anyhow::Error::msg)?;
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
    }

    Ok(())
}

fn show(session: &OfficeSession) {
    println!(
        "{} objects ({:?} layout)",
        session.scene.objects.len(),
        session.scene.layout_source()
    );
    for object in session.scene.objects.iter() {
        println!(
            "  {:<22} {:<9} pos {}",
            object.id(),
            object.kind().as_str(),
            fmt_vec3(object.position())
        );
    }
}

fn fmt_vec3(v: Vec3) -> String {
    format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z)
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid number in '{s}': {e}"))?;
    match parts.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        _ => Err(format!("expected x,y,z but got '{s}'")),
    }
}

fn parse_slot(s: &str) -> Result<EmbedSlot, String> {
    EmbedSlot::parse(s).ok_or_else(|| format!("unknown slot '{s}' (expected al or ad)"))
}

fn parse_agent(s: &str) -> Result<AgentId, String> {
    AgentId::parse(s).ok_or_else(|| format!("unknown agent '{s}'"))
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
