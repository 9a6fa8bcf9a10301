use clap::{ArgAction, Parser};
use std::path::PathBuf;

mod config;
mod gesture;
mod ink;
mod trace;
mod util;

use ink::PathKind;

#[derive(Parser, Debug)]
#[command(name = "inkroute")]
#[command(
    version,
    about = "Pointer gesture router for freehand ink and erase annotation"
)]
struct Cli {
    /// Replay a JSON-lines pointer trace and print the resulting commands
    #[arg(long, short = 'r', value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Slop threshold in surface units (overrides the config file)
    #[arg(long, short = 's', value_name = "UNITS")]
    slop: Option<f64>,

    /// Initial interaction mode (draw or erase)
    #[arg(long, short = 'm', value_name = "MODE")]
    mode: Option<String>,

    /// Print only the replay summary, not each command
    #[arg(long, short = 'q', action = ArgAction::SetTrue)]
    quiet: bool,

    /// Create a default config file at ~/.config/inkroute/config.toml
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = config::Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    if let Some(trace_path) = &cli.replay {
        let config = config::Config::load()?;

        let slop = cli.slop.unwrap_or(config.gesture.slop);
        let mode = match &cli.mode {
            Some(name) => util::mode_from_name(name).unwrap_or_else(|| {
                log::warn!(
                    "Unknown mode '{}', using {:?}",
                    name,
                    config.gesture.default_mode
                );
                config.gesture.default_mode
            }),
            None => config.gesture.default_mode,
        };

        log::info!(
            "Replaying {} (slop: {:.1}, mode: {:?})",
            trace_path.display(),
            slop,
            mode
        );

        let records = trace::read_trace(trace_path)?;
        let summary = trace::replay(&records, slop, mode)?;

        if config.replay.print_commands && !cli.quiet {
            for command in &summary.commands {
                println!("{command}");
            }
        }

        let ink = summary
            .canvas
            .paths()
            .iter()
            .filter(|p| p.kind == PathKind::Ink)
            .count();
        let erase = summary.canvas.paths().len() - ink;

        println!(
            "Replayed {} records, emitted {} commands",
            records.len(),
            summary.commands.len()
        );
        println!(
            "Committed paths: {} ({} ink, {} erase)",
            summary.canvas.paths().len(),
            ink,
            erase
        );
        if summary.canvas.pending().is_some() {
            println!("Warning: trace ended with an uncommitted path");
        }
    } else {
        // No flags: show usage
        println!("inkroute: Pointer gesture router for freehand ink and erase annotation");
        println!();
        println!("Usage:");
        println!("  inkroute --replay <FILE>   Replay a JSON-lines pointer trace");
        println!("  inkroute --init-config     Create a default config file");
        println!("  inkroute --help            Show help");
        println!();
        println!("Replay options:");
        println!("  --slop <UNITS>    Override the configured slop threshold");
        println!("  --mode <MODE>     Initial mode: draw or erase");
        println!("  --quiet           Print only the summary");
        println!();
        println!("Trace format (one JSON record per line):");
        println!(r#"  {{"kind":"pointer","phase":"down","x":10.0,"y":10.0}}"#);
        println!(r#"  {{"kind":"pointer","phase":"move","x":20.0,"y":12.0}}"#);
        println!(r#"  {{"kind":"pointer","phase":"up","x":20.0,"y":12.0}}"#);
        println!(r#"  {{"kind":"mode","mode":"erase"}}"#);
    }

    Ok(())
}
