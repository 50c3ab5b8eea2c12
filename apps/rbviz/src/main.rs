use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rbviz_config::{RbvizConfig, RenderFormat, load_config, save_config};
use rbviz_core::RbTree;
use rbviz_layout::layout;
use rbviz_logging::{LogFormat, LogLevel};
use rbviz_ports::{Key, TreeRenderer};
use rbviz_render_json::{JsonRenderer, TreeSnapshot, write_snapshot};
use rbviz_render_text::{TextRenderer, render_inorder};
use rbviz_session::{Outcome, Report, Session};
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rbviz")]
#[command(about = "Build, check and draw red-black trees.", long_about = None)]
struct Cli {
    /// Config file (YAML, or JSON when it ends in .json).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Journal level on stderr: error, warn, info, debug or trace.
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,
    /// Journal format on stderr: plain, json or compact.
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Execute commands such as "insert 5" or "search 5", then draw the tree.
    Run {
        /// Commands to execute, in order, after any script.
        commands: Vec<String>,
        /// Script file: one command per line or separated by ';', '#' comments.
        #[arg(long)]
        script: Option<PathBuf>,
        /// text (default) or json.
        #[arg(long)]
        format: Option<RenderFormat>,
        /// Print status lines only.
        #[arg(long)]
        quiet: bool,
    },

    /// Read commands from stdin, one per line, until EOF or "quit".
    Repl {
        #[arg(long)]
        format: Option<RenderFormat>,
    },

    /// Print the canvas layout of a tree as JSON.
    Layout {
        /// Keys to insert, comma separated.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        keys: Vec<Key>,
        /// Key to flag as highlighted.
        #[arg(long, allow_hyphen_values = true)]
        highlight: Option<Key>,
    },

    /// Draw a tree built from keys.
    Show {
        /// Keys to insert, comma separated.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        keys: Vec<Key>,
        #[arg(long)]
        format: Option<RenderFormat>,
        /// Print the in-order listing instead of a drawing.
        #[arg(long)]
        inorder: bool,
        /// Save a JSON snapshot of the tree to this file instead of printing.
        #[arg(long, conflicts_with = "inorder")]
        out: Option<PathBuf>,
    },

    /// Write a config file with every default spelled out.
    Init {
        #[arg(default_value = "rbviz.yaml")]
        path: PathBuf,
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    match cli.cmd {
        Command::Run {
            commands,
            script,
            format,
            quiet,
        } => {
            let renderer = renderer_for(format.unwrap_or(config.render));
            let mut session = new_session(renderer.as_ref(), &config);

            let mut parts = Vec::with_capacity(commands.len() + 1);
            if let Some(path) = &script {
                parts.push(
                    std::fs::read_to_string(path).with_context(|| format!("read script {path:?}"))?,
                );
            }
            parts.extend(commands);
            let text = parts.join("\n");

            let outcome = session.run_script(&text);
            flush_journal(&mut session)?;
            for report in outcome? {
                print_report(&report);
            }
            if !quiet {
                print!("{}", session.render()?);
            }
            flush_journal(&mut session)?;
        }

        Command::Repl { format } => {
            let renderer = renderer_for(format.unwrap_or(config.render));
            let mut session = new_session(renderer.as_ref(), &config);
            println!("{}", session.ready_status());

            for line in std::io::stdin().lock().lines() {
                let line = line.context("read stdin")?;
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    continue;
                }
                if matches!(trimmed, "quit" | "exit") {
                    break;
                }
                match session.execute_line(trimmed) {
                    Ok(report) => print_report(&report),
                    Err(err) => eprintln!("error: {err:#}"),
                }
                flush_journal(&mut session)?;
            }
        }

        Command::Layout { keys, highlight } => {
            let tree = seeded_tree(&config, &keys);
            let placed = layout(&tree, &config.layout, highlight.as_ref());
            let json = serde_json::to_string_pretty(&placed).context("serialize layout")?;
            println!("{json}");
        }

        Command::Show {
            keys,
            format,
            inorder,
            out,
        } => {
            let tree = seeded_tree(&config, &keys);
            if let Some(path) = out {
                write_snapshot(&path, &TreeSnapshot::of(&tree, None))?;
                println!("Wrote {}", path.display());
            } else if inorder {
                println!("{}", render_inorder(&tree));
            } else {
                let renderer = renderer_for(format.unwrap_or(config.render));
                print!("{}", renderer.render(&tree, None)?);
            }
        }

        Command::Init { path, force } => {
            if path.exists() && !force {
                bail!("{path:?} already exists (use --force to overwrite)");
            }
            save_config(&config, &path)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

/// Config file (or defaults) with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<RbvizConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => default_config_path()
            .filter(|p| p.exists())
            .map(|p| load_config(&p))
            .transpose()?
            .unwrap_or_default(),
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    Ok(config)
}

/// `RBVIZ_CONFIG`, if set.
fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("RBVIZ_CONFIG").map(PathBuf::from)
}

fn renderer_for(format: RenderFormat) -> Box<dyn TreeRenderer> {
    match format {
        RenderFormat::Text => Box::new(TextRenderer),
        RenderFormat::Json => Box::new(JsonRenderer),
    }
}

fn new_session<'a>(renderer: &'a dyn TreeRenderer, config: &RbvizConfig) -> Session<'a> {
    let mut session = Session::new(renderer, config.logging.clone());
    session.seed(&config.seed);
    session
}

fn seeded_tree(config: &RbvizConfig, keys: &[Key]) -> RbTree<Key> {
    config.seed.iter().chain(keys).copied().collect()
}

fn print_report(report: &Report) {
    println!("{}", report.status);
    if let Outcome::Rendered(drawing) = &report.outcome {
        print!("{drawing}");
    }
}

fn flush_journal(session: &mut Session<'_>) -> Result<()> {
    for line in session.drain_log_lines()? {
        eprintln!("{line}");
    }
    Ok(())
}
