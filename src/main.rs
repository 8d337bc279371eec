use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use autobackup::cli::{handle_config_command, handle_init_command, handle_trigger, Trigger, TriggerArgs};
use autobackup::config::paths::CONFIG_DIR_ENV;
use autobackup::config::{AutoBackupPaths, Settings};
use autobackup::logging::{self, LogSink, TracingSink, LOG_TAG};

#[derive(Parser)]
#[command(
    name = "autobackup",
    version,
    about = "Timestamped file backups triggered by editor events",
    long_about = "AutoBackup copies a file into a dated backup tree when it is opened \
                  or saved. Editor hooks call the matching subcommand; settings come \
                  from a per-platform JSON file in the config directory."
)]
struct Cli {
    /// Configuration directory holding the settings file
    #[arg(long, global = true, env = CONFIG_DIR_ENV)]
    config_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// A file was opened
    Load(TriggerArgs),

    /// A file is about to be saved (backs up only with --dirty)
    PreSave(TriggerArgs),

    /// A file was saved
    PostSave(TriggerArgs),

    /// Back up a file now, regardless of trigger settings
    #[command(alias = "backup")]
    Run(TriggerArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let paths = match cli.config_dir {
        Some(dir) => AutoBackupPaths::with_base_dir(dir),
        None => AutoBackupPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    tracing::debug!(settings_file = %paths.settings_file().display(), "settings loaded");

    let sink = TracingSink;

    match cli.command {
        Some(Commands::Load(args)) => run_trigger(Trigger::Load, &args, &settings, &sink)?,
        Some(Commands::PreSave(args)) => run_trigger(Trigger::PreSave, &args, &settings, &sink)?,
        Some(Commands::PostSave(args)) => run_trigger(Trigger::PostSave, &args, &settings, &sink)?,
        Some(Commands::Run(args)) => run_trigger(Trigger::Manual, &args, &settings, &sink)?,
        Some(Commands::Init) => handle_init_command(&paths)?,
        Some(Commands::Config) => handle_config_command(&paths, &settings)?,
        None => {
            println!("AutoBackup - timestamped file backups");
            println!();
            println!("Run 'autobackup --help' for usage information.");
            println!("Run 'autobackup init' to create a settings file.");
        }
    }

    Ok(())
}

fn run_trigger(
    trigger: Trigger,
    args: &TriggerArgs,
    settings: &Settings,
    sink: &dyn LogSink,
) -> Result<()> {
    sink.info(&format!("{} Plugin Initialized", LOG_TAG));
    handle_trigger(trigger, args, settings, sink)?;
    Ok(())
}
