use arm_migrate::output::{print_alerts, print_summary};
use arm_migrate::{generate, render, BuildMode, LogStatus, Selection, Settings};
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use std::path::{Path, PathBuf};

/// Generate a deployment template, copy manifest and instructions from a selection.
#[derive(Parser, Debug)]
#[command(name = "arm-migrate", version)]
struct Cli {
    /// Selection document (JSON)
    selection: PathBuf,

    /// Directory the output documents are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// `attach` copied disks or provision `empty` ones from images
    #[arg(long)]
    build_mode: Option<BuildMode>,

    /// log4rs configuration file
    #[arg(long, default_value = "log4rs.yml")]
    log_config: PathBuf,
}

fn init_logging(config: &Path) -> Result<(), Box<dyn Error>> {
    if log4rs::init_file(config, Default::default()).is_ok() {
        return Ok(());
    }
    let stdout = ConsoleAppender::builder().build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(&cli.log_config)?;

    let run_id = uuid::Uuid::new_v4();
    log::info!("#Start main() run={run_id} at {}", chrono::Local::now().to_rfc3339());

    let mut settings = Settings::from_env()?;
    if let Some(dir) = cli.output_dir {
        settings.output_directory = dir;
    }
    if let Some(build_mode) = cli.build_mode {
        settings.build_mode = build_mode;
    }

    let selection = Selection::load(&cli.selection)?;
    let generation = generate(&selection, &settings, run_id, &LogStatus);
    let rendered = render(&generation, &selection, &settings, &LogStatus)?;
    let written = rendered.write_to(&settings.output_directory)?;

    print_alerts(&generation.alerts);
    print_summary(&generation.summary(), &written);

    log::info!("#End main() run={run_id}");
    Ok(())
}
