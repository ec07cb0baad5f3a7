use clap::Parser;
use ipv4_subnet_utils::cli::Args;
use ipv4_subnet_utils::run;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;
use std::path::Path;

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    init_logging()?;

    let args = Args::parse();
    log::info!("#Start main()");

    println!("{}", run(&args)?);
    Ok(())
}

/// log4rs from `SUBNET_LOG_CONFIG` or `log4rs.yml`, else warnings to stderr.
fn init_logging() -> Result<(), Box<dyn Error>> {
    let path = std::env::var("SUBNET_LOG_CONFIG").unwrap_or_else(|_| DEFAULT_LOG_CONFIG.into());
    if Path::new(&path).exists() {
        log4rs::init_file(&path, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
