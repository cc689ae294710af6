use anyhow::Result;
use colored::Colorize;
use log::{error, info};

use unameit::prelude::*;

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = get_options();

    init_logger(options.level, &options.log_file, options.use_stdout)?;
    info!("Starting unameit {}", version());

    let groups = read(&options.configs)?;
    report_groups(&groups);

    Ok(())
}

fn report_groups(groups: &[Group]) {
    if groups.is_empty() {
        info!("No configuration groups found");
        return;
    }

    for group in groups {
        let keys: Vec<&str> = group.keys().collect();
        let plain = format!("{}: {}", group.name(), keys.join(", "));
        let colored = format!("{}: {}", group.name().bold(), keys.join(", "));
        println!("{}", format_message(&plain, &colored));
        info!("Loaded {group} with {} keys", keys.len());
    }
}
