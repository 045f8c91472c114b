//! CLI entry point: load the flavor table and dispatch the subcommand.

use anyhow::Result;
use clap::Parser;

use crate::config::{Args, Command, Config};
use crate::flavor::{FlavorRecord, FlavorTable};

/// Run the flavor-config tool to completion.
pub fn run() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    let config = Config::from_args(&args)?;
    let table = load_table(&config)?;

    match &args.command {
        Command::List => list_flavors(&table, args.json)?,
        Command::Resolve { name } => resolve_flavor(&table, name, args.json)?,
        Command::Check => {
            // Integrity was checked while building the table; reaching this
            // point means the manifest is valid.
            println!(
                "ok: {} flavors in dimension '{}'",
                table.flavors().len(),
                table.dimension()
            );
        }
    }

    Ok(())
}

fn load_table(config: &Config) -> Result<FlavorTable> {
    match config.effective_manifest() {
        Some(path) => FlavorTable::load_from_path(&path),
        None => {
            log::debug!("no manifest found, using built-in declaration");
            Ok(FlavorTable::builtin())
        }
    }
}

fn list_flavors(table: &FlavorTable, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(table.flavors())?);
        return Ok(());
    }

    println!("dimension: {}", table.dimension());
    for record in table.flavors() {
        print_record(record);
    }

    Ok(())
}

fn resolve_flavor(table: &FlavorTable, name: &str, json: bool) -> Result<()> {
    let record = table.resolve(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print_record(record);
    }

    Ok(())
}

fn print_record(record: &FlavorRecord) {
    let display_name = record.display_name().unwrap_or("-");
    println!(
        "{}  dimension={}  application_id={}  display_name={}",
        record.name, record.dimension, record.application_id, display_name
    );
}
