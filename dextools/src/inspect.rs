use anyhow::Context;
use clap::Args;
use livingdex::{decode_file, Decoded, SlotValue};
use prettytable::{format, row, Table};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct Opts {
    #[arg(short, long)]
    pub sav: PathBuf,
    /// Format tag such as `gen3`. The format is detected when omitted.
    #[arg(short, long)]
    pub format: Option<String>,
    /// Also list empty slots.
    #[arg(long)]
    pub all: bool,
    #[arg(long)]
    pub json: bool,
}

pub fn run(opts: Opts) -> anyhow::Result<()> {
    print!("{}", report(&opts)?);
    Ok(())
}

pub fn report(opts: &Opts) -> anyhow::Result<String> {
    let decoded = decode_file(&opts.sav, opts.format.as_deref())
        .with_context(|| format!("Unable to decode {}", opts.sav.display()))?;
    log::info!(
        "Decoded {} as {} with {} boxes",
        opts.sav.display(),
        decoded.format,
        decoded.boxes.len()
    );

    if opts.json {
        return Ok(serde_json::to_string_pretty(&decoded)? + "\n");
    }
    Ok(box_table(&decoded, opts.all).to_string())
}

fn box_table(decoded: &Decoded, all: bool) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["BOX", "SLOT", "CONTENT", "NAME"]);

    for (box_index, pc_box) in decoded.boxes.iter().enumerate() {
        for (slot, value) in pc_box.iter().enumerate() {
            if value.is_empty() && !all {
                continue;
            }
            let name = match value {
                SlotValue::Species(species) => species.display_name(),
                SlotValue::Egg => "Egg".to_owned(),
                SlotValue::Unknown => "???".to_owned(),
                SlotValue::Empty => String::new(),
            };
            table.add_row(row![box_index + 1, slot + 1, value, name]);
        }
    }
    table
}
