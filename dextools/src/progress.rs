use anyhow::Context;
use clap::Args;
use livingdex::{decode_file, parse_expected, Progress, SlotStatus};
use prettytable::{format, row, Table};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct Opts {
    #[arg(short, long)]
    pub sav: PathBuf,
    /// Format tag such as `gen3`. The format is detected when omitted.
    #[arg(short, long)]
    pub format: Option<String>,
    /// Checklist with one line of comma-separated slots per box.
    #[arg(short, long)]
    pub expected: PathBuf,
    #[arg(long)]
    pub json: bool,
}

pub fn run(opts: Opts) -> anyhow::Result<()> {
    print!("{}", report(&opts)?);
    Ok(())
}

pub fn report(opts: &Opts) -> anyhow::Result<String> {
    let checklist = std::fs::read_to_string(&opts.expected)
        .with_context(|| format!("Unable to read checklist {}", opts.expected.display()))?;
    let expected = parse_expected(&checklist);
    let decoded = decode_file(&opts.sav, opts.format.as_deref())
        .with_context(|| format!("Unable to decode {}", opts.sav.display()))?;

    let progress = Progress::compute(&expected, &decoded.boxes);
    log::info!(
        "{}: {} of {} caught",
        opts.sav.display(),
        progress.caught,
        progress.total
    );

    if opts.json {
        return Ok(serde_json::to_string_pretty(&progress)? + "\n");
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["BOX", "SLOT", "EXPECTED", "STATUS"]);
    for (box_index, statuses) in progress.boxes.iter().enumerate() {
        for (slot, status) in statuses.iter().enumerate() {
            let status = match status {
                SlotStatus::Filler | SlotStatus::Caught => continue,
                SlotStatus::Missing => "missing".to_owned(),
                SlotStatus::Wrong { found } => format!("wrong: {found}"),
            };
            table.add_row(row![
                box_index + 1,
                slot + 1,
                expected[box_index][slot],
                status
            ]);
        }
    }

    Ok(format!(
        "{}Caught {} of {} ({})\n",
        table,
        progress.caught,
        progress.total,
        decoded.format
    ))
}
