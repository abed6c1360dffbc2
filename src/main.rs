use anyhow::anyhow;
use clap::Parser;
use tracing::info;

use maghash::{build_table, disruption, init_logging, AssignmentReport, Settings};

/// Builds a Maglev lookup table for the given backends and prints the
/// resulting assignment.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Backend identifiers, in priority order.
    backends: Vec<String>,

    /// Lookup table size (prime, much larger than the backend count).
    #[arg(long, env = "MAGHASH_TABLE_SIZE")]
    table_size: Option<usize>,

    /// Print the full slot -> backend listing, not only the load summary.
    #[arg(long)]
    slots: bool,
}

fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_logging(&settings.log_level).map_err(|e| anyhow!("logging init failed: {e}"))?;

    let cli = Cli::parse();
    let table_size = cli.table_size.unwrap_or(settings.table_size);

    if cli.backends.is_empty() {
        return run_sample(table_size);
    }

    info!(backends = cli.backends.len(), table_size, "building table");
    let table = build_table(&cli.backends, table_size)?;

    if cli.slots {
        for (slot, backend) in table.assignments() {
            println!("{slot} | {backend}");
        }
    }
    print!("{}", AssignmentReport::new(&table));

    Ok(())
}

/// Без аргументов: показываем классическую пару наборов — и насколько
/// мало слотов переезжает при замене одного бекенда.
fn run_sample(table_size: usize) -> anyhow::Result<()> {
    let first = ["dip1", "dip2", "dip3", "dip4", "dip5"];
    let second = ["dip1", "dip2", "dip3", "dip4", "dip6"];

    let t1 = build_table(&first, table_size)?;
    let t2 = build_table(&second, table_size)?;

    print!("{}", AssignmentReport::new(&t1));
    println!();
    print!("{}", AssignmentReport::new(&t2));

    let d = disruption(&t1, &t2);
    println!();
    println!(
        "disruption after swapping one backend: {}/{} shared slots moved ({:.1}%)",
        d.moved_slots,
        d.shared_slots,
        d.fraction() * 100.0
    );

    Ok(())
}
