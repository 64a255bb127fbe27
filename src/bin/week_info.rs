use clap::Parser;
use pregnancy_tracker::core::growth::growth_figures;
use pregnancy_tracker::core::milestones::MilestoneTable;
use pregnancy_tracker::utils::logger;
use pregnancy_tracker::LocalStorage;
use serde_json::json;

/// 以 JSON 輸出某一週的發育內容，供前端或其他服務呼叫
#[derive(Parser)]
#[command(name = "week-info")]
#[command(about = "Print week-by-week development content as JSON")]
struct Args {
    /// Pregnancy week (1-42)
    week: u32,

    /// TOML file with [[milestones]] entries; built-in table when omitted
    #[arg(long)]
    milestones: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let table = match &args.milestones {
        Some(path) => MilestoneTable::load(&LocalStorage::new(".".to_string()), path)?,
        None => MilestoneTable::builtin(),
    };

    let milestone = table.lookup(Some(args.week));
    tracing::debug!(
        "Week {} resolved to milestone week {}",
        args.week,
        milestone.week
    );

    let body = json!({
        "week": args.week,
        "milestone": milestone,
        "growth": growth_figures(args.week),
    });
    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}
