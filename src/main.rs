use clap::Parser;
use pregnancy_tracker::config::toml_config::TrackerConfig;
use pregnancy_tracker::core::calculator::resolve_effective_lmp;
use pregnancy_tracker::core::service::{PregnancyOverview, TrackerService};
use pregnancy_tracker::core::timeline::{next_checkpoint, schedule_csv, week_schedule};
use pregnancy_tracker::core::{Clock, ConfigProvider, Storage};
use pregnancy_tracker::domain::model::{DevelopmentalMilestone, JourneyStatus};
use pregnancy_tracker::utils::error::{ErrorSeverity, Result};
use pregnancy_tracker::utils::{logger, validation::Validate};
use pregnancy_tracker::{CliConfig, FixedClock, LocalStorage, Settings, SystemClock};

fn main() {
    let cli = CliConfig::parse();

    // 載入 TOML 配置
    let file_config = match &cli.config {
        Some(path) => match TrackerConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    if cli.log_json || file_config.as_ref().is_some_and(|c| c.json_logging()) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pregnancy-tracker");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli, file_config.as_ref()) {
        tracing::error!(
            "❌ pregnancy-tracker failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig, file_config: Option<&TrackerConfig>) -> Result<()> {
    if let Some(config) = file_config {
        config.validate()?;
        tracing::info!("✅ Configuration loaded for {}", config.app.name);
    }

    let mut settings = Settings::from_config(file_config)?;
    cli.apply_to(&mut settings)?;
    settings.validate()?;

    let storage = LocalStorage::new(".".to_string());

    // 指定參考日期時固定「今天」，否則依設定時區讀取系統時間
    match cli.reference_date()? {
        Some(date) => execute(cli, &settings, &storage, FixedClock::new(date)),
        None => execute(
            cli,
            &settings,
            &storage,
            SystemClock::new(settings.utc_offset()),
        ),
    }
}

fn execute<C: Clock>(
    cli: &CliConfig,
    settings: &Settings,
    storage: &LocalStorage,
    clock: C,
) -> Result<()> {
    let service = TrackerService::from_config(settings, storage, clock)?;
    let json_output = settings.output_format() == "json";

    if let Some(week) = cli.requested_week()? {
        let milestone = service.week_info(Some(week));
        if json_output {
            println!("{}", serde_json::to_string_pretty(milestone)?);
        } else {
            print_milestone(milestone);
        }
        return Ok(());
    }

    let anchor = cli.anchor()?;
    let overview = service.overview(&anchor);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&overview)?);
    } else {
        print_overview(&overview);
    }

    if let Some(path) = settings.schedule_csv() {
        match resolve_effective_lmp(&anchor) {
            Some(lmp) => {
                let data = schedule_csv(&week_schedule(lmp))?;
                storage.write_file(path, &data)?;
                tracing::info!("📁 Week schedule saved to: {}", path);
                if !json_output {
                    println!("📁 Week schedule saved to: {}", path);
                }
            }
            None => tracing::warn!("No pregnancy date given, skipping week schedule export"),
        }
    }

    Ok(())
}

fn print_overview(overview: &PregnancyOverview) {
    println!("📋 Pregnancy Overview (as of {})", overview.reference_date);

    match &overview.state {
        Some(state) => {
            println!(
                "  Week {}, day {} - {}",
                state.week,
                state.day_of_week,
                state.trimester.name()
            );
            println!("  {}", state.trimester.message());
            println!("  Progress: {:.1}%", state.progress_percent);
            println!(
                "  Estimated due date: {} ({} days to go)",
                state.estimated_due_date, state.days_until_due
            );
            if let Some(next) = next_checkpoint(state) {
                println!("  Next milestone: week {} - {}", next.week, next.title);
            }
        }
        None => {
            println!("  ⚠️ Add your last menstrual period or due date to see pregnancy progress");
        }
    }

    if let Some(growth) = &overview.growth {
        println!(
            "🌱 Baby is about the size of a {} ({}, {})",
            growth.size_comparison, growth.approximate_weight, growth.approximate_length
        );
    }

    println!();
    print_milestone(&overview.milestone);

    if overview.state.is_some() {
        println!();
        println!("🗓️ Journey:");
        for checkpoint in &overview.journey {
            let marker = match checkpoint.status {
                JourneyStatus::Completed => "✅",
                JourneyStatus::Current => "👉",
                JourneyStatus::Upcoming => "⏳",
            };
            println!(
                "  {} Week {}: {} - {}",
                marker, checkpoint.week, checkpoint.title, checkpoint.description
            );
        }
    }
}

fn print_milestone(milestone: &DevelopmentalMilestone) {
    if milestone.week > 0 {
        println!("✨ Week {}: {}", milestone.week, milestone.title);
    } else {
        println!("✨ {}", milestone.title);
    }
    println!(
        "  Size: {}  Weight: {}  Length: {}",
        milestone.size_comparison, milestone.approximate_weight, milestone.approximate_length
    );
    for development in &milestone.key_developments {
        println!("  • {}", development);
    }
    println!("🤰 {}", milestone.maternal_changes);
    if !milestone.health_tips.is_empty() {
        println!("💡 Tips:");
        for tip in &milestone.health_tips {
            println!("  - {}", tip);
        }
    }
}
