#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{parse_utc_offset, validate_one_of, validate_path, Validate};
use chrono::{FixedOffset, Offset, Utc};
use toml_config::{TrackerConfig, DEFAULT_UTC_OFFSET, OUTPUT_FORMATS};

/// 合併設定檔與命令列後的最終設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub utc_offset: FixedOffset,
    pub milestones_file: Option<String>,
    pub output_format: String,
    pub schedule_csv: Option<String>,
    pub json_logging: bool,
}

impl Settings {
    pub fn from_config(config: Option<&TrackerConfig>) -> Result<Self> {
        let offset = config.map_or(DEFAULT_UTC_OFFSET, |c| c.utc_offset());

        Ok(Self {
            utc_offset: parse_utc_offset("calendar.utc_offset", offset)?,
            milestones_file: config.and_then(|c| c.milestones_file()).map(str::to_string),
            output_format: config.map_or("text", |c| c.output_format()).to_string(),
            schedule_csv: config.and_then(|c| c.schedule_csv()).map(str::to_string),
            json_logging: config.is_some_and(|c| c.json_logging()),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            utc_offset: FixedOffset::east_opt(3 * 3600).unwrap_or(Utc.fix()),
            milestones_file: None,
            output_format: "text".to_string(),
            schedule_csv: None,
            json_logging: false,
        }
    }
}

impl ConfigProvider for Settings {
    fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    fn milestones_file(&self) -> Option<&str> {
        self.milestones_file.as_deref()
    }

    fn output_format(&self) -> &str {
        &self.output_format
    }

    fn schedule_csv(&self) -> Option<&str> {
        self.schedule_csv.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_one_of("output.format", &self.output_format, &OUTPUT_FORMATS)?;
        if let Some(path) = &self.milestones_file {
            validate_path("content.milestones_file", path)?;
        }
        if let Some(path) = &self.schedule_csv {
            validate_path("output.schedule_csv", path)?;
        }
        Ok(())
    }
}
