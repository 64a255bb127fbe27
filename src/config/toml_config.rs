use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{
    parse_utc_offset, validate_non_empty_string, validate_one_of, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

/// 預設為東非時間 (EAT)
pub const DEFAULT_UTC_OFFSET: &str = "+03:00";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub app: AppConfig,
    pub calendar: Option<CalendarConfig>,
    pub content: Option<ContentConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub utc_offset: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    pub milestones_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub schedule_csv: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

impl TrackerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrackerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TrackerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MILESTONES_FILE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TrackerError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn utc_offset(&self) -> &str {
        self.calendar
            .as_ref()
            .and_then(|c| c.utc_offset.as_deref())
            .unwrap_or(DEFAULT_UTC_OFFSET)
    }

    pub fn milestones_file(&self) -> Option<&str> {
        self.content.as_ref().and_then(|c| c.milestones_file.as_deref())
    }

    pub fn output_format(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .unwrap_or("text")
    }

    pub fn schedule_csv(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.schedule_csv.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TrackerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("app.name", &self.app.name)?;
        parse_utc_offset("calendar.utc_offset", self.utc_offset())?;
        if let Some(path) = self.milestones_file() {
            validate_path("content.milestones_file", path)?;
        }
        if let Some(path) = self.schedule_csv() {
            validate_path("output.schedule_csv", path)?;
        }
        validate_one_of("output.format", self.output_format(), &OUTPUT_FORMATS)?;
        Ok(())
    }
}
