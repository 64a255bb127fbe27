use crate::domain::model::Account;
use crate::utils::error::Result;
use chrono::{FixedOffset, NaiveDate};

/// 「今天」的來源。每次操作只讀取一次
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn utc_offset(&self) -> FixedOffset;
    fn milestones_file(&self) -> Option<&str>;
    fn output_format(&self) -> &str;
    fn schedule_csv(&self) -> Option<&str>;
}

/// 帳號存放處。`insert` 必須是全有或全無，使用者名稱與 e-mail（不分大小寫）皆不可重複
pub trait ProfileRepository: Send + Sync {
    fn insert(&self, account: Account) -> Result<()>;
    fn find(&self, username: &str) -> Result<Option<Account>>;
    fn list(&self) -> Result<Vec<Account>>;
}
