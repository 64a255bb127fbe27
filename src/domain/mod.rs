// Domain layer: value objects and ports. No I/O here.

pub mod model;
pub mod ports;

/// 足月天數：預產期 = 末次月經 + 280 天
pub const FULL_TERM_DAYS: u64 = 280;

/// 進度百分比的分母固定為 40 週
pub const FULL_TERM_WEEKS: u32 = 40;

/// 顯示用上限，超過 42 週一律顯示為 42
pub const MAX_DISPLAY_WEEK: u32 = 42;
