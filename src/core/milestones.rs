use crate::domain::model::DevelopmentalMilestone;
use crate::domain::ports::Storage;
use crate::domain::MAX_DISPLAY_WEEK;
use crate::utils::error::{Result, TrackerError};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// 依週數排序的發育里程碑表，載入後不再變動
#[derive(Debug, Clone)]
pub struct MilestoneTable {
    entries: Vec<DevelopmentalMilestone>,
    placeholder: DevelopmentalMilestone,
}

#[derive(Debug, Deserialize)]
struct MilestoneFile {
    milestones: Vec<DevelopmentalMilestone>,
}

impl MilestoneTable {
    pub fn new(mut entries: Vec<DevelopmentalMilestone>) -> Result<Self> {
        if entries.is_empty() {
            return Err(TrackerError::MilestoneTableError {
                message: "table must contain at least one milestone".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if !(1..=MAX_DISPLAY_WEEK).contains(&entry.week) {
                return Err(TrackerError::MilestoneTableError {
                    message: format!(
                        "week {} is outside 1..={}",
                        entry.week, MAX_DISPLAY_WEEK
                    ),
                });
            }
            if !seen.insert(entry.week) {
                return Err(TrackerError::MilestoneTableError {
                    message: format!("week {} appears more than once", entry.week),
                });
            }
        }

        entries.sort_by_key(|entry| entry.week);

        Ok(Self {
            entries,
            placeholder: placeholder_milestone(),
        })
    }

    /// 從 TOML 字串載入（`[[milestones]]` 陣列）
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: MilestoneFile =
            toml::from_str(content).map_err(|e| TrackerError::MilestoneTableError {
                message: format!("TOML parsing error: {}", e),
            })?;
        Self::new(file.milestones)
    }

    pub fn load<S: Storage>(storage: &S, path: &str) -> Result<Self> {
        let bytes = storage.read_file(path)?;
        let content = String::from_utf8(bytes).map_err(|e| TrackerError::MilestoneTableError {
            message: format!("{} is not valid UTF-8: {}", path, e),
        })?;
        let table = Self::from_toml_str(&content)?;
        tracing::info!("Loaded {} milestones from {}", table.len(), path);
        Ok(table)
    }

    pub fn builtin() -> Self {
        builtin_table().clone()
    }

    /// 查詢某週的發育內容。
    ///
    /// 沒有完全相符的週數時取最接近的一筆，距離相同取較早的週。
    /// `None` 或超出 1..=42 時回傳提示用的預設內容。
    pub fn lookup(&self, week: Option<u32>) -> &DevelopmentalMilestone {
        match week {
            Some(week) if (1..=MAX_DISPLAY_WEEK).contains(&week) => {
                nearest_by_week(&self.entries, week, |entry| entry.week)
                    .unwrap_or(&self.placeholder)
            }
            _ => &self.placeholder,
        }
    }

    pub fn weeks(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|entry| entry.week)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 使用內建表查詢
pub fn lookup_milestone(week: Option<u32>) -> &'static DevelopmentalMilestone {
    builtin_table().lookup(week)
}

pub fn builtin_table() -> &'static MilestoneTable {
    static TABLE: OnceLock<MilestoneTable> = OnceLock::new();
    TABLE.get_or_init(|| MilestoneTable {
        entries: BUILTIN.iter().map(MilestoneSeed::to_milestone).collect(),
        placeholder: placeholder_milestone(),
    })
}

/// 在依週數排序的切片中找最接近 `week` 的項目，平手取較小的週
pub(crate) fn nearest_by_week<T>(items: &[T], week: u32, key: impl Fn(&T) -> u32) -> Option<&T> {
    match items.binary_search_by_key(&week, |item| key(item)) {
        Ok(index) => items.get(index),
        Err(index) => {
            let lower = index.checked_sub(1).and_then(|i| items.get(i));
            let upper = items.get(index);
            match (lower, upper) {
                (Some(lo), Some(hi)) => {
                    if week - key(lo) <= key(hi) - week {
                        Some(lo)
                    } else {
                        Some(hi)
                    }
                }
                (lo, hi) => lo.or(hi),
            }
        }
    }
}

fn placeholder_milestone() -> DevelopmentalMilestone {
    DevelopmentalMilestone {
        week: 0,
        title: "Set your due date to see development information".to_string(),
        size_comparison: "Not available".to_string(),
        approximate_weight: "Not available".to_string(),
        approximate_length: "Not available".to_string(),
        key_developments: vec![
            "Set your due date in profile to see development information".to_string(),
        ],
        maternal_changes: "Set your due date in profile to see maternal changes".to_string(),
        health_tips: vec!["Set your due date to get personalized tips".to_string()],
    }
}

struct MilestoneSeed {
    week: u32,
    title: &'static str,
    size_comparison: &'static str,
    approximate_weight: &'static str,
    approximate_length: &'static str,
    key_developments: &'static [&'static str],
    maternal_changes: &'static str,
    health_tips: &'static [&'static str],
}

impl MilestoneSeed {
    fn to_milestone(&self) -> DevelopmentalMilestone {
        DevelopmentalMilestone {
            week: self.week,
            title: self.title.to_string(),
            size_comparison: self.size_comparison.to_string(),
            approximate_weight: self.approximate_weight.to_string(),
            approximate_length: self.approximate_length.to_string(),
            key_developments: self.key_developments.iter().map(|s| s.to_string()).collect(),
            maternal_changes: self.maternal_changes.to_string(),
            health_tips: self.health_tips.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// 依週數遞增排列
const BUILTIN: &[MilestoneSeed] = &[
    MilestoneSeed {
        week: 4,
        title: "Implantation",
        size_comparison: "blueberry",
        approximate_weight: "Less than 1g",
        approximate_length: "0.1cm",
        key_developments: &[
            "Rapid cell division begins",
            "Implantation in uterus",
            "Placenta starts to form",
        ],
        maternal_changes: "You might not feel any changes yet, but amazing things are happening!",
        health_tips: &[
            "Take prenatal vitamins",
            "Stay hydrated",
            "Get plenty of rest",
            "Avoid harmful substances",
        ],
    },
    MilestoneSeed {
        week: 8,
        title: "Heartbeat",
        size_comparison: "kidney bean",
        approximate_weight: "1g",
        approximate_length: "1.6cm",
        key_developments: &[
            "Neural tube forms",
            "Heart begins to beat",
            "Major organs start developing",
        ],
        maternal_changes: "You may experience morning sickness, fatigue, and breast tenderness.",
        health_tips: &[
            "Eat small, frequent meals",
            "Book your first prenatal visit",
            "Rest when you feel tired",
        ],
    },
    MilestoneSeed {
        week: 12,
        title: "End of the First Trimester",
        size_comparison: "lime",
        approximate_weight: "14g",
        approximate_length: "5.4cm",
        key_developments: &[
            "Fingers and toes form",
            "Sex organs develop",
            "Reflexes begin",
        ],
        maternal_changes:
            "Morning sickness may improve, energy might return, and baby bump may start showing.",
        health_tips: &[
            "Eat small, frequent meals",
            "Continue prenatal vitamins",
            "Start maternity clothes",
            "Gentle exercise",
        ],
    },
    MilestoneSeed {
        week: 16,
        title: "Facial Expressions",
        size_comparison: "avocado",
        approximate_weight: "100g",
        approximate_length: "11.6cm",
        key_developments: &[
            "Muscles develop",
            "Baby can make faces",
            "Sucking reflex develops",
        ],
        maternal_changes: "Your energy is returning and the bump is becoming visible.",
        health_tips: &[
            "Keep up gentle exercise",
            "Add iron-rich foods to your meals",
            "Stay hydrated",
        ],
    },
    MilestoneSeed {
        week: 20,
        title: "Halfway There",
        size_comparison: "banana",
        approximate_weight: "300g",
        approximate_length: "16.4cm",
        key_developments: &[
            "Baby can hear sounds",
            "Regular sleep-wake cycles begin",
            "Vernix caseosa forms on skin",
        ],
        maternal_changes:
            "You may start feeling baby movements - those gentle flutters are your baby saying hello!",
        health_tips: &[
            "Attend your anatomy scan",
            "Practice gentle exercise",
            "Start planning your nursery",
            "Stay hydrated",
        ],
    },
    MilestoneSeed {
        week: 24,
        title: "Viability",
        size_comparison: "corn",
        approximate_weight: "600g",
        approximate_length: "21cm",
        key_developments: &["Lungs develop", "Taste buds form", "Rapid brain growth"],
        maternal_changes: "Your uterus is growing quickly and you may notice stretch marks.",
        health_tips: &[
            "Ask about the glucose screening test",
            "Moisturise your skin",
            "Sleep on your side",
        ],
    },
    MilestoneSeed {
        week: 28,
        title: "Third Trimester Begins",
        size_comparison: "eggplant",
        approximate_weight: "1kg",
        approximate_length: "37.6cm",
        key_developments: &[
            "Eyes can open",
            "Brain develops rapidly",
            "Baby can dream",
        ],
        maternal_changes:
            "You might experience back pain, shortness of breath, and more pronounced baby movements.",
        health_tips: &[
            "Monitor blood pressure",
            "Practice good posture",
            "Elevate feet when sitting",
            "Sleep on side",
        ],
    },
    MilestoneSeed {
        week: 30,
        title: "Growing Stronger",
        size_comparison: "cabbage",
        approximate_weight: "1.3kg",
        approximate_length: "40cm",
        key_developments: &[
            "Eyes can open and close",
            "Bone marrow makes red blood cells",
            "Lanugo hair begins to disappear",
        ],
        maternal_changes:
            "You might feel more pronounced movements and some discomfort as baby grows.",
        health_tips: &[
            "Practice relaxation techniques",
            "Prepare your hospital bag",
            "Rest when possible",
            "Monitor baby movements",
        ],
    },
    MilestoneSeed {
        week: 32,
        title: "Baby Positioning",
        size_comparison: "squash",
        approximate_weight: "1.7kg",
        approximate_length: "42.4cm",
        key_developments: &[
            "Baby may settle into head-down position",
            "Toenails and fingernails are complete",
            "Bones harden except the skull",
        ],
        maternal_changes: "Heartburn and trouble sleeping are common as baby takes up more room.",
        health_tips: &[
            "Eat smaller meals to ease heartburn",
            "Count daily kicks",
            "Attend childbirth classes",
        ],
    },
    MilestoneSeed {
        week: 36,
        title: "Almost Full Term",
        size_comparison: "head of romaine",
        approximate_weight: "2.6kg",
        approximate_length: "47.4cm",
        key_developments: &[
            "Lungs mature",
            "Fat layers build up",
            "Baby positions for birth",
        ],
        maternal_changes:
            "You may experience Braxton Hicks contractions, nesting instinct, and increased fatigue.",
        health_tips: &[
            "Pack hospital bag",
            "Practice breathing exercises",
            "Finalize birth plan",
            "Rest frequently",
        ],
    },
    MilestoneSeed {
        week: 40,
        title: "Due Date",
        size_comparison: "pumpkin",
        approximate_weight: "3.4kg",
        approximate_length: "51.2cm",
        key_developments: &[
            "Full term development",
            "Ready for birth",
            "All organs developed",
        ],
        maternal_changes: "Your body is getting ready for labour. Watch for regular contractions.",
        health_tips: &[
            "Know the signs of labour",
            "Keep your phone charged",
            "Call your clinician if movements slow down",
        ],
    },
];
