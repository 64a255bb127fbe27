//! 以週數查詢的胎兒大小、體重與身長，僅作為顯示文字。

use crate::core::milestones::nearest_by_week;
use crate::domain::model::GrowthFigures;
use crate::domain::MAX_DISPLAY_WEEK;

const SIZE_COMPARISONS: [&str; 40] = [
    "poppy seed",
    "sesame seed",
    "apple seed",
    "blueberry",
    "sesame seed",
    "lentil",
    "blueberry",
    "kidney bean",
    "grape",
    "kumquat",
    "fig",
    "lime",
    "pea pod",
    "lemon",
    "apple",
    "avocado",
    "turnip",
    "bell pepper",
    "tomato",
    "banana",
    "carrot",
    "spaghetti squash",
    "mango",
    "corn",
    "rutabaga",
    "green onion",
    "cauliflower",
    "eggplant",
    "butternut squash",
    "cabbage",
    "coconut",
    "squash",
    "pineapple",
    "melon",
    "honeydew",
    "head of romaine",
    "swiss chard",
    "leek",
    "mini-watermelon",
    "pumpkin",
];

const WEIGHTS: &[(u32, &str)] = &[
    (8, "1g"),
    (12, "14g"),
    (16, "100g"),
    (20, "300g"),
    (24, "600g"),
    (28, "1kg"),
    (32, "1.7kg"),
    (36, "2.6kg"),
    (40, "3.4kg"),
];

const LENGTHS: &[(u32, &str)] = &[
    (8, "1.6cm"),
    (12, "5.4cm"),
    (16, "11.6cm"),
    (20, "16.4cm"),
    (24, "21cm"),
    (28, "37.6cm"),
    (32, "42.4cm"),
    (36, "47.4cm"),
    (40, "51.2cm"),
];

/// 第 1 到 40 週各一筆，其餘回傳 "growing baby"
pub fn size_comparison(week: u32) -> &'static str {
    week.checked_sub(1)
        .and_then(|index| SIZE_COMPARISONS.get(index as usize))
        .copied()
        .unwrap_or("growing baby")
}

pub fn approximate_weight(week: u32) -> &'static str {
    nearest_by_week(WEIGHTS, week, |&(w, _)| w).map_or("Not available", |&(_, weight)| weight)
}

pub fn approximate_length(week: u32) -> &'static str {
    nearest_by_week(LENGTHS, week, |&(w, _)| w).map_or("Not available", |&(_, length)| length)
}

pub fn growth_figures(week: u32) -> Option<GrowthFigures> {
    if !(1..=MAX_DISPLAY_WEEK).contains(&week) {
        return None;
    }

    Some(GrowthFigures {
        week,
        size_comparison: size_comparison(week),
        approximate_weight: approximate_weight(week),
        approximate_length: approximate_length(week),
    })
}
