use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Language {
    #[serde(rename = "en")]
    #[value(name = "en")]
    English,
    #[default]
    #[serde(rename = "ku")]
    #[value(name = "ku")]
    Kurdish,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Kurdish,
            Language::Kurdish => Language::English,
        }
    }

    pub fn labels(self) -> &'static Labels {
        match self {
            Language::English => &ENGLISH,
            Language::Kurdish => &KURDISH,
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Language::Kurdish
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HourCycle {
    #[default]
    H12,
    H24,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Today,
    All,
    Month,
    Ramadan,
}

/// Fixed UI strings for one language.
#[derive(Debug)]
pub struct Labels {
    pub title: &'static str,
    pub today: &'static str,
    pub next_prayer: &'static str,
    pub remaining: &'static str,
    pub see_all: &'static str,
    pub show_today: &'static str,
    pub month: &'static str,
    pub ramadan: &'static str,
    pub date: &'static str,
    pub tomorrow: &'static str,
    pub no_today: &'static str,
    pub placeholder: &'static str,
    pub switch_to: &'static str,
}

static ENGLISH: Labels = Labels {
    title: "Hawler Prayer Times",
    today: "Today",
    next_prayer: "Next Prayer",
    remaining: "Remaining",
    see_all: "See All Days",
    show_today: "Show Today Only",
    month: "Month",
    ramadan: "Ramadan",
    date: "Date",
    tomorrow: "Tomorrow",
    no_today: "No times for today",
    placeholder: "---",
    switch_to: "کوردی",
};

static KURDISH: Labels = Labels {
    title: "کاتی بانگەواز - ھەولێر",
    today: "ئەمڕۆ",
    next_prayer: "بانگەوازی داهاتوو",
    remaining: "کاتی ماوە",
    see_all: "بینینی هەموو ڕۆژەکان",
    show_today: "تەنها ئەمڕۆ",
    month: "مانگ",
    ramadan: "ڕەمەزان",
    date: "بەروار",
    tomorrow: "سەرەتاوە",
    no_today: "کاتی ئەمڕۆ نییە",
    placeholder: "---",
    switch_to: "English",
};
