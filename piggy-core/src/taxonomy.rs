//! Category taxonomy: keyword sets per category plus the priority order
//! that decides between categories matching the same description.
//!
//! The taxonomy is an immutable value. Build it once (from the built-in
//! table or from configuration) and pass it to the categorizer.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

use crate::error::{Error, Result};

/// Fallback category when no keyword matches
pub const OTHER: &str = "другое";

/// Built-in categories in priority order (highest first)
const BUILTIN: &[(&str, &[&str])] = &[
    (
        "зарплата и доходы",
        &["зарплата", "доход", "начисление", "стипендия", "премия", "зачисление", "прибыль"],
    ),
    (
        "продукты",
        &["продукты", "магазин", "продуктовый", "пятёрочка", "ярче", "мария", "магнит", "селф", "еда", "ларёк"],
    ),
    ("погашение кредита", &["кредит", "ипотека", "погашение", "процент"]),
    (
        "депозит/инвестиции",
        &["клиентов", "депозит", "инвестиции", "дивидент", "акция", "процент"],
    ),
    (
        "кафе и рестораны",
        &[
            "ресторан", "кафе", "обед", "фастфуд", "ужин", "завтрак", "кофейня", "пицца", "столовая",
            "доставка", "кухня",
        ],
    ),
    ("транспорт", &["такси", "автобус", "метро", "транспорт", "самолёт"]),
    ("налоги", &["налог", "фискальный", "налоги", "ндфл", "ндс", "пошлина"]),
    (
        "интернет и связь",
        &[
            "мобильный", "интернет", "мтс", "сервис", "сети", "телефон", "билайн", "мегафон", "tele2",
            "услуги",
        ],
    ),
    (
        "коммунальные услуги",
        &["комунальные", "свет", "коммуналка", "вода", "электричество", "газ", "мусор", "отопление"],
    ),
    (
        "здоровье",
        &["аптека", "лекарство", "медицин", "врач", "приём", "клиника", "таблетки", "мед", "доктор"],
    ),
    (
        "одежда",
        &["одежда", "обувь", "магазин одежды", "гардероб", "обувной", "аксессуары", "шоурум"],
    ),
    (
        "хобби и развлечения",
        &[
            "кино", "театр", "концерт", "игры", "кинотеатр", "фильм", "квест", "музыкальный", "standup",
            "афиша", "kassir", "читай", "книжный", "леонардо", "хобби", "творчество",
        ],
    ),
    (
        "образование",
        &["курс", "учеба", "школа", "университет", "репетитор", "урок", "образование"],
    ),
    (
        "спорт",
        &["спорт", "тренажёрка", "фитнес", "спортзал", "спортивный", "зал", "бассейн", "тренировка", "тренер"],
    ),
    (
        "услуги",
        &["услуги", "красоты", "парикмахерская", "салон", "ремонт", "мастер", "клининг"],
    ),
    (
        "маркетплейсы",
        &["маркетплейс", "маркет", "wildberries", "ozon", "озон", "вайлдберис"],
    ),
    (
        "подписки",
        &["подписка", "подписки", "плюс", "иви", "окко", "start", "музыка", "вк"],
    ),
    (
        "подарки",
        &["подарок", "поздравление", "праздник", "упаковка", "шары", "подарки"],
    ),
];

/// One category with its (lower-cased) keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRule {
    name: String,
    keywords: Vec<String>,
}

impl CategoryRule {
    fn normalized<S: AsRef<str>>(name: &str, keywords: &[S]) -> Self {
        let mut seen = HashSet::new();
        let keywords = keywords
            .iter()
            .map(|k| k.as_ref().to_lowercase())
            .filter(|k| seen.insert(k.clone()))
            .collect();
        Self {
            name: name.trim().to_string(),
            keywords,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if any keyword is a substring of `lowered` (already lower-cased)
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// True if any keyword is empty or blank, so the rule swallows
    /// (almost) every description
    pub fn is_catch_all(&self) -> bool {
        self.keywords.iter().any(|k| k.trim().is_empty())
    }
}

/// Immutable category taxonomy. Rules are stored in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Taxonomy {
    rules: Vec<CategoryRule>,
    other: String,
}

impl Taxonomy {
    /// The built-in Russian taxonomy
    pub fn builtin() -> Self {
        Self {
            rules: BUILTIN
                .iter()
                .map(|(name, keywords)| CategoryRule::normalized(name, keywords))
                .collect(),
            other: OTHER.to_string(),
        }
    }

    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::default()
    }

    pub fn from_config(config: &TaxonomyConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .other(&config.other)
            .allow_catch_all(config.allow_catch_all);
        for c in &config.categories {
            builder = builder.category(&c.name, &c.keywords);
        }
        builder.build()
    }

    /// Rules in priority order, highest first
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Category names in priority order
    pub fn priority(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    /// Name returned when nothing matches
    pub fn other(&self) -> &str {
        &self.other
    }

    pub fn get(&self, name: &str) -> Option<&CategoryRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Export as configuration (used to write a starter config file)
    pub fn to_config(&self) -> TaxonomyConfig {
        TaxonomyConfig {
            other: self.other.clone(),
            allow_catch_all: self.rules.iter().any(CategoryRule::is_catch_all),
            categories: self
                .rules
                .iter()
                .map(|r| CategoryConfig {
                    name: r.name.clone(),
                    keywords: r.keywords.clone(),
                })
                .collect(),
        }
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<TaxonomyConfig> for Taxonomy {
    type Error = Error;

    fn try_from(config: TaxonomyConfig) -> Result<Self> {
        Self::from_config(&config)
    }
}

/// Validating builder. Categories are added in priority order.
#[derive(Debug, Clone)]
pub struct TaxonomyBuilder {
    rules: Vec<CategoryRule>,
    other: String,
    allow_catch_all: bool,
}

impl Default for TaxonomyBuilder {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            other: OTHER.to_string(),
            allow_catch_all: false,
        }
    }
}

impl TaxonomyBuilder {
    pub fn category<S: AsRef<str>>(mut self, name: &str, keywords: &[S]) -> Self {
        self.rules.push(CategoryRule::normalized(name, keywords));
        self
    }

    pub fn other(mut self, name: &str) -> Self {
        self.other = name.trim().to_string();
        self
    }

    /// Permit empty keywords. A category holding one absorbs every
    /// description not claimed by a higher-priority category.
    pub fn allow_catch_all(mut self, allow: bool) -> Self {
        self.allow_catch_all = allow;
        self
    }

    pub fn build(self) -> Result<Taxonomy> {
        if self.other.is_empty() {
            return Err(Error::EmptyFallback);
        }

        let mut names = HashSet::new();
        for rule in &self.rules {
            if rule.name.is_empty() {
                return Err(Error::EmptyCategoryName);
            }
            if !names.insert(rule.name.as_str()) {
                return Err(Error::DuplicateCategory(rule.name.clone()));
            }
            if !self.allow_catch_all && rule.is_catch_all() {
                return Err(Error::EmptyKeyword {
                    category: rule.name.clone(),
                });
            }
        }

        if let Some(pos) = self.rules.iter().position(CategoryRule::is_catch_all) {
            let shadowed: Vec<&str> = self.rules[pos + 1..].iter().map(|r| r.name.as_str()).collect();
            warn!(
                category = %self.rules[pos].name,
                ?shadowed,
                fallback = %self.other,
                "catch-all category absorbs every unmatched description"
            );
        }

        Ok(Taxonomy {
            rules: self.rules,
            other: self.other,
        })
    }
}

/// Serializable taxonomy section of the configuration file.
/// Category order is the priority order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaxonomyConfig {
    pub other: String,
    pub allow_catch_all: bool,
    pub categories: Vec<CategoryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryConfig {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Taxonomy::builtin().to_config()
    }
}
