//! Keyword Tables.
//!
//! Static trigger vocabularies used to classify task lines. Tables are kept as an
//! explicit ordered list so both the matched-keyword order and the scoring
//! tie-break are stable contracts rather than artefacts of map iteration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Urgency markers (drive priority, never a category)
const URGENT: &[&str] = &[
    "urgent", "asap", "sofort", "dringend", "wichtig", "deadline", "kritisch", "morgen", "heute",
    "eilig", "priority", "offen", "muss",
];

/// Appointments and meetings
const TERMINE: &[&str] = &[
    "termin",
    "meeting",
    "call",
    "besprechung",
    "datum",
    "uhr",
    "kick-off",
    "donnerstag",
    "freitag",
    "montag",
    "dienstag",
    "mittwoch",
    "samstag",
    "sonntag",
    "workshop",
    "konferenz",
    "presentation",
    "demo",
    "review",
    "vorstellung",
    "firma",
    "gespräch",
    "gespräche",
    "mitarbeiterversammlung",
    "wirtschaftsförderung",
    "akademie",
    "weiterbildung",
    "seminar",
];

/// Learning and research
const KNOWLEDGE: &[&str] = &[
    "lernen",
    "research",
    "studium",
    "wissen",
    "analyse",
    "workshop",
    "kurs",
    "lesen",
    "paper",
    "buch",
    "training",
    "fortbildung",
    "weiterbildung",
    "skill",
    "kompetenz",
    "expertise",
    "zertifikat",
    "iso",
    "iec",
    "standard",
    "spezialisierung",
    "orchestrierung",
    "bedienung",
    "governance",
    "prompting",
    "prompt",
    "automationen",
    "agentic ai",
    "agenten",
    "ki",
    "ai",
    "artificial intelligence",
    "machine learning",
    "ml",
];

/// Compliance, legal and operational risk
const RISK: &[&str] = &[
    "risiko",
    "risk",
    "gefahr",
    "problem",
    "compliance",
    "audit",
    "datenschutz",
    "gdpr",
    "legal",
    "regulatorisch",
    "bnetza",
    "gesetz",
    "verordnung",
    "haftung",
    "sicherheit",
    "vulnerability",
    "threat",
    "pain points",
    "problemfelder",
    "herausforderung",
    "schwierigkeit",
];

/// Business development and monetisation
const BUSINESS: &[&str] = &[
    "business",
    "idee",
    "plan",
    "beratung",
    "monetar",
    "einkommen",
    "kunde",
    "markt",
    "umsatz",
    "gewinn",
    "roi",
    "investment",
    "strategie",
    "marketing",
    "verkauf",
    "akquisition",
    "expansion",
    "anwendungsfälle",
    "controlling",
    "vertrieb",
    "abrechnung",
    "prozesse",
    "unternehmenskommunikation",
    "abteilungen",
    "priorisierung",
    "ansprechpartner",
    "beraterfirmen",
    "externe",
    "vorbereitung",
    "neuaufstellung",
    "leitfaden",
];

/// Onboarding chores. Not scored; only offered as phrasing hints.
const SETUP: &[&str] = &[
    "setup",
    "installation",
    "konfiguration",
    "laptop",
    "google konto",
    "checkliste",
    "formular",
    "anwendungsanweisung",
    "liste erstellen",
    "recherche",
    "abfrage",
];

/// Energy sector domain terms
const ENERGY: &[&str] = &[
    "energie",
    "strom",
    "gas",
    "stadtwerke",
    "smart grid",
    "renewable",
    "photovoltaik",
    "windkraft",
    "energieprognose",
    "netzbetrieb",
    "eeg",
    "kwk",
    "fernwärme",
    "blockchain",
    "e-mobility",
    "speicher",
    "wemag",
    "dotsource",
    "rostock",
    "innocampus",
];

/// Items surfaced as work-life balance entries
pub const WORK_LIFE_BALANCE_TERMS: &[&str] = &["mittag", "balance", "mitarbeiterversammlung"];

/// Items that lift the work-life integration metric
pub const WELLBEING_TERMS: &[&str] = &["yoga", "mindfulness", "balance", "mittag"];

/// Marks a deadline of tomorrow
pub const TOMORROW_TOKEN: &str = "morgen";

/// Marks an open / pending item
pub const OPEN_TOKEN: &str = "offen";

/// Name of a keyword table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableName {
    Urgent,
    Termine,
    Knowledge,
    Risk,
    Business,
    Setup,
    Energy,
}

impl TableName {
    pub fn label(&self) -> &'static str {
        match self {
            TableName::Urgent => "urgent",
            TableName::Termine => "termine",
            TableName::Knowledge => "knowledge",
            TableName::Risk => "risk",
            TableName::Business => "business",
            TableName::Setup => "setup",
            TableName::Energy => "energy",
        }
    }

    /// The scoring category this table feeds, if any
    pub fn scoring_category(&self) -> Option<ScoringCategory> {
        match self {
            TableName::Business => Some(ScoringCategory::Business),
            TableName::Risk => Some(ScoringCategory::Risk),
            TableName::Termine => Some(ScoringCategory::Termine),
            TableName::Knowledge => Some(ScoringCategory::Knowledge),
            TableName::Energy => Some(ScoringCategory::Energy),
            TableName::Urgent | TableName::Setup => None,
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Categories that compete for a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoringCategory {
    Business,
    Risk,
    Termine,
    Knowledge,
    Energy,
}

/// Tie-break order: on equal hit counts the earlier category wins.
pub const SCORING_ORDER: [ScoringCategory; 5] = [
    ScoringCategory::Business,
    ScoringCategory::Risk,
    ScoringCategory::Termine,
    ScoringCategory::Knowledge,
    ScoringCategory::Energy,
];

impl ScoringCategory {
    pub fn index(&self) -> usize {
        match self {
            ScoringCategory::Business => 0,
            ScoringCategory::Risk => 1,
            ScoringCategory::Termine => 2,
            ScoringCategory::Knowledge => 3,
            ScoringCategory::Energy => 4,
        }
    }
}

/// One named vocabulary of lowercase substrings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    pub name: TableName,
    pub keywords: Vec<String>,
}

impl KeywordTable {
    pub fn new<I, S>(name: TableName, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name,
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }

    /// Keywords contained in an already lowercased line, in table order
    pub fn hits<'a>(&'a self, lowered: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.keywords
            .iter()
            .map(String::as_str)
            .filter(move |k| lowered.contains(k))
    }

    /// Whether any keyword occurs in the text (case-insensitive)
    pub fn matches(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// Ordered set of keyword tables, treated as immutable configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTables {
    tables: Vec<KeywordTable>,
}

static DEFAULT_TABLES: LazyLock<KeywordTables> = LazyLock::new(|| {
    KeywordTables::new(vec![
        KeywordTable::new(TableName::Urgent, URGENT.iter().copied()),
        KeywordTable::new(TableName::Termine, TERMINE.iter().copied()),
        KeywordTable::new(TableName::Knowledge, KNOWLEDGE.iter().copied()),
        KeywordTable::new(TableName::Risk, RISK.iter().copied()),
        KeywordTable::new(TableName::Business, BUSINESS.iter().copied()),
        KeywordTable::new(TableName::Setup, SETUP.iter().copied()),
        KeywordTable::new(TableName::Energy, ENERGY.iter().copied()),
    ])
});

impl Default for KeywordTables {
    fn default() -> Self {
        DEFAULT_TABLES.clone()
    }
}

impl KeywordTables {
    /// Build from tables given in iteration order. A missing table behaves as empty.
    pub fn new(tables: Vec<KeywordTable>) -> Self {
        Self { tables }
    }

    /// Shared built-in vocabulary
    pub fn builtin() -> &'static KeywordTables {
        &DEFAULT_TABLES
    }

    /// Tables in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &KeywordTable> {
        self.tables.iter()
    }

    pub fn get(&self, name: TableName) -> Option<&KeywordTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Whether the text matches the named table; false if the table is absent
    pub fn matches(&self, name: TableName, text: &str) -> bool {
        self.get(name).is_some_and(|t| t.matches(text))
    }
}

/// Whether the lowercased text contains any of the given terms
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    terms.iter().any(|t| lowered.contains(t))
}
