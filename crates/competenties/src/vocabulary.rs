//! Fixed enumerations of the Open-ICT competency framework.
//!
//! These lists are the source of truth for filter validation. Membership is
//! exact and case-sensitive.

/// Student skills in the vaardigheden dataset.
pub const SKILLS: &[&str] = &[
    "Juiste kennis ontwikkelen",
    "Kwalitatief product maken",
    "Overzicht creëren",
    "Kritisch oordelen",
    "Samenwerken",
    "Boodschap delen",
    "Plannen",
    "Flexibel opstellen",
    "Pro-actief handelen",
    "Reflecteren",
];

/// Architecture layers in the HBO-I dataset.
pub const LAYERS: &[&str] = &[
    "Gebruikersinteractie",
    "Organisatieprocessen",
    "Infrastructuur",
    "Software",
    "Hardwareinterfacing",
];

/// Professional activities in the HBO-I dataset.
pub const ACTIVITIES: &[&str] = &[
    "Analyseren",
    "Adviseren",
    "Ontwerpen",
    "Realiseren",
    "Manage & Control",
];

/// Level keys as they appear in both datasets.
pub const LEVELS: &[&str] = &["1", "2", "3", "4"];

/// A filterable dimension of a competency dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Skill name (vaardigheden, outermost).
    Skill,
    /// Architecture layer (HBO-I, outermost).
    Layer,
    /// Professional activity (HBO-I, second).
    Activity,
    /// Proficiency level (both datasets, innermost).
    Level,
}

impl Dimension {
    /// The allowed keys for this dimension.
    pub fn values(&self) -> &'static [&'static str] {
        match self {
            Dimension::Skill => SKILLS,
            Dimension::Layer => LAYERS,
            Dimension::Activity => ACTIVITIES,
            Dimension::Level => LEVELS,
        }
    }

    /// Singular human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Skill => "skill",
            Dimension::Layer => "layer",
            Dimension::Activity => "activity",
            Dimension::Level => "level",
        }
    }

    /// Plural name, used when listing the valid values.
    pub fn plural(&self) -> &'static str {
        match self {
            Dimension::Skill => "skills",
            Dimension::Layer => "layers",
            Dimension::Activity => "activities",
            Dimension::Level => "levels",
        }
    }

    /// Error kind reported when a value is rejected for this dimension.
    pub fn invalid_kind(&self) -> &'static str {
        match self {
            Dimension::Skill => "InvalidSkill",
            Dimension::Layer => "InvalidLayer",
            Dimension::Activity => "InvalidActivity",
            Dimension::Level => "InvalidLevel",
        }
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, value: &str) -> bool {
        self.values().contains(&value)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
