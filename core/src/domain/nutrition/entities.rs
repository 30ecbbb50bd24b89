use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Nutritional impact label attached to a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Tag {
    #[serde(rename = "azucares_simples")]
    SimpleSugars,
    #[serde(rename = "refinados")]
    Refined,
    #[serde(rename = "alcohol")]
    Alcohol,
    #[serde(rename = "grasas_saturadas")]
    SaturatedFat,
    #[serde(rename = "fibra")]
    Fiber,
    #[serde(rename = "omega_3")]
    Omega3,
    #[serde(rename = "hierro_hemo")]
    HemeIron,
    #[serde(rename = "vitamina_c")]
    VitaminC,
    #[serde(rename = "vitamina_d_fuente")]
    VitaminDSource,
}

impl Tag {
    pub const ALL: [Tag; 9] = [
        Tag::SimpleSugars,
        Tag::Refined,
        Tag::Alcohol,
        Tag::SaturatedFat,
        Tag::Fiber,
        Tag::Omega3,
        Tag::HemeIron,
        Tag::VitaminC,
        Tag::VitaminDSource,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::SimpleSugars => "azucares_simples",
            Tag::Refined => "refinados",
            Tag::Alcohol => "alcohol",
            Tag::SaturatedFat => "grasas_saturadas",
            Tag::Fiber => "fibra",
            Tag::Omega3 => "omega_3",
            Tag::HemeIron => "hierro_hemo",
            Tag::VitaminC => "vitamina_c",
            Tag::VitaminDSource => "vitamina_d_fuente",
        }
    }

    /// Tag name with underscores replaced by spaces, as used in narration.
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tag '{0}'")]
pub struct UnknownTag(pub String);

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

/// Deduplicated set of tags that keeps first-seen order. Equality ignores order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct TagSet(Vec<Tag>);

impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|tag| other.contains(tag))
    }
}

impl Eq for TagSet {}

impl From<Vec<Tag>> for TagSet {
    fn from(tags: Vec<Tag>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<Tag> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}

impl TagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, tag: Tag) -> bool {
        if self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.iter().copied()
    }

    /// Parses tag names, silently dropping the ones outside the vocabulary.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter_map(|name| match name.as_ref().trim().parse::<Tag>() {
                Ok(tag) => Some(tag),
                Err(e) => {
                    tracing::debug!("ignoring {}", e);
                    None
                }
            })
            .collect()
    }

    /// Comma-joined tag names, the form used by the CSV export.
    pub fn join(&self) -> String {
        self.0
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<T: IntoIterator<Item = Tag>>(iter: T) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl<const N: usize> From<[Tag; N]> for TagSet {
    fn from(tags: [Tag; N]) -> Self {
        tags.into_iter().collect()
    }
}

/// Lab indicators tracked by the impact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indicator {
    HomaIr,
    Triglycerides,
    Ldl,
    Hdl,
    Ferritin,
    VitaminD,
}

impl Indicator {
    /// Narration order.
    pub const ALL: [Indicator; 6] = [
        Indicator::HomaIr,
        Indicator::Triglycerides,
        Indicator::Ldl,
        Indicator::Hdl,
        Indicator::Ferritin,
        Indicator::VitaminD,
    ];

    pub fn rise_phrase(&self) -> &'static str {
        match self {
            Indicator::HomaIr => "↑ resistencia a la insulina (HOMA-IR)",
            Indicator::Triglycerides => "↑ triglicéridos",
            Indicator::Ldl => "↑ LDL",
            Indicator::Hdl => "↑ HDL",
            Indicator::Ferritin => "↑ ferritina",
            Indicator::VitaminD => "↑ vitamina D",
        }
    }
}

/// Coarse colour class declared by an impact rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleColor {
    Red,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactRule {
    pub deltas: &'static [(Indicator, i32)],
    pub color: Option<RuleColor>,
}

impl ImpactRule {
    /// Delta for an indicator, zero when the rule does not mention it.
    pub fn delta(&self, indicator: Indicator) -> i32 {
        self.deltas
            .iter()
            .find(|(i, _)| *i == indicator)
            .map(|(_, d)| *d)
            .unwrap_or(0)
    }

    pub fn score(&self) -> i32 {
        self.delta(Indicator::HomaIr)
            + self.delta(Indicator::Triglycerides)
            + self.delta(Indicator::Ldl)
            - self.delta(Indicator::Hdl)
    }
}

/// Traffic-light classification of a meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TrafficLight {
    #[serde(rename = "🔴")]
    Red,
    #[serde(rename = "🟡")]
    Yellow,
    #[serde(rename = "🟢")]
    Green,
}

impl TrafficLight {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLight::Red => "🔴",
            TrafficLight::Yellow => "🟡",
            TrafficLight::Green => "🟢",
        }
    }
}

impl fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference lab values for the modelled patient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientBaseline {
    /// ng/mL
    pub ferritin: f64,
    /// ng/mL
    pub vitamin_d: f64,
    pub homa_ir: f64,
    /// mg/dL
    pub ldl: f64,
    /// mg/dL
    pub hdl: f64,
    /// mg/dL
    pub triglycerides: f64,
}

impl Default for PatientBaseline {
    fn default() -> Self {
        Self {
            ferritin: 10.5,
            vitamin_d: 25.4,
            homa_ir: 4.6,
            ldl: 97.0,
            hdl: 39.0,
            triglycerides: 193.0,
        }
    }
}
