use crate::domain::nutrition::entities::{ImpactRule, Indicator, RuleColor, Tag};

const SIMPLE_SUGARS: ImpactRule = ImpactRule {
    deltas: &[(Indicator::HomaIr, 2), (Indicator::Triglycerides, 2)],
    color: Some(RuleColor::Red),
};

const REFINED: ImpactRule = ImpactRule {
    deltas: &[(Indicator::HomaIr, 1), (Indicator::Triglycerides, 1)],
    color: Some(RuleColor::Red),
};

const ALCOHOL: ImpactRule = ImpactRule {
    deltas: &[(Indicator::Triglycerides, 2), (Indicator::HomaIr, 1)],
    color: Some(RuleColor::Red),
};

const SATURATED_FAT: ImpactRule = ImpactRule {
    deltas: &[(Indicator::Ldl, 2), (Indicator::Triglycerides, 1)],
    color: Some(RuleColor::Red),
};

const FIBER: ImpactRule = ImpactRule {
    deltas: &[
        (Indicator::HomaIr, -1),
        (Indicator::Ldl, -1),
        (Indicator::Triglycerides, -1),
    ],
    color: Some(RuleColor::Green),
};

const OMEGA_3: ImpactRule = ImpactRule {
    deltas: &[(Indicator::Triglycerides, -2), (Indicator::Hdl, 1)],
    color: Some(RuleColor::Green),
};

const HEME_IRON: ImpactRule = ImpactRule {
    deltas: &[(Indicator::Ferritin, 2)],
    color: Some(RuleColor::Green),
};

const VITAMIN_C: ImpactRule = ImpactRule {
    deltas: &[(Indicator::Ferritin, 1)],
    color: Some(RuleColor::Green),
};

const VITAMIN_D_SOURCE: ImpactRule = ImpactRule {
    deltas: &[(Indicator::VitaminD, 1)],
    color: Some(RuleColor::Green),
};

impl Tag {
    pub fn impact_rule(&self) -> &'static ImpactRule {
        match self {
            Tag::SimpleSugars => &SIMPLE_SUGARS,
            Tag::Refined => &REFINED,
            Tag::Alcohol => &ALCOHOL,
            Tag::SaturatedFat => &SATURATED_FAT,
            Tag::Fiber => &FIBER,
            Tag::Omega3 => &OMEGA_3,
            Tag::HemeIron => &HEME_IRON,
            Tag::VitaminC => &VITAMIN_C,
            Tag::VitaminDSource => &VITAMIN_D_SOURCE,
        }
    }
}

/// Looks up the impact rule for a raw tag name.
pub fn lookup_impact(name: &str) -> Option<&'static ImpactRule> {
    name.parse::<Tag>().ok().map(|tag| tag.impact_rule())
}
