use crate::domain::nutrition::entities::{
    Indicator, PatientBaseline, RuleColor, Tag, TagSet, TrafficLight,
};

pub const UNCERTAIN_IMPACT: &str = "Impacto incierto (etiquetas vacías).";
pub const DEFAULT_RECOMMENDATION: &str = "Mantener equilibrio y porciones moderadas.";

/// Classifies a tag set into a traffic light.
///
/// Red needs a red contributor and a score of at least 2. Green needs a green
/// contributor, a non-positive score and no red contributor at all. Anything
/// else is yellow.
pub fn classify_color(tags: &TagSet) -> TrafficLight {
    let mut score = 0;
    let mut has_red = false;
    let mut has_green = false;

    for tag in tags.iter() {
        let rule = tag.impact_rule();
        score += rule.score();
        match rule.color {
            Some(RuleColor::Red) => has_red = true,
            Some(RuleColor::Green) => has_green = true,
            None => {}
        }
    }

    if has_red && score >= 2 {
        TrafficLight::Red
    } else if has_green && score <= 0 && !has_red {
        TrafficLight::Green
    } else {
        TrafficLight::Yellow
    }
}

/// Explains which indicators each tag raises.
pub fn impact_text(tags: &TagSet) -> String {
    let clauses: Vec<String> = tags
        .iter()
        .filter_map(|tag| {
            let rule = tag.impact_rule();
            let phrases: Vec<&str> = Indicator::ALL
                .iter()
                .filter(|indicator| rule.delta(**indicator) > 0)
                .map(|indicator| indicator.rise_phrase())
                .collect();

            if phrases.is_empty() {
                None
            } else {
                Some(format!("{}: {}", tag.label(), phrases.join(", ")))
            }
        })
        .collect();

    if clauses.is_empty() {
        UNCERTAIN_IMPACT.to_string()
    } else {
        clauses.join("; ")
    }
}

struct AdviceRule {
    applies: fn(&TagSet, &PatientBaseline) -> bool,
    advice: &'static str,
}

const ADVICE_RULES: &[AdviceRule] = &[
    AdviceRule {
        applies: |tags, _| tags.contains(Tag::Alcohol) || tags.contains(Tag::SimpleSugars),
        advice: "Preferir agua/soda sin azúcar o versión sin alcohol.",
    },
    AdviceRule {
        applies: |tags, _| tags.contains(Tag::SaturatedFat),
        advice: "Elegir cortes magros y métodos con menos grasa.",
    },
    AdviceRule {
        applies: |tags, _| !tags.contains(Tag::Fiber),
        advice: "Agregar ensalada/verduras o legumbres para subir fibra.",
    },
    AdviceRule {
        applies: |tags, _| tags.contains(Tag::HemeIron) && !tags.contains(Tag::VitaminC),
        advice: "Acompañar con vitamina C (limón, tomate) para absorber hierro.",
    },
    AdviceRule {
        applies: |tags, baseline| tags.contains(Tag::Omega3) && baseline.triglycerides > 150.0,
        advice: "Bueno para triglicéridos; 2-3 veces/semana.",
    },
    AdviceRule {
        applies: |tags, baseline| tags.contains(Tag::VitaminDSource) && baseline.vitamin_d < 30.0,
        advice: "Suma a vitamina D; considerar exposición solar segura o suplemento médico.",
    },
];

/// Concatenates the advice of every rule that holds, in declaration order.
pub fn recommendation(tags: &TagSet, baseline: &PatientBaseline) -> String {
    let advice: Vec<&str> = ADVICE_RULES
        .iter()
        .filter(|rule| (rule.applies)(tags, baseline))
        .map(|rule| rule.advice)
        .collect();

    if advice.is_empty() {
        DEFAULT_RECOMMENDATION.to_string()
    } else {
        advice.join(" ")
    }
}
