use crate::domain::nutrition::entities::{Tag, TagSet};

struct KeywordGroup {
    keywords: &'static [&'static str],
    tags: &'static [Tag],
}

const KEYWORD_GROUPS: &[KeywordGroup] = &[
    // sweets and desserts
    KeywordGroup {
        keywords: &["chocolate", "dulce", "galleta", "helado", "postre"],
        tags: &[Tag::SimpleSugars, Tag::SaturatedFat],
    },
    // sugary drinks
    KeywordGroup {
        keywords: &["bebida", "jugo", "gaseosa", "soda"],
        tags: &[Tag::SimpleSugars],
    },
    KeywordGroup {
        keywords: &["cerveza", "vino", "pisco", "aperol", "spritz"],
        tags: &[Tag::Alcohol, Tag::SimpleSugars],
    },
    KeywordGroup {
        keywords: &["ensalada", "verde", "legumbre", "fibra"],
        tags: &[Tag::Fiber],
    },
    // oily fish
    KeywordGroup {
        keywords: &["salmón", "atun", "sardina", "caballa"],
        tags: &[Tag::Omega3],
    },
    // red meat
    KeywordGroup {
        keywords: &["vacuno", "asado"],
        tags: &[Tag::HemeIron, Tag::SaturatedFat],
    },
];

/// Derives tags from a free-text meal description by case-insensitive
/// keyword matching. Used when no vision classification is available.
pub fn tags_from_text(text: &str) -> TagSet {
    let text = text.to_lowercase();

    KEYWORD_GROUPS
        .iter()
        .filter(|group| group.keywords.iter().any(|kw| text.contains(kw)))
        .flat_map(|group| group.tags.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_no_tags() {
        assert!(tags_from_text("").is_empty());
        assert!(tags_from_text("pollo con arroz").is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let tags = tags_from_text("Helado de CHOCOLATE");
        assert_eq!(tags, TagSet::from([Tag::SimpleSugars, Tag::SaturatedFat]));
    }

    #[test]
    fn test_groups_are_additive() {
        let tags = tags_from_text("asado con ensalada y una copa de vino");
        assert!(tags.contains(Tag::Alcohol));
        assert!(tags.contains(Tag::SimpleSugars));
        assert!(tags.contains(Tag::Fiber));
        assert!(tags.contains(Tag::HemeIron));
        assert!(tags.contains(Tag::SaturatedFat));
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn test_shared_tags_collapse() {
        let tags = tags_from_text("postre y gaseosa");
        assert_eq!(tags, TagSet::from([Tag::SimpleSugars, Tag::SaturatedFat]));
    }

    #[test]
    fn test_fish_keywords() {
        assert_eq!(tags_from_text("Salmón al horno"), TagSet::from([Tag::Omega3]));
        assert_eq!(tags_from_text("sandwich de atun"), TagSet::from([Tag::Omega3]));
    }

    #[test]
    fn test_tagging_is_deterministic() {
        let text = "Cerveza, papas y ensalada verde";
        assert_eq!(tags_from_text(text), tags_from_text(text));
    }
}
