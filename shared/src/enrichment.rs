//! Advisory text layered over a recommendation using the submitted N/P/K.
//!
//! Thresholds here are independent of the validation ranges.

use crate::models::{NutrientLevels, RecommendationResult};

/// Below this a nutrient is considered low
pub const LOW_THRESHOLD: i32 = 50;

/// Above this a nutrient is considered high
pub const HIGH_THRESHOLD: i32 = 100;

/// Fertilizer advice derived from low nutrient levels
pub fn npk_recommendation(levels: &NutrientLevels) -> String {
    let mut parts = Vec::new();
    if levels.nitrogen < LOW_THRESHOLD {
        parts.push("Add nitrogen-rich fertilizers like urea or ammonium sulfate.");
    }
    if levels.phosphorus < LOW_THRESHOLD {
        parts.push("Add phosphorus-rich fertilizers like DAP or rock phosphate.");
    }
    if levels.potassium < LOW_THRESHOLD {
        parts.push("Add potassium-rich fertilizers like MOP or potassium sulfate.");
    }
    if parts.is_empty() {
        parts.push("Your NPK levels are sufficient. Maintain with balanced fertilizers.");
    }
    parts.join(" ")
}

/// Management notes for high nutrient levels, `None` when nothing is high
pub fn npk_management(levels: &NutrientLevels) -> Option<String> {
    let mut parts = Vec::new();
    if levels.nitrogen > HIGH_THRESHOLD {
        parts.push("Your nitrogen levels are high. Consider crops that require high nitrogen.");
    }
    if levels.phosphorus > HIGH_THRESHOLD {
        parts.push("Your phosphorus levels are high. Good for flowering and fruiting crops.");
    }
    if levels.potassium > HIGH_THRESHOLD {
        parts.push(
            "Your potassium levels are high. Beneficial for root crops and overall plant health.",
        );
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Return a copy of `result` with description and tips extended.
///
/// Tips only gain the `NPK Management` section when some nutrient is above
/// the high threshold.
///
/// The fertilizer list is left untouched.
pub fn enrich(result: &RecommendationResult, levels: &NutrientLevels) -> RecommendationResult {
    let description = format!(
        "{}\n\nBased on your soil NPK values (N:{}, P:{}, K:{}), this crop is recommended for optimal growth.\n\nNPK-specific recommendation: {}",
        result.description_or_default(),
        levels.nitrogen,
        levels.phosphorus,
        levels.potassium,
        npk_recommendation(levels),
    );

    let tips = match npk_management(levels) {
        Some(notes) if !result.tips.is_empty() => {
            format!("{}\n\nNPK Management: {}", result.tips, notes)
        }
        _ => result.tips.clone(),
    };

    RecommendationResult {
        crop: result.crop.clone(),
        description,
        fertilizers: result.fertilizers.clone(),
        tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(nitrogen: i32, phosphorus: i32, potassium: i32) -> NutrientLevels {
        NutrientLevels {
            nitrogen,
            phosphorus,
            potassium,
        }
    }

    fn rice() -> RecommendationResult {
        RecommendationResult {
            crop: "rice".into(),
            description: "Rice is a staple food crop.".into(),
            fertilizers: vec!["Urea".into(), "DAP".into()],
            tips: "Ensure proper water management.".into(),
        }
    }

    #[test]
    fn test_low_nutrients_listed_in_order() {
        assert_eq!(
            npk_recommendation(&levels(10, 49, 80)),
            "Add nitrogen-rich fertilizers like urea or ammonium sulfate. \
             Add phosphorus-rich fertilizers like DAP or rock phosphate."
        );
    }

    #[test]
    fn test_sufficient_at_threshold() {
        assert_eq!(
            npk_recommendation(&levels(50, 50, 50)),
            "Your NPK levels are sufficient. Maintain with balanced fertilizers."
        );
    }

    #[test]
    fn test_high_is_strictly_above_100() {
        assert_eq!(npk_management(&levels(100, 100, 100)), None);
        let notes = npk_management(&levels(101, 20, 140)).unwrap();
        assert!(notes.starts_with("Your nitrogen levels are high."));
        assert!(notes.contains("potassium levels are high"));
        assert!(!notes.contains("phosphorus"));
    }

    #[test]
    fn test_enrich_extends_description() {
        let enriched = enrich(&rice(), &levels(90, 42, 43));
        assert!(enriched.description.starts_with("Rice is a staple food crop.\n\n"));
        assert!(enriched
            .description
            .contains("Based on your soil NPK values (N:90, P:42, K:43)"));
        assert!(enriched
            .description
            .ends_with("NPK-specific recommendation: Add phosphorus-rich fertilizers like DAP or rock phosphate. Add potassium-rich fertilizers like MOP or potassium sulfate."));
    }

    #[test]
    fn test_enrich_keeps_fertilizers() {
        let enriched = enrich(&rice(), &levels(10, 10, 10));
        assert_eq!(enriched.fertilizers, vec!["Urea", "DAP"]);
        assert_eq!(enriched.crop, "rice");
    }

    #[test]
    fn test_enrich_tips_only_when_high() {
        let plain = enrich(&rice(), &levels(60, 60, 60));
        assert_eq!(plain.tips, "Ensure proper water management.");

        let high = enrich(&rice(), &levels(120, 60, 60));
        assert_eq!(
            high.tips,
            "Ensure proper water management.\n\nNPK Management: Your nitrogen levels are high. Consider crops that require high nitrogen."
        );
    }

    #[test]
    fn test_enrich_missing_description_uses_fallback() {
        let mut result = rice();
        result.description.clear();
        result.tips.clear();
        let enriched = enrich(&result, &levels(120, 120, 120));
        assert!(enriched.description.starts_with("No description available"));
        assert!(enriched.tips.is_empty());
    }
}
