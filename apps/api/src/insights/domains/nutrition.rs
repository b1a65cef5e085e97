use super::*;

pub static CONFIG: DomainConfig = DomainConfig {
    domain: Domain::Nutrition,
    title: "Nutrition",
    specialist: "You are a registered dietitian giving practical, non-restrictive nutrition feedback.",
    fields: &[
        FieldSpec {
            key: "mealsPerDay",
            label: "Meals per day",
            kind: FieldKind::Number { min: 0.0, max: 10.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "fruitVegServings",
            label: "Fruit and vegetable servings",
            kind: FieldKind::Number { min: 0.0, max: 20.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "waterIntake",
            label: "Water intake (glasses)",
            kind: FieldKind::Number { min: 0.0, max: 30.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "caffeineCups",
            label: "Caffeinated drinks",
            kind: FieldKind::Number { min: 0.0, max: 20.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "alcoholUnits",
            label: "Alcohol units (this week)",
            kind: FieldKind::Number { min: 0.0, max: 100.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "dietType",
            label: "Diet type",
            kind: FieldKind::Text,
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "proteinSources",
            label: "Protein sources",
            kind: FieldKind::List,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "supplements",
            label: "Supplements",
            kind: FieldKind::List,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "cravings",
            label: "Cravings",
            kind: FieldKind::List,
            placeholder: NOT_RECORDED,
        },
    ],
    sections: &[
        SectionSpec {
            key: "nutritionalAssessment",
            variants: &[
                "🥗 **NUTRITIONAL ASSESSMENT**",
                "**NUTRITIONAL ASSESSMENT**",
                "## NUTRITIONAL ASSESSMENT",
                "NUTRITIONAL ASSESSMENT",
            ],
            instruction: "Assess overall balance, variety and regularity of the day's eating.",
        },
        SectionSpec {
            key: "deficiencyRisks",
            variants: &[
                "⚠️ **DEFICIENCY RISKS**",
                "**DEFICIENCY RISKS**",
                "## DEFICIENCY RISKS",
                "DEFICIENCY RISKS",
            ],
            instruction: "Name nutrients that may be short given the diet type and foods logged.",
        },
        SectionSpec {
            key: "mealSuggestions",
            variants: &[
                "🍽️ **MEAL SUGGESTIONS**",
                "**MEAL SUGGESTIONS**",
                "## MEAL SUGGESTIONS",
                "MEAL SUGGESTIONS",
            ],
            instruction: "Propose two or three simple meals or swaps.",
        },
        SectionSpec {
            key: "hydrationAdvice",
            variants: &[
                "💧 **HYDRATION ADVICE**",
                "**HYDRATION ADVICE**",
                "## HYDRATION ADVICE",
                "HYDRATION ADVICE",
            ],
            instruction: "Comment on water, caffeine and alcohol intake.",
        },
    ],
    keyword_rules: &[
        KeywordRule {
            section: "deficiencyRisks",
            needle: "iron",
            advisory: "Pair iron-rich foods with vitamin C sources to improve absorption.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "deficiencyRisks",
            needle: "b12",
            advisory: "On a plant-based diet a B12 supplement is usually needed.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "deficiencyRisks",
            needle: "calcium",
            advisory: "Include calcium sources such as dairy, fortified plant milk or tofu.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "deficiencyRisks",
            needle: "vegan",
            advisory: "Vegan diets need planned sources of B12, iron, omega-3 and iodine.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "nutritionalAssessment",
            needle: "sugar",
            advisory: "Cut back on added sugar; swap sweets for fruit where you can.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "mealSuggestions",
            needle: "skipp",
            advisory: "Avoid skipping meals; a simple planned breakfast makes the day easier.",
            kind: AdvisoryKind::Recommendation,
        },
    ],
    threshold_rules: &[
        ThresholdRule {
            field: "fruitVegServings",
            label: "fruit and vegetables",
            high: Bound::Below(2.0),
            moderate: Bound::Below(5.0),
            advisory: "Add a portion of fruit or vegetables to every meal to reach five a day.",
        },
        ThresholdRule {
            field: "waterIntake",
            label: "hydration",
            high: Bound::Below(4.0),
            moderate: Bound::Below(8.0),
            advisory: "Keep a water bottle with you and refill it twice during the day.",
        },
        ThresholdRule {
            field: "caffeineCups",
            label: "caffeine",
            high: Bound::Above(4.0),
            moderate: Bound::Above(2.0),
            advisory: "More than four caffeinated drinks a day can disturb sleep; switch the afternoon one to decaf.",
        },
        ThresholdRule {
            field: "alcoholUnits",
            label: "alcohol",
            high: Bound::Above(14.0),
            moderate: Bound::Above(7.0),
            advisory: "Weekly alcohol is above the low-risk guideline of 14 units; plan some alcohol-free days.",
        },
        ThresholdRule {
            field: "mealsPerDay",
            label: "meal regularity",
            high: Bound::Below(2.0),
            moderate: Bound::Below(3.0),
            advisory: "Eating at regular times keeps energy steady; aim for three meals a day.",
        },
    ],
    reminders: &[
        "Fill half your plate with vegetables at your next meal.",
        "Keep a water bottle with you.",
        "Plan tomorrow's meals tonight.",
    ],
    fallback: &[
        FallbackSection {
            key: "nutritionalAssessment",
            template: "You ate {mealsPerDay} meals with {fruitVegServings} servings of fruit and vegetables, following a {dietType} diet. Protein sources: {proteinSources}. Cravings noted: {cravings}.",
        },
        FallbackSection {
            key: "deficiencyRisks",
            template: "Supplements taken: {supplements}. Depending on your diet, iron, vitamin D, B12 and calcium are the nutrients most often running short; a blood test can confirm your levels.",
        },
        FallbackSection {
            key: "mealSuggestions",
            template: "Try oats with fruit and nuts for breakfast, a grain bowl with beans and vegetables for lunch, and fish or tofu with greens for dinner.",
        },
        FallbackSection {
            key: "hydrationAdvice",
            template: "You logged {waterIntake} glasses of water, {caffeineCups} caffeinated drinks and {alcoholUnits} alcohol units. Most adults do well with six to eight glasses of water a day.",
        },
    ],
};
