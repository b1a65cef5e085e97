use super::*;

pub static CONFIG: DomainConfig = DomainConfig {
    domain: Domain::Amab,
    title: "Male Reproductive Health",
    specialist: "You are a men's health physician discussing reproductive and urological health openly and respectfully.",
    fields: &[
        FieldSpec {
            key: "erectileFunction",
            label: "Erectile function (1-10)",
            kind: FieldKind::Scale { min: 1.0, max: 10.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "libido",
            label: "Libido (1-10)",
            kind: FieldKind::Scale { min: 1.0, max: 10.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "testicularSelfExam",
            label: "Testicular self-exam findings",
            kind: FieldKind::Text,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "urinarySymptoms",
            label: "Urinary symptoms",
            kind: FieldKind::List,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "lastProstateScreening",
            label: "Last prostate screening",
            kind: FieldKind::Date,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "fertilityGoals",
            label: "Fertility goals",
            kind: FieldKind::Text,
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "stressLevel",
            label: "Stress level (1-10)",
            kind: FieldKind::Scale { min: 1.0, max: 10.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "alcoholUnits",
            label: "Alcohol units (this week)",
            kind: FieldKind::Number { min: 0.0, max: 100.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "smoking",
            label: "Smoking",
            kind: FieldKind::Text,
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "concerns",
            label: "Concerns",
            kind: FieldKind::Text,
            placeholder: NOT_SPECIFIED,
        },
    ],
    sections: &[
        SectionSpec {
            key: "reproductiveHealthAssessment",
            variants: &[
                "🔍 **REPRODUCTIVE HEALTH ASSESSMENT**",
                "**REPRODUCTIVE HEALTH ASSESSMENT**",
                "## REPRODUCTIVE HEALTH ASSESSMENT",
                "REPRODUCTIVE HEALTH ASSESSMENT",
            ],
            instruction: "Assess sexual function, self-exam findings and fertility goals.",
        },
        SectionSpec {
            key: "riskFactors",
            variants: &[
                "⚠️ **RISK FACTORS**",
                "**RISK FACTORS**",
                "## RISK FACTORS",
                "RISK FACTORS",
            ],
            instruction: "Identify risk factors from the logged habits and symptoms.",
        },
        SectionSpec {
            key: "lifestyleImpact",
            variants: &[
                "🏋️ **LIFESTYLE IMPACT**",
                "**LIFESTYLE IMPACT**",
                "## LIFESTYLE IMPACT",
                "LIFESTYLE IMPACT",
            ],
            instruction: "Explain how stress, alcohol, smoking and exercise affect reproductive health.",
        },
        SectionSpec {
            key: "screeningRecommendations",
            variants: &[
                "🩺 **SCREENING RECOMMENDATIONS**",
                "**SCREENING RECOMMENDATIONS**",
                "## SCREENING RECOMMENDATIONS",
                "SCREENING RECOMMENDATIONS",
            ],
            instruction: "Recommend age-appropriate screenings and self-checks.",
        },
    ],
    keyword_rules: &[
        KeywordRule {
            section: "reproductiveHealthAssessment",
            needle: "lump",
            advisory: "Any testicular lump should be checked by a doctor promptly.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "reproductiveHealthAssessment",
            needle: "erectile",
            advisory: "Erectile changes can be an early sign of cardiovascular issues; mention them at your next check-up.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "riskFactors",
            needle: "smok",
            advisory: "Smoking affects erectile function and sperm quality; support to quit is available.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "riskFactors",
            needle: "urinary",
            advisory: "Urinary changes such as a weak stream or frequent night-time urination should be evaluated.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "lifestyleImpact",
            needle: "alcohol",
            advisory: "Keep alcohol within recommended limits to protect hormone balance.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "screeningRecommendations",
            needle: "prostate",
            advisory: "Discuss prostate screening timing with your doctor based on age and family history.",
            kind: AdvisoryKind::Recommendation,
        },
    ],
    threshold_rules: &[
        ThresholdRule {
            field: "erectileFunction",
            label: "erectile function",
            high: Bound::Below(4.0),
            moderate: Bound::Below(7.0),
            advisory: "Persistent erectile difficulties are treatable; book a conversation with your doctor.",
        },
        ThresholdRule {
            field: "libido",
            label: "libido",
            high: Bound::Below(3.0),
            moderate: Bound::Below(5.0),
            advisory: "Low libido over several weeks can reflect hormone, sleep or mood changes worth checking.",
        },
        ThresholdRule {
            field: "stressLevel",
            label: "stress",
            high: Bound::Above(6.0),
            moderate: Bound::Above(3.0),
            advisory: "High stress affects testosterone and sexual function; build in daily recovery time.",
        },
        ThresholdRule {
            field: "alcoholUnits",
            label: "alcohol",
            high: Bound::Above(14.0),
            moderate: Bound::Above(7.0),
            advisory: "Alcohol above 14 units a week can lower sperm quality; plan alcohol-free days.",
        },
    ],
    reminders: &[
        "Do a testicular self-exam once a month.",
        "Keep your annual physical on the calendar.",
        "Mention any urinary changes at your next appointment.",
    ],
    fallback: &[
        FallbackSection {
            key: "reproductiveHealthAssessment",
            template: "You rated erectile function {erectileFunction} and libido {libido}. Self-exam findings: {testicularSelfExam}. Fertility goals: {fertilityGoals}.",
        },
        FallbackSection {
            key: "riskFactors",
            template: "Smoking: {smoking}. Urinary symptoms: {urinarySymptoms}. Smoking, heavy drinking and untreated urinary symptoms are the most common modifiable risks to watch.",
        },
        FallbackSection {
            key: "lifestyleImpact",
            template: "Stress was {stressLevel} with {alcoholUnits} alcohol units this week. Regular exercise, good sleep and moderate drinking support hormone levels and sexual health.",
        },
        FallbackSection {
            key: "screeningRecommendations",
            template: "Your last prostate screening was {lastProstateScreening}. Continue monthly testicular self-exams and ask your doctor which screenings fit your age. Concerns to raise: {concerns}.",
        },
    ],
};
