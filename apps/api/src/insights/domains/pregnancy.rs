use super::*;

pub static CONFIG: DomainConfig = DomainConfig {
    domain: Domain::Pregnancy,
    title: "Pregnancy",
    specialist: "You are an experienced obstetric nurse supporting an expectant parent between prenatal visits.",
    fields: &[
        FieldSpec {
            key: "trimester",
            label: "Trimester",
            kind: FieldKind::Scale { min: 1.0, max: 3.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "weeksPregnant",
            label: "Weeks pregnant",
            kind: FieldKind::Number { min: 0.0, max: 45.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "symptoms",
            label: "Symptoms",
            kind: FieldKind::List,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "weight",
            label: "Weight (kg)",
            kind: FieldKind::Number { min: 30.0, max: 250.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "bloodPressure",
            label: "Blood pressure",
            kind: FieldKind::Text,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "fetalMovement",
            label: "Fetal movement",
            kind: FieldKind::Text,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "sleepHours",
            label: "Hours of sleep",
            kind: FieldKind::Number { min: 0.0, max: 24.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "mood",
            label: "Mood",
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
            key: "pregnancyProgress",
            variants: &[
                "🤰 **PREGNANCY PROGRESS**",
                "**PREGNANCY PROGRESS**",
                "## PREGNANCY PROGRESS",
                "PREGNANCY PROGRESS",
            ],
            instruction: "Describe what typically happens at this stage for parent and baby.",
        },
        SectionSpec {
            key: "symptomAnalysis",
            variants: &[
                "🔍 **SYMPTOM ANALYSIS**",
                "**SYMPTOM ANALYSIS**",
                "## SYMPTOM ANALYSIS",
                "SYMPTOM ANALYSIS",
            ],
            instruction: "Explain the logged symptoms and whether they are expected for the trimester.",
        },
        SectionSpec {
            key: "nutritionGuidance",
            variants: &[
                "🥗 **NUTRITION GUIDANCE**",
                "**NUTRITION GUIDANCE**",
                "## NUTRITION GUIDANCE",
                "NUTRITION GUIDANCE",
            ],
            instruction: "Give trimester-appropriate nutrition and supplement advice.",
        },
        SectionSpec {
            key: "warningSigns",
            variants: &[
                "⚠️ **WARNING SIGNS**",
                "**WARNING SIGNS**",
                "## WARNING SIGNS",
                "WARNING SIGNS",
            ],
            instruction: "List the signs that require calling the care team immediately.",
        },
        SectionSpec {
            key: "nextSteps",
            variants: &[
                "📅 **NEXT STEPS**",
                "**NEXT STEPS**",
                "## NEXT STEPS",
                "NEXT STEPS",
            ],
            instruction: "Mention upcoming tests or appointments typical for this stage.",
        },
    ],
    keyword_rules: &[
        KeywordRule {
            section: "symptomAnalysis",
            needle: "bleeding",
            advisory: "Any vaginal bleeding during pregnancy should be reported to your provider promptly.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "symptomAnalysis",
            needle: "headache",
            advisory: "Persistent headaches can signal high blood pressure; have it checked.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "symptomAnalysis",
            needle: "swelling",
            advisory: "Sudden swelling of the face or hands warrants a blood pressure check.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "symptomAnalysis",
            needle: "nausea",
            advisory: "Eat small, frequent meals and keep plain crackers nearby for nausea.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "warningSigns",
            needle: "preeclampsia",
            advisory: "Know the signs of preeclampsia: severe headache, vision changes and upper abdominal pain.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "nutritionGuidance",
            needle: "folic",
            advisory: "Continue a daily prenatal vitamin with folic acid.",
            kind: AdvisoryKind::Recommendation,
        },
    ],
    threshold_rules: &[
        ThresholdRule {
            field: "sleepHours",
            label: "sleep",
            high: Bound::Below(5.0),
            moderate: Bound::Below(7.0),
            advisory: "Aim for seven to nine hours of rest; side sleeping with a pillow between the knees can help.",
        },
        ThresholdRule {
            field: "weeksPregnant",
            label: "gestational age",
            high: Bound::Above(40.0),
            moderate: Bound::Above(37.0),
            advisory: "You are past 40 weeks; stay in close contact with your provider about monitoring and induction.",
        },
    ],
    reminders: &[
        "Take your prenatal vitamin today.",
        "Keep your next prenatal appointment on the calendar.",
        "From week 28, count fetal movements daily.",
    ],
    fallback: &[
        FallbackSection {
            key: "pregnancyProgress",
            template: "You are in trimester {trimester} at {weeksPregnant} weeks. Each week brings steady growth for your baby; regular prenatal visits track that progress for you both.",
        },
        FallbackSection {
            key: "symptomAnalysis",
            template: "Symptoms logged: {symptoms}. Blood pressure: {bloodPressure}. Fetal movement: {fetalMovement}. Many pregnancy symptoms are expected, but mention any that are new or getting worse at your next visit.",
        },
        FallbackSection {
            key: "nutritionGuidance",
            template: "Keep taking a prenatal vitamin with folic acid, eat protein and iron-rich foods, and drink plenty of water. Current weight: {weight} kg.",
        },
        FallbackSection {
            key: "warningSigns",
            template: "Call your care team right away for vaginal bleeding, severe headache, vision changes, sudden swelling, fever, or a noticeable drop in fetal movement.",
        },
        FallbackSection {
            key: "nextSteps",
            template: "Write down your questions before each appointment. Concerns you noted: {concerns}. You slept {sleepHours} hours and described your mood as {mood}.",
        },
    ],
};
