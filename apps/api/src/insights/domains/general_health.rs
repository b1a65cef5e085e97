use super::*;

pub static CONFIG: DomainConfig = DomainConfig {
    domain: Domain::GeneralHealth,
    title: "General Health",
    specialist: "You are a supportive primary care health advisor reviewing a patient's daily wellness log.",
    fields: &[
        FieldSpec {
            key: "stressLevel",
            label: "Stress level (1-10)",
            kind: FieldKind::Scale { min: 1.0, max: 10.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "sleepQuality",
            label: "Sleep quality (1-10)",
            kind: FieldKind::Scale { min: 1.0, max: 10.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "sleepHours",
            label: "Hours of sleep",
            kind: FieldKind::Number { min: 0.0, max: 24.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "energyLevel",
            label: "Energy level (1-10)",
            kind: FieldKind::Scale { min: 1.0, max: 10.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "exerciseMinutes",
            label: "Exercise (minutes)",
            kind: FieldKind::Number { min: 0.0, max: 1440.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "waterIntake",
            label: "Water intake (glasses)",
            kind: FieldKind::Number { min: 0.0, max: 30.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "symptoms",
            label: "Symptoms",
            kind: FieldKind::List,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "medications",
            label: "Medications taken",
            kind: FieldKind::List,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "notes",
            label: "Notes",
            kind: FieldKind::Text,
            placeholder: NOT_SPECIFIED,
        },
    ],
    sections: &[
        SectionSpec {
            key: "overallAssessment",
            variants: &[
                "🩺 **OVERALL HEALTH ASSESSMENT**",
                "**OVERALL HEALTH ASSESSMENT**",
                "## OVERALL HEALTH ASSESSMENT",
                "OVERALL HEALTH ASSESSMENT",
            ],
            instruction: "Summarize how the patient is doing today based on the logged values.",
        },
        SectionSpec {
            key: "lifestyleFactors",
            variants: &[
                "🏃 **LIFESTYLE FACTORS**",
                "**LIFESTYLE FACTORS**",
                "## LIFESTYLE FACTORS",
                "LIFESTYLE FACTORS",
            ],
            instruction: "Discuss sleep, activity, hydration and stress and how they interact.",
        },
        SectionSpec {
            key: "riskAreas",
            variants: &[
                "⚠️ **AREAS NEEDING ATTENTION**",
                "**AREAS NEEDING ATTENTION**",
                "## AREAS NEEDING ATTENTION",
                "AREAS NEEDING ATTENTION",
            ],
            instruction: "Name any symptoms or values that warrant attention or a doctor's visit.",
        },
        SectionSpec {
            key: "actionPlan",
            variants: &[
                "✅ **ACTION PLAN**",
                "**ACTION PLAN**",
                "## ACTION PLAN",
                "ACTION PLAN",
            ],
            instruction: "Give three concrete, achievable steps for the next few days.",
        },
    ],
    keyword_rules: &[
        KeywordRule {
            section: "riskAreas",
            needle: "fatigue",
            advisory: "Ongoing fatigue has many possible causes; consider a blood panel that includes iron and thyroid levels.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "riskAreas",
            needle: "headache",
            advisory: "Log frequent headaches together with likely triggers and discuss them with a doctor.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "riskAreas",
            needle: "chest pain",
            advisory: "Chest pain needs prompt medical evaluation.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "lifestyleFactors",
            needle: "sedentary",
            advisory: "Break up long sitting periods with a short walk every hour.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "lifestyleFactors",
            needle: "dehydrat",
            advisory: "Increase water intake towards eight glasses a day.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "actionPlan",
            needle: "sleep",
            advisory: "Keep a consistent sleep and wake time, even on weekends.",
            kind: AdvisoryKind::Recommendation,
        },
    ],
    threshold_rules: &[
        ThresholdRule {
            field: "stressLevel",
            label: "stress",
            high: Bound::Above(6.0),
            moderate: Bound::Above(3.0),
            advisory: "Stress is running high. Short breathing breaks and protected rest time can help.",
        },
        ThresholdRule {
            field: "sleepQuality",
            label: "sleep quality",
            high: Bound::Below(5.0),
            moderate: Bound::Below(7.0),
            advisory: "Sleep quality is low. Avoid screens for an hour before bed and keep the bedroom cool and dark.",
        },
        ThresholdRule {
            field: "sleepHours",
            label: "sleep duration",
            high: Bound::Below(5.0),
            moderate: Bound::Below(7.0),
            advisory: "Aim for seven to nine hours of sleep a night.",
        },
        ThresholdRule {
            field: "energyLevel",
            label: "energy",
            high: Bound::Below(4.0),
            moderate: Bound::Below(6.0),
            advisory: "Energy is low. Regular meals, daylight and light movement often help.",
        },
        ThresholdRule {
            field: "exerciseMinutes",
            label: "physical activity",
            high: Bound::Below(10.0),
            moderate: Bound::Below(30.0),
            advisory: "Work up to 30 minutes of movement most days; a brisk walk counts.",
        },
        ThresholdRule {
            field: "waterIntake",
            label: "hydration",
            high: Bound::Below(4.0),
            moderate: Bound::Below(8.0),
            advisory: "Keep a water bottle nearby and sip throughout the day.",
        },
    ],
    reminders: &[
        "Drink water regularly throughout the day.",
        "Move for at least 30 minutes today.",
        "Log tomorrow's entry to keep your trends accurate.",
    ],
    fallback: &[
        FallbackSection {
            key: "overallAssessment",
            template: "Today you rated your stress at {stressLevel} and your sleep quality at {sleepQuality}, with an energy level of {energyLevel}. Reported symptoms: {symptoms}. Keep logging daily so changes over time become visible.",
        },
        FallbackSection {
            key: "lifestyleFactors",
            template: "You slept {sleepHours} hours, exercised for {exerciseMinutes} minutes and drank {waterIntake} glasses of water. Sleep, movement and hydration reinforce each other, so small gains in one usually help the others.",
        },
        FallbackSection {
            key: "riskAreas",
            template: "Pay attention to these symptoms: {symptoms}. If they persist for more than two weeks, get worse, or come with fever, chest pain or shortness of breath, contact a healthcare provider.",
        },
        FallbackSection {
            key: "actionPlan",
            template: "1. Go to bed at the same time tonight. 2. Take a 20-minute walk tomorrow. 3. Drink a glass of water with every meal. Notes you added: {notes}.",
        },
    ],
};
