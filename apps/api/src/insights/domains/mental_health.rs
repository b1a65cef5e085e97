use super::*;

pub static CONFIG: DomainConfig = DomainConfig {
    domain: Domain::MentalHealth,
    title: "Mental Health",
    specialist: "You are a compassionate mental health counselor reviewing a client's mood journal.",
    fields: &[
        FieldSpec {
            key: "moodRating",
            label: "Mood (1-10)",
            kind: FieldKind::Scale { min: 1.0, max: 10.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "anxietyLevel",
            label: "Anxiety level (1-10)",
            kind: FieldKind::Scale { min: 1.0, max: 10.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "stressLevel",
            label: "Stress level (1-10)",
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
            key: "socialConnection",
            label: "Social connection (1-10)",
            kind: FieldKind::Scale { min: 1.0, max: 10.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "emotions",
            label: "Emotions",
            kind: FieldKind::List,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "triggers",
            label: "Triggers",
            kind: FieldKind::List,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "copingStrategies",
            label: "Coping strategies used",
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
            key: "emotionalWellbeing",
            variants: &[
                "🧠 **EMOTIONAL WELLBEING**",
                "**EMOTIONAL WELLBEING**",
                "## EMOTIONAL WELLBEING",
                "EMOTIONAL WELLBEING",
            ],
            instruction: "Reflect the client's emotional state back with warmth and without judgment.",
        },
        SectionSpec {
            key: "stressAnalysis",
            variants: &[
                "📈 **STRESS AND ANXIETY ANALYSIS**",
                "**STRESS AND ANXIETY ANALYSIS**",
                "## STRESS AND ANXIETY ANALYSIS",
                "STRESS AND ANXIETY ANALYSIS",
            ],
            instruction: "Connect stress and anxiety levels to the triggers and sleep logged.",
        },
        SectionSpec {
            key: "copingStrategies",
            variants: &[
                "🌱 **COPING STRATEGIES**",
                "**COPING STRATEGIES**",
                "## COPING STRATEGIES",
                "COPING STRATEGIES",
            ],
            instruction: "Suggest practical coping techniques, building on what already works.",
        },
        SectionSpec {
            key: "supportResources",
            variants: &[
                "🤝 **SUPPORT RESOURCES**",
                "**SUPPORT RESOURCES**",
                "## SUPPORT RESOURCES",
                "SUPPORT RESOURCES",
            ],
            instruction: "Point to professional and peer support, including crisis options.",
        },
    ],
    keyword_rules: &[
        KeywordRule {
            section: "emotionalWellbeing",
            needle: "hopeless",
            advisory: "Feelings of hopelessness deserve support; reach out to a mental health professional.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "emotionalWellbeing",
            needle: "self-harm",
            advisory: "If you are thinking about harming yourself, contact a crisis line or emergency services now.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "stressAnalysis",
            needle: "panic",
            advisory: "Panic symptoms respond well to therapy; consider asking for a referral.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "stressAnalysis",
            needle: "isolat",
            advisory: "Schedule regular contact with people you trust.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "copingStrategies",
            needle: "mindful",
            advisory: "Try a ten-minute mindfulness session each day.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "copingStrategies",
            needle: "journal",
            advisory: "Keep journaling; it helps reveal triggers over time.",
            kind: AdvisoryKind::Recommendation,
        },
    ],
    threshold_rules: &[
        ThresholdRule {
            field: "moodRating",
            label: "mood",
            high: Bound::Below(4.0),
            moderate: Bound::Below(6.0),
            advisory: "Your mood has been low; talking with a counselor or your doctor can help.",
        },
        ThresholdRule {
            field: "anxietyLevel",
            label: "anxiety",
            high: Bound::Above(6.0),
            moderate: Bound::Above(3.0),
            advisory: "Anxiety is high; slow breathing (inhale 4, exhale 6) can calm the body in minutes.",
        },
        ThresholdRule {
            field: "stressLevel",
            label: "stress",
            high: Bound::Above(6.0),
            moderate: Bound::Above(3.0),
            advisory: "Stress is running high; protect some unscheduled time for yourself this week.",
        },
        ThresholdRule {
            field: "socialConnection",
            label: "social connection",
            high: Bound::Below(3.0),
            moderate: Bound::Below(6.0),
            advisory: "Reach out to one person you trust today, even briefly.",
        },
        ThresholdRule {
            field: "sleepHours",
            label: "sleep duration",
            high: Bound::Below(5.0),
            moderate: Bound::Below(7.0),
            advisory: "Short sleep amplifies anxiety and low mood; protect a regular bedtime.",
        },
    ],
    reminders: &[
        "Take a few minutes today for something you enjoy.",
        "Check in with someone you trust this week.",
        "If you are in crisis, contact local emergency services or a crisis line.",
    ],
    fallback: &[
        FallbackSection {
            key: "emotionalWellbeing",
            template: "You rated your mood {moodRating} and described feeling: {emotions}. Whatever you are feeling is valid, and noticing it is an important first step.",
        },
        FallbackSection {
            key: "stressAnalysis",
            template: "Stress was {stressLevel} and anxiety {anxietyLevel}, with {sleepHours} hours of sleep. Triggers you noted: {triggers}. Tracking these together often shows which situations affect you most.",
        },
        FallbackSection {
            key: "copingStrategies",
            template: "Strategies you used: {copingStrategies}. Keep what helps, and consider adding short walks, breathing exercises or journaling on harder days.",
        },
        FallbackSection {
            key: "supportResources",
            template: "Your social connection score was {socialConnection}. A counselor, your doctor or a peer support group can help. In an emergency, contact local emergency services or a crisis line.",
        },
    ],
};
