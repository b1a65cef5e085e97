use super::*;

pub static CONFIG: DomainConfig = DomainConfig {
    domain: Domain::Cycle,
    title: "Menstrual Cycle",
    specialist: "You are a women's health specialist who helps patients understand their menstrual cycle patterns.",
    fields: &[
        FieldSpec {
            key: "lastPeriodDate",
            label: "Last period start date",
            kind: FieldKind::Date,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "cycleLength",
            label: "Cycle length (days)",
            kind: FieldKind::Number { min: 10.0, max: 90.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "periodLength",
            label: "Period length (days)",
            kind: FieldKind::Number { min: 1.0, max: 15.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "flowIntensity",
            label: "Flow intensity",
            kind: FieldKind::Text,
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "painLevel",
            label: "Pain level (0-10)",
            kind: FieldKind::Scale { min: 0.0, max: 10.0 },
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "symptoms",
            label: "Symptoms",
            kind: FieldKind::List,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "mood",
            label: "Mood",
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
            key: "notes",
            label: "Notes",
            kind: FieldKind::Text,
            placeholder: NOT_SPECIFIED,
        },
    ],
    sections: &[
        SectionSpec {
            key: "cycleAnalysis",
            variants: &[
                "🩸 **CYCLE ANALYSIS**",
                "**CYCLE ANALYSIS**",
                "## CYCLE ANALYSIS",
                "CYCLE ANALYSIS",
            ],
            instruction: "Interpret cycle and period length against typical ranges.",
        },
        SectionSpec {
            key: "symptomPatterns",
            variants: &[
                "📊 **SYMPTOM PATTERNS**",
                "**SYMPTOM PATTERNS**",
                "## SYMPTOM PATTERNS",
                "SYMPTOM PATTERNS",
            ],
            instruction: "Describe the flow, pain and symptom pattern, comparing with history.",
        },
        SectionSpec {
            key: "healthRecommendations",
            variants: &[
                "💡 **HEALTH RECOMMENDATIONS**",
                "**HEALTH RECOMMENDATIONS**",
                "## HEALTH RECOMMENDATIONS",
                "HEALTH RECOMMENDATIONS",
            ],
            instruction: "Suggest nutrition, movement and comfort measures for this phase.",
        },
        SectionSpec {
            key: "whenToSeeDoctor",
            variants: &[
                "⚠️ **WHEN TO SEE A DOCTOR**",
                "**WHEN TO SEE A DOCTOR**",
                "## WHEN TO SEE A DOCTOR",
                "WHEN TO SEE A DOCTOR",
            ],
            instruction: "State the specific signs that should prompt a medical visit.",
        },
    ],
    keyword_rules: &[
        KeywordRule {
            section: "cycleAnalysis",
            needle: "irregular",
            advisory: "Irregular timing noted; keep tracking for three more cycles and discuss the pattern with a gynecologist.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "symptomPatterns",
            needle: "heavy",
            advisory: "Heavy flow reported; watch for signs of anemia such as dizziness or unusual tiredness.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "symptomPatterns",
            needle: "clot",
            advisory: "Clots larger than a coin should be evaluated by a healthcare provider.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "symptomPatterns",
            needle: "pain",
            advisory: "Track pain intensity each day; severe period pain can point to endometriosis.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "healthRecommendations",
            needle: "iron",
            advisory: "Include iron-rich foods such as leafy greens, legumes and lean red meat.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "healthRecommendations",
            needle: "exercise",
            advisory: "Gentle exercise like walking or yoga can ease cramps.",
            kind: AdvisoryKind::Recommendation,
        },
    ],
    threshold_rules: &[
        ThresholdRule {
            field: "painLevel",
            label: "period pain",
            high: Bound::Above(7.0),
            moderate: Bound::Above(4.0),
            advisory: "Pain above 7/10 is not something to push through; speak with a clinician about relief options.",
        },
        ThresholdRule {
            field: "cycleLength",
            label: "cycle length",
            high: Bound::Outside(21.0, 35.0),
            moderate: Bound::Outside(24.0, 32.0),
            advisory: "Cycles shorter than 21 or longer than 35 days are worth raising with a gynecologist.",
        },
        ThresholdRule {
            field: "periodLength",
            label: "period length",
            high: Bound::Above(7.0),
            moderate: Bound::Above(6.0),
            advisory: "Periods lasting longer than a week should be checked by a healthcare provider.",
        },
        ThresholdRule {
            field: "stressLevel",
            label: "stress",
            high: Bound::Above(6.0),
            moderate: Bound::Above(3.0),
            advisory: "High stress can shift ovulation and delay your period; build in recovery time.",
        },
    ],
    reminders: &[
        "Log the first day of your next period to keep predictions accurate.",
        "Keep period products and a heat pad handy in the days before your period.",
        "Schedule your annual gynecological check-up.",
    ],
    fallback: &[
        FallbackSection {
            key: "cycleAnalysis",
            template: "Your most recent period started on {lastPeriodDate}. Cycle length: {cycleLength} days; period length: {periodLength} days. Typical cycles run from 21 to 35 days with periods of two to seven days.",
        },
        FallbackSection {
            key: "symptomPatterns",
            template: "You described your flow as {flowIntensity} and rated pain at {painLevel}. Symptoms logged: {symptoms}. Mood: {mood}. Comparing these across cycles helps reveal your personal pattern.",
        },
        FallbackSection {
            key: "healthRecommendations",
            template: "Stay hydrated, favor iron-rich foods during your period and keep up gentle movement. Your stress level today was {stressLevel}; rest and regular sleep support a steadier cycle.",
        },
        FallbackSection {
            key: "whenToSeeDoctor",
            template: "See a doctor if you soak through a pad or tampon every hour, pass large clots, have pain that stops daily activities, or your cycles fall outside 21 to 35 days for several months.",
        },
    ],
};
