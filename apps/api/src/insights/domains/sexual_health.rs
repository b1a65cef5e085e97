use super::*;

pub static CONFIG: DomainConfig = DomainConfig {
    domain: Domain::SexualHealth,
    title: "Sexual Health",
    specialist: "You are a non-judgmental sexual health clinician providing confidential, evidence-based guidance.",
    fields: &[
        FieldSpec {
            key: "sexualActivity",
            label: "Sexual activity since last entry",
            kind: FieldKind::Text,
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "protectionUsed",
            label: "Protection used",
            kind: FieldKind::Text,
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "numberOfPartners",
            label: "Number of partners (last 3 months)",
            kind: FieldKind::Number { min: 0.0, max: 100.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "contraception",
            label: "Contraception method",
            kind: FieldKind::Text,
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "lastStiTest",
            label: "Last STI test",
            kind: FieldKind::Date,
            placeholder: NOT_RECORDED,
        },
        FieldSpec {
            key: "libido",
            label: "Libido (1-10)",
            kind: FieldKind::Scale { min: 1.0, max: 10.0 },
            placeholder: NOT_SPECIFIED,
        },
        FieldSpec {
            key: "painDuringSex",
            label: "Pain during sex (0-10)",
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
            key: "concerns",
            label: "Concerns",
            kind: FieldKind::Text,
            placeholder: NOT_SPECIFIED,
        },
    ],
    sections: &[
        SectionSpec {
            key: "sexualHealthAssessment",
            variants: &[
                "🔍 **SEXUAL HEALTH ASSESSMENT**",
                "**SEXUAL HEALTH ASSESSMENT**",
                "## SEXUAL HEALTH ASSESSMENT",
                "SEXUAL HEALTH ASSESSMENT",
            ],
            instruction: "Assess the patient's current sexual health from the logged details.",
        },
        SectionSpec {
            key: "riskFactors",
            variants: &[
                "⚠️ **RISK FACTORS**",
                "**RISK FACTORS**",
                "## RISK FACTORS",
                "RISK FACTORS",
            ],
            instruction: "List specific risks such as STI exposure, unprotected sex or pain.",
        },
        SectionSpec {
            key: "preventionStrategies",
            variants: &[
                "🛡️ **PREVENTION STRATEGIES**",
                "**PREVENTION STRATEGIES**",
                "## PREVENTION STRATEGIES",
                "PREVENTION STRATEGIES",
            ],
            instruction: "Describe protection, testing and vaccination options that fit this patient.",
        },
        SectionSpec {
            key: "recommendations",
            variants: &[
                "💡 **PERSONALIZED RECOMMENDATIONS**",
                "**PERSONALIZED RECOMMENDATIONS**",
                "## PERSONALIZED RECOMMENDATIONS",
                "PERSONALIZED RECOMMENDATIONS",
            ],
            instruction: "Give clear next steps, including when to see a clinician.",
        },
    ],
    keyword_rules: &[
        KeywordRule {
            section: "riskFactors",
            needle: "sti",
            advisory: "Regular STI screening is recommended, at least yearly and with every new partner.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "riskFactors",
            needle: "unprotected",
            advisory: "Unprotected sex raises STI and pregnancy risk; consider condoms or other barrier methods.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "riskFactors",
            needle: "multiple partners",
            advisory: "With multiple partners, condoms plus regular testing offer the best protection.",
            kind: AdvisoryKind::RiskFlag,
        },
        KeywordRule {
            section: "sexualHealthAssessment",
            needle: "pain",
            advisory: "Pain during sex is common but not normal; a gynecologist or urologist can help find the cause.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "preventionStrategies",
            needle: "hpv",
            advisory: "Ask your provider about the HPV vaccine if you have not completed the series.",
            kind: AdvisoryKind::Recommendation,
        },
        KeywordRule {
            section: "preventionStrategies",
            needle: "prep",
            advisory: "PrEP substantially reduces HIV risk; discuss eligibility with a clinician.",
            kind: AdvisoryKind::Recommendation,
        },
    ],
    threshold_rules: &[
        ThresholdRule {
            field: "painDuringSex",
            label: "pain during sex",
            high: Bound::Above(6.0),
            moderate: Bound::Above(2.0),
            advisory: "Pain at this level should be checked by a clinician rather than waited out.",
        },
        ThresholdRule {
            field: "numberOfPartners",
            label: "partner count",
            high: Bound::Above(3.0),
            moderate: Bound::Above(1.0),
            advisory: "With several recent partners, testing every three to six months is a good rhythm.",
        },
    ],
    reminders: &[
        "Book your next STI screening.",
        "Keep condoms or other barrier methods within reach.",
        "Review your contraception plan with your provider once a year.",
    ],
    fallback: &[
        FallbackSection {
            key: "sexualHealthAssessment",
            template: "You reported sexual activity as {sexualActivity} with {numberOfPartners} partner(s) in the last three months, using {contraception} for contraception. Libido was rated {libido} and pain during sex {painDuringSex}.",
        },
        FallbackSection {
            key: "riskFactors",
            template: "Protection used: {protectionUsed}. Symptoms noted: {symptoms}. Your last STI test was {lastStiTest}. New or unusual discharge, sores, itching or burning are reasons to get tested promptly.",
        },
        FallbackSection {
            key: "preventionStrategies",
            template: "Condoms used consistently protect against most STIs. Routine screening, HPV vaccination and, where relevant, PrEP further reduce risk. Choose the combination that fits your relationships and comfort.",
        },
        FallbackSection {
            key: "recommendations",
            template: "Keep your screening schedule up to date and bring these concerns to your next appointment: {concerns}. Seek care sooner if symptoms appear or pain persists.",
        },
    ],
};
