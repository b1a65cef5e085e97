// Insight prompt template.
// Replace: {specialist}, {title}, {profile}, {entry_heading}, {fields},
//          {history_heading}, {history}, {format}, {no_filler_instruction}, {safety_instruction}

pub const INSIGHT_PROMPT_TEMPLATE: &str = r#"{specialist}

Analyze the latest {title} log below and write personalized, supportive insights for this person.

PATIENT PROFILE:
{profile}

{entry_heading}:
{fields}

{history_heading}:
{history}

REQUIRED OUTPUT FORMAT:
Use EXACTLY these section headings, in this order, each on its own line, followed by 2-4 sentences:
{format}

RULES:
1. Refer to the values above; do not invent measurements or history.
2. Where a value is "Not specified" or "Not recorded", do not guess it.
3. {no_filler_instruction}
4. {safety_instruction}"#;

pub const NO_HISTORY: &str = "No previous entries recorded.";
pub const NO_FIELDS_RECORDED: &str = "no fields recorded";
