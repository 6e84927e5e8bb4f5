//! Locale-bound instruction templates and response schemas.
//!
//! Each flow has exactly one template per locale. Selecting a template never
//! mixes languages.

use mkulima_core::{hash_prompt, Locale, ResponseSchema, SchemaType};

const ADVICE_SYSTEM_SW: &str = "Wewe ni mtaalamu wa kilimo (Agro-Expert) wa Tanzania. Toa ushauri bora kwa Kiswahili. Toa jibu katika mfumo wa JSON wenye sehemu: 'advice' (ushauri wenyewe), 'reasoning' (sababu za kitaalamu za ushauri huo), na 'confidence' (namba 0-100 ya uhakika).";

const ADVICE_SYSTEM_EN: &str = "You are a professional agricultural expert specializing in East African farming. Provide accurate advice in clear English. Return a JSON response with keys: 'advice', 'reasoning', and 'confidence' (0-100).";

const PEST_PROMPT_SW: &str = "Tambua mdudu au ugonjwa huu kwenye picha. Toa jina la ugonjwa, matibabu ya asili au ya kisasa, na kiwango chako cha uhakika (confidence percentage).";

const PEST_PROMPT_EN: &str = "Identify the pest or disease in this image. Provide the diagnosis, organic/chemical treatment, and your confidence level.";

/// System instruction for the advice flow.
pub fn advice_system_instruction(locale: Locale) -> &'static str {
    match locale {
        Locale::Sw => ADVICE_SYSTEM_SW,
        Locale::En => ADVICE_SYSTEM_EN,
    }
}

/// Prompt for the crop research flow.
pub fn crop_research_prompt(crop_name: &str, locale: Locale) -> String {
    match locale {
        Locale::Sw => format!(
            "Toa utafiti wa kina kuhusu zao la {}. Jumuisha: hali bora ya hewa, udongo, wadudu wa kawaida, na mavuno yanayotarajiwa. Jibu kwa JSON.",
            crop_name
        ),
        Locale::En => format!(
            "Provide detailed research for {}. Include: ideal climate, soil requirements, common pests, and expected yield. Return as JSON.",
            crop_name
        ),
    }
}

/// Text part sent alongside a pest image.
pub fn pest_prompt(locale: Locale) -> &'static str {
    match locale {
        Locale::Sw => PEST_PROMPT_SW,
        Locale::En => PEST_PROMPT_EN,
    }
}

/// Advisory schema for crop research. No field is required.
pub fn crop_research_schema() -> ResponseSchema {
    ResponseSchema::object()
        .property("climate", SchemaType::String)
        .property("soil", SchemaType::String)
        .property("pests", SchemaType::String)
        .property("yield", SchemaType::String)
}

/// Enforced schema for pest diagnosis. All three fields are required.
pub fn pest_diagnosis_schema() -> ResponseSchema {
    ResponseSchema::object()
        .property("diagnosis", SchemaType::String)
        .property("treatment", SchemaType::String)
        .property("confidence", SchemaType::Number)
        .required(["diagnosis", "treatment", "confidence"])
}

/// Fingerprints of every fixed template, as `(name, sha256)` pairs.
pub fn fingerprints() -> Vec<(&'static str, String)> {
    vec![
        ("advice.sw", hash_prompt(ADVICE_SYSTEM_SW)),
        ("advice.en", hash_prompt(ADVICE_SYSTEM_EN)),
        ("crop.sw", hash_prompt(&crop_research_prompt("{}", Locale::Sw))),
        ("crop.en", hash_prompt(&crop_research_prompt("{}", Locale::En))),
        ("pest.sw", hash_prompt(PEST_PROMPT_SW)),
        ("pest.en", hash_prompt(PEST_PROMPT_EN)),
    ]
}
