//! Deployment profiles.
//!
//! A [`Profile`] fixes the dialect the model is asked to use, the language
//! of its explanations and every user-facing string the core produces.
//! Instruction and failure templates may contain `{text}` (the user's input
//! as sent) and `{TEXT}` (the same input upper-cased).

use super::classifier::Classification;

/// Everything needed to answer one kind of request.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskTemplate {
    pub system: &'static str,
    pub instruction: &'static str,
    pub failure: &'static str,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub conjugation: TaskTemplate,
    pub correction: TaskTemplate,
    pub temperature: f32,
    pub empty_input: &'static str,
}

impl Profile {
    /// European Portuguese grammar explained to Russian speakers.
    pub fn european_portuguese_for_russian() -> Self {
        Self {
            name: "pt-PT/ru",
            conjugation: TaskTemplate {
                system: CONJUGATION_SYSTEM,
                instruction: CONJUGATION_INSTRUCTION,
                failure: "❌ Ошибка при спряжении глагола '{text}'. Попробуйте снова позже.",
                max_tokens: 1500,
            },
            correction: TaskTemplate {
                system: CORRECTION_SYSTEM,
                instruction: CORRECTION_INSTRUCTION,
                failure: "❌ Ошибка при исправлении фразы. Попробуйте снова позже.",
                max_tokens: 1200,
            },
            temperature: 0.1,
            empty_input: "❌ Пожалуйста, отправьте текст для обработки.",
        }
    }

    pub fn template(&self, classification: Classification) -> &TaskTemplate {
        match classification {
            Classification::VerbForm => &self.conjugation,
            Classification::Phrase => &self.correction,
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::european_portuguese_for_russian()
    }
}

impl TaskTemplate {
    pub fn render_instruction(&self, text: &str) -> String {
        fill(self.instruction, text)
    }

    pub fn render_failure(&self, text: &str) -> String {
        fill(self.failure, text)
    }
}

fn fill(template: &str, text: &str) -> String {
    template
        .replace("{TEXT}", &text.to_uppercase())
        .replace("{text}", text)
}

const CONJUGATION_SYSTEM: &str = "You are an expert in European Portuguese (português europeu) \
helping Russian speakers learn Portuguese. You specialize in verb conjugations using European \
Portuguese standards and provide explanations in Russian. Always double-check your conjugations \
for accuracy.";

const CONJUGATION_INSTRUCTION: &str = r#"
You are an expert in European Portuguese (português europeu) helping Russian speakers learn Portuguese. Given the Portuguese verb "{text}" (in any form), provide ALL possible conjugations organized by tense and person using EUROPEAN PORTUGUESE standards and spelling.

IMPORTANT: Use European Portuguese conventions including:
- Closed vowels (ê, ô) where appropriate
- European Portuguese spelling and pronunciation patterns
- Formal register with "tu" and "vós" forms

Please format the response exactly like this example:

**ГЛАГОЛ: {TEXT}**

**ИНФИНИТИВ:**
• Infinitivo: [infinitive form]

**НАСТОЯЩЕЕ ВРЕМЯ (PRESENTE DO INDICATIVO):**
• Eu [conjugation]
• Tu [conjugation]
• Ele/Ela [conjugation]
• Nós [conjugation]
• Vós [conjugation]
• Eles/Elas [conjugation]

**ПРОСТОЕ ПРОШЕДШЕЕ (PRETÉRITO PERFEITO):**
• Eu [conjugation]
• Tu [conjugation]
• Ele/Ela [conjugation]
• Nós [conjugation]
• Vós [conjugation]
• Eles/Elas [conjugation]

**НЕЗАВЕРШЕННОЕ ПРОШЕДШЕЕ (PRETÉRITO IMPERFEITO):**
• Eu [conjugation]
• Tu [conjugation]
• Ele/Ela [conjugation]
• Nós [conjugation]
• Vós [conjugation]
• Eles/Elas [conjugation]

**ПРОСТОЕ БУДУЩЕЕ (FUTURO DO PRESENTE):**
• Eu [conjugation]
• Tu [conjugation]
• Ele/Ela [conjugation]
• Nós [conjugation]
• Vós [conjugation]
• Eles/Elas [conjugation]

**УСЛОВНОЕ НАКЛОНЕНИЕ (CONDICIONAL):**
• Eu [conjugation]
• Tu [conjugation]
• Ele/Ela [conjugation]
• Nós [conjugation]
• Vós [conjugation]
• Eles/Elas [conjugation]

**СОСЛАГАТЕЛЬНОЕ НАКЛОНЕНИЕ (PRESENTE DO SUBJUNTIVO):**
• Que eu [conjugation]
• Que tu [conjugation]
• Que ele/ela [conjugation]
• Que nós [conjugation]
• Que vós [conjugation]
• Que eles/elas [conjugation]

**ПОВЕЛИТЕЛЬНОЕ НАКЛОНЕНИЕ (IMPERATIVO):**
• Tu [conjugation]
• Ele/Ela [conjugation]
• Nós [conjugation]
• Vós [conjugation]
• Eles/Elas [conjugation]

If the word is not a valid Portuguese verb, respond with: "❌ '{text}' не является действительным португальским глаголом."
"#;

const CORRECTION_SYSTEM: &str = "You are an expert European Portuguese teacher specializing in \
preposition corrections and grammar analysis. You help Russian-speaking students by providing \
detailed, accurate corrections with special focus on prepositions. Always double-check your \
corrections for accuracy and use European Portuguese standards. Provide thorough explanations \
in Russian.";

const CORRECTION_INSTRUCTION: &str = r#"
You are an expert European Portuguese (português europeu) teacher helping Russian speakers learn Portuguese. Analyze the following Portuguese phrase with SPECIAL ATTENTION to prepositions and their correct usage.

CRITICAL REQUIREMENTS:
1. Use EUROPEAN PORTUGUESE standards and spelling (not Brazilian Portuguese)
2. DOUBLE-CHECK all prepositions (de, em, por, para, a, com, sobre, entre, etc.) for accuracy
3. Pay extra attention to preposition contractions (do, da, no, na, pelo, pela, ao, à, etc.)
4. Verify verb-preposition combinations (phrasal verbs)
5. Check for correct usage of "a" vs "para" vs "de" vs "em"
6. Ensure proper agreement and placement of prepositions

Phrase to analyze: "{text}"

STEPS TO FOLLOW:
1. First, identify ALL prepositions in the phrase
2. Check each preposition for correctness in context
3. Verify preposition contractions are properly formed
4. Double-check verb-preposition combinations
5. Provide corrected version if needed

Format your response like this:

**ИСХОДНАЯ ФРАЗА:** {text}

**ИСПРАВЛЕННАЯ ФРАЗА:** [corrected phrase using European Portuguese OR "Фраза верна!"]

**АНАЛИЗ ПРЕДЛОГОВ:**
[List all prepositions found and verify their correctness]

**ОБЪЯСНЕНИЕ:**
[Detailed explanation IN RUSSIAN about:
- What preposition errors were found (if any)
- Why the corrections were made
- Rules for proper preposition usage
- European Portuguese vs Brazilian differences if relevant
- Grammar rules that apply]

**ПРАВИЛО:** [Key grammar rule to remember, if applicable]

Be thorough, encouraging and educational. Write all explanations in Russian language. Always double-check your corrections before providing the final answer.
"#;
