pub mod openai {
    pub const API_BASE: &str = "https://api.openai.com/v1";
    pub const COMPLETIONS_ENDPOINT: &str = "/completions";
    pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";
}

pub mod defaults {
    pub const MODEL: &str = "text-davinci-003";
    pub const PROMPT: &str = "Apa itu wibu?";
    pub const TEMPERATURE: f64 = 0.9;
    pub const MAX_TOKENS: u32 = 600;
    pub const TOP_P: f64 = 1.0;
    pub const FREQUENCY_PENALTY: f64 = 0.0;
    pub const PRESENCE_PENALTY: f64 = 0.6;

    /// How many of the first newline occurrences are removed from the first choice.
    pub const NEWLINES_TO_STRIP: usize = 2;
}
