use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CodegradeConfig {
    pub analyzer: Option<AnalyzerConfig>,
    pub narrative: Option<NarrativeConfig>,
    pub gate: Option<GateConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_binary")]
    pub binary: String,
    #[serde(default = "default_checks")]
    pub checks: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            checks: default_checks(),
        }
    }
}

fn default_binary() -> String {
    "cppcheck".to_string()
}

fn default_checks() -> String {
    "all".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct NarrativeConfig {
    #[serde(default = "default_model")]
    pub model: String,
    /// Optional path to a prompt template containing the literal
    /// `{source_code}` placeholder. The embedded default is used when unset.
    pub prompt_template: Option<String>,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            prompt_template: None,
        }
    }
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GateConfig {
    /// Final scores below this threshold fail the gate.
    pub fail_under: Option<f32>,
}

impl CodegradeConfig {
    pub fn analyzer(&self) -> AnalyzerConfig {
        self.analyzer.clone().unwrap_or_default()
    }

    pub fn narrative(&self) -> NarrativeConfig {
        self.narrative.clone().unwrap_or_default()
    }

    pub fn fail_under(&self) -> Option<f32> {
        self.gate.as_ref().and_then(|gate| gate.fail_under)
    }
}
