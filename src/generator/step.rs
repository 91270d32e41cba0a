//! Steps of the generation flow.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorStep {
    #[default]
    Config,
    Generating,
    Success,
}

impl GeneratorStep {
    pub fn as_str(self) -> &'static str {
        match self {
            GeneratorStep::Config => "config",
            GeneratorStep::Generating => "generating",
            GeneratorStep::Success => "success",
        }
    }
}

impl fmt::Display for GeneratorStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
