use serde::{Deserialize, Serialize};

/// Declaration of one tunable parameter, for host-side configuration UIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    pub name: String,
    pub default: f64,
    pub description: String,
}

impl ParameterSpec {
    pub fn new(name: impl Into<String>, default: f64, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default,
            description: description.into(),
        }
    }
}
