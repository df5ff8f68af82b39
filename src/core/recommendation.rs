use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallMethod {
    #[serde(rename = "native")]
    Native,
    #[serde(rename = "wsl")]
    Wsl,
    #[serde(rename = "container")]
    Container,
    #[serde(rename = "web")]
    Web,
}

impl InstallMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            InstallMethod::Native => "native",
            InstallMethod::Wsl => "wsl",
            InstallMethod::Container => "container",
            InstallMethod::Web => "web",
        }
    }
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub method: InstallMethod,
    pub setup_commands: String,
    pub notes: String,
    pub requires_web_fallback: bool,
}
