use serde::{Deserialize, Serialize};

/// Direction in which value moves for the account initiating a call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlowType {
    /// Value leaves the initiating account.
    Outflow,
    /// Value is received by the initiating account.
    Inflow,
    /// Value may move either way depending on call parameters.
    Bothflow,
}

impl FlowType {
    pub const ALL: [FlowType; 3] = [FlowType::Outflow, FlowType::Inflow, FlowType::Bothflow];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlowType::Outflow => "OUTFLOW",
            FlowType::Inflow => "INFLOW",
            FlowType::Bothflow => "BOTHFLOW",
        }
    }
}

impl std::fmt::Display for FlowType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
