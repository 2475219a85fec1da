// File: crates/chart-hover/src/config.rs
// Summary: Chart configuration (margins, per-mode value domains, leave policy) with JSON loading.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scale::ValueDomain;
use crate::types::{Margins, Mode};

/// What happens to the hover snapshot when the pointer leaves the surface
/// or a touch ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeavePolicy {
    /// Drop the snapshot; the sidebar falls back to its placeholder.
    #[default]
    Clear,
    /// Keep showing the last hovered sample.
    RetainLast,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub margins: Margins,
    pub line_domain: ValueDomain,
    pub candle_domain: ValueDomain,
    pub leave_policy: LeavePolicy,
    pub initial_mode: Mode,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            line_domain: ValueDomain::line(),
            candle_domain: ValueDomain::candle(),
            leave_policy: LeavePolicy::default(),
            initial_mode: Mode::default(),
        }
    }
}

impl ChartConfig {
    /// Parse a JSON config; omitted fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn domain_for(&self, mode: Mode) -> ValueDomain {
        match mode {
            Mode::Line => self.line_domain,
            Mode::Candle => self.candle_domain,
        }
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_leave_policy(mut self, policy: LeavePolicy) -> Self {
        self.leave_policy = policy;
        self
    }

    pub fn with_domains(mut self, line: ValueDomain, candle: ValueDomain) -> Self {
        self.line_domain = line;
        self.candle_domain = candle;
        self
    }
}
