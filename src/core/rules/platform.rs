// ─── Platform Rules ───
// Allow/disallow decisions, optionally scoped to an operating system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::{MetaError, OS_NAME_KIND, RULE_ACTION_KIND};

/// Operating-system names understood by the rule engine — closed set, no magic strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String")]
pub enum OsName {
    #[serde(rename = "osx")]
    Osx,
    #[serde(rename = "osx-arm64")]
    OsxArm64,
    #[serde(rename = "linux")]
    Linux,
    #[serde(rename = "linux-arm64")]
    LinuxArm64,
    #[serde(rename = "windows")]
    Windows,
}

impl OsName {
    pub const ALL: [OsName; 5] = [
        OsName::Osx,
        OsName::OsxArm64,
        OsName::Linux,
        OsName::LinuxArm64,
        OsName::Windows,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OsName::Osx => "osx",
            OsName::OsxArm64 => "osx-arm64",
            OsName::Linux => "linux",
            OsName::LinuxArm64 => "linux-arm64",
            OsName::Windows => "windows",
        }
    }
}

impl fmt::Display for OsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsName {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| MetaError::InvalidEnumValue {
                kind: OS_NAME_KIND,
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for OsName {
    type Error = MetaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RuleAction {
    Allow,
    Disallow,
}

impl RuleAction {
    pub fn as_str(self) -> &'static str {
        match self {
            RuleAction::Allow => "allow",
            RuleAction::Disallow => "disallow",
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleAction {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allow" => Ok(RuleAction::Allow),
            "disallow" => Ok(RuleAction::Disallow),
            other => Err(MetaError::InvalidEnumValue {
                kind: RULE_ACTION_KIND,
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for RuleAction {
    type Error = MetaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The `os` part of a rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OsConstraint {
    pub name: OsName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl OsConstraint {
    pub fn named(name: OsName) -> Self {
        Self {
            name,
            version: None,
        }
    }
}

/// A single rule. Lists of these are evaluated first-match-wins by the
/// launcher; this crate only produces and serializes them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformRule {
    pub action: RuleAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<OsConstraint>,
}

impl PlatformRule {
    /// Unconditional rule, applies on every platform.
    pub fn unconditional(action: RuleAction) -> Self {
        Self { action, os: None }
    }

    pub fn for_os(action: RuleAction, name: OsName) -> Self {
        Self {
            action,
            os: Some(OsConstraint::named(name)),
        }
    }
}
