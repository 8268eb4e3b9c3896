use serde::{Deserialize, Serialize};

/// A `requires` / `conflicts` entry: another package, optionally pinned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dependency {
    pub uid: String,
    /// Exact version required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equals: Option<String>,
    /// Preferred version when the user has not chosen one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggests: Option<String>,
}

impl Dependency {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            equals: None,
            suggests: None,
        }
    }

    pub fn equals(uid: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            equals: Some(version.into()),
            ..Self::new(uid)
        }
    }

    pub fn suggests(uid: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            suggests: Some(version.into()),
            ..Self::new(uid)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pinned_dependency_serializes_without_suggests() {
        let dep = Dependency::equals("net.minecraft", "1.20.1");
        assert_eq!(
            serde_json::to_value(&dep).unwrap(),
            json!({ "uid": "net.minecraft", "equals": "1.20.1" })
        );
    }

    #[test]
    fn uid_is_required() {
        assert!(serde_json::from_value::<Dependency>(json!({ "suggests": "3.3.1" })).is_err());
        let dep: Dependency =
            serde_json::from_value(json!({ "uid": "org.lwjgl3", "suggests": "3.3.1" })).unwrap();
        assert_eq!(dep, Dependency::suggests("org.lwjgl3", "3.3.1"));
    }
}
