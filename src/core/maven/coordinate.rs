use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::core::error::{MetaError, MetaResult};

const DEFAULT_EXTENSION: &str = "jar";

/// A Maven coordinate as written in library `name` fields.
///
/// Supported formats:
///   `group:artifact:version`
///   `group:artifact:version:classifier`
///   `group:artifact:version@extension`
///   `group:artifact:version:classifier@extension`
///
/// Equality, ordering and hashing all go through the canonical string, so two
/// coordinates are the same exactly when they print the same.
#[derive(Debug, Clone)]
pub struct MavenCoordinate {
    group: String,
    artifact: String,
    version: String,
    classifier: Option<String>,
    /// File extension. Defaults to `"jar"`.
    extension: String,
}

/// Which part of a coordinate an arch-dependence marker is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateField {
    Group,
    Artifact,
}

/// Substring markers of libraries that ship per-architecture natives.
///
/// LWJGL (any group mentioning it) and the Java-ObjC bridge. JNA handles its
/// platform selection itself and is deliberately absent.
pub const ARCH_DEPENDENT_MARKERS: &[(CoordinateField, &str)] = &[
    (CoordinateField::Group, "lwjgl"),
    (CoordinateField::Artifact, "objc"),
];

const LWJGL_GROUPS: [&str; 4] = [
    "org.lwjgl",
    "org.lwjgl.lwjgl",
    "net.java.jinput",
    "net.java.jutils",
];

const LOG4J_GROUP: &str = "org.apache.logging.log4j";

impl MavenCoordinate {
    /// Build a coordinate from its parts. `extension` falls back to `"jar"`.
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
        classifier: Option<String>,
        extension: Option<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
            // An empty classifier is the same as none.
            classifier: classifier.filter(|c| !c.is_empty()),
            extension: extension.unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
        }
    }

    /// Parse a coordinate string.
    ///
    /// # Examples
    /// ```
    /// use launcher_meta::MavenCoordinate;
    ///
    /// let c = MavenCoordinate::parse("net.minecraft:launchwrapper:1.5:natives@zip").unwrap();
    /// assert_eq!(c.filename(), "launchwrapper-1.5-natives.zip");
    /// ```
    pub fn parse(coord: &str) -> MetaResult<Self> {
        // Split off @extension first
        let (body, extension) = match coord.split_once('@') {
            Some((body, ext)) => (body, Some(ext.to_string())),
            None => (coord, None),
        };

        let parts: Vec<&str> = body.split(':').collect();

        match parts.as_slice() {
            [group, artifact, version] => {
                Ok(Self::new(*group, *artifact, *version, None, extension))
            }
            [group, artifact, version, classifier] => Ok(Self::new(
                *group,
                *artifact,
                *version,
                Some(classifier.to_string()),
                extension,
            )),
            _ => Err(MetaError::MalformedCoordinate(coord.to_string())),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Construct the group path portion (`net/minecraft`).
    pub fn group_path(&self) -> String {
        self.group.replace('.', "/")
    }

    /// Build the artifact filename.
    ///
    /// `artifact-version[-classifier].extension`
    pub fn filename(&self) -> String {
        match &self.classifier {
            Some(c) => format!(
                "{}-{}-{}.{}",
                self.artifact, self.version, c, self.extension
            ),
            None => format!("{}-{}.{}", self.artifact, self.version, self.extension),
        }
    }

    /// Directory holding the artifact, with a trailing slash:
    /// `<group_path>/<artifact>/<version>/`
    pub fn base(&self) -> String {
        format!("{}/{}/{}/", self.group_path(), self.artifact, self.version)
    }

    /// Path relative to a Maven repository root.
    ///
    /// Mirrors the standard repository layout:
    /// `<group_path>/<artifact>/<version>/<filename>`
    pub fn repository_path(&self) -> String {
        self.base() + &self.filename()
    }

    /// Full URL of this artifact under the given repository root.
    pub fn url(&self, repo_base: &str) -> String {
        format!(
            "{}/{}",
            repo_base.trim_end_matches('/'),
            self.repository_path()
        )
    }

    /// Whether this library needs a separate build per CPU architecture.
    pub fn is_arch_dependent(&self) -> bool {
        ARCH_DEPENDENT_MARKERS
            .iter()
            .any(|(field, marker)| self.field(*field).contains(marker))
    }

    /// Whether this is one of the LWJGL 2 era libraries.
    pub fn is_lwjgl(&self) -> bool {
        LWJGL_GROUPS.contains(&self.group.as_str())
    }

    pub fn is_log4j(&self) -> bool {
        self.group == LOG4J_GROUP
    }

    fn field(&self, field: CoordinateField) -> &str {
        match field {
            CoordinateField::Group => &self.group,
            CoordinateField::Artifact => &self.artifact,
        }
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if let Some(c) = &self.classifier {
            write!(f, ":{}", c)?;
        }
        if self.extension != DEFAULT_EXTENSION {
            write!(f, "@{}", self.extension)?;
        }
        Ok(())
    }
}

impl FromStr for MavenCoordinate {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq for MavenCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for MavenCoordinate {}

impl PartialOrd for MavenCoordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MavenCoordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string().cmp(&other.to_string())
    }
}

impl Hash for MavenCoordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

// ── Serde: always the canonical string ──────────────────

impl Serialize for MavenCoordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MavenCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
