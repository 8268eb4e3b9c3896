// ─── Version Document ───
// One version of one package (`<uid>/<version>.json` in the index).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dependency::Dependency;
use crate::core::assets::AssetIndexRef;
use crate::core::document::{current_format_version, datetime, CanonicalDocument, Versioned};
use crate::core::library::Library;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaVersion {
    #[serde(
        rename = "formatVersion",
        alias = "format_version",
        default = "current_format_version"
    )]
    pub format_version: u32,
    pub name: String,
    pub version: String,
    pub uid: String,
    /// `release`, `snapshot`, `old_alpha`, ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub version_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volatile: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<Vec<Dependency>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<Vec<Dependency>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub libraries: Option<Vec<Library>>,
    #[serde(
        rename = "assetIndex",
        alias = "asset_index",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub asset_index: Option<AssetIndexRef>,
    #[serde(
        rename = "mavenFiles",
        alias = "maven_files",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub maven_files: Option<Vec<Library>>,
    #[serde(
        rename = "mainJar",
        alias = "main_jar",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub main_jar: Option<Library>,
    #[serde(
        rename = "jarMods",
        alias = "jar_mods",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub jar_mods: Option<Vec<Library>>,
    #[serde(
        rename = "mainClass",
        alias = "main_class",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub main_class: Option<String>,
    #[serde(
        rename = "appletClass",
        alias = "applet_class",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub applet_class: Option<String>,
    #[serde(
        rename = "minecraftArguments",
        alias = "minecraft_arguments",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub minecraft_arguments: Option<String>,
    #[serde(
        rename = "releaseTime",
        alias = "release_time",
        with = "datetime::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub release_time: Option<DateTime<Utc>>,
    #[serde(
        rename = "compatibleJavaMajors",
        alias = "compatible_java_majors",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub compatible_java_majors: Option<Vec<u32>>,
    #[serde(
        rename = "+traits",
        alias = "additional_traits",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_traits: Option<Vec<String>>,
    #[serde(
        rename = "+tweakers",
        alias = "additional_tweakers",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_tweakers: Option<Vec<String>>,
}

impl MetaVersion {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        uid: impl Into<String>,
    ) -> Self {
        Self {
            format_version: current_format_version(),
            name: name.into(),
            version: version.into(),
            uid: uid.into(),
            ..Default::default()
        }
    }

    /// Every library entry of the document: `libraries`, `mavenFiles`,
    /// `mainJar` and `jarMods`.
    pub fn all_libraries_mut(&mut self) -> impl Iterator<Item = &mut Library> {
        self.libraries
            .iter_mut()
            .flatten()
            .chain(self.maven_files.iter_mut().flatten())
            .chain(self.main_jar.iter_mut())
            .chain(self.jar_mods.iter_mut().flatten())
    }

    /// Run arch-trait derivation over every library of the document.
    pub fn add_arch_dependent_traits(&mut self) {
        for library in self.all_libraries_mut() {
            library.add_arch_dependent_trait();
        }
    }
}

impl CanonicalDocument for MetaVersion {}

impl Versioned for MetaVersion {
    fn format_version(&self) -> u32 {
        self.format_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::{parse, write, META_FORMAT_VERSION};
    use crate::core::error::MetaError;
    use crate::core::library::ARCH_DEPENDENT_TRAIT;
    use crate::core::settings::MetaSettings;
    use chrono::TimeZone;
    use serde_json::{json, Value};

    fn sample() -> MetaVersion {
        MetaVersion {
            version_type: Some("release".into()),
            main_class: Some("net.minecraft.client.Minecraft".into()),
            release_time: Some(Utc.with_ymd_and_hms(2013, 4, 25, 15, 45, 0).unwrap()),
            additional_traits: Some(vec!["legacyLaunch".into(), "texturepacks".into()]),
            libraries: Some(vec![Library::new("org.lwjgl.lwjgl:lwjgl:2.9.0".parse().unwrap())]),
            ..MetaVersion::new("Minecraft", "1.5.2", "net.minecraft")
        }
    }

    fn as_json(doc: &MetaVersion) -> Value {
        serde_json::from_slice(&write(doc).unwrap()).unwrap()
    }

    #[test]
    fn new_defaults_to_current_format_version() {
        let doc = MetaVersion::new("Minecraft", "1.20.1", "net.minecraft");
        assert_eq!(doc.format_version, META_FORMAT_VERSION);
        assert_eq!(doc.libraries, None);
    }

    #[test]
    fn writes_aliases_and_omits_absent_fields() {
        let out = as_json(&sample());
        assert_eq!(
            out,
            json!({
                "+traits": ["legacyLaunch", "texturepacks"],
                "formatVersion": 1,
                "libraries": [{ "name": "org.lwjgl.lwjgl:lwjgl:2.9.0" }],
                "mainClass": "net.minecraft.client.Minecraft",
                "name": "Minecraft",
                "releaseTime": "2013-04-25T15:45:00+00:00",
                "type": "release",
                "uid": "net.minecraft",
                "version": "1.5.2"
            })
        );
    }

    #[test]
    fn key_order_is_independent_of_construction_order() {
        let mut a = MetaVersion::new("Minecraft", "1.5.2", "net.minecraft");
        a.main_class = Some("Main".into());
        a.order = Some(3);

        let mut b = MetaVersion::new("Minecraft", "1.5.2", "net.minecraft");
        b.order = Some(3);
        b.main_class = Some("Main".into());

        let bytes = write(&a).unwrap();
        assert_eq!(bytes, write(&b).unwrap());

        let text = String::from_utf8(bytes).unwrap();
        let positions: Vec<usize> = ["formatVersion", "mainClass", "name", "order", "uid", "version"]
            .iter()
            .map(|k| text.find(&format!("\"{k}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn parses_snake_case_and_wire_names() {
        let settings = MetaSettings::default();
        let wire: MetaVersion = parse(&write(&sample()).unwrap(), &settings).unwrap();
        assert_eq!(wire, sample());

        let snake = json!({
            "format_version": 1,
            "name": "Minecraft",
            "version": "1.5.2",
            "uid": "net.minecraft",
            "type": "release",
            "main_class": "net.minecraft.client.Minecraft",
            "release_time": "2013-04-25T15:45:00+00:00",
            "additional_traits": ["legacyLaunch", "texturepacks"],
            "libraries": [{ "name": "org.lwjgl.lwjgl:lwjgl:2.9.0" }]
        });
        let parsed: MetaVersion = parse(snake.to_string().as_bytes(), &settings).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn library_arch_rules_are_resolved_on_write() {
        let raw = json!({
            "formatVersion": 1,
            "name": "LWJGL 3",
            "version": "3.3.1",
            "uid": "org.lwjgl3",
            "libraries": [{
                "name": "org.lwjgl:lwjgl-glfw:3.3.1",
                "archRules": { "disallow": ["osx-arm64", "linux-arm64"] }
            }]
        });
        let doc: MetaVersion = parse(raw.to_string().as_bytes(), &MetaSettings::default()).unwrap();
        let out = as_json(&doc);
        assert_eq!(
            out["libraries"][0],
            json!({
                "name": "org.lwjgl:lwjgl-glfw:3.3.1",
                "rules": [
                    { "action": "allow" },
                    { "action": "disallow", "os": { "name": "osx-arm64" } },
                    { "action": "disallow", "os": { "name": "linux-arm64" } }
                ]
            })
        );
        assert!(!String::from_utf8(write(&doc).unwrap()).unwrap().contains("archRules"));
    }

    #[test]
    fn arch_rules_follow_document_order_through_parse() {
        let raw = br#"{
            "formatVersion": 1,
            "name": "LWJGL 3",
            "version": "3.3.1",
            "uid": "org.lwjgl3",
            "libraries": [{
                "name": "org.lwjgl:lwjgl-glfw:3.3.1",
                "archRules": { "disallow": ["osx-arm64"], "allow": ["linux-arm64"] }
            }]
        }"#;
        let doc: MetaVersion = parse(raw, &MetaSettings::default()).unwrap();
        let out = as_json(&doc);
        assert_eq!(
            out["libraries"][0]["rules"],
            json!([
                { "action": "allow" },
                { "action": "disallow", "os": { "name": "osx-arm64" } },
                { "action": "allow", "os": { "name": "linux-arm64" } }
            ])
        );
    }

    #[test]
    fn hand_built_newer_documents_are_not_written() {
        let doc = MetaVersion {
            format_version: META_FORMAT_VERSION + 1,
            ..MetaVersion::new("Minecraft", "1.20.1", "net.minecraft")
        };
        assert!(matches!(
            doc.to_canonical_bytes(),
            Err(MetaError::UnsupportedFormatVersion { .. })
        ));
    }

    #[test]
    fn arch_traits_cover_every_library_list() {
        let mut doc = MetaVersion {
            libraries: Some(vec![
                Library::new("org.lwjgl:lwjgl:3.3.1".parse().unwrap()),
                Library::new("com.google.guava:guava:21.0".parse().unwrap()),
            ]),
            main_jar: Some(Library::new("ca.weblite:java-objc-bridge:1.1".parse().unwrap())),
            ..MetaVersion::new("LWJGL 3", "3.3.1", "org.lwjgl3")
        };
        doc.add_arch_dependent_traits();

        let libs = doc.libraries.as_ref().unwrap();
        assert!(libs[0].has_trait(ARCH_DEPENDENT_TRAIT));
        assert!(!libs[1].has_trait(ARCH_DEPENDENT_TRAIT));
        assert!(doc.main_jar.as_ref().unwrap().has_trait(ARCH_DEPENDENT_TRAIT));
    }

    #[test]
    fn invalid_nested_values_are_typed_errors() {
        let settings = MetaSettings::default();
        let bad_os = json!({
            "name": "x", "version": "1", "uid": "x",
            "libraries": [{ "name": "a:b:1", "rules": [{ "action": "allow", "os": { "name": "beos" } }] }]
        });
        assert!(matches!(
            parse::<MetaVersion>(bad_os.to_string().as_bytes(), &settings),
            Err(MetaError::InvalidEnumValue { value, .. }) if value == "beos"
        ));

        let bad_coord = json!({
            "name": "x", "version": "1", "uid": "x",
            "libraries": [{ "name": "a:b" }]
        });
        assert!(matches!(
            parse::<MetaVersion>(bad_coord.to_string().as_bytes(), &settings),
            Err(MetaError::MalformedCoordinate(c)) if c == "a:b"
        ));

        let missing_uid = json!({ "name": "x", "version": "1" });
        assert!(matches!(
            parse::<MetaVersion>(missing_uid.to_string().as_bytes(), &settings),
            Err(MetaError::SchemaValidation(_))
        ));
    }
}
