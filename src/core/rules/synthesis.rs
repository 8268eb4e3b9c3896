// ─── Rule Synthesis ───
// Expands the compact `archRules` mapping into explicit platform rules.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::platform::{OsName, PlatformRule, RuleAction};

/// `{action → [os names]}` in the order the entries were written.
///
/// Synthesis emits rules in this order, so the mapping keeps insertion
/// order instead of sorting by action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchRules {
    entries: Vec<(RuleAction, Vec<OsName>)>,
}

impl ArchRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the arches for `action`. A repeated action replaces the earlier
    /// list but keeps its original position.
    pub fn insert(&mut self, action: RuleAction, arches: Vec<OsName>) {
        match self.entries.iter_mut().find(|(a, _)| *a == action) {
            Some((_, existing)) => *existing = arches,
            None => self.entries.push((action, arches)),
        }
    }

    pub fn get(&self, action: RuleAction) -> Option<&[OsName]> {
        self.entries
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, arches)| arches.as_slice())
    }

    pub fn contains(&self, action: RuleAction) -> bool {
        self.get(action).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RuleAction, &[OsName])> {
        self.entries
            .iter()
            .map(|(action, arches)| (*action, arches.as_slice()))
    }
}

impl FromIterator<(RuleAction, Vec<OsName>)> for ArchRules {
    fn from_iter<I: IntoIterator<Item = (RuleAction, Vec<OsName>)>>(iter: I) -> Self {
        let mut rules = ArchRules::new();
        for (action, arches) in iter {
            rules.insert(action, arches);
        }
        rules
    }
}

impl Serialize for ArchRules {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (action, arches) in &self.entries {
            map.serialize_entry(action, arches)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ArchRules {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArchRulesVisitor;

        impl<'de> Visitor<'de> for ArchRulesVisitor {
            type Value = ArchRules;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of rule actions to OS names")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rules = ArchRules::new();
                while let Some((action, arches)) =
                    access.next_entry::<RuleAction, Vec<OsName>>()?
                {
                    rules.insert(action, arches);
                }
                Ok(rules)
            }
        }

        deserializer.deserialize_map(ArchRulesVisitor)
    }
}

/// Merge explicit `rules` with the expansion of `arch_rules`.
///
/// - No (or empty) arch rules: `rules` is returned unchanged, absent stays absent.
/// - Otherwise the explicit rules come first. If there are none and the arch
///   rules disallow anything, a blanket `allow` leads the list so the library
///   stays enabled everywhere that is not explicitly disallowed.
/// - Each `(action, arch)` pair is then appended in mapping order, then list order.
pub fn synthesize_rules(
    rules: Option<&[PlatformRule]>,
    arch_rules: Option<&ArchRules>,
) -> Option<Vec<PlatformRule>> {
    let arch_rules = match arch_rules {
        Some(a) if !a.is_empty() => a,
        _ => return rules.map(<[PlatformRule]>::to_vec),
    };

    let mut out: Vec<PlatformRule> = rules.map(<[PlatformRule]>::to_vec).unwrap_or_default();

    if out.is_empty() && arch_rules.contains(RuleAction::Disallow) {
        out.push(PlatformRule::unconditional(RuleAction::Allow));
    }

    for (action, arches) in arch_rules.iter() {
        out.extend(arches.iter().map(|arch| PlatformRule::for_os(action, *arch)));
    }

    Some(out)
}
