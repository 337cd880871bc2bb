// Mapping rules, the rule-list editor model, and the built-in preset table.
use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};

/// One value-copy instruction. `id` only identifies the rule in a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingRule {
    pub input_key: Cow<'static, str>,
    pub output_key: Cow<'static, str>,
    pub id: u32,
}

impl MappingRule {
    pub fn new(input_key: impl Into<String>, output_key: impl Into<String>, id: u32) -> Self {
        Self {
            input_key: Cow::Owned(input_key.into()),
            output_key: Cow::Owned(output_key.into()),
            id,
        }
    }

    const fn preset(output_key: &'static str, id: u32) -> Self {
        Self {
            input_key: Cow::Borrowed(PRESET_INPUT_KEY),
            output_key: Cow::Borrowed(output_key),
            id,
        }
    }
}

pub const PRESET_INPUT_KEY: &str = "en.prompt";

/// Copies the English prompt into each sibling language object.
pub const PRESET_RULES: [MappingRule; 11] = [
    MappingRule::preset("ar.prompt", 0),
    MappingRule::preset("bn.prompt", 1),
    MappingRule::preset("de.prompt", 2),
    MappingRule::preset("es.prompt", 3),
    MappingRule::preset("fr.prompt", 4),
    MappingRule::preset("hi.prompt", 5),
    MappingRule::preset("it.prompt", 6),
    MappingRule::preset("ja.prompt", 7),
    MappingRule::preset("ko.prompt", 8),
    MappingRule::preset("pt.prompt", 9),
    MappingRule::preset("ru.prompt", 10),
];

/// Ordered rule list with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingSet {
    rules: Vec<MappingRule>,
}

impl MappingSet {
    pub fn new(rules: Vec<MappingRule>) -> Result<Self> {
        for (i, r) in rules.iter().enumerate() {
            if rules[..i].iter().any(|prev| prev.id == r.id) {
                return Err(TransformError::DuplicateRuleId(r.id));
            }
        }
        Ok(Self { rules })
    }

    /// Single rule with empty keys; what a fresh editor starts with.
    pub fn blank() -> Self {
        Self {
            rules: vec![MappingRule::new("", "", 0)],
        }
    }

    pub fn preset() -> Self {
        Self {
            rules: PRESET_RULES.to_vec(),
        }
    }

    /// Appends a rule with id one past the current maximum (0 when empty).
    pub fn push(
        &mut self,
        input_key: impl Into<String>,
        output_key: impl Into<String>,
    ) -> Result<u32> {
        let id = match self.rules.iter().map(|r| r.id).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or(TransformError::RuleIdExhausted(max))?,
            None => 0,
        };
        self.rules.push(MappingRule::new(input_key, output_key, id));
        Ok(id)
    }

    pub fn update(
        &mut self,
        id: u32,
        input_key: impl Into<String>,
        output_key: impl Into<String>,
    ) -> Result<()> {
        let rule = self
            .rules
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(TransformError::UnknownRuleId(id))?;
        rule.input_key = Cow::Owned(input_key.into());
        rule.output_key = Cow::Owned(output_key.into());
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> Result<MappingRule> {
        let pos = self
            .rules
            .iter()
            .position(|r| r.id == id)
            .ok_or(TransformError::UnknownRuleId(id))?;
        Ok(self.rules.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingRule> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[MappingRule] {
        &self.rules
    }
}

impl<'a> IntoIterator for &'a MappingSet {
    type Item = &'a MappingRule;
    type IntoIter = std::slice::Iter<'a, MappingRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_order_and_ids() {
        let langs = ["ar", "bn", "de", "es", "fr", "hi", "it", "ja", "ko", "pt", "ru"];
        assert_eq!(PRESET_RULES.len(), langs.len());
        for (i, (rule, lang)) in PRESET_RULES.iter().zip(langs).enumerate() {
            assert_eq!(rule.id as usize, i);
            assert_eq!(rule.input_key, "en.prompt");
            assert_eq!(rule.output_key, format!("{}.prompt", lang));
        }
    }

    #[test]
    fn editing_keeps_ids_unique() {
        let mut set = MappingSet::blank();
        let a = set.push("en.title", "de.title").unwrap();
        let b = set.push("en.body", "de.body").unwrap();
        assert_eq!((a, b), (1, 2));
        set.remove(1).unwrap();
        assert_eq!(set.push("x", "y"), Ok(3));
        set.update(0, "en.prompt", "fr.prompt").unwrap();
        assert_eq!(set.as_slice()[0].output_key, "fr.prompt");
        assert_eq!(set.remove(42), Err(TransformError::UnknownRuleId(42)));
        assert_eq!(set.update(42, "a", "b"), Err(TransformError::UnknownRuleId(42)));

        let mut empty = MappingSet::default();
        assert_eq!(empty.push("a", "b"), Ok(0));
    }

    #[test]
    fn push_after_max_id_fails_without_duplicating() {
        let mut set = MappingSet::new(vec![
            MappingRule::new("a", "b", 0),
            MappingRule::new("c", "d", u32::MAX),
        ])
        .unwrap();
        assert_eq!(set.push("e", "f"), Err(TransformError::RuleIdExhausted(u32::MAX)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn duplicate_ids_rejected() {
        let rules = vec![MappingRule::new("a", "b", 3), MappingRule::new("c", "d", 3)];
        assert_eq!(MappingSet::new(rules), Err(TransformError::DuplicateRuleId(3)));
    }

    #[test]
    fn external_shape_is_camel_case() {
        let rule: MappingRule =
            serde_json::from_str(r#"{"inputKey":"en.prompt","outputKey":"ko.prompt","id":7}"#)
                .unwrap();
        assert_eq!(rule, MappingRule::new("en.prompt", "ko.prompt", 7));
        let back = serde_json::to_value(&PRESET_RULES[0]).unwrap();
        assert_eq!(
            back,
            serde_json::json!({"inputKey": "en.prompt", "outputKey": "ar.prompt", "id": 0})
        );
    }
}
