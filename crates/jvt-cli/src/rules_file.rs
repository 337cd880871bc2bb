use std::path::Path;

use jvt_core::{MappingRule, MappingSet};

/// Reads a JSON array of `{inputKey, outputKey, id}` rules.
pub fn load_rules(path: &Path) -> Result<MappingSet, String> {
    let data = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let rules: Vec<MappingRule> =
        serde_json::from_str(&data).map_err(|e| format!("invalid rules file: {}", e))?;
    MappingSet::new(rules).map_err(|e| e.to_string())
}

/// Splits `IN=OUT` at the first `=`.
pub fn parse_map_arg(arg: &str) -> Result<(&str, &str), String> {
    arg.split_once('=')
        .ok_or_else(|| format!("expected IN=OUT, got {:?}", arg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_rules_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("rules.json");
        std::fs::write(
            &p,
            r#"[{"inputKey":"en.title","outputKey":"de.title","id":4},
               {"inputKey":"en.prompt","outputKey":"de.prompt","id":1}]"#,
        )
        .unwrap();
        let set = load_rules(&p).unwrap();
        let ids: Vec<u32> = set.iter().map(|r| r.id).collect();
        assert_eq!(ids, [4, 1]);
        assert_eq!(set.as_slice()[1].output_key, "de.prompt");
    }

    #[test]
    fn rejects_duplicate_ids_and_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("rules.json");
        std::fs::write(
            &p,
            r#"[{"inputKey":"a","outputKey":"b","id":0},{"inputKey":"c","outputKey":"d","id":0}]"#,
        )
        .unwrap();
        assert_eq!(load_rules(&p).unwrap_err(), "duplicate rule id 0");

        std::fs::write(&p, "{").unwrap();
        assert!(load_rules(&p).unwrap_err().starts_with("invalid rules file"));
        assert!(load_rules(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn map_arg_splits_once() {
        assert_eq!(parse_map_arg("en.prompt=de.prompt"), Ok(("en.prompt", "de.prompt")));
        assert_eq!(parse_map_arg("a=b=c"), Ok(("a", "b=c")));
        assert_eq!(parse_map_arg("=x"), Ok(("", "x")));
        assert!(parse_map_arg("nope").is_err());
    }
}
