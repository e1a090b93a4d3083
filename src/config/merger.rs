//! Layering of YAML config files.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively (`host:` settings combine)
//! - Sequences are replaced entirely (a later `tasks:` list wins as a whole)
//! - Null values in an overlay delete the corresponding key from the base
//! - Scalars in an overlay replace scalars in the base
//! - An empty file (null document) changes nothing

use serde_yaml::Value;

/// Deep merge two YAML values, `overlay` taking precedence.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }

        (_, overlay) => overlay.clone(),
    }
}

/// Merge config documents in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .filter(|config| !config.is_null())
        .fold(Value::Mapping(Default::default()), |acc, config| {
            deep_merge(&acc, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn host_settings_merge_per_key() {
        let base = yaml(
            r#"
host:
  executable: /opt/Slicer/Slicer
  python: /opt/Slicer/bin/PythonSlicer
"#,
        );
        let overlay = yaml(
            r#"
host:
  executable: /home/me/Slicer-5.6/Slicer
"#,
        );

        let result = deep_merge(&base, &overlay);

        assert_eq!(result["host"]["executable"], "/home/me/Slicer-5.6/Slicer");
        assert_eq!(result["host"]["python"], "/opt/Slicer/bin/PythonSlicer");
    }

    #[test]
    fn task_lists_are_replaced_not_merged() {
        let base = yaml(
            r#"
tasks:
  - extension: SlicerMorph
  - package: pynrrd
"#,
        );
        let overlay = yaml(
            r#"
tasks:
  - package: pandas
"#,
        );

        let result = deep_merge(&base, &overlay);
        let tasks = result["tasks"].as_sequence().unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0]["package"], "pandas");
    }

    #[test]
    fn null_removes_inherited_value() {
        let base = yaml("report: out.json\nstrict: true");
        let overlay = yaml("report: null");

        let result = deep_merge(&base, &overlay);

        assert!(result.get("report").is_none());
        assert_eq!(result["strict"], true);
    }

    #[test]
    fn merge_configs_merges_multiple_in_order() {
        let configs = vec![yaml("a: 1\nb: 2"), yaml("b: 3\nc: 4"), yaml("c: 5")];

        let result = merge_configs(&configs);

        assert_eq!(result["a"], 1);
        assert_eq!(result["b"], 3);
        assert_eq!(result["c"], 5);
    }

    #[test]
    fn empty_document_changes_nothing() {
        let configs = vec![yaml("strict: true"), yaml("")];

        let result = merge_configs(&configs);

        assert_eq!(result["strict"], true);
    }

    #[test]
    fn merge_empty_configs_returns_empty() {
        let result = merge_configs(&[]);
        assert!(result.as_mapping().unwrap().is_empty());
    }
}
