use crate::source::{ConfigTable, Scalar};
use serde_json::{Map, Value};

impl ConfigTable for Map<String, Value> {
    fn scalar(&self, key: &str) -> Option<Scalar<'_>> {
        let scalar = match self.get(key)? {
            Value::Object(_) => return None,
            Value::Number(n) => match n.as_i64() {
                Some(i) => Scalar::Integer(i),
                None => Scalar::Other("number"),
            },
            Value::String(s) => Scalar::String(s),
            Value::Bool(b) => Scalar::Boolean(*b),
            Value::Array(_) => Scalar::Other("array"),
            Value::Null => Scalar::Other("null"),
        };
        Some(scalar)
    }

    fn tables(&self) -> Vec<(&str, &Self)> {
        self.iter()
            .filter_map(|(name, value)| match value {
                Value::Object(o) => Some((name.as_str(), o)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn objects_are_tables() {
        let v: Value = serde_json::from_str(
            r#"{"SampleRate": 500000, "Gain": 1.5, "Zulu": {"Frequency": 1}, "Alpha": {}}"#,
        )
        .unwrap();
        let map = v.as_object().unwrap();

        let names: Vec<&str> = map.tables().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["Zulu", "Alpha"]);
        assert_eq!(map.scalar("SampleRate"), Some(Scalar::Integer(500_000)));
        assert_eq!(map.scalar("Gain"), Some(Scalar::Other("number")));
        assert!(map.contains("SampleRate"));
        assert!(!map.contains("Zulu"));
    }
}
