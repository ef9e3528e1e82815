use crate::source::{ConfigTable, Scalar};
use ::toml::{Table, Value};

impl ConfigTable for Table {
    fn scalar(&self, key: &str) -> Option<Scalar<'_>> {
        let scalar = match self.get(key)? {
            Value::Table(_) => return None,
            Value::Integer(i) => Scalar::Integer(*i),
            Value::String(s) => Scalar::String(s),
            Value::Boolean(b) => Scalar::Boolean(*b),
            Value::Float(_) => Scalar::Other("float"),
            Value::Datetime(_) => Scalar::Other("datetime"),
            Value::Array(_) => Scalar::Other("array"),
        };
        Some(scalar)
    }

    fn tables(&self) -> Vec<(&str, &Self)> {
        self.iter()
            .filter_map(|(name, value)| match value {
                Value::Table(t) => Some((name.as_str(), t)),
                _ => None,
            })
            .collect()
    }
}
