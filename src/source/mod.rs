//! Config source layer: a format-independent view of "a table with scalar
//! fields and named child tables".
//!
//! The plan builder only talks to [`ConfigTable`]; TOML and JSON documents
//! both implement it. Child tables come back in document order, which is why
//! both backends are built with `preserve_order`.

pub mod json;
pub mod toml;

use crate::plan::PlanError;

/// A non-table value as seen by the builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Integer(i64),
    String(&'a str),
    Boolean(bool),
    /// Anything else (floats, arrays, dates); carries a type name for errors.
    Other(&'static str),
}

impl Scalar<'_> {
    /// Short description of the value for error messages.
    pub fn describe(&self) -> String {
        match self {
            Scalar::Integer(i) => format!("integer {i}"),
            Scalar::String(s) => format!("string {s:?}"),
            Scalar::Boolean(b) => format!("boolean {b}"),
            Scalar::Other(kind) => (*kind).to_string(),
        }
    }
}

pub trait ConfigTable {
    /// The non-table value stored under `key`, if any.
    fn scalar(&self, key: &str) -> Option<Scalar<'_>>;

    /// Child tables in document order.
    fn tables(&self) -> Vec<(&str, &Self)>;

    fn contains(&self, key: &str) -> bool {
        self.scalar(key).is_some()
    }
}

/// Typed field access on a named table. Every error names the table and the
/// key so a failing config can be fixed without guessing.
pub struct Fields<'a, T: ?Sized> {
    node: &'a str,
    table: &'a T,
}

impl<'a, T: ConfigTable + ?Sized> Fields<'a, T> {
    pub fn new(node: &'a str, table: &'a T) -> Self {
        Self { node, table }
    }

    fn invalid(&self, field: &'static str, expected: &'static str, found: Scalar<'_>) -> PlanError {
        PlanError::InvalidField {
            node: self.node.to_string(),
            field,
            expected,
            found: found.describe(),
        }
    }

    fn missing(&self, field: &'static str) -> PlanError {
        PlanError::MissingField {
            node: self.node.to_string(),
            field,
        }
    }

    fn integer<N: TryFrom<i64>>(
        &self,
        field: &'static str,
        expected: &'static str,
    ) -> Result<Option<N>, PlanError> {
        match self.table.scalar(field) {
            None => Ok(None),
            Some(Scalar::Integer(v)) => N::try_from(v)
                .map(Some)
                .map_err(|_| self.invalid(field, expected, Scalar::Integer(v))),
            Some(other) => Err(self.invalid(field, expected, other)),
        }
    }

    pub fn u64(&self, field: &'static str) -> Result<Option<u64>, PlanError> {
        self.integer(field, "a non-negative integer")
    }

    pub fn u32(&self, field: &'static str) -> Result<Option<u32>, PlanError> {
        self.integer(field, "a non-negative 32-bit integer")
    }

    pub fn port(&self, field: &'static str) -> Result<Option<u16>, PlanError> {
        self.integer(field, "a port number between 0 and 65535")
    }

    pub fn string(&self, field: &'static str) -> Result<Option<String>, PlanError> {
        match self.table.scalar(field) {
            None => Ok(None),
            Some(Scalar::String(s)) => Ok(Some(s.to_string())),
            Some(other) => Err(self.invalid(field, "a string", other)),
        }
    }

    pub fn boolean(&self, field: &'static str) -> Result<Option<bool>, PlanError> {
        match self.table.scalar(field) {
            None => Ok(None),
            Some(Scalar::Boolean(b)) => Ok(Some(b)),
            Some(other) => Err(self.invalid(field, "a boolean", other)),
        }
    }

    /// Turn an absent optional field into `MissingField`.
    pub fn required<V>(&self, field: &'static str, value: Option<V>) -> Result<V, PlanError> {
        value.ok_or_else(|| self.missing(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(text: &str) -> ::toml::Table {
        text.parse().unwrap()
    }

    #[test]
    fn typed_reads() {
        let t = table(
            r#"
            Frequency = 4250000
            Host = "127.0.0.2"
            Port = 4200
            IQPassthrough = true
            "#,
        );
        let f = Fields::new("s", &t);

        assert_eq!(f.u64("Frequency").unwrap(), Some(4_250_000));
        assert_eq!(f.string("Host").unwrap().as_deref(), Some("127.0.0.2"));
        assert_eq!(f.port("Port").unwrap(), Some(4200));
        assert_eq!(f.boolean("IQPassthrough").unwrap(), Some(true));
        assert_eq!(f.u64("SampleRate").unwrap(), None);
    }

    #[test]
    fn bad_values() {
        let t = table(
            r#"
            Frequency = -5
            Port = 70000
            Host = 12
            SampleRate = 1.5
            "#,
        );
        let f = Fields::new("s", &t);

        assert!(matches!(
            f.u64("Frequency"),
            Err(PlanError::InvalidField { field: "Frequency", .. })
        ));
        assert!(matches!(
            f.port("Port"),
            Err(PlanError::InvalidField { field: "Port", .. })
        ));
        assert!(matches!(
            f.string("Host"),
            Err(PlanError::InvalidField { field: "Host", .. })
        ));
        assert!(matches!(
            f.u64("SampleRate"),
            Err(PlanError::InvalidField { field: "SampleRate", .. })
        ));
    }

    #[test]
    fn invalid_field_reports_what_was_found() {
        let t = table(
            r#"
            Port = 70000
            Host = 12
            SampleRate = 1.5
            IQPassthrough = "yes"
            "#,
        );
        let f = Fields::new("s", &t);

        assert_eq!(
            f.u64("SampleRate"),
            Err(PlanError::InvalidField {
                node: "s".into(),
                field: "SampleRate",
                expected: "a non-negative integer",
                found: "float".into(),
            })
        );
        assert_eq!(
            f.port("Port").unwrap_err().to_string(),
            "'s': field Port must be a port number between 0 and 65535, found integer 70000"
        );
        assert!(matches!(
            f.string("Host"),
            Err(PlanError::InvalidField { ref found, .. }) if found == "integer 12"
        ));
        assert!(matches!(
            f.boolean("IQPassthrough"),
            Err(PlanError::InvalidField { ref found, .. }) if found == "string \"yes\""
        ));
    }

    #[test]
    fn required_field() {
        let t = table("");
        let f = Fields::new("root", &t);
        let err = f.required("CenterFrequency", f.u64("CenterFrequency").unwrap());
        assert_eq!(
            err,
            Err(PlanError::MissingField {
                node: "root".into(),
                field: "CenterFrequency",
            })
        );
    }
}
