use serde::{Deserialize, Serialize};

/// One unmodified input row, as column name to value pairs in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    /// Build a record from `(column, value)` pairs.
    ///
    /// A repeated column keeps its first position but takes the later value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields: Vec<(String, String)> = Vec::new();
        for (column, value) in pairs {
            let column = column.into();
            let value = value.into();
            match fields.iter_mut().find(|(name, _)| *name == column) {
                Some(existing) => existing.1 = value,
                None => fields.push((column, value)),
            }
        }
        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Column names in file order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One output row in the fixed four-column import schema.
///
/// Field renames are the output header; they must match
/// [`target_headers`](crate::target_headers).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Tags")]
    pub tags: String,
}
