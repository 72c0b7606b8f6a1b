use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Edge from a commit to one of its parents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CommitEdge {
    /// Child commit SHA.
    pub source: String,
    /// Parent commit SHA.
    pub target: String,
}

impl CommitEdge {
    /// Creates an edge from `source` to its parent `target`.
    pub fn new<S: Into<String>, T: Into<String>>(source: S, target: T) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Edge identifier, `{source}-{target}`.
    pub fn id(&self) -> String {
        format!("{}-{}", self.source, self.target)
    }
}

impl Serialize for CommitEdge {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CommitEdge", 3)?;
        state.serialize_field("id", &self.id())?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("target", &self.target)?;
        state.end()
    }
}
