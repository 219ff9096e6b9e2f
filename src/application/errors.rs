// Errors raised while setting up or running a fixture.
//
// Purpose
// - Separate broken test setups (errors) from projection defects (failed checks).
//
// Responsibilities
// - Caller misuse: attributes that do not exist, values of an unexpected type.
// - Carry projection and transform failures through untouched.
// - Mismatched attribute values are never an error; reporters record them as failed checks.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("{type_name} has no attribute named `{attribute}`")]
    MissingAttribute {
        type_name: String,
        attribute: String,
    },

    #[error("{type_name}.{attribute} holds {actual}, expected {expected}")]
    AttributeType {
        type_name: String,
        attribute: String,
        expected: String,
        actual: String,
    },

    #[error("report could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Projection(anyhow::Error),

    #[error(transparent)]
    Transform(anyhow::Error),

    #[error("fixture has already been executed")]
    AlreadyExecuted,
}

impl FixtureError {
    pub fn missing_attribute(type_name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            type_name: type_name.into(),
            attribute: attribute.into(),
        }
    }
}
