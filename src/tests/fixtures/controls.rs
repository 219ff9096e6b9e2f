// Shared controls for fixture unit tests: an example entity, event and projections.
// Compiled into the crate only during tests (cfg(test) in src/lib.rs).

use crate::core::descriptors::{Entity, Message};
use crate::core::projection::Projection;
use crate::core::transforms;
use chrono::{DateTime, Utc};

pub const EXAMPLE_ID: &str = "abc";
pub const AMOUNT: i64 = 10;
pub const TIME: &str = "2024-01-01T00:00:00Z";
pub const PROCESSED_TIME: &str = "2024-01-02T00:00:00Z";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Example {
    pub id: Option<String>,
    pub amount: i64,
    pub time: Option<DateTime<Utc>>,
    pub updated_time: Option<DateTime<Utc>>,
}
impl Entity for Example {}
crate::impl_attributes!(Example {
    id,
    amount,
    time,
    updated_time,
});

#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub example_id: String,
    pub amount: i64,
    pub time: String,
    pub processed_time: String,
}
impl Message for Recorded {
    fn message_type(&self) -> &str {
        "Recorded"
    }
}
crate::impl_attributes!(Recorded {
    example_id,
    amount,
    time,
    processed_time,
});

/// Builder function returning the entity before any projection ran.
pub fn make_new_example() -> Example {
    Example {
        id: None,
        amount: AMOUNT,
        time: None,
        updated_time: None,
    }
}

/// Builder function returning a canonical event instance for tests.
pub fn make_recorded_event() -> Recorded {
    Recorded {
        example_id: EXAMPLE_ID.to_string(),
        amount: AMOUNT,
        time: TIME.to_string(),
        processed_time: PROCESSED_TIME.to_string(),
    }
}

pub struct ExampleProjection;

impl Projection<Example, Recorded> for ExampleProjection {
    fn apply(&self, entity: &mut Example, event: &Recorded) -> anyhow::Result<()> {
        entity.id = Some(event.example_id.clone());
        entity.amount = event.amount;
        entity.time = Some(transforms::time(event.time.clone())?);
        entity.updated_time = Some(transforms::time(event.processed_time.clone())?);
        Ok(())
    }
}

/// Leaves the amount untouched.
pub struct StaleAmountProjection;

impl Projection<Example, Recorded> for StaleAmountProjection {
    fn apply(&self, entity: &mut Example, event: &Recorded) -> anyhow::Result<()> {
        entity.id = Some(event.example_id.clone());
        entity.updated_time = Some(transforms::time(event.processed_time.clone())?);
        Ok(())
    }
}
