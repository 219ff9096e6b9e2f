// Crate entry point. Re-export modules so tests and downstream crates can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No fixture logic here.
//
// How it is used
// - Implement Entity, Message and Attributes for the types under test, then run a
//   ProjectionFixture with an action that calls its assertion helpers.

pub mod core {
    pub mod attributes;
    pub mod descriptors;
    pub mod ports;
    pub mod projection;
    pub mod transforms;
}

pub mod application {
    pub mod errors;
    pub mod fixtures {
        pub mod equality;
        pub mod projection;
    }
}

pub mod adapters {
    pub mod tracing_reporter;
}

pub mod shell {
    pub mod settings;
    pub mod telemetry;
}

pub use crate::adapters::tracing_reporter::{Check, Report, TracingReporter};
pub use crate::application::errors::FixtureError;
pub use crate::application::fixtures::equality::Equality;
pub use crate::application::fixtures::projection::{FixtureState, ProjectionFixture};
pub use crate::core::attributes::{AttributeName, AttributeValue, Attributes, values_equal};
pub use crate::core::descriptors::{Entity, Message};
pub use crate::core::ports::Reporter;
pub use crate::core::projection::Projection;
