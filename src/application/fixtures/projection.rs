// Projection fixture: apply a projection to an entity and assert what it copied.
//
// Purpose
// - Remove the boilerplate of projection unit tests: build, apply, report, assert.
//
// Responsibilities
// - Keep a control copy of the entity taken before the projection runs.
// - Apply the projection exactly once, inside an "Apply <event> to <entity>" context.
// - Run the optional action with the fixture after the projection succeeded.
// - assert_attributes_copied: attribute equality between event and entity, types ignored.
// - assert_transformed_and_copied: transform the event value, compare with the entity value.
//   The event value must hold the transform's input type; the result is compared typed.
//
// Errors
// - Projection and transform errors are returned untouched and end the run.
// - Mismatches are failed checks on the reporter; the action keeps going.

use crate::adapters::tracing_reporter::{Report, TracingReporter};
use crate::application::errors::FixtureError;
use crate::application::fixtures::equality::Equality;
use crate::core::attributes::{AttributeName, AttributeValue, Attributes, values_equal};
use crate::core::descriptors::{Entity, Message, readable_type_name, shorten};
use crate::core::ports::Reporter;
use crate::core::projection::Projection;

pub type Action<'a, TProjection, TEntity, TEvent, TReporter> = Box<
    dyn FnOnce(
            &mut ProjectionFixture<'a, TProjection, TEntity, TEvent, TReporter>,
        ) -> Result<(), FixtureError>
        + 'a,
>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureState {
    Constructed,
    Executing,
    Completed,
}

pub struct ProjectionFixture<'a, TProjection, TEntity, TEvent, TReporter = TracingReporter> {
    projection: TProjection,
    control_entity: TEntity,
    entity: TEntity,
    event: TEvent,
    action: Option<Action<'a, TProjection, TEntity, TEvent, TReporter>>,
    reporter: TReporter,
    state: FixtureState,
}

impl<'a, TProjection, TEntity, TEvent> ProjectionFixture<'a, TProjection, TEntity, TEvent>
where
    TProjection: Projection<TEntity, TEvent>,
    TEntity: Entity + Attributes + Clone,
    TEvent: Message + Attributes,
{
    /// Fixture reporting through tracing, with detail settings read from the environment.
    pub fn build(projection: TProjection, entity: TEntity, event: TEvent) -> Self {
        Self::with_reporter(projection, entity, event, TracingReporter::from_env())
    }

    /// Builds, runs, and hands back the report.
    pub fn call<F>(
        projection: TProjection,
        entity: TEntity,
        event: TEvent,
        action: F,
    ) -> Result<Report, FixtureError>
    where
        F: FnOnce(&mut Self) -> Result<(), FixtureError> + 'a,
    {
        let mut fixture = Self::build(projection, entity, event).with_action(action);
        fixture.run()?;
        Ok(fixture.into_reporter().into_report())
    }

    pub fn report(&self) -> &Report {
        self.reporter.report()
    }
}

impl<'a, TProjection, TEntity, TEvent, TReporter>
    ProjectionFixture<'a, TProjection, TEntity, TEvent, TReporter>
where
    TProjection: Projection<TEntity, TEvent>,
    TEntity: Entity + Attributes + Clone,
    TEvent: Message + Attributes,
    TReporter: Reporter,
{
    pub fn with_reporter(
        projection: TProjection,
        entity: TEntity,
        event: TEvent,
        reporter: TReporter,
    ) -> Self {
        let control_entity = entity.clone();
        Self {
            projection,
            control_entity,
            entity,
            event,
            action: None,
            reporter,
            state: FixtureState::Constructed,
        }
    }

    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut Self) -> Result<(), FixtureError> + 'a,
    {
        self.action = Some(Box::new(action));
        self
    }

    pub fn run(&mut self) -> Result<(), FixtureError> {
        if self.state != FixtureState::Constructed {
            return Err(FixtureError::AlreadyExecuted);
        }
        self.state = FixtureState::Executing;

        let projection_name = self.projection.projection_name().to_string();
        let event_type = self.event.message_type().to_string();
        let entity_type = self.entity.entity_type().to_string();

        self.reporter
            .detail(&format!("Projection Class: {projection_name}"));
        self.reporter
            .enter_context(&format!("Apply {event_type} to {entity_type}"));
        let result = self.apply_and_act(&projection_name);
        self.reporter.exit_context();

        self.state = FixtureState::Completed;
        result
    }

    fn apply_and_act(&mut self, projection_name: &str) -> Result<(), FixtureError> {
        let event_class = format!("Event Class: {}", self.event.type_path());
        let entity_class = format!("Entity Class: {}", self.entity.type_path());
        self.reporter.detail(&event_class);
        self.reporter.detail(&entity_class);

        self.projection
            .apply(&mut self.entity, &self.event)
            .map_err(FixtureError::Projection)?;
        tracing::debug!(projection = %shorten(projection_name), "projection applied");

        if let Some(action) = self.action.take() {
            action(self)?;
        }
        Ok(())
    }

    /// Checks the listed attributes were copied verbatim from the event to the entity.
    pub fn assert_attributes_copied<I, A>(
        &mut self,
        attribute_names: I,
    ) -> Result<(), FixtureError>
    where
        I: IntoIterator<Item = A>,
        A: Into<AttributeName>,
    {
        let attribute_names = attribute_names.into_iter().map(Into::into).collect();
        self.compare_attributes(Some(attribute_names))
    }

    /// Checks every attribute of the event was copied verbatim onto the entity.
    pub fn assert_all_attributes_copied(&mut self) -> Result<(), FixtureError> {
        self.compare_attributes(None)
    }

    fn compare_attributes(
        &mut self,
        attribute_names: Option<Vec<AttributeName>>,
    ) -> Result<(), FixtureError> {
        Equality::build(&self.event, &self.entity, attribute_names, true)
            .call(&mut self.reporter)
    }

    /// Checks the entity holds the event value after `transform` is applied to it.
    pub fn assert_transformed_and_copied<TRaw, TValue, F>(
        &mut self,
        attribute_name: impl Into<AttributeName>,
        transform: F,
    ) -> Result<(), FixtureError>
    where
        TRaw: Clone + 'static,
        TValue: AttributeValue,
        F: FnOnce(TRaw) -> anyhow::Result<TValue>,
    {
        let attribute_name = attribute_name.into();
        let event_value = self.event.attribute(attribute_name.event_name())?;
        let entity_value = self.entity.attribute(attribute_name.entity_name())?;
        let raw = event_value
            .as_any()
            .downcast_ref::<TRaw>()
            .cloned()
            .ok_or_else(|| FixtureError::AttributeType {
                type_name: std::any::type_name::<TEvent>().to_string(),
                attribute: attribute_name.event_name().to_string(),
                expected: readable_type_name(std::any::type_name::<TRaw>()),
                actual: readable_type_name(event_value.value_type()),
            })?;

        self.reporter.enter_context("Transformed and copied");
        self.reporter
            .detail(&format!("Event Value {}", described(event_value)));
        self.reporter
            .detail(&format!("Entity Value {}", described(entity_value)));

        let result = match transform(raw) {
            Ok(transformed) => {
                let copied = values_equal(&transformed, entity_value);
                self.reporter.test(&attribute_name.label(), copied);
                Ok(())
            }
            Err(error) => Err(FixtureError::Transform(error)),
        };
        self.reporter.exit_context();
        result
    }

    pub fn projection(&self) -> &TProjection {
        &self.projection
    }

    pub fn entity(&self) -> &TEntity {
        &self.entity
    }

    pub fn control_entity(&self) -> &TEntity {
        &self.control_entity
    }

    pub fn event(&self) -> &TEvent {
        &self.event
    }

    pub fn reporter(&self) -> &TReporter {
        &self.reporter
    }

    pub fn state(&self) -> FixtureState {
        self.state
    }

    pub fn into_reporter(self) -> TReporter {
        self.reporter
    }
}

fn described(value: &dyn AttributeValue) -> String {
    format!("({}): {value:?}", readable_type_name(value.value_type()))
}
