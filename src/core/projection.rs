// Projection capability: mutate an entity in place from an event.
//
// Purpose
// - Let the fixture invoke any projection without knowing how it is implemented.
//
// Responsibilities
// - apply is called exactly once per fixture run; its error is returned untouched.
// - projection_name feeds the "Projection Class" detail line.

pub trait Projection<TEntity, TEvent> {
    fn apply(&self, entity: &mut TEntity, event: &TEvent) -> anyhow::Result<()>;

    fn projection_name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<TEntity, TEvent, F> Projection<TEntity, TEvent> for F
where
    F: Fn(&mut TEntity, &TEvent) -> anyhow::Result<()>,
{
    fn apply(&self, entity: &mut TEntity, event: &TEvent) -> anyhow::Result<()> {
        self(entity, event)
    }
}
