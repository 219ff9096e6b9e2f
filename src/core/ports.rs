// Ports define what the fixtures need from the outside world, without implementing it.
//
// Purpose
// - Describe the reporting sink as a trait so fixtures stay independent of any output.
//
// Responsibilities
// - Contexts nest; every enter_context is paired with an exit_context.
// - detail lines are informational; test records one pass/fail check.
//
// Testing guidance
// - adapters::tracing_reporter records everything it receives and is the default sink.

pub trait Reporter {
    fn enter_context(&mut self, title: &str);
    fn exit_context(&mut self);
    fn detail(&mut self, line: &str);
    fn test(&mut self, label: &str, passed: bool);
}
