pub(crate) mod orchestrator;
pub(crate) mod tracer;
pub(crate) mod turn;
