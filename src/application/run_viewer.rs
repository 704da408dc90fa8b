// src/application/run_viewer.rs
use crate::domain::{DomainError, Run};
use crate::payloads::{RunGraph, RunGraphPayload, RunViewPayload};

pub trait RunRepository {
    fn get_run(&mut self, id: &str) -> Result<RunViewPayload, DomainError>;

    /// Runs, edges and artifacts of the graph rooted at `root_id`
    fn get_graph(&mut self, root_id: &str) -> Result<RunGraphPayload, DomainError>;
}

pub struct RunViewer<R: RunRepository> {
    repository: R,
}

impl<R: RunRepository> RunViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_run(&mut self, id: &str) -> Result<Run, DomainError> {
        Ok(self.repository.get_run(id)?.content)
    }

    pub fn view_graph(&mut self, root_id: &str) -> Result<RunGraph, DomainError> {
        let payload = self.repository.get_graph(root_id)?;
        RunGraph::from_payload(payload)
    }
}
