//! Scenario runner.

use recache_core::Store;
use recache_mutation::{EngineConfig, Strategy};
use recache_session::Session;

use crate::error::{ScenarioError, ScenarioResult};
use crate::scenario::Scenario;

/// Runs a scenario through a session using one strategy.
pub struct Runner<'s> {
    scenario: &'s Scenario,
    strategy: Strategy,
}

impl<'s> Runner<'s> {
    pub fn new(scenario: &'s Scenario, strategy: Strategy) -> Self {
        Self { scenario, strategy }
    }

    /// Run every step, verify its assertion, then check the journal
    /// rebuilds the final store. Returns the final store.
    pub fn run(&self) -> ScenarioResult<Store> {
        let config = EngineConfig::default().with_strategy(self.strategy);
        let mut session = Session::with_config(self.scenario.seed().clone(), config);

        for step in self.scenario.steps() {
            let label = format!("{}/{}", self.strategy.as_str(), step.name);
            let before = session.snapshot();

            let result = match &step.command {
                Ok(command) => session
                    .apply(command.clone())
                    .map(|_| session.snapshot())
                    .map_err(|e| e.to_string()),
                Err(message) => Err(message.clone()),
            };

            if result.is_err() && !Store::ptr_eq(&before, session.store()) {
                return Err(ScenarioError::assertion_failed(
                    &label,
                    "failed step changed the session store",
                ));
            }

            step.assertion.verify(&label, &before, &result)?;
        }

        session
            .rebuild()
            .map_err(|e| ScenarioError::diverged(self.scenario.name(), e.to_string()))
    }
}
