use std::time::Duration;

use tracing::*;

use crate::errors::*;
use crate::logging::Reporter;
use crate::prelude::*;
use crate::prompt::Prompter;

/// Settings for a whole command invocation, shared by every delete subcommand.
#[derive(Clone, Debug, Default)]
pub struct WorkflowConfig {
    /// Skip the interactive confirmation
    pub silent: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DeleteState {
    Start,
    Validated,
    Resolved,
    Confirmed,
    SilentBypass,
    Deleted,
    Done,
    Failed,
}

fn transition(from: &mut DeleteState, to: DeleteState) {
    debug!("delete workflow: {from:?} -> {to:?}");
    *from = to;
}

/// Resolve, confirm and delete a single source.  The deadline covers the lookup and the delete
/// together; the confirmation prompt is not bounded by it.  Nothing is retried: a failure at any
/// step is returned as-is, and no delete call is made unless the lookup succeeded and the user
/// (or `config.silent`) said yes.
pub async fn delete_named_resource<C: ResourceClient + ?Sized>(
    client: &C,
    prompter: &dyn Prompter,
    reporter: &dyn Reporter,
    name: &str,
    namespace: &str,
    config: &WorkflowConfig,
    deadline: Duration,
) -> EmptyResult {
    let mut state = DeleteState::Start;
    let res = run_workflow(client, prompter, reporter, name, namespace, config, deadline, &mut state).await;
    if let Err(err) = &res {
        debug!("delete workflow failed in state {state:?}: {err}");
        transition(&mut state, DeleteState::Failed);
    }
    res
}

#[allow(clippy::too_many_arguments)]
async fn run_workflow<C: ResourceClient + ?Sized>(
    client: &C,
    prompter: &dyn Prompter,
    reporter: &dyn Reporter,
    name: &str,
    namespace: &str,
    config: &WorkflowConfig,
    deadline: Duration,
    state: &mut DeleteState,
) -> EmptyResult {
    if name.is_empty() {
        return Err(DeleteError::invalid_argument("source name is required"));
    }
    transition(state, DeleteState::Validated);

    let scope = DeadlineScope::acquire(deadline);
    let nsname = NamespacedName::new(namespace, name);

    let obj = client.get(&nsname, &scope).await?;
    transition(state, DeleteState::Resolved);

    if config.silent {
        transition(state, DeleteState::SilentBypass);
    } else {
        match prompter.confirm(DELETE_SOURCE_PROMPT) {
            Ok(true) => transition(state, DeleteState::Confirmed),
            Ok(false) => return Err(DeleteError::aborted("confirmation declined")),
            Err(err) => {
                info!("could not read confirmation: {err}");
                return Err(DeleteError::aborted("confirmation could not be read"));
            },
        }
    }

    reporter.action(&format!("deleting source {name} in {namespace} namespace"));
    client.delete(&obj, &scope).await?;
    transition(state, DeleteState::Deleted);

    reporter.success(SOURCE_DELETED_MSG);
    transition(state, DeleteState::Done);

    Ok(())
}
