use fx_core::delete::{
    delete_named_resource,
    WorkflowConfig,
};
use fx_core::k8s::KubeResourceClient;
use fx_core::logging::{
    Reporter,
    StdoutReporter,
};
use fx_core::prelude::*;
use fx_core::prompt::{
    Prompter,
    TerminalPrompter,
};

use crate::GlobalArgs;

#[derive(clap::Args)]
pub struct Args {
    #[arg(short, long, global = true, long_help = "delete resources without asking for confirmation")]
    pub silent: bool,

    #[command(subcommand)]
    pub subcommand: DeleteSubcommand,
}

#[derive(clap::Subcommand)]
pub enum DeleteSubcommand {
    #[command(subcommand, about = "delete sources")]
    Source(SourceSubcommand),
}

#[derive(clap::Subcommand)]
pub enum SourceSubcommand {
    #[command(
        about = "delete a GitRepository source",
        long_about = "The delete source git command deletes the given GitRepository from the cluster.",
        after_help = "Examples:\n  # Delete a Git repository\n  fxctl delete source git podinfo"
    )]
    Git(GitArgs),
}

#[derive(clap::Args)]
pub struct GitArgs {
    #[arg(long_help = "name of the GitRepository to delete")]
    pub name: String,
}

pub async fn cmd(args: &Args, global: &GlobalArgs, client: kube::Client) -> EmptyResult {
    run(args, global, client, &TerminalPrompter, &StdoutReporter).await
}

pub(super) async fn run(
    args: &Args,
    global: &GlobalArgs,
    client: kube::Client,
    prompter: &dyn Prompter,
    reporter: &dyn Reporter,
) -> EmptyResult {
    let config = WorkflowConfig { silent: args.silent };
    match &args.subcommand {
        DeleteSubcommand::Source(SourceSubcommand::Git(git_args)) => {
            let git_client = KubeResourceClient::<GitRepository>::new(client);
            delete_named_resource(
                &git_client,
                prompter,
                reporter,
                &git_args.name,
                &global.namespace,
                &config,
                global.timeout,
            )
            .await
        },
    }
}
