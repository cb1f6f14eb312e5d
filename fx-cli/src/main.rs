#![cfg_attr(coverage, feature(coverage_attribute))]
mod client;
mod delete;

use std::path::PathBuf;
use std::time::Duration;

use clap::{
    crate_version,
    Parser,
    Subcommand,
};
use fx_core::logging::{
    self,
    Reporter,
    StdoutReporter,
};
use fx_core::prelude::*;

#[derive(Parser)]
#[command(
    name = "fxctl",
    about = "command-line app for managing GitOps sources on a Kubernetes cluster",
    version,
    propagate_version = true
)]
struct FxCommandRoot {
    #[command(subcommand)]
    subcommand: FxSubcommand,

    #[command(flatten)]
    global: GlobalArgs,
}

/// Flags shared by every subcommand
#[derive(clap::Args, Clone, Debug)]
pub struct GlobalArgs {
    #[arg(long, global = true, long_help = "path to the kubeconfig file")]
    pub kubeconfig: Option<PathBuf>,

    #[arg(long, global = true, long_help = "kubeconfig context to use")]
    pub context: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        long_help = "the namespace scope for this operation",
        default_value = DEFAULT_NAMESPACE,
        env = NAMESPACE_ENV_VAR
    )]
    pub namespace: String,

    #[arg(
        long,
        global = true,
        long_help = "timeout for this operation",
        default_value = DEFAULT_TIMEOUT,
        value_parser = humantime::parse_duration
    )]
    pub timeout: Duration,

    #[arg(short, long, global = true, default_value = "warn")]
    pub verbosity: String,
}

#[derive(Subcommand)]
enum FxSubcommand {
    #[command(about = "delete sources and resources", visible_alias = "del")]
    Delete(delete::Args),

    #[command(about = "fxctl version")]
    Version,
}

async fn run(args: &FxCommandRoot) -> EmptyResult {
    // `version` doesn't need a cluster, so don't go looking for a kubeconfig for it
    match &args.subcommand {
        FxSubcommand::Delete(dargs) => {
            let client = client::build_client(&args.global).await?;
            delete::cmd(dargs, &args.global, client).await
        },
        FxSubcommand::Version => {
            println!("fxctl {}", crate_version!());
            Ok(())
        },
    }
}

#[tokio::main]
async fn main() {
    let args = FxCommandRoot::parse();
    logging::setup_for_cli(&args.global.verbosity);

    if let Err(err) = run(&args).await {
        StdoutReporter.failure(&format!("{err:#}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests;
