use kube::config::{
    KubeConfigOptions,
    Kubeconfig,
};
use tracing::*;

use crate::GlobalArgs;

pub async fn build_client(global: &GlobalArgs) -> anyhow::Result<kube::Client> {
    let options = KubeConfigOptions { context: global.context.clone(), ..Default::default() };

    let config = match (&global.kubeconfig, &global.context) {
        (Some(path), _) => {
            debug!("loading kubeconfig from {}", path.display());
            let kubeconfig = Kubeconfig::read_from(path)?;
            kube::Config::from_custom_kubeconfig(kubeconfig, &options).await?
        },
        (None, Some(_)) => kube::Config::from_kubeconfig(&options).await?,
        (None, None) => kube::Config::infer().await?,
    };

    Ok(kube::Client::try_from(config)?)
}
