use std::fmt::Debug;
use std::marker::PhantomData;

use async_trait::async_trait;
#[cfg(any(test, feature = "mock"))]
use fx_api::v1beta1::GitRepository;
use k8s_openapi::NamespaceResourceScope;
use kube::api::{
    DeleteParams,
    Preconditions,
};
use kube::{
    Api,
    Resource,
    ResourceExt,
};
#[cfg(any(test, feature = "mock"))]
use mockall::automock;
use serde::de::DeserializeOwned;
use tracing::*;

use super::{
    DeadlineScope,
    NamespacedName,
};
use crate::errors::*;

/// The two calls the delete workflow needs from the control plane.  Both calls run under the
/// caller's `DeadlineScope` and give up with `DeadlineExceeded` once it expires.
#[cfg_attr(any(test, feature = "mock"), automock(type Resource = GitRepository;))]
#[async_trait]
pub trait ResourceClient: Send + Sync {
    type Resource: Send + Sync;

    async fn get(&self, nsname: &NamespacedName, scope: &DeadlineScope) -> anyhow::Result<Self::Resource>;
    async fn delete(&self, obj: &Self::Resource, scope: &DeadlineScope) -> EmptyResult;
}

pub struct KubeResourceClient<K> {
    client: kube::Client,
    _kind: PhantomData<K>,
}

impl<K> KubeResourceClient<K> {
    pub fn new(client: kube::Client) -> KubeResourceClient<K> {
        KubeResourceClient { client, _kind: PhantomData }
    }
}

fn describe<K>(nsname: &NamespacedName) -> String
where
    K: Resource,
    K::DynamicType: Default,
{
    format!("{} {nsname}", K::kind(&Default::default()).to_lowercase())
}

/// Lookup errors only; a failed delete is always a `RemoteFailure`, even if the object has
/// vanished since it was resolved.
pub fn classify_kube_error(err: kube::Error, what: &str) -> anyhow::Error {
    match err {
        kube::Error::Api(kube::core::ErrorResponse { code: 404, .. }) => DeleteError::not_found(what),
        err => DeleteError::remote_failure(&format!("{what}: {err}")),
    }
}

#[async_trait]
impl<K> ResourceClient for KubeResourceClient<K>
where
    K: Resource<Scope = NamespaceResourceScope> + Clone + DeserializeOwned + Debug + Send + Sync + 'static,
    K::DynamicType: Default,
{
    type Resource = K;

    async fn get(&self, nsname: &NamespacedName, scope: &DeadlineScope) -> anyhow::Result<K> {
        let what = describe::<K>(nsname);
        debug!("fetching {what}");

        let api = Api::<K>::namespaced(self.client.clone(), &nsname.namespace);
        scope
            .run(&format!("get {what}"), async {
                api.get(&nsname.name).await.map_err(|err| classify_kube_error(err, &what))
            })
            .await
    }

    async fn delete(&self, obj: &K, scope: &DeadlineScope) -> EmptyResult {
        let ns = obj
            .namespace()
            .ok_or_else(|| DeleteError::invalid_argument(&format!("{} has no namespace", obj.name_any())))?;
        let nsname = NamespacedName::new(&ns, &obj.name_any());
        let what = describe::<K>(&nsname);
        debug!("deleting {what}");

        // Pin the delete to the instance we resolved, so a same-named object that was
        // recreated in the meantime is left alone.
        let params = DeleteParams {
            preconditions: obj.uid().map(|uid| Preconditions { uid: Some(uid), resource_version: None }),
            ..Default::default()
        };

        let api = Api::<K>::namespaced(self.client.clone(), &ns);
        scope
            .run(&format!("delete {what}"), async {
                api.delete(&nsname.name, &params)
                    .await
                    .map(|_| ())
                    .map_err(|err| DeleteError::remote_failure(&format!("{what}: {err}")))
            })
            .await
    }
}
