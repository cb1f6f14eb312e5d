use kube::CustomResource;
use schemars::JsonSchema;
use serde::{
    Deserialize,
    Serialize,
};

pub const SOURCE_GROUP: &str = "source.toolkit.fluxcd.io";
pub const SOURCE_VERSION: &str = "v1beta1";

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
pub struct LocalObjectReference {
    pub name: String,
}

// At most one of these should be set; commit takes precedence, then semver, then tag,
// then branch.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRepositoryRef {
    pub branch: Option<String>,
    pub tag: Option<String>,
    pub semver: Option<String>,
    pub commit: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRepositoryVerification {
    pub mode: String,
    pub secret_ref: Option<LocalObjectReference>,
}

#[derive(Clone, CustomResource, Debug, Default, Deserialize, JsonSchema, Serialize)]
#[kube(
    group = "source.toolkit.fluxcd.io",
    version = "v1beta1",
    kind = "GitRepository",
    namespaced
)]
#[kube(shortname = "gitrepo")]
#[kube(status = "GitRepositoryStatus")]
#[kube(
    printcolumn = r#"{"name":"URL", "type":"string", "jsonPath":".spec.url"}"#,
    printcolumn = r#"{"name":"Ready", "type":"string", "jsonPath":".status.conditions[?(@.type==\"Ready\")].status"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct GitRepositorySpec {
    // Required fields
    pub url: String,
    pub interval: String,

    // Optional fields
    pub secret_ref: Option<LocalObjectReference>,
    pub timeout: Option<String>,
    #[serde(rename = "ref")]
    pub reference: Option<GitRepositoryRef>,
    pub verify: Option<GitRepositoryVerification>,
    pub ignore: Option<String>,
    pub suspend: Option<bool>,
    pub git_implementation: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub path: String,
    pub url: String,
    pub revision: Option<String>,
    pub checksum: Option<String>,
    pub last_update_time: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCondition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    pub reason: Option<String>,
    pub message: Option<String>,
    pub last_transition_time: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRepositoryStatus {
    pub observed_generation: Option<i64>,
    pub conditions: Option<Vec<SourceCondition>>,
    pub url: Option<String>,
    pub artifact: Option<Artifact>,
}
