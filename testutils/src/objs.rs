use fx_api::v1beta1::*;
use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
use rstest::*;

use crate::constants::*;

#[fixture]
pub fn test_git_repo(#[default(TEST_SOURCE_NAME)] name: &str) -> GitRepository {
    GitRepository {
        metadata: metav1::ObjectMeta {
            name: Some(name.into()),
            namespace: Some(TEST_NAMESPACE.into()),
            uid: Some(TEST_SOURCE_UID.into()),
            ..Default::default()
        },
        spec: GitRepositorySpec {
            url: TEST_SOURCE_URL.into(),
            interval: "1m".into(),
            reference: Some(GitRepositoryRef { branch: Some("master".into()), ..Default::default() }),
            ..Default::default()
        },
        status: None,
    }
}

pub fn git_repo_path(namespace: &str, name: &str) -> String {
    format!("/apis/{SOURCE_GROUP}/{SOURCE_VERSION}/namespaces/{namespace}/gitrepositories/{name}")
}
