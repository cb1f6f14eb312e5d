use std::time::Duration;

use assertables::*;
// can't import prelude because that doesn't include "DELETE" for some reason
use httpmock::Method::*;

use super::*;
use crate::k8s::KubeResourceClient;

fn test_nsname(name: &str) -> NamespacedName {
    NamespacedName::new(TEST_NAMESPACE, name)
}

#[rstest]
#[tokio::test]
async fn test_fake_apiserver_client() {
    let (_fake_apiserver, client) = make_fake_apiserver();
    assert_eq!(client.default_namespace(), "default");
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_get_found(test_git_repo: GitRepository) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let repo = test_git_repo.clone();
    fake_apiserver
        .handle(move |when, then| {
            when.method(GET).path(git_repo_path(TEST_NAMESPACE, TEST_SOURCE_NAME));
            then.json_body_obj(&repo);
        })
        .build();

    let rc = KubeResourceClient::<GitRepository>::new(client);
    let scope = DeadlineScope::acquire(Duration::from_secs(10));
    let res = rc.get(&test_nsname(TEST_SOURCE_NAME), &scope).await.unwrap();

    fake_apiserver.assert();
    assert_eq!(res.name_any(), TEST_SOURCE_NAME);
    assert_eq!(res.spec.url, TEST_SOURCE_URL);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_get_not_found() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_not_found(git_repo_path(TEST_NAMESPACE, TEST_MISSING_SOURCE_NAME))
        .build();

    let rc = KubeResourceClient::<GitRepository>::new(client);
    let scope = DeadlineScope::acquire(Duration::from_secs(10));
    let err = rc.get(&test_nsname(TEST_MISSING_SOURCE_NAME), &scope).await.unwrap_err();

    fake_apiserver.assert();
    assert!(DeleteError::is_not_found(&err));
    assert_eq!(format!("{err}"), format!("gitrepository {TEST_NAMESPACE}/{TEST_MISSING_SOURCE_NAME} not found"));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_get_forbidden() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_forbidden(git_repo_path(TEST_NAMESPACE, TEST_SOURCE_NAME))
        .build();

    let rc = KubeResourceClient::<GitRepository>::new(client);
    let scope = DeadlineScope::acquire(Duration::from_secs(10));
    let err = rc.get(&test_nsname(TEST_SOURCE_NAME), &scope).await.unwrap_err();

    fake_apiserver.assert();
    assert!(matches!(err.downcast_ref::<DeleteError>(), Some(DeleteError::RemoteFailure(_))));
    assert_contains!(format!("{err}"), "forbidden");
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_get_deadline_exceeded(test_git_repo: GitRepository) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    let repo = test_git_repo.clone();
    fake_apiserver
        .handle(move |when, then| {
            when.method(GET).path(git_repo_path(TEST_NAMESPACE, TEST_SOURCE_NAME));
            then.delay(Duration::from_secs(5)).json_body_obj(&repo);
        })
        .build();

    let rc = KubeResourceClient::<GitRepository>::new(client);
    let scope = DeadlineScope::acquire(Duration::from_millis(100));
    let err = rc.get(&test_nsname(TEST_SOURCE_NAME), &scope).await.unwrap_err();

    assert!(matches!(err.downcast_ref::<DeleteError>(), Some(DeleteError::DeadlineExceeded(_))));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_delete_pins_uid(test_git_repo: GitRepository) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle(|when, then| {
            when.method(DELETE)
                .path(git_repo_path(TEST_NAMESPACE, TEST_SOURCE_NAME))
                .body_matches(TEST_SOURCE_UID);
            then.json_body(status_ok());
        })
        .build();

    let rc = KubeResourceClient::<GitRepository>::new(client);
    let scope = DeadlineScope::acquire(Duration::from_secs(10));
    rc.delete(&test_git_repo, &scope).await.unwrap();

    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_delete_vanished(test_git_repo: GitRepository) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_not_found(git_repo_path(TEST_NAMESPACE, TEST_SOURCE_NAME))
        .build();

    let rc = KubeResourceClient::<GitRepository>::new(client);
    let scope = DeadlineScope::acquire(Duration::from_secs(10));
    let err = rc.delete(&test_git_repo, &scope).await.unwrap_err();

    fake_apiserver.assert();
    assert!(matches!(err.downcast_ref::<DeleteError>(), Some(DeleteError::RemoteFailure(_))));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_delete_deadline_exceeded(test_git_repo: GitRepository) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle(|when, then| {
            when.method(DELETE).path(git_repo_path(TEST_NAMESPACE, TEST_SOURCE_NAME));
            then.delay(Duration::from_secs(5)).json_body(status_ok());
        })
        .build();

    let rc = KubeResourceClient::<GitRepository>::new(client);
    let scope = DeadlineScope::acquire(Duration::from_millis(100));
    let err = rc.delete(&test_git_repo, &scope).await.unwrap_err();

    assert!(matches!(err.downcast_ref::<DeleteError>(), Some(DeleteError::DeadlineExceeded(_))));
}

#[rstest]
#[tokio::test]
async fn test_delete_no_namespace(mut test_git_repo: GitRepository) {
    let (_, client) = make_fake_apiserver();
    test_git_repo.metadata.namespace = None;

    let rc = KubeResourceClient::<GitRepository>::new(client);
    let scope = DeadlineScope::acquire(Duration::from_secs(10));
    let err = rc.delete(&test_git_repo, &scope).await.unwrap_err();

    assert!(matches!(err.downcast_ref::<DeleteError>(), Some(DeleteError::InvalidArgument(_))));
}
