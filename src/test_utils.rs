//! Shared fixtures for unit tests.

/// A kubeconfig with one cluster at `server` and two contexts.
///
/// `space-admin` is current and carries `namespace` when given; `other` has
/// no namespace.
pub(crate) fn kubeconfig_yaml(server: &str, namespace: Option<&str>) -> String {
    let ns = namespace
        .map(|n| format!("\n    namespace: {}", n))
        .unwrap_or_default();
    format!(
        r#"apiVersion: v1
kind: Config
clusters:
- name: space
  cluster:
    server: {server}
contexts:
- name: space-admin
  context:
    cluster: space
    user: admin{ns}
- name: other
  context:
    cluster: space
    user: admin
current-context: space-admin
users:
- name: admin
  user:
    token: abc
"#
    )
}
