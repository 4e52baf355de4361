//! core::navigation
//!
//! Navigation state derived from the active kubeconfig context.
//!
//! # States
//!
//! ```text
//! Root                          no profile matches the kubeconfig
//! Space(profile)                space API server
//! Group(profile, group)         a group (namespace) within the space
//! ControlPlane(profile, g/name) a control plane within a group
//! ```
//!
//! The state is derived fresh on each invocation and never mutated.

use std::fmt;

use kube::config::Kubeconfig;

use crate::core::config::Profile;
use crate::core::profile::{from_kubeconfig, NamespacedName};

/// A space, reached through a profile.
#[derive(Debug, Clone)]
pub struct Space {
    pub profile: String,
    pub kubeconfig: Kubeconfig,
}

/// A group within a space.
#[derive(Debug, Clone)]
pub struct Group {
    pub space: Space,
    pub name: String,
}

/// A control plane within a space.
#[derive(Debug, Clone)]
pub struct ControlPlane {
    pub space: Space,
    pub name: NamespacedName,
}

/// The currently selected scope.
#[derive(Debug, Clone)]
pub enum NavigationState {
    /// No profile selected
    Root,
    Space(Space),
    Group(Group),
    ControlPlane(ControlPlane),
}

impl NavigationState {
    /// Classify a target within `space`.
    ///
    /// Namespace and name both set gives a control plane, namespace alone a
    /// group, anything else the space itself.
    pub fn classify(space: Space, target: NamespacedName) -> Self {
        match (target.namespace.is_empty(), target.name.is_empty()) {
            (false, false) => NavigationState::ControlPlane(ControlPlane {
                space,
                name: target,
            }),
            (false, true) => NavigationState::Group(Group {
                space,
                name: target.namespace,
            }),
            _ => NavigationState::Space(space),
        }
    }

    /// Profile the state belongs to.
    pub fn profile(&self) -> Option<&str> {
        self.space().map(|s| s.profile.as_str())
    }

    /// Space the state lies in.
    pub fn space(&self) -> Option<&Space> {
        match self {
            NavigationState::Root => None,
            NavigationState::Space(space) => Some(space),
            NavigationState::Group(group) => Some(&group.space),
            NavigationState::ControlPlane(ctp) => Some(&ctp.space),
        }
    }

    /// Path segments from the profile down to the selected scope.
    pub fn breadcrumbs(&self) -> Vec<&str> {
        match self {
            NavigationState::Root => Vec::new(),
            NavigationState::Space(space) => vec![space.profile.as_str()],
            NavigationState::Group(group) => {
                vec![group.space.profile.as_str(), group.name.as_str()]
            }
            NavigationState::ControlPlane(ctp) => vec![
                ctp.space.profile.as_str(),
                ctp.name.namespace.as_str(),
                ctp.name.name.as_str(),
            ],
        }
    }
}

impl fmt::Display for NavigationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.breadcrumbs().join("/"))
    }
}

/// Derive the navigation state of `kubeconfig` against the known profiles.
///
/// Returns [`NavigationState::Root`] when no profile matches. Space profiles
/// whose kubeconfig cannot be loaded never match.
pub fn derive_state<'a>(
    profiles: impl IntoIterator<Item = (&'a str, &'a Profile)>,
    kubeconfig: &Kubeconfig,
) -> NavigationState {
    let Some(found) = from_kubeconfig(profiles, kubeconfig) else {
        return NavigationState::Root;
    };

    let space = Space {
        profile: found.profile_name,
        kubeconfig: found.space_kubeconfig,
    };
    NavigationState::classify(space, found.target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ProfileType;
    use crate::test_utils::kubeconfig_yaml;
    use tempfile::TempDir;

    const SPACE: &str = "https://space.example.com";

    fn space_profile(dir: &TempDir) -> Profile {
        let path = dir.path().join("space.yaml");
        std::fs::write(&path, kubeconfig_yaml(SPACE, None)).unwrap();
        Profile {
            kind: ProfileType::Space,
            account: "acme".to_string(),
            kubeconfig: Some(path),
            ..Default::default()
        }
    }

    fn user_kubeconfig(server: &str, namespace: Option<&str>) -> Kubeconfig {
        Kubeconfig::from_yaml(&kubeconfig_yaml(server, namespace)).unwrap()
    }

    fn empty_space() -> Space {
        Space {
            profile: "p".to_string(),
            kubeconfig: Kubeconfig::default(),
        }
    }

    #[test]
    fn classify_control_plane() {
        let state = NavigationState::classify(empty_space(), NamespacedName::new("team-a", "ctp-1"));
        match state {
            NavigationState::ControlPlane(ctp) => {
                assert_eq!(ctp.name, NamespacedName::new("team-a", "ctp-1"));
            }
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn classify_group() {
        let state = NavigationState::classify(empty_space(), NamespacedName::new("team-a", ""));
        match state {
            NavigationState::Group(group) => assert_eq!(group.name, "team-a"),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn classify_space() {
        let state = NavigationState::classify(empty_space(), NamespacedName::default());
        assert!(matches!(state, NavigationState::Space(_)));

        // A name without a namespace is not a control plane.
        let state = NavigationState::classify(empty_space(), NamespacedName::new("", "ctp-1"));
        assert!(matches!(state, NavigationState::Space(_)));
    }

    #[test]
    fn derive_control_plane_state() {
        let dir = TempDir::new().unwrap();
        let profile = space_profile(&dir);
        let kc = user_kubeconfig(
            "https://space.example.com/apis/spaces.upbound.io/v1beta1/namespaces/team-a/controlplanes/ctp-1/k8s",
            None,
        );

        let state = derive_state([("disconnected", &profile)], &kc);

        assert_eq!(state.breadcrumbs(), vec!["disconnected", "team-a", "ctp-1"]);
        assert_eq!(state.to_string(), "disconnected/team-a/ctp-1");
        assert_eq!(state.profile(), Some("disconnected"));
    }

    #[test]
    fn derive_group_state() {
        let dir = TempDir::new().unwrap();
        let profile = space_profile(&dir);
        let kc = user_kubeconfig(SPACE, Some("team-a"));

        let state = derive_state([("disconnected", &profile)], &kc);

        assert!(matches!(state, NavigationState::Group(ref g) if g.name == "team-a"));
    }

    #[test]
    fn derive_space_state() {
        let dir = TempDir::new().unwrap();
        let profile = space_profile(&dir);
        let kc = user_kubeconfig(SPACE, None);

        let state = derive_state([("disconnected", &profile)], &kc);

        assert!(matches!(state, NavigationState::Space(ref s) if s.profile == "disconnected"));
        assert!(state.space().unwrap().kubeconfig.current_context.is_some());
    }

    #[test]
    fn no_matching_profile_is_root() {
        let dir = TempDir::new().unwrap();
        let profile = space_profile(&dir);
        let kc = user_kubeconfig("https://kind.local:6443", Some("team-a"));

        let state = derive_state([("disconnected", &profile)], &kc);

        assert!(matches!(state, NavigationState::Root));
        assert!(state.breadcrumbs().is_empty());
        assert_eq!(state.profile(), None);
    }

    #[test]
    fn broken_profile_does_not_hide_a_match() {
        let dir = TempDir::new().unwrap();
        let good = space_profile(&dir);
        let broken = Profile {
            kind: ProfileType::Space,
            kubeconfig: Some(dir.path().join("missing.yaml")),
            ..Default::default()
        };
        let kc = user_kubeconfig(SPACE, Some("team-a"));

        let state = derive_state([("a-broken", &broken), ("b-good", &good)], &kc);

        assert_eq!(state.to_string(), "b-good/team-a");
        assert_eq!(
            state.space().unwrap().kubeconfig.current_context.as_deref(),
            Some("space-admin")
        );
    }

    #[test]
    fn only_broken_profile_is_root() {
        let dir = TempDir::new().unwrap();
        let broken = Profile {
            kind: ProfileType::Space,
            kubeconfig: Some(dir.path().join("missing.yaml")),
            ..Default::default()
        };
        let kc = user_kubeconfig(SPACE, None);

        assert!(matches!(
            derive_state([("broken", &broken)], &kc),
            NavigationState::Root
        ));
    }

    #[test]
    fn no_profiles_is_root() {
        let kc = user_kubeconfig(SPACE, None);
        let state = derive_state(std::iter::empty::<(&str, &Profile)>(), &kc);
        assert!(matches!(state, NavigationState::Root));
    }
}
