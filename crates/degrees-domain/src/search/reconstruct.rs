//! Reconstruction of a separation chain from a search path.

use crate::error::{DomainError, DomainResult};

use super::types::{SearchPath, Separation, SeparationHop};

impl Separation {
    /// Builds the hop-by-hop chain for a path returned by the search.
    ///
    /// Fails with [`DomainError::MalformedPath`] when `steps` does not
    /// alternate entity/collaboration or does not carry one role pair per hop.
    pub fn from_path(path: &SearchPath) -> DomainResult<Self> {
        if path.steps.is_empty() || path.steps.len() % 2 == 0 {
            return Err(DomainError::MalformedPath {
                message: format!(
                    "expected an odd number of steps, got {}",
                    path.steps.len()
                ),
            });
        }

        let degree = path.degree();
        if path.roles.len() != degree {
            return Err(DomainError::MalformedPath {
                message: format!(
                    "expected {} role pairs for {} hops, got {}",
                    degree,
                    degree,
                    path.roles.len()
                ),
            });
        }

        let hops = path
            .steps
            .windows(3)
            .step_by(2)
            .zip(&path.roles)
            .enumerate()
            .map(|(index, (window, roles))| SeparationHop {
                number: index + 1,
                left: window[0].clone(),
                collaboration: window[1].clone(),
                right: window[2].clone(),
                left_role: roles.left.clone(),
                right_role: roles.right.clone(),
            })
            .collect();

        Ok(Self { degree, hops })
    }

    /// Returns true when source and target are the same entity.
    pub fn is_identity(&self) -> bool {
        self.degree == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::RolePair;

    fn path(steps: &[&str], roles: &[(&str, &str)]) -> SearchPath {
        SearchPath {
            steps: steps.iter().map(|s| s.to_string()).collect(),
            roles: roles.iter().map(|(l, r)| RolePair::new(*l, *r)).collect(),
        }
    }

    #[test]
    fn test_two_hop_chain_is_reconstructed_in_order() {
        let separation = Separation::from_path(&path(
            &["a", "M1", "b", "M2", "c"],
            &[("Actor", "Hero"), ("Producer", "Detective")],
        ))
        .unwrap();

        assert_eq!(separation.degree, 2);
        assert_eq!(
            separation.hops[0],
            SeparationHop {
                number: 1,
                collaboration: "M1".to_string(),
                left: "a".to_string(),
                left_role: "Actor".to_string(),
                right: "b".to_string(),
                right_role: "Hero".to_string(),
            }
        );
        assert_eq!(separation.hops[1].number, 2);
        assert_eq!(separation.hops[1].collaboration, "M2");
        assert_eq!(separation.hops[1].left_role, "Producer");
        assert_eq!(separation.hops[1].right_role, "Detective");
    }

    #[test]
    fn test_single_entity_path_has_degree_zero() {
        let separation = Separation::from_path(&SearchPath::origin("a")).unwrap();
        assert!(separation.is_identity());
        assert!(separation.hops.is_empty());
    }

    #[test]
    fn test_even_length_path_is_rejected() {
        let err = Separation::from_path(&path(&["a", "M1"], &[])).unwrap_err();
        assert!(matches!(err, DomainError::MalformedPath { .. }));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let err = Separation::from_path(&path(&[], &[])).unwrap_err();
        assert!(matches!(err, DomainError::MalformedPath { .. }));
    }

    #[test]
    fn test_role_count_mismatch_is_rejected() {
        let err =
            Separation::from_path(&path(&["a", "M1", "b"], &[("Actor", "Actor"), ("x", "y")]))
                .unwrap_err();
        assert!(matches!(err, DomainError::MalformedPath { .. }));
    }
}
