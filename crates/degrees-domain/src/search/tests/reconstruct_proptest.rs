//! Property-based tests for path reconstruction.

use std::sync::Arc;

use proptest::prelude::*;

use super::mocks::MockDataProvider;
use crate::search::{RolePair, SearchPath, Separation, SeparationFinder};

/// Strategy producing well-formed paths of up to 7 hops.
fn search_path_strategy() -> impl Strategy<Value = SearchPath> {
    let hop = ("[a-z]{1,8}", "[A-Z][a-z]{0,8}", "[A-Z][a-z]{2,8}", "[A-Z][a-z]{2,8}");
    ("[a-z]{1,8}", prop::collection::vec(hop, 0..8)).prop_map(|(source, hops)| {
        let mut steps = vec![source];
        let mut roles = Vec::new();
        for (entity, collaboration, left, right) in hops {
            steps.push(collaboration);
            steps.push(entity);
            roles.push(RolePair::new(left, right));
        }
        SearchPath { steps, roles }
    })
}

proptest! {
    #[test]
    fn test_reconstructed_chain_is_contiguous(path in search_path_strategy()) {
        let separation = Separation::from_path(&path).unwrap();

        prop_assert_eq!(separation.degree, path.roles.len());
        prop_assert_eq!(separation.hops.len(), separation.degree);

        for (index, hop) in separation.hops.iter().enumerate() {
            prop_assert_eq!(hop.number, index + 1);
            prop_assert_eq!(&hop.left, &path.steps[2 * index]);
            prop_assert_eq!(&hop.collaboration, &path.steps[2 * index + 1]);
            prop_assert_eq!(&hop.right, &path.steps[2 * index + 2]);
            prop_assert_eq!(&hop.left_role, &path.roles[index].left);
            prop_assert_eq!(&hop.right_role, &path.roles[index].right);
        }
    }

    #[test]
    fn test_truncated_path_is_rejected(path in search_path_strategy()) {
        prop_assume!(path.steps.len() > 1);
        let mut truncated = path.clone();
        truncated.steps.pop();

        prop_assert!(Separation::from_path(&truncated).is_err());
    }

    #[test]
    fn test_linear_chain_degree_matches_length(length in 1usize..10) {
        let provider = Arc::new(MockDataProvider::new());
        for i in 0..length {
            let movie = format!("m{i}");
            let left = format!("p{i}");
            let right = format!("p{}", i + 1);
            provider.add_movie(&movie, &[(left.as_str(), "Actor"), (right.as_str(), "Actor")]);
        }
        let finder = SeparationFinder::new(provider);
        let runtime = tokio::runtime::Runtime::new().unwrap();

        let target = format!("p{length}");
        let separation = runtime.block_on(finder.shortest_path("p0", &target)).unwrap();

        prop_assert_eq!(separation.degree, length);
    }
}
