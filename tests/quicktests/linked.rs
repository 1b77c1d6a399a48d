use linkedbst::{Tree, TreeError};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

fn sorted(xs: &[i8]) -> Vec<i8> {
    let mut xs = xs.to_vec();
    xs.sort_unstable();
    xs
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.len() == xs.len() && tree.inorder().copied().eq(sorted(&xs))
}

#[quickcheck]
fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected = sorted(&xs);
    let check = |mut values: Vec<i8>| {
        values.sort_unstable();
        values == expected
    };

    check(tree.iter().copied().collect())
        && check(tree.postorder().copied().collect())
        && check(tree.levelorder().copied().collect())
        && check(tree.into_iter().collect())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut still_present = xs;

    for delete in &deletes {
        let before = tree.len();
        match still_present.iter().position(|x| x == delete) {
            // Only one copy of a duplicated value goes away at a time.
            Some(pos) => {
                still_present.swap_remove(pos);
                if tree.remove(delete) != Ok(*delete) || tree.len() != before - 1 {
                    return false;
                }
            }
            None => {
                if tree.remove(delete) != Err(TreeError::NotFound) || tree.len() != before {
                    return false;
                }
            }
        }
    }

    tree.inorder().copied().eq(sorted(&still_present))
        && still_present
            .iter()
            .all(|x| tree.count(x) == still_present.iter().filter(|y| *y == x).count())
}

#[quickcheck]
fn rebalance_keeps_values(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    tree.rebalance();
    let once = tree.clone();
    tree.rebalance();

    tree == once && tree.len() == xs.len() && tree.inorder().copied().eq(sorted(&xs))
}

#[quickcheck]
fn rebalanced_distinct_values_are_balanced(xs: HashSet<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    tree.rebalance();

    if xs.is_empty() {
        tree.is_balanced() == Err(TreeError::Empty)
    } else {
        tree.is_balanced() == Ok(true)
    }
}

#[quickcheck]
fn range_find_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let expected: Vec<_> = sorted(&xs)
        .into_iter()
        .filter(|x| low <= *x && *x <= high)
        .collect();

    tree.range_find(&low, &high).into_iter().copied().eq(expected)
}

#[quickcheck]
fn successor_and_predecessor(xs: Vec<i8>, item: i8) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let successor = xs.iter().filter(|x| **x > item).min();
    let predecessor = xs.iter().filter(|x| **x < item).max();

    tree.successor(&item) == successor && tree.predecessor(&item) == predecessor
}

#[quickcheck]
fn height_bounds(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    match tree.height() {
        Err(TreeError::Empty) => xs.is_empty(),
        Ok(height) => height < xs.len() && xs.len() < 2usize.saturating_pow(height as u32 + 1),
        Err(_) => false,
    }
}
