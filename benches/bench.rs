use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use arena_bst::Tree;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in an unbalanced manner. This adds elements in an
/// ascending manner, degenerating the tree into a right chain.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in 0..num_nodes_in_full_tree(num_levels) {
        tree.insert(x as i32);
    }

    tree
}

/// Builds a tree by inserting values in a balanced manner. This adds elements
/// midpoint-first so that, without any self-balancing, the resultant tree is
/// still balanced.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    let xs: Vec<i32> = (0..num_nodes_in_full_tree(num_levels) as i32).collect();
    fill_balanced_tree(&mut tree, &xs);

    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of trees before finishing the group. Mutating operations get a fresh clone per
/// iteration so setup cost stays out of the measurement.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // The unbalanced trees are chains, so descent depth equals node count; sizes stay
    // modest to keep the recursive walks well within the default stack.
    for num_levels in [3, 7, 11] {
        let largest_element_in_tree = (num_nodes_in_full_tree(num_levels) - 1) as i32;
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (shape, tree) in tree_tests {
            let id = BenchmarkId::new(shape, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

/// Test BSTs. All tests are run against balanced and unbalanced trees of various sizes and
/// test successful and unsuccessful actions.
pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _node = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
