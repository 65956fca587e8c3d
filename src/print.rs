//! Fixed-width rendering of nodes and trees.
//!
//! Every value is rendered into a five-character bracketed field so that
//! labels line up in columns no matter what the value looks like. The
//! building blocks compose upward: [`single`] formats one value,
//! [`Tree::print_atom`] stacks a parent over its two children, and
//! [`Tree::pretty_print`] lays out the whole tree level by level.

use std::collections::HashMap;
use std::fmt;

use generational_arena::Index;

use crate::tree::Tree;

/// Width of one rendered label.
const LABEL: usize = 5;

/// Column stride between in-order neighbors in [`Tree::pretty_print`].
const CELL: usize = 8;

/// Renders a value into its fixed five-character field.
///
/// The value's `Display` rendering is padded or truncated to fit between
/// the parentheses:
///
/// ```
/// use arena_bst::print::single;
///
/// assert_eq!(single(&""), "( ! )");
/// assert_eq!(single(&"1"), "( 1 )");
/// assert_eq!(single(&"11"), "( 11)");
/// assert_eq!(single(&"111"), "(111)");
/// assert_eq!(single(&"11111"), "(11.)");
/// ```
///
/// An empty rendering gets the `!` marker, a two-character one pads on the
/// left only, and anything longer than three characters keeps its first two
/// with a trailing `.` marking the truncation.
pub fn single<T: fmt::Display>(value: &T) -> String {
    let rendered = value.to_string();
    let chars: Vec<char> = rendered.chars().collect();
    match chars.len() {
        0 => "( ! )".to_string(),
        1 => format!("( {} )", rendered),
        2 => format!("( {})", rendered),
        3 => format!("({})", rendered),
        _ => format!("({}{}.)", chars[0], chars[1]),
    }
}

impl<T: fmt::Display> Tree<T> {
    /// Renders one node and its direct children as a three-row atom.
    ///
    /// The parent label sits four columns in, a connector row carries one
    /// slash per present child, and the child labels fill the bottom row.
    /// An absent child leaves its side blank; a leaf renders as its bare
    /// label with no connector at all.
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let tree: Tree<i32> = [5, 2, 8].iter().copied().collect();
    /// let atom = tree.print_atom(tree.root().unwrap());
    /// assert_eq!(atom, "    ( 5 )\n    /   \\\n( 2 )   ( 8 )");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics when `at` does not name a live node.
    pub fn print_atom(&self, at: Index) -> String {
        let node = self.node(at).expect("no live node behind the handle");
        let left = node.left().map(|id| single(&self.nodes[id].value));
        let right = node.right().map(|id| single(&self.nodes[id].value));

        if left.is_none() && right.is_none() {
            return single(node.value());
        }

        let mut out = String::new();
        out.push_str("    ");
        out.push_str(&single(node.value()));
        out.push('\n');

        // Each slash sits at the matching edge column of the parent label.
        let mut connector = vec![' '; 2 * (LABEL - 1) + 1];
        if left.is_some() {
            connector[LABEL - 1] = '/';
        }
        if right.is_some() {
            connector[2 * (LABEL - 1)] = '\\';
        }
        let connector: String = connector.into_iter().collect();
        out.push_str(connector.trim_end());
        out.push('\n');

        let mut children = String::new();
        match left {
            Some(label) => children.push_str(&label),
            None => children.push_str("     "),
        }
        children.push_str("   ");
        if let Some(label) = right {
            children.push_str(&label);
        }
        out.push_str(children.trim_end());
        out
    }

    /// Renders the whole tree as an in-order column grid.
    ///
    /// Each node's label occupies the column of its in-order rank, one
    /// label row per level with a connector row in between; slashes are
    /// drawn midway between a parent's label and each child's. The empty
    /// tree renders as `(EMPTY)` and a sole root as its bare label.
    ///
    /// ```
    /// use arena_bst::Tree;
    ///
    /// let tree: Tree<i32> = [5, 2, 8].iter().copied().collect();
    /// let expected = "        ( 5 )\n      /       \\\n( 2 )           ( 8 )";
    /// assert_eq!(tree.pretty_print(), expected);
    /// ```
    pub fn pretty_print(&self) -> String {
        let root = match self.root {
            Some(root) => root,
            None => return "(EMPTY)".to_string(),
        };

        let mut order = Vec::with_capacity(self.len());
        self.in_order_ids(root, &mut order);
        let columns: HashMap<Index, usize> = order
            .iter()
            .enumerate()
            .map(|(rank, &id)| (id, rank * CELL))
            .collect();

        let mut rows = vec![Vec::new(); 2 * self.height() - 1];
        self.draw(root, 0, &columns, &mut rows);

        rows.iter()
            .map(|row| row.iter().collect::<String>())
            .map(|row| row.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn in_order_ids(&self, at: Index, out: &mut Vec<Index>) {
        let node = &self.nodes[at];
        if let Some(left) = node.left() {
            self.in_order_ids(left, out);
        }
        out.push(at);
        if let Some(right) = node.right() {
            self.in_order_ids(right, out);
        }
    }

    fn draw(
        &self,
        at: Index,
        depth: usize,
        columns: &HashMap<Index, usize>,
        rows: &mut [Vec<char>],
    ) {
        let node = &self.nodes[at];
        let column = columns[&at];
        put(&mut rows[2 * depth], column, &single(&node.value));

        if let Some(left) = node.left() {
            let slash = (columns[&left] + LABEL - 1 + column) / 2;
            put(&mut rows[2 * depth + 1], slash, "/");
            self.draw(left, depth + 1, columns, rows);
        }
        if let Some(right) = node.right() {
            let slash = (column + LABEL - 1 + columns[&right]) / 2;
            put(&mut rows[2 * depth + 1], slash, "\\");
            self.draw(right, depth + 1, columns, rows);
        }
    }
}

/// Writes `text` into `row` starting at `column`, padding with spaces.
fn put(row: &mut Vec<char>, column: usize, text: &str) {
    if row.len() < column {
        row.resize(column, ' ');
    }
    for (offset, ch) in text.chars().enumerate() {
        let at = column + offset;
        if at < row.len() {
            row[at] = ch;
        } else {
            row.push(ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_pads_and_truncates_to_five_columns() {
        assert_eq!(single(&""), "( ! )");
        assert_eq!(single(&"1"), "( 1 )");
        assert_eq!(single(&"11"), "( 11)");
        assert_eq!(single(&"111"), "(111)");
        assert_eq!(single(&"11111"), "(11.)");
    }

    #[test]
    fn single_renders_through_display() {
        assert_eq!(single(&5), "( 5 )");
        assert_eq!(single(&42), "( 42)");
        assert_eq!(single(&-42), "(-42)");
        assert_eq!(single(&12345), "(12.)");
    }

    #[test]
    fn atom_with_two_children() {
        let tree: Tree<i32> = [5, 2, 8].iter().copied().collect();

        let atom = tree.print_atom(tree.root().unwrap());

        assert_eq!(atom, "    ( 5 )\n    /   \\\n( 2 )   ( 8 )");
    }

    #[test]
    fn atom_blanks_an_absent_side() {
        let tree: Tree<i32> = [5, 2].iter().copied().collect();
        assert_eq!(
            tree.print_atom(tree.root().unwrap()),
            "    ( 5 )\n    /\n( 2 )"
        );

        let tree: Tree<i32> = [5, 8].iter().copied().collect();
        assert_eq!(
            tree.print_atom(tree.root().unwrap()),
            "    ( 5 )\n        \\\n        ( 8 )"
        );
    }

    #[test]
    fn atom_of_a_leaf_is_its_bare_label() {
        let tree: Tree<i32> = [5].iter().copied().collect();

        assert_eq!(tree.print_atom(tree.root().unwrap()), "( 5 )");
    }

    #[test]
    fn pretty_print_empty_and_single() {
        let empty: Tree<i32> = Tree::new();
        assert_eq!(empty.pretty_print(), "(EMPTY)");

        let sole: Tree<i32> = [5].iter().copied().collect();
        assert_eq!(sole.pretty_print(), "( 5 )");
    }

    #[test]
    fn pretty_print_lays_out_levels_in_columns() {
        let tree: Tree<i32> = [5, 2, 8].iter().copied().collect();

        assert_eq!(
            tree.pretty_print(),
            "        ( 5 )\n      /       \\\n( 2 )           ( 8 )"
        );
    }

    #[test]
    fn pretty_print_three_levels() {
        let tree: Tree<i32> = [5, 2, 8, 1, 4, 7, 9].iter().copied().collect();

        let rendered = tree.pretty_print();
        let rows: Vec<&str> = rendered.split('\n').collect();

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], format!("{}( 5 )", " ".repeat(24)));
        assert_eq!(rows[1].find('/'), Some(18));
        assert_eq!(rows[1].rfind('\\'), Some(34));
        assert_eq!(rows[3].find('/'), Some(6));
        assert_eq!(rows[3].rfind('\\'), Some(46));
        assert_eq!(
            rows[4],
            "( 1 )           ( 4 )           ( 7 )           ( 9 )"
        );
    }

    #[test]
    fn pretty_print_shows_every_label_of_a_chain() {
        let tree: Tree<i32> = (1..=5).collect();

        let rendered = tree.pretty_print();

        for value in 1..=5 {
            assert!(rendered.contains(&single(&value)));
        }
        assert_eq!(rendered.split('\n').count(), 9);
    }
}
