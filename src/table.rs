//! Grid table layout and composition.
//!
//! A `table` subtree is flattened into a [`TableLayout`] of cell ids, each
//! cell is rendered in isolation by the writer, and [`compose`] draws the
//! final `+---+` grid around the rendered lines. Declared column widths act
//! as floors; content can only widen a column.

use crate::node::{Doctree, NodeId};
use crate::tag::Tag;

/// The cell structure of one table, in row-major order.
///
/// `docutils` trees nest rows under `tgroup`/`thead`/`tbody`; the scan
/// flattens that nesting and keeps only what composition needs.
#[derive(Debug, Default)]
pub(crate) struct TableLayout {
    /// Optional caption, rendered as a `.. table::` directive argument.
    pub(crate) title: Option<NodeId>,
    /// Declared `colwidth` floors, one per `colspec`.
    pub(crate) colwidths: Vec<usize>,
    /// Header rows as lists of `entry` ids.
    pub(crate) head: Vec<Vec<NodeId>>,
    /// Body rows as lists of `entry` ids.
    pub(crate) body: Vec<Vec<NodeId>>,
}

impl TableLayout {
    /// Collects the rows and column declarations under a `table` node.
    ///
    /// Unknown children are skipped; a `row` met outside `thead` counts as
    /// body. Spans are not modelled, so every entry lands in the next free
    /// column of its row.
    pub(crate) fn scan(tree: &Doctree, table: NodeId) -> Self {
        let mut layout = TableLayout::default();
        layout.collect(tree, table, false);
        layout
    }

    fn collect(&mut self, tree: &Doctree, id: NodeId, in_head: bool) {
        for child in tree.children(id) {
            match tree.tag(child) {
                Some(Tag::Title) => self.title = Some(child),
                Some(Tag::Tgroup) => self.collect(tree, child, in_head),
                Some(Tag::Thead) => self.collect(tree, child, true),
                Some(Tag::Tbody) => self.collect(tree, child, false),
                Some(Tag::Colspec) => {
                    let width = tree
                        .attrs(child)
                        .and_then(|attrs| attrs.colwidth())
                        .unwrap_or(0);
                    self.colwidths.push(width.max(0) as usize);
                }
                Some(Tag::Row) => {
                    let entries: Vec<NodeId> = tree
                        .children(child)
                        .filter(|&entry| tree.tag(entry) == Some(&Tag::Entry))
                        .collect();
                    if in_head {
                        self.head.push(entries);
                    } else {
                        self.body.push(entries);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Final column widths: the declared floor or the widest rendered line,
/// whichever is larger, never less than one column.
pub(crate) fn column_widths(
    colwidths: &[usize],
    head: &[Vec<Vec<String>>],
    body: &[Vec<Vec<String>>],
) -> Vec<usize> {
    let columns = head
        .iter()
        .chain(body)
        .map(Vec::len)
        .max()
        .unwrap_or(0)
        .max(colwidths.len());
    let mut widths = vec![1; columns];
    for (column, &floor) in colwidths.iter().enumerate() {
        widths[column] = widths[column].max(floor);
    }
    for row in head.iter().chain(body) {
        for (column, cell) in row.iter().enumerate() {
            let widest = cell.iter().map(|line| line.chars().count()).max();
            widths[column] = widths[column].max(widest.unwrap_or(0));
        }
    }
    widths
}

/// Draws the grid: a `-` rule above and below every body row, a `=` rule
/// after the last header row, one space of padding inside each `|` pair.
///
/// Lines are joined without a trailing newline; the caller decides indent
/// and final separation.
pub(crate) fn compose(
    widths: &[usize],
    head: &[Vec<Vec<String>>],
    body: &[Vec<Vec<String>>],
) -> String {
    let mut lines = vec![rule(widths, '-')];
    for row in head {
        row_lines(widths, row, &mut lines);
    }
    if !head.is_empty() {
        lines.push(rule(widths, '='));
    }
    for row in body {
        row_lines(widths, row, &mut lines);
        lines.push(rule(widths, '-'));
    }
    lines.join("\n")
}

fn rule(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for &width in widths {
        line.extend(std::iter::repeat(fill).take(width + 2));
        line.push('+');
    }
    line
}

/// Emits the text lines of one row, padding short cells with blanks so the
/// row is rectangular.
fn row_lines(widths: &[usize], cells: &[Vec<String>], out: &mut Vec<String>) {
    let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
    for index in 0..height {
        let mut line = String::from("|");
        for (column, &width) in widths.iter().enumerate() {
            let text = cells
                .get(column)
                .and_then(|cell| cell.get(index))
                .map_or("", String::as_str);
            line.push(' ');
            line.push_str(text);
            for _ in text.chars().count()..width {
                line.push(' ');
            }
            line.push_str(" |");
        }
        out.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Doctree;

    fn cell(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| String::from(*s)).collect()
    }

    #[test]
    fn scan_splits_head_and_body_rows() {
        let mut tree = Doctree::new();
        let table = tree.add_element(tree.root(), "table");
        let tgroup = tree.add_element(table, "tgroup");
        let colspec = tree.add_element(tgroup, "colspec");
        tree.set_attr(colspec, "colwidth", 8);
        let thead = tree.add_element(tgroup, "thead");
        let head_row = tree.add_element(thead, "row");
        tree.add_element(head_row, "entry");
        let tbody = tree.add_element(tgroup, "tbody");
        let body_row = tree.add_element(tbody, "row");
        tree.add_element(body_row, "entry");
        tree.add_element(body_row, "entry");

        let layout = TableLayout::scan(&tree, table);
        assert_eq!(layout.colwidths, vec![8]);
        assert_eq!(layout.head.len(), 1);
        assert_eq!(layout.head[0].len(), 1);
        assert_eq!(layout.body.len(), 1);
        assert_eq!(layout.body[0].len(), 2);
        assert!(layout.title.is_none());
    }

    #[test]
    fn content_widens_a_column_past_its_floor() {
        let body = vec![vec![cell(&["wide content"]), cell(&["x"])]];
        let widths = column_widths(&[4, 4], &[], &body);
        assert_eq!(widths, vec![12, 4]);
    }

    #[test]
    fn declared_floor_holds_when_content_is_narrow() {
        let body = vec![vec![cell(&["ab"])]];
        assert_eq!(column_widths(&[10], &[], &body), vec![10]);
    }

    #[test]
    fn empty_columns_stay_one_wide() {
        let body = vec![vec![cell(&[]), cell(&["a"])]];
        assert_eq!(column_widths(&[], &[], &body), vec![1, 1]);
    }

    #[test]
    fn composes_a_grid_with_header_rule() {
        let head = vec![vec![cell(&["Name"]), cell(&["Role"])]];
        let body = vec![
            vec![cell(&["Alice"]), cell(&["admin"])],
            vec![cell(&["Bob"]), cell(&["user"])],
        ];
        let widths = column_widths(&[], &head, &body);
        let grid = compose(&widths, &head, &body);
        assert_eq!(
            grid,
            "+-------+-------+\n\
             | Name  | Role  |\n\
             +=======+=======+\n\
             | Alice | admin |\n\
             +-------+-------+\n\
             | Bob   | user  |\n\
             +-------+-------+"
        );
    }

    #[test]
    fn headerless_grid_has_no_equals_rule() {
        let body = vec![vec![cell(&["a"])]];
        let grid = compose(&[1], &[], &body);
        assert_eq!(grid, "+---+\n| a |\n+---+");
    }

    #[test]
    fn multi_line_cells_pad_to_row_height() {
        let body = vec![vec![cell(&["one", "two"]), cell(&["x"])]];
        let grid = compose(&[3, 1], &[], &body);
        assert_eq!(
            grid,
            "+-----+---+\n\
             | one | x |\n\
             | two |   |\n\
             +-----+---+"
        );
    }

    #[test]
    fn short_rows_fill_missing_cells_with_blanks() {
        let body = vec![vec![cell(&["a"]), cell(&["b"])], vec![cell(&["c"])]];
        let widths = column_widths(&[], &[], &body);
        let grid = compose(&widths, &[], &body);
        assert!(grid.contains("| c |   |"));
    }
}
