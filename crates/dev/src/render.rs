//! Table rendering for binding inventories.
//!
//! Responsibilities:
//! - Render one `BindingInventory` as a heading plus an aligned two-column
//!   text table (Binding / Resource).
//! - Provide the singular and per-worker heading phrasings.
//!
//! Does NOT handle:
//! - Choosing between singular and labelled headings (the composer decides,
//!   based on how many workers are in the set).
//! - Writing output anywhere; callers hand the returned block to a sink.
//!
//! Invariants:
//! - Column widths are computed per rendered block, never globally across a
//!   multi-worker set.
//! - Alignment uses trailing spaces only; entries are never truncated, even
//!   if they overflow a terminal width.
//! - Rows keep entry order: no sorting, grouping, or deduplication.

use bindings_config::BindingInventory;

const BINDING_HEADER: &str = "Binding";
const RESOURCE_HEADER: &str = "Resource";

/// Spaces between the two columns.
const COLUMN_GAP: usize = 4;

/// Heading used when the set contains a single worker.
pub fn singular_heading() -> String {
    "Your Worker has access to the following bindings:".to_owned()
}

/// Heading used for every block of a multi-worker set.
pub fn labelled_heading(worker_label: &str) -> String {
    format!("{worker_label} has access to the following bindings:")
}

/// Render one inventory as a text block: a blank line, the heading, then the
/// table. An inventory with no entries renders as just the heading, so "no
/// declared bindings" never prints an empty table.
pub fn render(inventory: &BindingInventory, heading: &str) -> String {
    let mut block = String::new();
    block.push('\n');
    block.push_str(heading);

    if inventory.is_empty() {
        return block;
    }

    let binding_width = column_width(
        BINDING_HEADER,
        inventory.entries.iter().map(|e| e.display_name.as_str()),
    );
    let resource_width = column_width(
        RESOURCE_HEADER,
        inventory
            .entries
            .iter()
            .map(|e| e.resource_description.as_str()),
    );

    block.push('\n');
    block.push_str(&row(
        BINDING_HEADER,
        RESOURCE_HEADER,
        binding_width,
        resource_width,
    ));
    for entry in &inventory.entries {
        block.push('\n');
        block.push_str(&row(
            &entry.display_name,
            &entry.resource_description,
            binding_width,
            resource_width,
        ));
    }

    block
}

/// Width of one column: the header or the longest cell, whichever is wider.
fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count())
        .fold(header.chars().count(), usize::max)
}

fn row(binding: &str, resource: &str, binding_width: usize, resource_width: usize) -> String {
    format!(
        "{binding:<binding_width$}{gap}{resource:<resource_width$}",
        gap = " ".repeat(COLUMN_GAP),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bindings_config::{BindingEntry, BindingKind};

    fn inventory(entries: Vec<BindingEntry>) -> BindingInventory {
        BindingInventory {
            worker_label: "app".to_owned(),
            entries,
        }
    }

    #[test]
    fn test_empty_inventory_renders_heading_only() {
        let block = render(&inventory(vec![]), "app has access to the following bindings:");
        assert_eq!(block, "\napp has access to the following bindings:");
    }

    #[test]
    fn test_columns_align_to_longest_cell() {
        let block = render(
            &inventory(vec![
                BindingEntry::new(BindingKind::Store, "env.KV (test-kv-id)", "KV Namespace"),
                BindingEntry::new(BindingKind::Asset, "env.IMAGES", "Images"),
            ]),
            &singular_heading(),
        );
        // Binding column is as wide as "env.KV (test-kv-id)" (19), resource
        // column as wide as "KV Namespace" (12), both header-padded.
        assert_eq!(
            block,
            "\nYour Worker has access to the following bindings:\n\
             Binding                Resource    \n\
             env.KV (test-kv-id)    KV Namespace\n\
             env.IMAGES             Images      "
        );
    }

    #[test]
    fn test_header_sets_minimum_width() {
        let block = render(
            &inventory(vec![BindingEntry::new(BindingKind::Queue, "env.Q", "Queue")]),
            "q has access to the following bindings:",
        );
        assert_eq!(
            block,
            "\nq has access to the following bindings:\n\
             Binding    Resource\n\
             env.Q      Queue   "
        );
    }

    #[test]
    fn test_rows_keep_entry_order() {
        let block = render(
            &inventory(vec![
                BindingEntry::new(BindingKind::Store, "env.ZZZ", "KV Namespace"),
                BindingEntry::new(BindingKind::Store, "env.AAA", "KV Namespace"),
            ]),
            &singular_heading(),
        );
        let zzz = block.find("env.ZZZ").unwrap();
        let aaa = block.find("env.AAA").unwrap();
        assert!(zzz < aaa);
    }

    #[test]
    fn test_long_entries_are_never_truncated() {
        let long_name = format!("env.{} (very-long-identifier)", "X".repeat(200));
        let block = render(
            &inventory(vec![BindingEntry::new(
                BindingKind::Other,
                long_name.clone(),
                "Tail Consumer",
            )]),
            &singular_heading(),
        );
        assert!(block.contains(&long_name));
    }

    #[test]
    fn test_labelled_heading() {
        assert_eq!(
            labelled_heading("auxiliary-worker"),
            "auxiliary-worker has access to the following bindings:"
        );
    }
}
