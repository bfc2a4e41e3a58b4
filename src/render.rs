use std::fmt;

use smallvec::{smallvec, SmallVec};

use crate::table::{ImplEntry, RelationTable};

/// A read-only view over the completed table: every entry addressed to
/// one `(self type, other type)` pair, sorted by method name so the
/// rendered block is reproducible byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub self_t: &'static str,
    pub other_t: &'static str,
    pub impls: SmallVec<[ImplEntry; 3]>,
}

/// Partition the table by type pair. Group order is first-seen order of
/// each pair in the table, which is what lets the generated file be
/// checked into version control without spurious diffs.
pub fn group_entries(table: &RelationTable) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    for entry in table.entries() {
        let key = (entry.self_t, entry.other_t);
        match groups.iter_mut().find(|g| (g.self_t, g.other_t) == key) {
            Some(group) => group.impls.push(entry.clone()),
            None => groups.push(Group {
                self_t: entry.self_t,
                other_t: entry.other_t,
                impls: smallvec![entry.clone()],
            }),
        }
    }
    for group in &mut groups {
        group.impls.sort_by_key(|entry| entry.method.name);
    }
    groups
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "impl Relates<{}<f64>> for {}<f64> {{",
            self.other_t, self.self_t
        )?;
        for entry in &self.impls {
            // A body that ignores its second operand gets an
            // underscore-prefixed parameter so rustc's unused-variable
            // lint stays quiet in the generated file.
            let prefix = if entry.body.references_other() { "" } else { "_" };
            writeln!(
                f,
                "    fn {}(&self, {}other: &{}<f64>) -> {} {{",
                entry.method.name,
                prefix,
                self.other_t,
                entry.method.returns.rust_type()
            )?;
            writeln!(f, "        {}", entry.body.text())?;
            writeln!(f, "    }}")?;
        }
        write!(f, "}}")
    }
}

/// Render every group, blank-line separated, in group order.
pub fn render_impls(groups: &[Group]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&group.to_string());
        out.push_str("\n\n");
    }
    out
}
