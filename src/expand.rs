use crate::registry::{GeoType, Method};
use crate::table::{Body, ImplEntry, Origin, RelationTable};

/// Close hand-authored asymmetry: for every entry relating two distinct
/// types, derive the mirrored pair's implementation as a pure
/// operand-swap delegation, `other.Method(self)`. Diagonal entries
/// would only duplicate themselves and are skipped, and an existing
/// entry for the mirrored key wins over the derivation.
///
/// This runs before default-fill on purpose: only explicit entries get
/// mirrored, never a synthesized default.
pub fn expand_symmetric(mut table: RelationTable) -> RelationTable {
    let mirrored: Vec<ImplEntry> = table
        .entries()
        .iter()
        .filter(|entry| entry.self_t != entry.other_t)
        .map(|entry| ImplEntry {
            method: entry.method,
            self_t: entry.other_t,
            other_t: entry.self_t,
            body: Body::new(format!("other.{}(self)", entry.method.name)),
            origin: Origin::Symmetric,
        })
        .collect();
    for entry in mirrored {
        table.insert_if_absent(entry);
    }
    table
}

/// Complete the table for one method over the full ordered cross
/// product of `types` (diagonal included) by delegating straight to the
/// geo operation of the same name. After this, every ordered pair has
/// exactly one entry for `method`.
pub fn fill_defaults(mut table: RelationTable, method: Method, types: &[GeoType]) -> RelationTable {
    for a in types {
        for b in types {
            table.insert_if_absent(ImplEntry {
                method,
                self_t: a.name,
                other_t: b.name,
                body: Body::new(format!("self.{}(other)", method.delegate)),
                origin: Origin::Default,
            });
        }
    }
    table
}
