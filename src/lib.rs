//! `relates-gen` generates the relation code that `spatial-join` ships:
//! the `Relates` trait impls for every ordered pair of geometry types
//! (checked in as `relates_impl.rs`) and the `enum_dispatch!` macro that
//! double-dispatches over `geo::Geometry`. Rust macros aren't powerful
//! enough to close this kind of table in-language without a proc-macro
//! package, so we generate text instead and check the result in.
//!
//! ## How the table gets built
//!
//! The interesting part is turning a sparse, hand-authored catalog into
//! a dense one. For each relation method we start from the explicit
//! catalog entries and close the table in two passes:
//!
//! * **symmetry expansion**: for relations where swapping operands is
//!   valid (`Intersects` and `EuclideanDistance`, not `Contains`),
//!   every explicit entry over two distinct types gets a mirrored entry
//!   that just delegates: `other.Intersects(self)`. This runs before
//!   default-fill, so only hand-authored asymmetry is mirrored.
//! * **default-fill**: whatever pairs remain get a direct delegation to
//!   the [geo](https://docs.rs/geo/latest/geo/) operation of the same
//!   name, e.g. `self.euclidean_distance(other)`.
//!
//! Explicit entries always win over derived ones, derived passes only
//! fill holes, and a duplicate explicit entry is a hard error rather
//! than last-write-wins. Completion is total: with 6 types and 3
//! methods the merged table always holds exactly 108 entries.
//!
//! The generated trait uses CamelCase method names (`Contains`, not
//! `contains`) so the bodies can delegate to the geo traits of the same
//! lower-case names without infinite recursion or disambiguation
//! ceremony.
//!
//! ## Rendering
//!
//! Entries are grouped by `(self type, other type)` in first-seen
//! order, each group sorted by method name, and rendered as one
//! `impl Relates<Other<f64>> for Self<f64>` block. The output is
//! deterministic byte-for-byte so regenerating never produces a
//! spurious diff in version control. A body that ignores its second
//! operand renders with an `_other` parameter to keep the generated
//! file lint-clean.
//!
//! ```
//! use relates_gen::{group_entries, relates_table, render_enum_dispatch, render_impls, TYPES};
//!
//! let table = relates_table().unwrap();
//! assert_eq!(table.len(), 108);
//!
//! let rendered = render_impls(&group_entries(&table));
//! assert!(rendered.starts_with("impl Relates<Line<f64>> for Point<f64> {"));
//!
//! let dispatch = render_enum_dispatch(&TYPES);
//! assert_eq!(dispatch.matches("=> $expr,").count(), 36);
//! ```
//!
//! ## Binaries
//!
//! * `gen-relates` prints the trait impl blocks,
//! * `gen-dispatch` prints the `enum_dispatch!` macro,
//! * `gen-fixtures` (feature `fixtures`, on by default) writes random
//!   polygon collections as WKT for the spatial-join benchmarks.
//!
//! The generator runs once per invocation, single-threaded, and either
//! emits the complete table or fails before producing any output.

mod registry;
pub use registry::{
    find_method, find_type, GeoType, Method, ReturnKind, CONTAINS, EUCLIDEAN_DISTANCE, INTERSECTS,
    METHODS, TYPES,
};

mod table;
pub use table::{Body, Error, ImplEntry, Origin, RelationTable};

mod expand;
pub use expand::{expand_symmetric, fill_defaults};

mod catalog;
pub use catalog::{
    family_table, relates_table, CONTAINS_CATALOG, DISTANCE_CATALOG, INTERSECTS_CATALOG,
};

mod render;
pub use render::{group_entries, render_impls, Group};

mod dispatch;
pub use dispatch::render_enum_dispatch;

#[cfg(feature = "fixtures")]
pub mod fixtures;

#[cfg(test)]
mod proptests;
