use lazy_static::lazy_static;

use crate::expand::{expand_symmetric, fill_defaults};
use crate::registry::{GeoType, Method, CONTAINS, EUCLIDEAN_DISTANCE, INTERSECTS, TYPES};
use crate::table::{Error, ImplEntry, RelationTable};

fn entry(
    method: Method,
    self_t: &'static str,
    other_t: &'static str,
    body: &str,
) -> ImplEntry {
    ImplEntry::explicit(method, self_t, other_t, body)
}

/// A shape can never contain one of strictly higher dimensionality, and
/// `geo::Contains` doesn't promise anything sensible for those pairs,
/// so the catalog pins them to `false` rather than leaving them to
/// default-fill.
fn dimension_rule(types: &[GeoType]) -> Vec<ImplEntry> {
    let mut entries = Vec::new();
    for a in types {
        for b in types {
            if a.dimensions < b.dimensions {
                entries.push(entry(CONTAINS, a.name, b.name, "false"));
            }
        }
    }
    entries
}

lazy_static! {
    pub static ref CONTAINS_CATALOG: Vec<ImplEntry> = {
        let mut entries = dimension_rule(&TYPES);
        entries.extend(vec![
            entry(CONTAINS, "LineString", "LineString",
                  "other.lines().all(|oline| self.lines().any(|sline| sline.Contains(&oline)))"),
            entry(CONTAINS, "Rect", "Line",
                  "self.contains(&other.start_point()) && self.contains(&other.end_point())"),
            entry(CONTAINS, "Rect", "LineString",
                  "other.points_iter().all(|pt| self.Contains(&pt))"),
            entry(CONTAINS, "Rect", "Triangle",
                  "self.contains(&Point(other.0)) && self.contains(&Point(other.1)) && self.contains(&Point(other.2))"),
            entry(CONTAINS, "Rect", "Polygon",
                  "other.exterior().points_iter().all(|pt| self.Contains(&pt))"),
            // FIX for bug in geo-types, https://github.com/georust/geo/issues/473, delete when they fix it:
            entry(CONTAINS, "Triangle", "Point",
                  "if self.0 == self.1 && self.1 == self.2 {self.0 == other.0} else {self.contains(other)}"),
            // We're using Contains instead of contains only to work around the geo-types bug
            entry(CONTAINS, "Triangle", "Line",
                  "self.Contains(&other.start_point()) && self.Contains(&other.end_point())"),
            entry(CONTAINS, "Triangle", "LineString",
                  "other.lines().all(|line| self.Contains(&line))"),
            // We're using Contains instead of contains only to work around the geo-types bug
            entry(CONTAINS, "Triangle", "Triangle",
                  "self.Contains(&Point(other.0)) && self.Contains(&Point(other.1)) && self.Contains(&Point(other.2))"),
            entry(CONTAINS, "Triangle", "Polygon",
                  "other.exterior().points_iter().all(|pt| self.Contains(&pt))"),
            entry(CONTAINS, "Triangle", "Rect",
                  "rect_lines(other).iter().all(|line| self.Contains(line))"),
            entry(CONTAINS, "Polygon", "Rect",
                  "rect_lines(other).iter().all(|line| self.contains(line))"),
            entry(CONTAINS, "Polygon", "Triangle",
                  "self.contains(&Point(other.0)) && self.contains(&Point(other.1)) && self.contains(&Point(other.2))"),
        ]);
        entries
    };

    pub static ref INTERSECTS_CATALOG: Vec<ImplEntry> = vec![
        // FIXME: should be relative_eq!(0.0, line distance between self and other) to match geo-types
        entry(INTERSECTS, "Point", "Point", "self == other"),
        entry(INTERSECTS, "Polygon", "Point", "self.contains(other)"),
        entry(INTERSECTS, "LineString", "Point", "self.contains(other)"),
        entry(INTERSECTS, "Rect", "Point", "self.Contains(other)"),
        entry(INTERSECTS, "Rect", "Line",
              "self.Contains(other) || rect_lines(self).iter().any(|sline| sline.intersects(other))"),
        entry(INTERSECTS, "Rect", "LineString",
              "self.Contains(other) || rect_lines(self).iter().any(|sline| other.lines().any(|oline| sline.intersects(&oline)))"),
        entry(INTERSECTS, "Rect", "Triangle",
              "self.Contains(other) || rect_lines(self).iter().any(|sline| other.to_lines().iter().any(|oline| sline.intersects(oline))) || other.Contains(self)"),
        entry(INTERSECTS, "Triangle", "Point", "self.Contains(other)"),
        entry(INTERSECTS, "Triangle", "Line",
              "self.Contains(other) || self.to_lines().iter().any(|sline| sline.intersects(other))"),
        entry(INTERSECTS, "Triangle", "LineString",
              "self.Contains(other) || self.to_lines().iter().any(|sline| other.lines().any(|oline| sline.intersects(&oline)))"),
        entry(INTERSECTS, "Triangle", "Triangle",
              "self.Contains(other) || self.to_lines().iter().any(|sline| other.to_lines().iter().any(|oline| sline.intersects(oline))) || other.Contains(self)"),
        entry(INTERSECTS, "Triangle", "Polygon",
              "self.Intersects(other.exterior()) || (other.exterior().Contains(self) || if other.interiors().is_empty() {false} else {other.interiors().iter().all(|hole| !hole.Contains(self))} )"),
    ];

    // https://github.com/georust/geo/issues/476 means that Rect/Polygon
    // distances and probably Tri/Poly are busted
    pub static ref DISTANCE_CATALOG: Vec<ImplEntry> = vec![
        // this is only needed until https://github.com/georust/geo/issues/476 gets fixed
        entry(EUCLIDEAN_DISTANCE, "Polygon", "Line",
              "if self.intersects(other) {0.0} else {self.exterior().lines().map(|sline| sline.euclidean_distance(other)).min_by(|a, b| a.partial_cmp(b).unwrap()).unwrap()}"),
        entry(EUCLIDEAN_DISTANCE, "Rect", "Point",
              "if self.Intersects(other) {0.0} else {rect_lines(self).iter().map(|sline| sline.euclidean_distance(other)).min_by(|a, b| a.partial_cmp(b).unwrap()).unwrap()}"),
        entry(EUCLIDEAN_DISTANCE, "Rect", "Line",
              "if self.Intersects(other) {0.0} else {rect_lines(self).iter().map(|sline| sline.euclidean_distance(other)).min_by(|a, b| a.partial_cmp(b).unwrap()).unwrap()}"),
        entry(EUCLIDEAN_DISTANCE, "Rect", "LineString",
              "if self.Intersects(other) {0.0} else {rect_lines(self).iter().map(|sline| sline.euclidean_distance(other)).min_by(|a, b| a.partial_cmp(b).unwrap()).unwrap()}"),
        entry(EUCLIDEAN_DISTANCE, "Rect", "Triangle",
              "if self.Intersects(other) {0.0} else {rect_lines(self).iter().map(|sline| sline.EuclideanDistance(other)).min_by(|a, b| a.partial_cmp(b).unwrap()).unwrap()}"),
        entry(EUCLIDEAN_DISTANCE, "Rect", "Rect",
              "if self.Intersects(other) {0.0} else {rect_lines(other).iter().map(|oline| oline.EuclideanDistance(self)).min_by(|a, b| a.partial_cmp(b).unwrap()).unwrap()}"),
        // we can switch back to euclidean_distance after 476 gets fixed
        entry(EUCLIDEAN_DISTANCE, "Rect", "Polygon",
              "if self.Intersects(other.exterior()) {0.0} else {rect_lines(self).iter().map(|sline| sline.EuclideanDistance(other)).min_by(|a, b| a.partial_cmp(b).unwrap()).unwrap()}"),
        entry(EUCLIDEAN_DISTANCE, "Triangle", "Point",
              "if self.Intersects(other) {0.0} else {self.to_lines().iter().map(|sline| sline.euclidean_distance(other)).min_by(|a, b| a.partial_cmp(b).unwrap()).unwrap()}"),
        entry(EUCLIDEAN_DISTANCE, "Triangle", "Line",
              "if self.Intersects(other) {0.0} else {self.to_lines().iter().map(|sline| sline.euclidean_distance(other)).min_by(|a, b| a.partial_cmp(b).unwrap()).unwrap()}"),
        entry(EUCLIDEAN_DISTANCE, "Triangle", "LineString",
              "if self.Intersects(other) {0.0} else {self.to_lines().iter().map(|sline| other.lines().map(|oline| oline.euclidean_distance(sline)).min_by(|a, b| a.partial_cmp(b).unwrap())).min_by(|a, b| a.partial_cmp(b).unwrap()).unwrap().unwrap()}"),
        entry(EUCLIDEAN_DISTANCE, "Triangle", "Triangle",
              "if self.Intersects(other) {0.0} else {other.to_lines().iter().map(|oline| self.to_lines().iter().map(|sline| sline.euclidean_distance(oline)).min_by(|a, b| a.partial_cmp(b).unwrap())).min_by(|a, b| a.partial_cmp(b).unwrap()).unwrap().unwrap()}"),
        // we can switch back to euclidean_distance after 476 gets fixed
        entry(EUCLIDEAN_DISTANCE, "Triangle", "Polygon",
              "if self.Intersects(other.exterior()) {0.0} else {self.to_lines().iter().map(|sline| sline.EuclideanDistance(other)).min_by(|a, b| a.partial_cmp(b).unwrap()).unwrap()}"),
    ];
}

/// One method family, start to finish: validate the catalog, close
/// hand-authored asymmetry when the relation allows it, then fill the
/// rest of the cross product with delegation defaults.
pub fn family_table(
    method: Method,
    catalog: &[ImplEntry],
    types: &[GeoType],
) -> Result<RelationTable, Error> {
    let mut table = RelationTable::from_catalog(catalog.to_vec(), types)?;
    if method.symmetric {
        table = expand_symmetric(table);
    }
    Ok(fill_defaults(table, method, types))
}

/// The complete merged table for the shipped registry: every method
/// over every ordered pair of types, exactly once.
pub fn relates_table() -> Result<RelationTable, Error> {
    let contains = family_table(CONTAINS, &CONTAINS_CATALOG, &TYPES)?;
    let intersects = family_table(INTERSECTS, &INTERSECTS_CATALOG, &TYPES)?;
    let distance = family_table(EUCLIDEAN_DISTANCE, &DISTANCE_CATALOG, &TYPES)?;
    contains.merge(intersects)?.merge(distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Origin;

    #[test]
    fn the_full_table_is_total() {
        let table = relates_table().unwrap();
        assert_eq!(table.len(), 3 * TYPES.len() * TYPES.len());
        for method in &crate::registry::METHODS {
            for a in &TYPES {
                for b in &TYPES {
                    assert!(
                        table.get(method.name, a.name, b.name).is_some(),
                        "missing ({}, {}, {})",
                        method.name,
                        a.name,
                        b.name
                    );
                }
            }
        }
    }

    #[test]
    fn dimension_rule_entries_are_explicit_falses() {
        let table = relates_table().unwrap();
        let entry = table.get("Contains", "Point", "Polygon").unwrap();
        assert_eq!(entry.origin, Origin::Explicit);
        assert_eq!(entry.body.text(), "false");
        assert!(!entry.body.references_other());
        // 11 pairs have strictly increasing dimension in the shipped registry
        let falses = table
            .entries()
            .iter()
            .filter(|e| e.method.name == "Contains" && e.body.text() == "false")
            .count();
        assert_eq!(falses, 11);
    }

    #[test]
    fn the_degenerate_triangle_workaround_survives() {
        let table = relates_table().unwrap();
        let entry = table.get("Contains", "Triangle", "Point").unwrap();
        assert_eq!(entry.origin, Origin::Explicit);
        assert_eq!(
            entry.body.text(),
            "if self.0 == self.1 && self.1 == self.2 {self.0 == other.0} else {self.contains(other)}"
        );
    }

    #[test]
    fn intersects_mirrors_come_from_symmetry() {
        let table = relates_table().unwrap();
        let mirror = table.get("Intersects", "Point", "Rect").unwrap();
        assert_eq!(mirror.origin, Origin::Symmetric);
        assert_eq!(mirror.body.text(), "other.Intersects(self)");

        // but containment is never mirrored: (Point, Rect) comes from
        // the dimension rule, (Rect, Point) from default-fill
        let contains = table.get("Contains", "Rect", "Point").unwrap();
        assert_eq!(contains.origin, Origin::Default);
        assert_eq!(contains.body.text(), "self.contains(other)");
    }

    #[test]
    fn families_complete_independently() {
        for method in &crate::registry::METHODS {
            let catalog: &[ImplEntry] = match method.name {
                "Contains" => &CONTAINS_CATALOG,
                "Intersects" => &INTERSECTS_CATALOG,
                _ => &DISTANCE_CATALOG,
            };
            let table = family_table(*method, catalog, &TYPES).unwrap();
            assert_eq!(table.len(), TYPES.len() * TYPES.len());
        }
    }

    #[test]
    fn completion_is_deterministic() {
        assert_eq!(relates_table().unwrap(), relates_table().unwrap());
    }
}
