use crate::registry::GeoType;

/// Render the `enum_dispatch!` macro: double dispatch over
/// `geo::Geometry` as an exhaustive match on every ordered pair of
/// variants, expanding a caller-supplied expression with both payloads
/// bound. The trailing `_` arm is unreachable while the type set
/// matches this table; if the enum ever grows without regenerating, a
/// loud panic beats a silently wrong answer.
pub fn render_enum_dispatch(types: &[GeoType]) -> String {
    let mut out = String::new();
    out.push_str("macro_rules! enum_dispatch {\n");
    out.push_str("    ($a:ident, $b:ident, $expr:expr) => {\n");
    out.push_str("        match ($a, $b) {\n");
    for a in types {
        for b in types {
            out.push_str(&format!(
                "            (Geometry::{}($a), Geometry::{}($b)) => $expr,\n",
                a.name, b.name
            ));
        }
    }
    out.push_str("            _ => panic!(\"match failure in enum_dispatch!\"),\n");
    out.push_str("        }\n");
    out.push_str("    };\n");
    out.push_str("}\n");
    out
}
