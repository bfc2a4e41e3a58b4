/// What a relation method evaluates to in the generated code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReturnKind {
    Bool,
    Distance,
}

impl ReturnKind {
    pub fn rust_type(self) -> &'static str {
        match self {
            ReturnKind::Bool => "bool",
            ReturnKind::Distance => "f64",
        }
    }
}

/// A relation method on the generated `Relates` trait.
///
/// `delegate` names the geo operation that default-fill calls for pairs
/// the catalog leaves unspecified. `symmetric` records whether swapping
/// operands and delegating is semantically valid for this relation;
/// containment is not symmetric (`A contains B` says nothing about
/// `B contains A`), so only the other relations get mirrored entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Method {
    pub name: &'static str,
    pub returns: ReturnKind,
    pub delegate: &'static str,
    pub symmetric: bool,
}

/// A geometry type from the geo crate, with its dimensionality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeoType {
    pub name: &'static str,
    pub dimensions: u32,
}

pub const CONTAINS: Method = Method {
    name: "Contains",
    returns: ReturnKind::Bool,
    delegate: "contains",
    symmetric: false,
};

pub const INTERSECTS: Method = Method {
    name: "Intersects",
    returns: ReturnKind::Bool,
    delegate: "intersects",
    symmetric: true,
};

pub const EUCLIDEAN_DISTANCE: Method = Method {
    name: "EuclideanDistance",
    returns: ReturnKind::Distance,
    delegate: "euclidean_distance",
    symmetric: true,
};

pub const METHODS: [Method; 3] = [CONTAINS, INTERSECTS, EUCLIDEAN_DISTANCE];

// Declaration order matters: default-fill iterates this list, so it
// fixes the order of generated impl blocks.
pub const TYPES: [GeoType; 6] = [
    GeoType {
        name: "Point",
        dimensions: 0,
    },
    GeoType {
        name: "Line",
        dimensions: 1,
    },
    GeoType {
        name: "LineString",
        dimensions: 1,
    },
    GeoType {
        name: "Polygon",
        dimensions: 2,
    },
    GeoType {
        name: "Rect",
        dimensions: 2,
    },
    GeoType {
        name: "Triangle",
        dimensions: 2,
    },
];

pub fn find_type(types: &[GeoType], name: &str) -> Option<GeoType> {
    types.iter().copied().find(|t| t.name == name)
}

pub fn find_method(name: &str) -> Option<Method> {
    METHODS.iter().copied().find(|m| m.name == name)
}
