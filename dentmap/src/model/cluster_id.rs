use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::fmt::Display;

/// the role a cluster plays on the map, which drives the shape of its identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClusterKind {
    /// an individual pin, rendered as `single-{id}`
    Single,
    /// a drill-down subcluster that absorbed no neighbors, rendered as
    /// `subcluster-{level}-{id}`
    Subcluster,
    /// a group of listings, rendered as `cluster-{level}-{id}-{id}...`
    Aggregate,
}

/// deterministic cluster identifier. member ids are kept sorted, so the same
/// membership at the same level always produces the same identifier no matter
/// the order in which members were merged. UI layers rely on this to reuse
/// marker objects across renders.
///
/// since the identifier carries its member ids, it is sufficient to select a
/// cluster for drill-down without holding on to the cluster itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClusterId {
    kind: ClusterKind,
    level: u32,
    member_ids: Vec<String>,
}

impl ClusterId {
    pub fn single(listing_id: &str, level: u32) -> ClusterId {
        ClusterId {
            kind: ClusterKind::Single,
            level,
            member_ids: vec![listing_id.to_string()],
        }
    }

    pub fn subcluster(listing_id: &str, level: u32) -> ClusterId {
        ClusterId {
            kind: ClusterKind::Subcluster,
            level,
            member_ids: vec![listing_id.to_string()],
        }
    }

    pub fn aggregate<'a, I>(member_ids: I, level: u32) -> ClusterId
    where
        I: IntoIterator<Item = &'a str>,
    {
        ClusterId {
            kind: ClusterKind::Aggregate,
            level,
            member_ids: member_ids.into_iter().map(String::from).sorted().collect(),
        }
    }

    pub fn kind(&self) -> ClusterKind {
        self.kind
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// sorted identifiers of the listings in this cluster
    pub fn member_ids(&self) -> &[String] {
        &self.member_ids
    }

    pub fn contains(&self, listing_id: &str) -> bool {
        self.member_ids
            .binary_search_by(|id| id.as_str().cmp(listing_id))
            .is_ok()
    }
}

impl Display for ClusterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ClusterKind::Single => write!(f, "single-{}", self.member_ids.join("-")),
            ClusterKind::Subcluster => {
                write!(f, "subcluster-{}-{}", self.level, self.member_ids.join("-"))
            }
            ClusterKind::Aggregate => {
                write!(f, "cluster-{}-{}", self.level, self.member_ids.join("-"))
            }
        }
    }
}

impl Serialize for ClusterId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
