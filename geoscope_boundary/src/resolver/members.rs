use crate::overpass::Member;
use geoscope_geometry::{CompositeGeometryTrait, Coordinates, LineStringGeometry};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
pub struct WayMember {
	pub reference: u64,
	pub geometry: LineStringGeometry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeMember {
	pub reference: u64,
	pub role: String,
	pub position: Option<Coordinates>,
}

/// A sub-relation, usually an enclosed administrative unit one level down.
#[derive(Debug, Clone, PartialEq)]
pub struct SubArea {
	pub reference: u64,
	pub role: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemberCounts {
	pub outer_ways: usize,
	pub inner_ways: usize,
	pub nodes: usize,
	pub sub_areas: usize,
}

impl MemberCounts {
	pub fn to_json(&self) -> Value {
		json!({
			"outer_ways": self.outer_ways,
			"inner_ways": self.inner_ways,
			"nodes": self.nodes,
			"sub_areas": self.sub_areas,
		})
	}
}

/// The members of a boundary relation, sorted into the buckets the resolver works with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryMembers {
	pub outer_ways: Vec<WayMember>,
	pub inner_ways: Vec<WayMember>,
	pub nodes: Vec<NodeMember>,
	pub sub_areas: Vec<SubArea>,
}

impl BoundaryMembers {
	/// Ways with role `outer` or no role are outer ways, ways with role `inner` are holes.
	/// Ways with any other role, e.g. `subarea` on a misused relation, are ignored.
	pub fn partition(members: &[Member]) -> BoundaryMembers {
		let mut result = BoundaryMembers::default();
		for member in members {
			if member.is_outer_way() {
				result.outer_ways.push(WayMember {
					reference: member.reference,
					geometry: member.line(),
				});
			} else if member.is_inner_way() {
				result.inner_ways.push(WayMember {
					reference: member.reference,
					geometry: member.line(),
				});
			} else if member.is_node() {
				result.nodes.push(NodeMember {
					reference: member.reference,
					role: member.role.clone(),
					position: member.position(),
				});
			} else if member.is_relation() {
				result.sub_areas.push(SubArea {
					reference: member.reference,
					role: member.role.clone(),
				});
			} else {
				log::trace!(
					"ignoring {} member {} with role '{}'",
					member.kind,
					member.reference,
					member.role
				);
			}
		}
		result
	}

	pub fn counts(&self) -> MemberCounts {
		MemberCounts {
			outer_ways: self.outer_ways.len(),
			inner_ways: self.inner_ways.len(),
			nodes: self.nodes.len(),
			sub_areas: self.sub_areas.len(),
		}
	}

	/// Geometries of the outer ways in membership order, skipping ways delivered without geometry.
	pub fn outer_geometries(&self) -> Vec<LineStringGeometry> {
		non_empty(&self.outer_ways)
	}

	pub fn inner_geometries(&self) -> Vec<LineStringGeometry> {
		non_empty(&self.inner_ways)
	}
}

fn non_empty(ways: &[WayMember]) -> Vec<LineStringGeometry> {
	ways
		.iter()
		.filter(|w| !w.geometry.is_empty())
		.map(|w| w.geometry.clone())
		.collect()
}
