//! Overpass QL statements used by the resolvers.
//!
//! The statements carry no `[out:json]` settings header; [`super::OverpassSource`] prepends it.

/// All members of a relation, with the geometry of every member way inlined.
pub fn relation_by_id(relation_id: u64) -> String {
	format!("relation({relation_id});out geom;")
}

/// Administrative boundary relations linked to a Wikidata entity.
pub fn admin_relation_by_wikidata(qid: &str) -> String {
	format!(r#"relation["wikidata"="{qid}"]["boundary"="administrative"];out geom;"#)
}

/// Any relation linked to a Wikidata entity.
pub fn relation_by_wikidata(qid: &str) -> String {
	format!(r#"relation["wikidata"="{qid}"];out geom;"#)
}

/// Ways linked to a Wikidata entity, e.g. rivers or roads without a route relation.
pub fn way_by_wikidata(qid: &str) -> String {
	format!(r#"way["wikidata"="{qid}"];out geom;"#)
}

/// Prepends the settings header that makes Overpass answer in JSON.
pub fn with_settings(statement: &str, timeout_seconds: u64) -> String {
	format!("[out:json][timeout:{timeout_seconds}];{statement}")
}
