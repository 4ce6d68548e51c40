//! Site options derived from employee-site relation rows.

use serde::{Deserialize, Serialize};

/// A site an employee can produce or receive orders at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    /// Site identifier.
    pub id: String,
    /// Site display name.
    pub name: String,
}

/// The joined `sites` record of an employee-site row.
///
/// Depending on how the relation is declared on the remote store, the join
/// arrives either as a single object or as an array, so decoding has to
/// accept both shapes.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SiteRelation {
    /// Relation resolved to one record.
    One(SiteOption),
    /// Relation resolved to a list of records.
    Many(Vec<SiteOption>),
}

/// A row of the employee-site assignment query (`site_id, sites(id, name)`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeSiteRow {
    /// Raw foreign key, kept for callers that match on it.
    #[serde(default)]
    pub site_id: Option<String>,

    /// Joined site record, in either relation shape.
    #[serde(default)]
    pub sites: Option<SiteRelation>,
}

/// Flatten assignment rows into site options.
///
/// Takes the first site of an array-shaped relation and drops rows whose
/// join came back empty.
pub fn normalize_sites(rows: &[EmployeeSiteRow]) -> Vec<SiteOption> {
    rows.iter()
        .filter_map(|row| match &row.sites {
            Some(SiteRelation::One(site)) => Some(site.clone()),
            Some(SiteRelation::Many(sites)) => sites.first().cloned(),
            None => None,
        })
        .collect()
}
