//! Festival crew roster and designation grouping
//!
//! The team pages show the organizing crew grouped by designation: leads
//! first, then co-leads, then everyone else. Club listings additionally
//! pair lead[i] with co-lead[i] in the same display row.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One organizing-crew entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,
    pub designation: String,
}

impl CrewMember {
    pub fn new(name: impl Into<String>, designation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            designation: designation.into(),
        }
    }
}

/// Designation grouping used by the team-display surfaces
#[derive(Debug, Clone, Default)]
pub struct RosterGroups {
    pub leads: Vec<CrewMember>,
    pub co_leads: Vec<CrewMember>,
    pub others: Vec<CrewMember>,
}

fn lead_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)^lead$").expect("valid lead pattern"))
}

fn co_lead_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)co[-\s]?lead").expect("valid co-lead pattern"))
}

fn is_lead(member: &CrewMember) -> bool {
    lead_pattern().is_match(member.designation.trim())
}

fn is_co_lead(member: &CrewMember) -> bool {
    co_lead_pattern().is_match(&member.designation)
}

/// Partition a crew list into leads, co-leads and others
///
/// The three groups cover the whole input with no overlap and preserve
/// input order within each group.
pub fn group_by_designation(members: &[CrewMember]) -> RosterGroups {
    let mut groups = RosterGroups::default();
    for member in members {
        if is_lead(member) {
            groups.leads.push(member.clone());
        } else if is_co_lead(member) {
            groups.co_leads.push(member.clone());
        } else {
            groups.others.push(member.clone());
        }
    }
    groups
}

impl RosterGroups {
    /// Pair lead[i] with co-lead[i] into display rows (club listing layout)
    pub fn paired_rows(&self) -> Vec<Vec<CrewMember>> {
        let mut rows = Vec::new();
        let count = self.leads.len().max(self.co_leads.len());
        for i in 0..count {
            let mut row = Vec::new();
            if let Some(lead) = self.leads.get(i) {
                row.push(lead.clone());
            }
            if let Some(co_lead) = self.co_leads.get(i) {
                row.push(co_lead.clone());
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        rows
    }

    /// Total number of grouped members
    pub fn len(&self) -> usize {
        self.leads.len() + self.co_leads.len() + self.others.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
