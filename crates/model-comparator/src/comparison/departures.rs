//! Naming departures found by the comparator.

use serde::Serialize;
use tracing::warn;

use crate::emitter::ReportEmitter;
use crate::extraction::identifier::ReferenceIdentifier;

/// A type whose name departs from its reference identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassDeparture {
    pub package: String,
    pub name: String,
    pub qualified_name: String,
    pub href: String,
    pub reference: ReferenceIdentifier,
}

/// Identifies the declaring type of a group of member departures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeHeader {
    pub name: String,
    pub qualified_name: String,
    pub href: String,
    pub code_list: bool,
}

/// A member whose name departs from its reference identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberDeparture {
    pub name: String,
    pub reference: ReferenceIdentifier,
}

/// Member departures of one declaring type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberGroup {
    #[serde(flatten)]
    pub header: TypeHeader,
    pub members: Vec<MemberDeparture>,
}

/// Counters over one comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub classes: usize,
    pub members: usize,
    /// Departures from a genuine reference identifier.
    pub significant: usize,
    /// Legacy and extension elements, listed for information only.
    pub informational: usize,
}

impl Summary {
    pub(crate) fn record(&mut self, reference: &ReferenceIdentifier) {
        if reference.is_informational() {
            self.informational += 1;
        } else {
            self.significant += 1;
        }
    }
}

/// Collected result of a comparison: class departures, then member departures
/// grouped by declaring type.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Departures {
    pub classes: Vec<ClassDeparture>,
    pub members: Vec<MemberGroup>,
}

impl Departures {
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.members.is_empty()
    }

    pub fn member_count(&self) -> usize {
        self.members.iter().map(|g| g.members.len()).sum()
    }

    /// Member departures of a type, if any were found.
    pub fn members_of(&self, qualified_name: &str) -> Option<&MemberGroup> {
        self.members
            .iter()
            .find(|g| g.header.qualified_name == qualified_name)
    }

    fn references(&self) -> impl Iterator<Item = &ReferenceIdentifier> {
        self.classes.iter().map(|c| &c.reference).chain(
            self.members
                .iter()
                .flat_map(|g| g.members.iter().map(|m| &m.reference)),
        )
    }

    pub fn significant_count(&self) -> usize {
        self.references().filter(|r| !r.is_informational()).count()
    }

    pub fn informational_count(&self) -> usize {
        self.references().filter(|r| r.is_informational()).count()
    }
}

impl ReportEmitter for Departures {
    fn package_header(&mut self, _package: &str) {}

    fn class_departure(&mut self, departure: &ClassDeparture) {
        self.classes.push(departure.clone());
    }

    fn type_header(&mut self, header: &TypeHeader) {
        self.members.push(MemberGroup {
            header: header.clone(),
            members: Vec::new(),
        });
    }

    fn member_departure(&mut self, departure: &MemberDeparture) {
        match self.members.last_mut() {
            Some(group) => group.members.push(departure.clone()),
            None => warn!(
                name = %departure.name,
                "member departure without a type header, dropped"
            ),
        }
    }

    fn departure_count(&self) -> u64 {
        (self.classes.len() + self.member_count()) as u64
    }
}
