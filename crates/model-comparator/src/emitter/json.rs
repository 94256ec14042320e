use serde::Serialize;

use crate::comparison::departures::{
    ClassDeparture, Departures, MemberDeparture, MemberGroup, Summary, TypeHeader,
};

use super::ReportEmitter;

/// JSON emitter: collects departures and renders them as one document with a
/// summary block.
#[derive(Default)]
pub struct JsonEmitter {
    departures: Departures,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    classes: &'a [ClassDeparture],
    members: &'a [MemberGroup],
}

impl JsonEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn departures(&self) -> &Departures {
        &self.departures
    }

    /// Pretty-printed report, terminated by a newline.
    pub fn render(&self) -> serde_json::Result<String> {
        let departures = &self.departures;
        let report = JsonReport {
            summary: Summary {
                classes: departures.classes.len(),
                members: departures.member_count(),
                significant: departures.significant_count(),
                informational: departures.informational_count(),
            },
            classes: &departures.classes,
            members: &departures.members,
        };
        let mut out = serde_json::to_string_pretty(&report)?;
        out.push('\n');
        Ok(out)
    }
}

impl ReportEmitter for JsonEmitter {
    fn package_header(&mut self, package: &str) {
        self.departures.package_header(package);
    }

    fn class_departure(&mut self, departure: &ClassDeparture) {
        self.departures.class_departure(departure);
    }

    fn type_header(&mut self, header: &TypeHeader) {
        self.departures.type_header(header);
    }

    fn member_departure(&mut self, departure: &MemberDeparture) {
        self.departures.member_departure(departure);
    }

    fn departure_count(&self) -> u64 {
        self.departures.departure_count()
    }
}
