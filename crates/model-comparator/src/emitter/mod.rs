pub mod html;
pub mod json;

use crate::comparison::departures::{ClassDeparture, MemberDeparture, TypeHeader};

/// Trait for rendering naming departures in different report formats.
///
/// The comparator calls these methods in report order: class departures
/// (each preceded by a package header when the package changes), interleaved
/// with member departures (each group preceded by its type header).
pub trait ReportEmitter {
    /// Start a package group in the class section.
    fn package_header(&mut self, package: &str);
    /// Emit a type whose name departs from its reference identifier.
    fn class_departure(&mut self, departure: &ClassDeparture);
    /// Start the member group of a type.
    fn type_header(&mut self, header: &TypeHeader);
    /// Emit a member of the current type group.
    fn member_departure(&mut self, departure: &MemberDeparture);
    /// Return the number of departures emitted so far.
    fn departure_count(&self) -> u64;
}
