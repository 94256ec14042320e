pub mod comparator;
pub mod departures;
pub mod naming;
