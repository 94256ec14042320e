//! Audit API names against ISO/OGC UML identifiers.
//!
//! A model schema describing the API surface is loaded into a [`Registry`],
//! the [`ModelComparator`] checks every type and member name against its
//! reference identifier, and a [`ReportEmitter`] renders the departures that
//! no accepted naming convention explains.
//!
//! [`Registry`]: extraction::registry::Registry
//! [`ModelComparator`]: comparison::comparator::ModelComparator
//! [`ReportEmitter`]: emitter::ReportEmitter

pub mod comparison;
pub mod emitter;
pub mod extraction;
pub mod model;
