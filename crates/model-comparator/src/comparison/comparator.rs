//! Comparison engine: walks the registry and reports naming departures.
//!
//! The [`ModelComparator`] visits every type under the root namespace, checks
//! the type name and then each audited member name against the reference
//! identifiers, and streams the departures through a [`ReportEmitter`].

use tracing::{debug, info};

use crate::emitter::ReportEmitter;
use crate::extraction::identifier::{identifier_of, Provenance, ReferenceIdentifier};
use crate::extraction::registry::{MemberEntry, Registry, TypeEntry};
use crate::model::links::LinkMinter;
use crate::model::schema::MemberKind;

use super::departures::{ClassDeparture, Departures, MemberDeparture, Summary, TypeHeader};
use super::naming::{compare_class_name, compare_code_name, compare_method_name};

/// Root namespace used when neither the caller nor the schema names one.
pub const DEFAULT_ROOT_NAMESPACE: &str = "org.opengis";

// ---------------------------------------------------------------------------
// ComparatorOptions
// ---------------------------------------------------------------------------

/// Options controlling what gets compared.
#[derive(Debug, Clone)]
pub struct ComparatorOptions {
    /// Only types whose qualified name starts with this namespace are audited.
    pub root_namespace: String,
}

impl Default for ComparatorOptions {
    fn default() -> Self {
        Self {
            root_namespace: DEFAULT_ROOT_NAMESPACE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// ModelComparator
// ---------------------------------------------------------------------------

/// Walks a [`Registry`] and emits departures via a [`ReportEmitter`].
pub struct ModelComparator<'a, E: ReportEmitter> {
    emitter: &'a mut E,
    registry: &'a Registry,
    options: ComparatorOptions,
    links: LinkMinter,
    last_package: String,
    summary: Summary,
}

impl<'a, E: ReportEmitter> ModelComparator<'a, E> {
    /// Create a new comparator. Call [`compare`](Self::compare) to run.
    pub fn new(emitter: &'a mut E, registry: &'a Registry, options: ComparatorOptions) -> Self {
        let links = LinkMinter::new(&options.root_namespace);
        Self {
            emitter,
            registry,
            options,
            links,
            last_package: String::new(),
            summary: Summary::default(),
        }
    }

    /// Run the full comparison, emitting every departure.
    pub fn compare(&mut self) -> Summary {
        let registry = self.registry;
        let root = self.options.root_namespace.clone();
        let mut scanned = 0usize;
        for entry in registry.types_under(&root) {
            self.visit_type(entry);
            scanned += 1;
        }
        info!(
            types = scanned,
            class_departures = self.summary.classes,
            member_departures = self.summary.members,
            significant = self.summary.significant,
            "compared names against reference identifiers"
        );
        self.summary
    }

    // -----------------------------------------------------------------------
    // Types
    // -----------------------------------------------------------------------

    fn visit_type(&mut self, entry: &TypeEntry) {
        let reference = identifier_of(entry.decl.uml.as_ref(), entry.decl.xml_element.as_deref());
        let href = self.links.type_href(entry.qualified_name());

        if !class_conforms(entry, &reference) {
            let package = entry.package_name();
            if package != self.last_package {
                self.emitter.package_header(package);
                self.last_package = package.to_string();
            }
            debug!(
                name = entry.name(),
                reference = reference.display(),
                "class name departure"
            );
            self.summary.classes += 1;
            self.summary.record(&reference);
            self.emitter.class_departure(&ClassDeparture {
                package: package.to_string(),
                name: entry.name().to_string(),
                qualified_name: entry.qualified_name().to_string(),
                href: href.clone(),
                reference,
            });
        }

        self.visit_members(entry, href);
    }

    // -----------------------------------------------------------------------
    // Members
    // -----------------------------------------------------------------------

    fn visit_members(&mut self, entry: &TypeEntry, href: String) {
        let mut header = Some(TypeHeader {
            name: entry.name().to_string(),
            qualified_name: entry.qualified_name().to_string(),
            href,
            code_list: entry.is_code_list(),
        });

        for member in entry.audited_members() {
            let reference =
                identifier_of(member.decl.uml.as_ref(), member.decl.xml_element.as_deref());
            if member_accepted(member, &reference) {
                continue;
            }
            // The type header is written lazily, before its first departure.
            if let Some(header) = header.take() {
                self.emitter.type_header(&header);
            }
            debug!(
                owner = entry.name(),
                name = member.name(),
                reference = reference.display(),
                "member name departure"
            );
            self.summary.members += 1;
            self.summary.record(&reference);
            self.emitter.member_departure(&MemberDeparture {
                name: member.name().to_string(),
                reference,
            });
        }
    }
}

fn class_conforms(entry: &TypeEntry, reference: &ReferenceIdentifier) -> bool {
    match (reference.provenance, reference.identifier.as_deref()) {
        (Provenance::Reference, Some(identifier)) => {
            compare_class_name(entry.name(), identifier, entry.shape)
        }
        _ => false,
    }
}

/// Whether a member needs no report row: either its name is an accepted
/// rendering of the reference identifier, or it is an extension method that
/// redeclares a method of a direct supertype.
fn member_accepted(member: &MemberEntry, reference: &ReferenceIdentifier) -> bool {
    match (reference.provenance, reference.identifier.as_deref()) {
        (Provenance::Reference, Some(identifier)) => match member.decl.kind {
            MemberKind::Method => compare_method_name(member.name(), identifier, member.shape),
            MemberKind::Field => compare_code_name(member.name(), identifier),
        },
        (Provenance::Extension, _) => {
            member.decl.kind == MemberKind::Method && member.redeclares_supertype_method
        }
        _ => false,
    }
}

/// Compare every type under the root namespace and collect the departures.
pub fn compare(registry: &Registry, options: ComparatorOptions) -> Departures {
    let mut departures = Departures::default();
    ModelComparator::new(&mut departures, registry, options).compare();
    departures
}
