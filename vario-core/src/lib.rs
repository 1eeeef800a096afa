pub mod check;
pub mod decl;
pub mod error;
pub mod hierarchy;
pub mod report;

pub use check::{Checker, Rule, SlotCheck, Verdict};
pub use decl::{GenericDecl, Instantiation, Role, Slot, Variance};
pub use error::{Error, Result};
pub use hierarchy::Hierarchy;
pub use report::explain;

/// One-shot compatibility query: may `offered` stand in for `required`
/// under `decl`'s variance tags, given the subtype facts in `hierarchy`?
pub fn check(
    hierarchy: &Hierarchy,
    decl: &GenericDecl,
    required: &Instantiation,
    offered: &Instantiation,
) -> Result<Verdict> {
    let checker = Checker::new(hierarchy);

    checker.check(decl, required, offered)
}
