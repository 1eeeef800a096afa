#[cfg(test)]
mod tests;

use crate::decl::{GenericDecl, Instantiation, Role, Variance};
use crate::error::{Error, Result};
use crate::hierarchy::Hierarchy;

/// The rule the engine actually applied to a slot. For data slots this is
/// the declared variance; on function shapes the position wins: parameter
/// slots check contravariantly and the return slot covariantly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rule {
    Widen,
    Narrow,
    Exact,
}

impl Rule {
    fn of(decl: &GenericDecl, idx: usize) -> Rule {
        let slot = decl.slots()[idx];

        let variance = if decl.is_function_like() {
            match slot.role {
                Role::Parameter => Variance::Contravariant,
                Role::Return => Variance::Covariant,
                Role::Data => slot.variance,
            }
        } else {
            slot.variance
        };

        match variance {
            Variance::Covariant => Rule::Narrow,
            Variance::Contravariant => Rule::Widen,
            Variance::Invariant => Rule::Exact,
        }
    }
}

/// One slot's worth of evidence: the rule applied, the two bound types, and
/// for a pass the subtype chain that justified it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlotCheck {
    pub slot: usize,
    pub rule: Rule,
    pub required: String,
    pub offered: String,
    pub passed: bool,
    pub chain: Option<Vec<String>>,
}

/// Outcome of a compatibility query. `checks` holds every slot examined, in
/// order, stopping at the first failure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Verdict {
    pub compatible: bool,
    pub declaration: String,
    pub required: Instantiation,
    pub offered: Instantiation,
    pub checks: Vec<SlotCheck>,
}

impl Verdict {
    /// The slot that sank the query, when there is one.
    pub fn failing_slot(&self) -> Option<&SlotCheck> {
        self.checks.iter().find(|check| !check.passed)
    }
}

/// The decision procedure. Borrows a frozen hierarchy; checking mutates
/// nothing.
pub struct Checker<'a> {
    hierarchy: &'a Hierarchy,
}

impl<'a> Checker<'a> {
    pub fn new(hierarchy: &'a Hierarchy) -> Self {
        Self { hierarchy }
    }

    /// Decides whether `offered` may be used wherever `required` is
    /// expected, under `decl`'s variance tags.
    pub fn check(
        &self,
        decl: &GenericDecl,
        required: &Instantiation,
        offered: &Instantiation,
    ) -> Result<Verdict> {
        if required.declaration() != decl.name() || offered.declaration() != decl.name() {
            return Err(Error::DeclarationMismatch {
                required: required.declaration().to_string(),
                offered: offered.declaration().to_string(),
            });
        }

        for inst in [required, offered] {
            if inst.args().len() != decl.slots().len() {
                return Err(Error::ArityMismatch {
                    declaration: decl.name().to_string(),
                    expected: decl.slots().len(),
                    given: inst.args().len(),
                });
            }
        }

        for (idx, name) in required.args().iter().chain(offered.args()).enumerate() {
            if !self.hierarchy.contains(name) {
                return Err(Error::UnknownType {
                    slot: idx % decl.slots().len().max(1),
                    name: name.clone(),
                });
            }
        }

        let mut checks = Vec::with_capacity(decl.slots().len());
        let mut compatible = true;

        for idx in 0..decl.slots().len() {
            let req = required.args()[idx].as_str();
            let off = offered.args()[idx].as_str();
            let rule = Rule::of(decl, idx);

            let chain = match rule {
                Rule::Narrow => self.hierarchy.subtype_path(off, req),
                Rule::Widen => self.hierarchy.subtype_path(req, off),
                // Exact match by name; the hierarchy is never consulted.
                Rule::Exact => (req == off).then(|| vec![req.to_string()]),
            };

            let passed = chain.is_some();

            checks.push(SlotCheck {
                slot: idx,
                rule,
                required: req.to_string(),
                offered: off.to_string(),
                passed,
                chain,
            });

            if !passed {
                compatible = false;
                break;
            }
        }

        Ok(Verdict {
            compatible,
            declaration: decl.name().to_string(),
            required: required.clone(),
            offered: offered.clone(),
            checks,
        })
    }
}
