use crate::check::{Rule, SlotCheck, Verdict};
use crate::decl::{Instantiation, Role, Variance};
use std::fmt::{Display, Formatter};

impl Display for Variance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Variance::Covariant => write!(f, "covariant"),
            Variance::Contravariant => write!(f, "contravariant"),
            Variance::Invariant => write!(f, "invariant"),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Data => write!(f, "data-position"),
            Role::Parameter => write!(f, "parameter-position"),
            Role::Return => write!(f, "return-position"),
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Narrow => write!(f, "covariant-narrowing"),
            Rule::Widen => write!(f, "contravariant-widening"),
            Rule::Exact => write!(f, "invariant-exact-match"),
        }
    }
}

impl Display for Instantiation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.declaration())?;

        if !self.args().is_empty() {
            write!(f, "[{}]", self.args().join(", "))?;
        }

        Ok(())
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", explain(self))
    }
}

/// Renders a verdict the way a static checker reports it: one headline in
/// the checker's voice, then one line of evidence per slot examined.
pub fn explain(verdict: &Verdict) -> String {
    let mut lines = Vec::with_capacity(verdict.checks.len() + 1);

    if verdict.compatible {
        lines.push(format!(
            "ok: \"{}\" may be used where \"{}\" is expected",
            verdict.offered, verdict.required
        ));
    } else {
        lines.push(format!(
            "error: incompatible type \"{}\"; expected \"{}\"  [arg-type]",
            verdict.offered, verdict.required
        ));
    }

    for check in &verdict.checks {
        lines.push(format!("  {}", explain_slot(check)));
    }

    lines.join("\n")
}

fn explain_slot(check: &SlotCheck) -> String {
    let chain = check
        .chain
        .as_deref()
        .map(|chain| chain.join(" -> "))
        .unwrap_or_default();

    match (check.rule, check.passed) {
        (Rule::Narrow, true) => format!(
            "slot {}: {} ok, {} is a subtype of {} ({})",
            check.slot, check.rule, check.offered, check.required, chain
        ),

        (Rule::Narrow, false) => format!(
            "slot {}: {} violated, {} is not a subtype of {}",
            check.slot, check.rule, check.offered, check.required
        ),

        (Rule::Widen, true) => format!(
            "slot {}: {} ok, {} is a subtype of {} ({})",
            check.slot, check.rule, check.required, check.offered, chain
        ),

        (Rule::Widen, false) => format!(
            "slot {}: {} violated, {} is not a subtype of {}",
            check.slot, check.rule, check.required, check.offered
        ),

        (Rule::Exact, true) => format!(
            "slot {}: {} ok, {} is exactly {}",
            check.slot, check.rule, check.offered, check.required
        ),

        (Rule::Exact, false) => format!(
            "slot {}: {} violated, {} is not exactly {}",
            check.slot, check.rule, check.offered, check.required
        ),
    }
}

#[cfg(test)]
mod tests {
    use crate::check::Checker;
    use crate::decl::GenericDecl;
    use crate::hierarchy::Hierarchy;
    use crate::report::explain;

    fn animals() -> Hierarchy {
        let mut h = Hierarchy::new();
        h.register("Animal", vec![]).unwrap();
        h.register("Cat", vec!["Animal".to_string()]).unwrap();
        h
    }

    #[test]
    fn test_explain_accepted_covariant_query() {
        let h = animals();
        let list = GenericDecl::covariant("ReadOnlyList");
        let required = list.instantiate(vec!["Animal"]).unwrap();
        let offered = list.instantiate(vec!["Cat"]).unwrap();
        let verdict = Checker::new(&h).check(&list, &required, &offered).unwrap();

        assert_eq!(
            explain(&verdict),
            "ok: \"ReadOnlyList[Cat]\" may be used where \"ReadOnlyList[Animal]\" is expected\n  \
             slot 0: covariant-narrowing ok, Cat is a subtype of Animal (Cat -> Animal)"
        );
    }

    #[test]
    fn test_explain_rejected_invariant_query() {
        let h = animals();
        let list = GenericDecl::invariant("List");
        let required = list.instantiate(vec!["Animal"]).unwrap();
        let offered = list.instantiate(vec!["Cat"]).unwrap();
        let verdict = Checker::new(&h).check(&list, &required, &offered).unwrap();

        assert_eq!(
            explain(&verdict),
            "error: incompatible type \"List[Cat]\"; expected \"List[Animal]\"  [arg-type]\n  \
             slot 0: invariant-exact-match violated, Cat is not exactly Animal"
        );
    }

    #[test]
    fn test_verdict_display_matches_explain() {
        let h = animals();
        let sink = GenericDecl::contravariant("Consumer");
        let required = sink.instantiate(vec!["Cat"]).unwrap();
        let offered = sink.instantiate(vec!["Animal"]).unwrap();
        let verdict = Checker::new(&h).check(&sink, &required, &offered).unwrap();

        assert_eq!(verdict.to_string(), explain(&verdict));
        assert!(verdict.to_string().contains("contravariant-widening ok"));
    }
}
