use crate::error::{Error, Result};

/// How subtyping of a slot's binding propagates to subtyping of the whole
/// instantiation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Variance {
    Covariant,
    Contravariant,
    Invariant,
}

impl Variance {
    pub fn invert(self) -> Variance {
        match self {
            Variance::Covariant => Variance::Contravariant,
            Variance::Contravariant => Variance::Covariant,
            Variance::Invariant => Variance::Invariant,
        }
    }
}

/// Where a slot sits in the declared shape. Data slots follow their declared
/// variance; parameter and return slots only exist on function shapes, where
/// the position itself dictates the rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Data,
    Parameter,
    Return,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Slot {
    pub variance: Variance,
    pub role: Role,
}

impl Slot {
    pub fn data(variance: Variance) -> Self {
        Slot {
            variance,
            role: Role::Data,
        }
    }

    pub fn parameter() -> Self {
        Slot {
            variance: Variance::Contravariant,
            role: Role::Parameter,
        }
    }

    pub fn ret() -> Self {
        Slot {
            variance: Variance::Covariant,
            role: Role::Return,
        }
    }
}

/// A generic entity: a name plus an ordered list of variance-tagged slots,
/// fixed at declaration time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenericDecl {
    name: String,
    slots: Vec<Slot>,
    function_like: bool,
    warnings: Vec<String>,
}

impl GenericDecl {
    pub fn declare<I>(name: impl AsRef<str>, slots: I, function_like: bool) -> Result<GenericDecl>
    where
        I: IntoIterator<Item = Slot>,
    {
        let name = name.as_ref().to_string();
        let slots = slots.into_iter().collect::<Vec<_>>();
        let mut warnings = Vec::new();

        for (idx, slot) in slots.iter().enumerate() {
            match slot.role {
                Role::Parameter | Role::Return if !function_like => {
                    return Err(Error::InvalidSlot {
                        declaration: name.clone(),
                        slot: idx,
                        reason: format!(
                            "{} slots only make sense on function-like declarations",
                            slot.role
                        ),
                    });
                }

                Role::Data if slot.variance == Variance::Contravariant => {
                    // Allowed so consumer shapes can be modelled, but almost
                    // always means the declaration wanted a function shape.
                    let warning = format!(
                        "slot {} of \"{}\" is a contravariant data slot; \
                         expected consumer semantics",
                        idx, name
                    );

                    log::warn!("{}", warning);
                    warnings.push(warning);
                }

                _ => {}
            }
        }

        Ok(GenericDecl {
            name,
            slots,
            function_like,
            warnings,
        })
    }

    /// One covariant data slot, a read-only container.
    pub fn covariant(name: impl AsRef<str>) -> GenericDecl {
        GenericDecl {
            name: name.as_ref().to_string(),
            slots: vec![Slot::data(Variance::Covariant)],
            function_like: false,
            warnings: Vec::new(),
        }
    }

    /// One contravariant data slot, a consumer. This constructor is the
    /// consumer-semantics justification; going through `declare` with the
    /// same slot records a design-time warning instead.
    pub fn contravariant(name: impl AsRef<str>) -> GenericDecl {
        GenericDecl {
            name: name.as_ref().to_string(),
            slots: vec![Slot::data(Variance::Contravariant)],
            function_like: false,
            warnings: Vec::new(),
        }
    }

    /// One invariant data slot, a read-write cell.
    pub fn invariant(name: impl AsRef<str>) -> GenericDecl {
        GenericDecl {
            name: name.as_ref().to_string(),
            slots: vec![Slot::data(Variance::Invariant)],
            function_like: false,
            warnings: Vec::new(),
        }
    }

    /// A function shape: `params` parameter slots followed by one return
    /// slot.
    pub fn function(name: impl AsRef<str>, params: usize) -> GenericDecl {
        let mut slots = vec![Slot::parameter(); params];
        slots.push(Slot::ret());

        GenericDecl {
            name: name.as_ref().to_string(),
            slots,
            function_like: true,
            warnings: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn is_function_like(&self) -> bool {
        self.function_like
    }

    /// Design-time warnings recorded while declaring, e.g. contravariant
    /// data slots.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Binds one concrete type name per slot.
    pub fn instantiate<I>(&self, args: I) -> Result<Instantiation>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args = args
            .into_iter()
            .map(|a| a.as_ref().to_string())
            .collect::<Vec<_>>();

        if args.len() != self.slots.len() {
            return Err(Error::ArityMismatch {
                declaration: self.name.clone(),
                expected: self.slots.len(),
                given: args.len(),
            });
        }

        Ok(Instantiation {
            declaration: self.name.clone(),
            args,
        })
    }
}

/// A declaration bound to concrete types. Comparable only against another
/// instantiation of the same declaration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Instantiation {
    declaration: String,
    args: Vec<String>,
}

impl Instantiation {
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}
