use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet, VecDeque};

/// Nominal subtype graph. Types are registered once, leaves after their
/// supertypes, and the whole graph is frozen by the time a query runs:
/// registration takes `&mut self`, queries only `&self`.
#[derive(Default, Clone)]
pub struct Hierarchy {
    supertypes: HashMap<String, Vec<String>>,
    insertion: Vec<String>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type along with its direct supertypes, every one of which must
    /// already be registered. A type may be registered only once.
    pub fn register<I>(&mut self, name: impl AsRef<str>, supers: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        let name = name.as_ref();

        if self.supertypes.contains_key(name) {
            return Err(Error::DuplicateType(name.to_string()));
        }

        let supers = supers.into_iter().collect::<Vec<_>>();
        for sup in &supers {
            // A self-edge is left for the cycle walk below to report.
            if sup.as_str() != name && !self.supertypes.contains_key(sup.as_str()) {
                return Err(Error::UnknownSupertype {
                    name: name.to_string(),
                    supertype: sup.clone(),
                });
            }
        }

        self.supertypes.insert(name.to_string(), supers);
        self.insertion.push(name.to_string());

        // Supertype edges only ever point at previously registered types, so
        // the graph stays acyclic by construction. The walk still runs so a
        // hand-crafted edge back to the new type is caught here instead of
        // hanging a query later.
        if let Some(cycle) = self.find_cycle(name) {
            self.supertypes.remove(name);
            self.insertion.pop();

            return Err(Error::CyclicHierarchy {
                name: name.to_string(),
                cycle,
            });
        }

        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.supertypes.contains_key(name)
    }

    /// Reflexive, transitive subtype query: true iff `b` is reachable from
    /// `a` through direct-supertype edges. Unknown names are nobody's
    /// subtype but their own.
    pub fn is_subtype(&self, a: &str, b: &str) -> bool {
        self.subtype_path(a, b).is_some()
    }

    /// The witnessing chain from `a` up to `b`, e.g. ["Cat", "Animal"].
    /// `Some([a])` when `a == b`.
    pub fn subtype_path(&self, a: &str, b: &str) -> Option<Vec<String>> {
        if a == b {
            return Some(vec![a.to_string()]);
        }

        let mut parents = HashMap::new();
        let mut queue = VecDeque::new();
        let mut seen = HashSet::new();

        queue.push_back(a);
        seen.insert(a);

        while let Some(current) = queue.pop_front() {
            for sup in self.supertypes.get(current)?.iter() {
                if seen.insert(sup.as_str()) {
                    parents.insert(sup.as_str(), current);

                    if sup.as_str() == b {
                        let mut chain = vec![b.to_string()];
                        let mut cursor = current;

                        while cursor != a {
                            chain.push(cursor.to_string());
                            cursor = parents[cursor];
                        }

                        chain.push(a.to_string());
                        chain.reverse();

                        return Some(chain);
                    }

                    queue.push_back(sup.as_str());
                }
            }
        }

        None
    }

    /// Registered type names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.insertion.iter().map(String::as_str)
    }

    fn find_cycle(&self, start: &str) -> Option<Vec<String>> {
        let mut stack = vec![(start, vec![start.to_string()])];

        while let Some((current, trail)) = stack.pop() {
            for sup in self.supertypes.get(current)? {
                if sup.as_str() == start {
                    let mut cycle = trail.clone();
                    cycle.push(start.to_string());
                    return Some(cycle);
                }

                if !trail.contains(sup) {
                    let mut next = trail.clone();
                    next.push(sup.clone());
                    stack.push((sup.as_str(), next));
                }
            }
        }

        None
    }
}
