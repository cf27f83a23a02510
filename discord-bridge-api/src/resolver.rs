//! Most-specific wrapper selection for native objects of unknown subtype.
//!
//! A backend registers one candidate per wrapper it can build for a
//! capability (say `Channel`), each with the abstract type it implements,
//! the abstract types that type refines, and a guard over the native
//! object. Guards may overlap. For a given object the resolver keeps the
//! compatible candidates and picks the one that refines the largest number
//! of them.

use crate::bridge::BridgeRef;
use crate::error::{BridgeError, BridgeResult};
use crate::native::NativeHandle;
use discord_bridge_types::TypeTag;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

type Guard = Box<dyn Fn(&NativeHandle) -> bool + Send + Sync>;
type Constructor<W> = Box<dyn Fn(BridgeRef, NativeHandle) -> BridgeResult<Arc<W>> + Send + Sync>;

/// One wrapper a resolver can construct.
pub struct WrapperCandidate<W: ?Sized + 'static> {
    name: &'static str,
    tag: TypeTag,
    supertypes: Vec<TypeTag>,
    guard: Guard,
    construct: Constructor<W>,
}

impl<W: ?Sized + 'static> WrapperCandidate<W> {
    /// `tag` identifies the abstract type the wrapper implements.
    pub fn new<G, C>(name: &'static str, tag: TypeTag, guard: G, construct: C) -> Self
    where
        G: Fn(&NativeHandle) -> bool + Send + Sync + 'static,
        C: Fn(BridgeRef, NativeHandle) -> BridgeResult<Arc<W>> + Send + Sync + 'static,
    {
        Self {
            name,
            tag,
            supertypes: Vec::new(),
            guard: Box::new(guard),
            construct: Box::new(construct),
        }
    }

    /// Declares that this candidate's type refines `supertype`.
    pub fn extends(mut self, supertype: TypeTag) -> Self {
        if !self.supertypes.contains(&supertype) {
            self.supertypes.push(supertype);
        }
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }

    pub fn accepts(&self, native: &NativeHandle) -> bool {
        (self.guard)(native)
    }
}

impl<W: ?Sized + 'static> fmt::Debug for WrapperCandidate<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapperCandidate")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("supertypes", &self.supertypes)
            .finish()
    }
}

struct Entry<W: ?Sized + 'static> {
    candidate: WrapperCandidate<W>,
    /// The candidate's own tag plus every transitive supertype.
    closure: HashSet<TypeTag>,
}

/// Selects the most specific applicable wrapper for one capability.
pub struct SpecificityResolver<W: ?Sized + 'static> {
    capability: &'static str,
    entries: Vec<Entry<W>>,
}

impl<W: ?Sized + 'static> SpecificityResolver<W> {
    pub fn builder(capability: &'static str) -> SpecificityResolverBuilder<W> {
        SpecificityResolverBuilder {
            capability,
            candidates: Vec::new(),
        }
    }

    pub fn capability(&self) -> &'static str {
        self.capability
    }

    pub fn candidates(&self) -> impl Iterator<Item = &WrapperCandidate<W>> {
        self.entries.iter().map(|e| &e.candidate)
    }

    /// Generality of every candidate compatible with `native`, in
    /// registration order.
    pub fn generality(&self, native: &NativeHandle) -> Vec<(&'static str, usize)> {
        let compatible = self.compatible(native);
        compatible
            .iter()
            .map(|e| (e.candidate.name, Self::score(e, &compatible)))
            .collect()
    }

    /// Picks the candidate for `native` without constructing it.
    pub fn select(&self, native: &NativeHandle) -> BridgeResult<&WrapperCandidate<W>> {
        let compatible = self.compatible(native);
        if compatible.is_empty() {
            debug!(
                capability = self.capability,
                object = native.type_name(),
                "No compatible wrapper"
            );
            return Err(BridgeError::NoApplicableWrapper {
                capability: self.capability,
                object: native.type_name().to_string(),
            });
        }

        let scored: Vec<(&Entry<W>, usize)> = compatible
            .iter()
            .map(|e| (*e, Self::score(e, &compatible)))
            .collect();
        let best = scored.iter().map(|(_, s)| *s).max().unwrap_or(0);
        let winners: Vec<&Entry<W>> = scored
            .iter()
            .filter(|(_, s)| *s == best)
            .map(|(e, _)| *e)
            .collect();

        match winners.as_slice() {
            [winner] => {
                debug!(
                    capability = self.capability,
                    object = native.type_name(),
                    wrapper = winner.candidate.name,
                    generality = best,
                    "Resolved wrapper"
                );
                Ok(&winner.candidate)
            }
            _ => Err(BridgeError::AmbiguousResolution {
                capability: self.capability,
                candidates: winners.iter().map(|e| e.candidate.name).collect(),
            }),
        }
    }

    /// Selects and constructs the wrapper for `native`.
    pub fn resolve(&self, bridge: &BridgeRef, native: NativeHandle) -> BridgeResult<Arc<W>> {
        let candidate = self.select(&native)?;
        (candidate.construct)(Arc::clone(bridge), native)
    }

    fn compatible(&self, native: &NativeHandle) -> Vec<&Entry<W>> {
        self.entries
            .iter()
            .filter(|e| e.candidate.accepts(native))
            .collect()
    }

    fn score(entry: &Entry<W>, compatible: &[&Entry<W>]) -> usize {
        compatible
            .iter()
            .filter(|other| entry.closure.contains(&other.candidate.tag))
            .count()
    }
}

impl<W: ?Sized + 'static> fmt::Debug for SpecificityResolver<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpecificityResolver")
            .field("capability", &self.capability)
            .field(
                "candidates",
                &self.entries.iter().map(|e| e.candidate.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

pub struct SpecificityResolverBuilder<W: ?Sized + 'static> {
    capability: &'static str,
    candidates: Vec<WrapperCandidate<W>>,
}

impl<W: ?Sized + 'static> SpecificityResolverBuilder<W> {
    pub fn candidate(mut self, candidate: WrapperCandidate<W>) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// Closes every candidate's supertypes over the other candidates'
    /// declarations.
    pub fn build(self) -> SpecificityResolver<W> {
        let closures: Vec<HashSet<TypeTag>> = self
            .candidates
            .iter()
            .map(|c| {
                let mut closure = HashSet::from([c.tag]);
                let mut pending = c.supertypes.clone();
                while let Some(tag) = pending.pop() {
                    if !closure.insert(tag) {
                        continue;
                    }
                    for other in self.candidates.iter().filter(|o| o.tag == tag) {
                        pending.extend(other.supertypes.iter().copied());
                    }
                }
                closure
            })
            .collect();

        let entries = self
            .candidates
            .into_iter()
            .zip(closures)
            .map(|(candidate, closure)| Entry { candidate, closure })
            .collect();

        SpecificityResolver {
            capability: self.capability,
            entries,
        }
    }
}
