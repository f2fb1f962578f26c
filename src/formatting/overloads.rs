//! Overload counts for method tooltips.

use std::fmt;

use crate::{
    formatting::{
        resources::{ResourceKey, ResourceLookup},
        MemberClassifier, MAX_RECURSION,
    },
    metadata::{
        members::MethodRc,
        typesystem::{CilTypeRc, MetadataResolver},
    },
};

/// How many other overloads a method has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverloadSummary {
    /// Exactly one other overload
    One,
    /// More than one other overload
    Many(usize),
}

impl OverloadSummary {
    /// Summarise an overload count, `None` when there are no other overloads
    #[must_use]
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            0 => None,
            1 => Some(OverloadSummary::One),
            n => Some(OverloadSummary::Many(n)),
        }
    }

    /// The number of other overloads
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            OverloadSummary::One => 1,
            OverloadSummary::Many(n) => *n,
        }
    }

    /// Localized text such as `3 overloads`
    pub fn render<L: ResourceLookup + ?Sized>(&self, resources: &L) -> String {
        match self {
            OverloadSummary::One => resources.lookup(ResourceKey::OneMethodOverload).into_owned(),
            OverloadSummary::Many(n) => resources
                .lookup(ResourceKey::NMethodOverloads)
                .replace("{0}", &n.to_string()),
        }
    }
}

impl fmt::Display for OverloadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverloadSummary::One => write!(f, "1 overload"),
            OverloadSummary::Many(n) => write!(f, "{n} overloads"),
        }
    }
}

impl<R: MetadataResolver + ?Sized> MemberClassifier<'_, R> {
    /// Number of *other* overloads of `name` visible from `ty`.
    ///
    /// Methods called `name` are collected from `ty` and each resolvable base type, and
    /// methods whose signature equals one already collected (an override, or a `new` slot
    /// hiding a base method) are counted once. The walk stops at the first base type that
    /// cannot be resolved and counts what it has seen so far.
    pub fn count_overloads(&self, ty: &CilTypeRc, name: &str) -> usize {
        let mut seen: Vec<MethodRc> = Vec::new();
        let mut current = self.resolver.resolve_type(ty);
        let mut depth = 0;

        while let Some(ty) = current {
            if depth == MAX_RECURSION {
                log::warn!(
                    "base type chain of {} exceeds {MAX_RECURSION} levels",
                    ty.fullname()
                );
                break;
            }
            depth += 1;

            for (_, method) in ty.methods.iter() {
                if method.name == name && !seen.iter().any(|m| m.signature == method.signature) {
                    seen.push(method.clone());
                }
            }
            current = self.resolver.base_type(&ty);
        }

        seen.len().saturating_sub(1)
    }

    /// The overload summary for `name` on `ty`, `None` without other overloads
    pub fn overloads_summary(&self, ty: &CilTypeRc, name: &str) -> Option<OverloadSummary> {
        OverloadSummary::from_count(self.count_overloads(ty, name))
    }

    /// Tooltip suffix such as ` (+ 2 overloads)`, `None` without other overloads
    pub fn overloads_tooltip<L: ResourceLookup + ?Sized>(
        &self,
        resources: &L,
        ty: &CilTypeRc,
        name: &str,
    ) -> Option<String> {
        self.overloads_summary(ty, name)
            .map(|summary| format!(" (+ {})", summary.render(resources)))
    }
}
