//! Range containment

use std::cmp::Ordering;
use std::ptr;
use std::slice;

use crate::constraint::range::test_set;
use crate::constraint::{Comparator, Range};
use crate::{Identifier, Operator, Options, Version};

impl Range {
    /// Check whether every version matched by this range is matched by `dom`
    pub fn is_subset_of(&self, dom: &Range) -> bool {
        subset(self, dom, self.options())
    }
}

/// Every clause of `sub` must fit inside some clause of `dom`.
///
/// Clauses that turn out to be null sets are skipped, unless a non-null
/// clause has already been seen.
pub fn subset(sub: &Range, dom: &Range, options: Options) -> bool {
    let mut saw_non_null = false;

    'outer: for simple_sub in sub.set() {
        for simple_dom in dom.set() {
            let is_sub = simple_subset(simple_sub, simple_dom, options);
            saw_non_null = saw_non_null || is_sub.is_some();
            if is_sub == Some(true) {
                continue 'outer;
            }
        }
        if saw_non_null {
            return false;
        }
    }

    true
}

/// A comparator known to be a bound, remembered by address so two equal
/// bounds from different clauses stay distinct.
#[derive(Clone, Copy)]
struct Edge<'a> {
    comparator: &'a Comparator,
    operator: Operator,
    version: &'a Version,
}

impl<'a> Edge<'a> {
    fn of(comparator: &'a Comparator) -> Option<Self> {
        match comparator {
            Comparator::Any => None,
            Comparator::Bound { operator, version } => Some(Edge {
                comparator,
                operator: *operator,
                version,
            }),
        }
    }

    fn is(&self, other: &Edge<'_>) -> bool {
        ptr::eq(self.comparator, other.comparator)
    }

    fn admits(&self, version: &Version, options: Options) -> bool {
        test_set(slice::from_ref(self.comparator), version, options)
    }
}

fn higher_gt<'a>(current: Option<Edge<'a>>, candidate: Edge<'a>) -> Edge<'a> {
    let Some(current) = current else {
        return candidate;
    };
    match current.version.cmp(candidate.version) {
        Ordering::Greater => current,
        Ordering::Less => candidate,
        Ordering::Equal => {
            if candidate.operator == Operator::GreaterThan
                && current.operator == Operator::GreaterThanOrEqual
            {
                candidate
            } else {
                current
            }
        }
    }
}

fn lower_lt<'a>(current: Option<Edge<'a>>, candidate: Edge<'a>) -> Edge<'a> {
    let Some(current) = current else {
        return candidate;
    };
    match current.version.cmp(candidate.version) {
        Ordering::Less => current,
        Ordering::Greater => candidate,
        Ordering::Equal => {
            if candidate.operator == Operator::LessThan
                && current.operator == Operator::LessThanOrEqual
            {
                candidate
            } else {
                current
            }
        }
    }
}

/// `Some(true)` if the clause fits, `Some(false)` if it does not, and `None`
/// when `sub` matches nothing at all.
fn simple_subset(sub: &[Comparator], dom: &[Comparator], options: Options) -> Option<bool> {
    let lowest = Version::lowest();
    let floor_pre = [Comparator::Bound {
        operator: Operator::GreaterThanOrEqual,
        version: lowest,
    }];
    let floor = [Comparator::Bound {
        operator: Operator::GreaterThanOrEqual,
        version: Version::new(0, 0, 0),
    }];

    let dom_is_any = dom.len() == 1 && dom[0].is_any();

    let mut sub = sub;
    if sub.len() == 1 && sub[0].is_any() {
        if dom_is_any {
            return Some(true);
        }
        sub = if options.include_prerelease { &floor_pre[..] } else { &floor[..] };
    }

    let mut dom = dom;
    if dom_is_any {
        if options.include_prerelease {
            return Some(true);
        }
        dom = &floor[..];
    }

    let mut eq_set: Vec<&Version> = Vec::new();
    let mut gt: Option<Edge<'_>> = None;
    let mut lt: Option<Edge<'_>> = None;
    for c in sub {
        let Some(edge) = Edge::of(c) else {
            continue;
        };
        if edge.operator.is_greater() {
            gt = Some(higher_gt(gt, edge));
        } else if edge.operator.is_less() {
            lt = Some(lower_lt(lt, edge));
        } else if !eq_set.contains(&edge.version) {
            eq_set.push(edge.version);
        }
    }

    if eq_set.len() > 1 {
        return None;
    }

    let mut gtlt_comp = None;
    if let (Some(gt), Some(lt)) = (gt, lt) {
        let ordering = gt.version.cmp(lt.version);
        match ordering {
            Ordering::Greater => return None,
            Ordering::Equal
                if gt.operator != Operator::GreaterThanOrEqual
                    || lt.operator != Operator::LessThanOrEqual =>
            {
                return None
            }
            _ => {}
        }
        gtlt_comp = Some(ordering);
    }

    // A single exact version decides everything on its own
    if let Some(eq) = eq_set.first() {
        if gt.is_some_and(|gt| !gt.admits(eq, options)) {
            return None;
        }
        if lt.is_some_and(|lt| !lt.admits(eq, options)) {
            return None;
        }
        let fits = dom
            .iter()
            .all(|c| test_set(slice::from_ref(c), eq, options));
        return Some(fits);
    }

    let mut has_dom_lt = false;
    let mut has_dom_gt = false;

    // A prerelease bound in sub needs a dom bound opting in the same tuple,
    // except `<X.Y.Z-0` which admits no prerelease of X.Y.Z anyway
    let mut need_dom_lt_pre = lt
        .filter(|lt| !options.include_prerelease && lt.version.is_prerelease())
        .map(|lt| lt.version);
    let mut need_dom_gt_pre = gt
        .filter(|gt| !options.include_prerelease && gt.version.is_prerelease())
        .map(|gt| gt.version);
    if let (Some(needed), Some(lt)) = (need_dom_lt_pre, lt) {
        if lt.operator == Operator::LessThan
            && needed.prerelease.len() == 1
            && needed.prerelease[0] == Identifier::Numeric(0)
        {
            need_dom_lt_pre = None;
        }
    }

    for c in dom {
        let edge = Edge::of(c);
        let operator = c.operator();
        has_dom_gt = has_dom_gt || operator.is_greater();
        has_dom_lt = has_dom_lt || operator.is_less();

        if let Some(gt) = gt {
            if let (Some(needed), Some(edge)) = (need_dom_gt_pre, edge) {
                if edge.version.is_prerelease() && edge.version.compare_main(needed).is_eq() {
                    need_dom_gt_pre = None;
                }
            }
            match edge {
                Some(edge) if edge.operator.is_greater() => {
                    let higher = higher_gt(Some(gt), edge);
                    if higher.is(&edge) && !higher.is(&gt) {
                        return Some(false);
                    }
                }
                _ => {
                    if gt.operator == Operator::GreaterThanOrEqual
                        && !test_set(slice::from_ref(c), gt.version, options)
                    {
                        return Some(false);
                    }
                }
            }
        }

        if let Some(lt) = lt {
            if let (Some(needed), Some(edge)) = (need_dom_lt_pre, edge) {
                if edge.version.is_prerelease() && edge.version.compare_main(needed).is_eq() {
                    need_dom_lt_pre = None;
                }
            }
            match edge {
                Some(edge) if edge.operator.is_less() => {
                    let lower = lower_lt(Some(lt), edge);
                    if lower.is(&edge) && !lower.is(&lt) {
                        return Some(false);
                    }
                }
                _ => {
                    if lt.operator == Operator::LessThanOrEqual
                        && !test_set(slice::from_ref(c), lt.version, options)
                    {
                        return Some(false);
                    }
                }
            }
        }

        // An exact dom version can only hold a sub that is pinned to one version
        if operator == Operator::Equal
            && (gt.is_some() || lt.is_some())
            && gtlt_comp != Some(Ordering::Equal)
        {
            return Some(false);
        }
    }

    // sub is unbounded on a side where dom is bounded
    if gt.is_some() && has_dom_lt && lt.is_none() && gtlt_comp != Some(Ordering::Equal) {
        return Some(false);
    }
    if lt.is_some() && has_dom_gt && gt.is_none() && gtlt_comp != Some(Ordering::Equal) {
        return Some(false);
    }

    if need_dom_gt_pre.is_some() || need_dom_lt_pre.is_some() {
        return Some(false);
    }

    Some(true)
}
