//! Package selection rules.
//!
//! Pure functions over a slice of packages. Inactive packages never win.
//! Ties always go to the package that comes first in the input.

use renoovy_core::Entity;

use crate::package::Package;

/// The package to highlight on the landing page.
///
/// 1. the first active popular package;
/// 2. otherwise the active economic package with the highest discount;
/// 3. otherwise the first active package.
pub fn recommended_package(packages: &[Package]) -> Option<&Package> {
    let mut active = packages.iter().filter(|p| p.is_active());

    if let Some(popular) = active.clone().find(|p| p.is_popular()) {
        return Some(popular);
    }

    let best_economic = active
        .clone()
        .filter(|p| p.is_economic())
        .fold(None::<&Package>, |best, candidate| match best {
            Some(best) if best.discount() >= candidate.discount() => Some(best),
            _ => Some(candidate),
        });

    best_economic.or_else(|| active.next())
}

/// The active package with the largest per-unit savings.
pub fn best_offer(packages: &[Package]) -> Option<&Package> {
    packages
        .iter()
        .filter(|p| p.is_active())
        .fold(None::<&Package>, |best, candidate| match best {
            Some(best) if best.savings_per_unit() >= candidate.savings_per_unit() => Some(best),
            _ => Some(candidate),
        })
}
