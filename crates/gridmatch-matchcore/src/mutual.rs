//! Mutual-trust resolution over two parties' accepted-service lists.

use gridmatch_types::PartyId;

/// The identities present in both lists, in `a`'s order.
///
/// Every entry of `a` that also occurs in `b` is emitted once per
/// occurrence in `a`: `a`'s multiplicity is preserved, and duplicates
/// in `b` do not multiply the output. An empty result is a valid
/// outcome ("no mutual trust"), not an error.
#[must_use]
pub fn mutual_services(a: &[PartyId], b: &[PartyId]) -> Vec<PartyId> {
    a.iter().filter(|party| b.contains(party)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parties(names: &[&str]) -> Vec<PartyId> {
        names.iter().map(|n| PartyId::new(*n)).collect()
    }

    #[test]
    fn multiplicity_of_first_list_preserved() {
        // The source-of-truth semantics for mutual-service
        // intersection: one output entry per occurrence in `a`.
        let out = mutual_services(&parties(&["m1", "m2", "m1"]), &parties(&["m1", "m3"]));
        assert_eq!(out, parties(&["m1", "m1"]));
    }

    #[test]
    fn duplicates_in_second_list_do_not_multiply() {
        let out = mutual_services(&parties(&["m1"]), &parties(&["m1", "m1"]));
        assert_eq!(out, parties(&["m1"]));
    }

    #[test]
    fn order_follows_first_list() {
        let out = mutual_services(
            &parties(&["m3", "m1", "m2"]),
            &parties(&["m1", "m2", "m3"]),
        );
        assert_eq!(out, parties(&["m3", "m1", "m2"]));
    }

    #[test]
    fn disjoint_lists_yield_empty() {
        let out = mutual_services(&parties(&["m1", "m2"]), &parties(&["m3", "m4"]));
        assert!(out.is_empty());
    }

    #[test]
    fn empty_inputs_yield_empty() {
        assert!(mutual_services(&[], &parties(&["m1"])).is_empty());
        assert!(mutual_services(&parties(&["m1"]), &[]).is_empty());
    }
}
