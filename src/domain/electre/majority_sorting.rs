//! Majority Sorting - pessimistic and optimistic ELECTRE TRI assignment procedures.

use tracing::{debug, trace};

use super::{outranks, AssignmentMap, CategoryScale, GlobalConcordanceTable, PerformanceTable, Procedure};
use crate::domain::foundation::{ItemId, MajorityThreshold, ProfileId, SortingError};

/// Majority sorting procedures.
///
/// Profiles are consulted by rank: `b[0]` is the lowest boundary and `b[k]`
/// is the lower boundary of `categories[k]`. With `r` categories the table
/// must hold `r` profiles, or `r + 1` when the highest category also has an
/// explicit upper boundary.
pub struct MajoritySorter;

impl MajoritySorter {
    /// Pessimistic (conjunctive) assignment.
    ///
    /// # Algorithm
    /// For each item, scan `k` from `r - 1` down to `0` and assign
    /// `categories[k]` at the first boundary the item outranks.
    /// Items outranking no boundary get the lowest category.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the profile count is neither `r` nor `r + 1`,
    ///   or if the concordance table was built from another performance table
    pub fn pessimistic(
        categories: &CategoryScale,
        table: &PerformanceTable,
        global: &GlobalConcordanceTable,
        threshold: MajorityThreshold,
    ) -> Result<AssignmentMap, SortingError> {
        Self::check_dimensions(categories, table, global)?;

        let mut levels = vec![categories.lowest(); table.item_count()];
        for item in table.item_ids() {
            levels[item.index()] = Self::pessimistic_level(categories, item, global, threshold);
        }

        debug!(
            items = table.item_count(),
            threshold = threshold.value(),
            "Pessimistic sorting complete"
        );

        Ok(AssignmentMap::from_levels(
            Procedure::Pessimistic,
            table,
            categories,
            levels,
        ))
    }

    /// Optimistic (disjunctive) assignment.
    ///
    /// # Algorithm
    /// For each item, scan `k` upward from `1` and assign `categories[k - 1]`
    /// at the first boundary strictly preferred to the item (`b S H` and not
    /// `H S b`). Items below no such boundary get the highest category.
    ///
    /// The scan stops at `min(r, p - 1)`, so it never reads past the stored
    /// profiles: with `p == r` the highest category has no upper boundary.
    ///
    /// # Errors
    /// Same as [`MajoritySorter::pessimistic`].
    pub fn optimistic(
        categories: &CategoryScale,
        table: &PerformanceTable,
        global: &GlobalConcordanceTable,
        threshold: MajorityThreshold,
    ) -> Result<AssignmentMap, SortingError> {
        Self::check_dimensions(categories, table, global)?;

        let last = categories.len().min(table.profile_count() - 1);
        let mut levels = vec![categories.highest(); table.item_count()];
        for item in table.item_ids() {
            levels[item.index()] =
                Self::optimistic_level(categories, last, item, global, threshold);
        }

        debug!(
            items = table.item_count(),
            threshold = threshold.value(),
            "Optimistic sorting complete"
        );

        Ok(AssignmentMap::from_levels(
            Procedure::Optimistic,
            table,
            categories,
            levels,
        ))
    }

    fn pessimistic_level(
        categories: &CategoryScale,
        item: ItemId,
        global: &GlobalConcordanceTable,
        threshold: MajorityThreshold,
    ) -> usize {
        for k in (0..categories.len()).rev() {
            let relation = outranks(threshold, item, ProfileId::new(k), global);
            if relation.item_outranks_profile {
                trace!(%item, boundary = k, "Item outranks boundary");
                return k;
            }
        }
        categories.lowest()
    }

    fn optimistic_level(
        categories: &CategoryScale,
        last: usize,
        item: ItemId,
        global: &GlobalConcordanceTable,
        threshold: MajorityThreshold,
    ) -> usize {
        for k in 1..=last {
            let relation = outranks(threshold, item, ProfileId::new(k), global);
            if relation.profile_strictly_preferred() {
                trace!(%item, boundary = k, "Boundary strictly preferred to item");
                return k - 1;
            }
        }
        categories.highest()
    }

    /// Checks that `table` holds `r` or `r + 1` profiles for `r` categories.
    ///
    /// Needs no concordance table, so callers can run it before any
    /// concordance is computed.
    ///
    /// # Errors
    /// `DimensionMismatch` on any other profile count.
    pub fn check_profile_count(
        categories: &CategoryScale,
        table: &PerformanceTable,
    ) -> Result<(), SortingError> {
        let r = categories.len();
        let p = table.profile_count();
        if p != r && p != r + 1 {
            return Err(SortingError::dimension_mismatch(
                format!("profiles for {} categories (r or r + 1)", r),
                r,
                p,
            ));
        }
        Ok(())
    }

    fn check_dimensions(
        categories: &CategoryScale,
        table: &PerformanceTable,
        global: &GlobalConcordanceTable,
    ) -> Result<(), SortingError> {
        Self::check_profile_count(categories, table)?;
        let p = table.profile_count();
        if global.profile_count() != p {
            return Err(SortingError::dimension_mismatch(
                "concordance table profiles",
                p,
                global.profile_count(),
            ));
        }
        if global.item_count() != table.item_count() {
            return Err(SortingError::dimension_mismatch(
                "concordance table items",
                table.item_count(),
                global.item_count(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::electre::{CriteriaSet, Criterion, PartialConcordanceTable};
    use crate::domain::foundation::Direction;

    struct Fixture {
        categories: CategoryScale,
        table: PerformanceTable,
        global: GlobalConcordanceTable,
    }

    fn fixture(categories: &[&str], criteria: CriteriaSet, table: PerformanceTable) -> Fixture {
        let partial = PartialConcordanceTable::compute(&criteria, &table).unwrap();
        let global = GlobalConcordanceTable::from_criteria(&criteria, &partial).unwrap();
        Fixture {
            categories: CategoryScale::new(categories.iter().copied()).unwrap(),
            table,
            global,
        }
    }

    fn run(f: &Fixture, threshold: f64) -> (AssignmentMap, AssignmentMap) {
        let t = MajorityThreshold::try_new(threshold).unwrap();
        (
            MajoritySorter::pessimistic(&f.categories, &f.table, &f.global, t).unwrap(),
            MajoritySorter::optimistic(&f.categories, &f.table, &f.global, t).unwrap(),
        )
    }

    /// Two criteria, three categories, four profiles (anti-ideal and ideal included).
    fn graded() -> Fixture {
        let criteria = CriteriaSet::new(vec![
            Criterion::new("quality", Direction::Max, 1.0),
            Criterion::new("cost", Direction::Min, 1.0),
        ])
        .unwrap();
        let table = PerformanceTable::builder(&criteria)
            .profile("floor", 1, vec![0.0, 100.0])
            .profile("b_mid", 2, vec![40.0, 60.0])
            .profile("b_top", 3, vec![70.0, 30.0])
            .profile("ceiling", 4, vec![100.0, 0.0])
            .item("excellent", vec![80.0, 20.0])
            .item("average", vec![50.0, 50.0])
            .item("poor", vec![10.0, 90.0])
            .item("mixed", vec![80.0, 90.0])
            .build()
            .unwrap();
        fixture(&["low", "medium", "high"], criteria, table)
    }

    #[test]
    fn reference_scenario_assigns_lower_category() {
        let criteria = CriteriaSet::new(vec![
            Criterion::new("E", Direction::Min, 1.0),
            Criterion::new("P", Direction::Max, 1.0),
        ])
        .unwrap();
        let table = PerformanceTable::builder(&criteria)
            .item("H", vec![5.0, 5.0])
            .profile("b2", 1, vec![10.0, 0.0])
            .profile("b1", 2, vec![0.0, 10.0])
            .build()
            .unwrap();
        let f = fixture(&["Low", "High"], criteria, table);

        let (pessimistic, optimistic) = run(&f, 0.5);
        assert_eq!(pessimistic.category_of("H"), Some("Low"));
        assert_eq!(optimistic.category_of("H"), Some("Low"));
    }

    #[test]
    fn clear_items_agree_across_procedures() {
        let f = graded();
        let (pessimistic, optimistic) = run(&f, 0.75);

        assert_eq!(pessimistic.category_of("excellent"), Some("high"));
        assert_eq!(optimistic.category_of("excellent"), Some("high"));
        assert_eq!(pessimistic.category_of("average"), Some("medium"));
        assert_eq!(optimistic.category_of("average"), Some("medium"));
        assert_eq!(pessimistic.category_of("poor"), Some("low"));
        assert_eq!(optimistic.category_of("poor"), Some("low"));
    }

    #[test]
    fn incomparable_item_splits_procedures() {
        // "mixed" is excellent on quality and poor on cost: with a strict
        // majority it outranks only the floor and only the ceiling beats it.
        let f = graded();
        let (pessimistic, optimistic) = run(&f, 0.75);

        assert_eq!(pessimistic.category_of("mixed"), Some("low"));
        assert_eq!(optimistic.category_of("mixed"), Some("high"));
    }

    #[test]
    fn every_item_is_assigned_once() {
        let f = graded();
        let (pessimistic, optimistic) = run(&f, 0.5);

        assert_eq!(pessimistic.len(), 4);
        assert_eq!(optimistic.len(), 4);
        assert_eq!(pessimistic.procedure(), Procedure::Pessimistic);
        assert_eq!(optimistic.procedure(), Procedure::Optimistic);
        let names: Vec<_> = pessimistic.iter().map(|a| a.item.as_str()).collect();
        assert_eq!(names, vec!["excellent", "average", "poor", "mixed"]);
    }

    #[test]
    fn zero_threshold_pushes_pessimistic_to_top() {
        let f = graded();
        let (pessimistic, _) = run(&f, 0.0);

        for assignment in pessimistic.iter() {
            assert_eq!(assignment.category, "high");
        }
    }

    #[test]
    fn unanimity_threshold_is_conservative() {
        let f = graded();
        let (pessimistic, optimistic) = run(&f, 1.0);

        assert_eq!(pessimistic.category_of("mixed"), Some("low"));
        assert_eq!(optimistic.category_of("mixed"), Some("high"));
        assert_eq!(pessimistic.category_of("excellent"), Some("high"));
    }

    #[test]
    fn works_without_explicit_top_boundary() {
        // r profiles for r categories: b[k] is the lower boundary of categories[k].
        let criteria =
            CriteriaSet::new(vec![Criterion::new("score", Direction::Max, 1.0)]).unwrap();
        let table = PerformanceTable::builder(&criteria)
            .profile("b1", 1, vec![0.0])
            .profile("b2", 2, vec![50.0])
            .item("weak", vec![10.0])
            .item("strong", vec![90.0])
            .build()
            .unwrap();
        let f = fixture(&["fail", "pass"], criteria, table);

        let (pessimistic, optimistic) = run(&f, 0.5);
        assert_eq!(pessimistic.category_of("weak"), Some("fail"));
        assert_eq!(optimistic.category_of("weak"), Some("fail"));
        assert_eq!(pessimistic.category_of("strong"), Some("pass"));
        assert_eq!(optimistic.category_of("strong"), Some("pass"));
    }

    #[test]
    fn item_below_every_boundary_gets_lowest_category() {
        let criteria =
            CriteriaSet::new(vec![Criterion::new("score", Direction::Max, 1.0)]).unwrap();
        let table = PerformanceTable::builder(&criteria)
            .profile("b1", 1, vec![20.0])
            .profile("b2", 2, vec![50.0])
            .item("hopeless", vec![5.0])
            .build()
            .unwrap();
        let f = fixture(&["fail", "pass"], criteria, table);

        let (pessimistic, optimistic) = run(&f, 0.5);
        assert_eq!(pessimistic.category_of("hopeless"), Some("fail"));
        assert_eq!(optimistic.category_of("hopeless"), Some("fail"));
    }

    #[test]
    fn single_category_takes_every_item() {
        let criteria =
            CriteriaSet::new(vec![Criterion::new("score", Direction::Max, 1.0)]).unwrap();
        let table = PerformanceTable::builder(&criteria)
            .profile("b1", 1, vec![20.0])
            .item("x", vec![5.0])
            .item("y", vec![50.0])
            .build()
            .unwrap();
        let f = fixture(&["all"], criteria, table);

        let (pessimistic, optimistic) = run(&f, 0.5);
        assert_eq!(pessimistic.category_of("x"), Some("all"));
        assert_eq!(optimistic.category_of("y"), Some("all"));
    }

    #[test]
    fn empty_item_set_yields_empty_maps() {
        let criteria =
            CriteriaSet::new(vec![Criterion::new("score", Direction::Max, 1.0)]).unwrap();
        let table = PerformanceTable::builder(&criteria)
            .profile("b1", 1, vec![20.0])
            .build()
            .unwrap();
        let f = fixture(&["all"], criteria, table);

        let (pessimistic, optimistic) = run(&f, 0.5);
        assert!(pessimistic.is_empty());
        assert!(optimistic.is_empty());
    }

    #[test]
    fn rejects_profile_count_outside_r_and_r_plus_one() {
        let f = graded();
        let two = CategoryScale::new(["low", "high"]).unwrap();
        let t = MajorityThreshold::try_new(0.5).unwrap();

        let err = MajoritySorter::pessimistic(&two, &f.table, &f.global, t).unwrap_err();
        assert!(matches!(err, SortingError::DimensionMismatch { expected: 2, actual: 4, .. }));

        let err = MajoritySorter::optimistic(&two, &f.table, &f.global, t).unwrap_err();
        assert!(matches!(err, SortingError::DimensionMismatch { .. }));
    }

    #[test]
    fn profile_count_check_needs_no_concordance() {
        let f = graded();
        let three = CategoryScale::new(["low", "medium", "high"]).unwrap();
        let four = CategoryScale::new(["d", "c", "b", "a"]).unwrap();
        let five = CategoryScale::new(["e", "d", "c", "b", "a"]).unwrap();

        assert!(MajoritySorter::check_profile_count(&three, &f.table).is_ok());
        assert!(MajoritySorter::check_profile_count(&four, &f.table).is_ok());
        assert!(matches!(
            MajoritySorter::check_profile_count(&five, &f.table),
            Err(SortingError::DimensionMismatch { expected: 5, actual: 4, .. })
        ));
    }

    #[test]
    fn rejects_concordance_table_from_other_run() {
        let f = graded();
        let criteria =
            CriteriaSet::new(vec![Criterion::new("score", Direction::Max, 1.0)]).unwrap();
        let table = PerformanceTable::builder(&criteria)
            .profile("b1", 1, vec![0.0])
            .profile("b2", 2, vec![1.0])
            .profile("b3", 3, vec![2.0])
            .profile("b4", 4, vec![3.0])
            .item("only", vec![1.5])
            .build()
            .unwrap();
        let other = fixture(&["low", "medium", "high"], criteria, table);

        let err = MajoritySorter::pessimistic(
            &f.categories,
            &f.table,
            &other.global,
            MajorityThreshold::try_new(0.5).unwrap(),
        )
        .unwrap_err();
        assert!(matches!(err, SortingError::DimensionMismatch { .. }));
    }
}
