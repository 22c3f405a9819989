//! Unit tests for sp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CategoryId, DropIdx, SessionIdx};

    #[test]
    fn index_roundtrip() {
        let id = SessionIdx(4);
        assert_eq!(id.index(), 4);
        assert_eq!(SessionIdx::try_from(4usize).unwrap(), id);
    }

    #[test]
    fn drop_number_is_one_based() {
        assert_eq!(DropIdx(0).number(), 1);
        assert_eq!(DropIdx(2).to_string(), "drop 3");
    }

    #[test]
    fn category_display() {
        assert_eq!(CategoryId::from("cat-9").to_string(), "cat-9");
    }
}

#[cfg(test)]
mod parse {
    use crate::{CoreError, RangeSet, SeedRange, parse_ranges};

    #[test]
    fn ranges_and_singletons() {
        let r = parse_ranges("1-5,10");
        assert_eq!(r, vec![SeedRange::new(1, 5), SeedRange::single(10)]);
        assert_eq!(RangeSet::parse("1-5,10").size(), 6);
    }

    #[test]
    fn reversed_bounds_are_normalised() {
        assert_eq!(parse_ranges("9-3"), vec![SeedRange::new(3, 9)]);
    }

    #[test]
    fn no_sentinel_and_blanks_contribute_nothing() {
        assert!(parse_ranges("NO").is_empty());
        assert!(parse_ranges(" no ").is_empty());
        assert!(parse_ranges("").is_empty());
        assert_eq!(parse_ranges("1-2, ,No,4"), vec![SeedRange::new(1, 2), SeedRange::single(4)]);
    }

    #[test]
    fn junk_tokens_are_dropped() {
        assert_eq!(parse_ranges("abc,3-x,7, 8 - 9"), vec![SeedRange::single(7), SeedRange::new(8, 9)]);
        assert!(RangeSet::parse("foo,bar").is_empty());
    }

    #[test]
    fn parse_does_not_merge() {
        assert_eq!(parse_ranges("5-8,1-6").len(), 2);
    }

    #[test]
    fn strict_rejects_junk() {
        let err = RangeSet::parse_strict("1-5,x").unwrap_err();
        assert!(matches!(err, CoreError::InvalidRangeToken { ref token, .. } if token == "x"));
        assert_eq!("1-5, NO".parse::<RangeSet>().unwrap(), RangeSet::parse("1-5"));
    }
}

#[cfg(test)]
mod merge_and_format {
    use crate::{RangeSet, SeedRange, merge, parse_ranges};

    #[test]
    fn overlapping_and_touching_ranges_merge() {
        let merged = merge(parse_ranges("10-12,1-5,6-8,3"));
        assert_eq!(merged, vec![SeedRange::new(1, 8), SeedRange::new(10, 12)]);
    }

    #[test]
    fn merge_is_idempotent() {
        for text in ["1-5,3-9,20", "7,6,5,100-90", "", "1-1,3-3,2-2"] {
            let once = merge(parse_ranges(text));
            let twice = merge(once.clone());
            assert_eq!(once, twice, "input {text:?}");
        }
    }

    #[test]
    fn format_singletons_and_spans() {
        let set = RangeSet::parse("1-5,10");
        assert_eq!(set.to_string(), "1-5,10");
        assert_eq!(RangeSet::empty().to_string(), "");
        assert_eq!(RangeSet::empty().format_or("NO"), "NO");
    }

    #[test]
    fn text_round_trip_is_canonical() {
        for text in ["1-5, 3-9 ,20", "NO", "42", "9-1,11-15,16", "x,1-2"] {
            let canonical = RangeSet::parse(text);
            let again = RangeSet::parse(&canonical.to_string());
            assert_eq!(again, canonical, "input {text:?}");
        }
    }

    #[test]
    fn merge_at_u64_max_does_not_overflow() {
        let merged = merge([SeedRange::new(u64::MAX - 1, u64::MAX), SeedRange::single(5)]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn full_width_range_size_saturates() {
        let set = RangeSet::parse("0-18446744073709551615");
        assert_eq!(set.len(), 1);
        assert_eq!(set.ranges()[0].len(), u64::MAX);
        assert_eq!(set.size(), u64::MAX);

        let both = RangeSet::parse("0-9,20-18446744073709551615");
        assert_eq!(both.size(), u64::MAX);
    }
}

#[cfg(test)]
mod lookups {
    use crate::RangeSet;

    #[test]
    fn range_containing_and_next_after() {
        let set = RangeSet::parse("1-5,10-12,20");
        assert_eq!(set.range_containing(3), Some(0));
        assert_eq!(set.range_containing(12), Some(1));
        assert_eq!(set.range_containing(7), None);
        assert_eq!(set.next_range_after(7), Some(1));
        assert_eq!(set.next_range_after(12), Some(2));
        assert_eq!(set.next_range_after(20), None);
    }

    #[test]
    fn nth_walks_across_ranges() {
        let set = RangeSet::parse("1-3,10-11");
        assert_eq!(set.nth(0), Some(1));
        assert_eq!(set.nth(3), Some(10));
        assert_eq!(set.nth(4), Some(11));
        assert_eq!(set.nth(5), None);
    }

    #[test]
    fn first_last_contains() {
        let set = RangeSet::parse("4-6,9");
        assert_eq!(set.first(), Some(4));
        assert_eq!(set.last(), Some(9));
        assert!(set.contains(9));
        assert!(!set.contains(7));
        assert_eq!(RangeSet::empty().first(), None);
    }
}

#[cfg(test)]
mod pool {
    use crate::{PoolSummary, RangeSet, complement, union_size};

    fn sets(texts: &[&str]) -> Vec<RangeSet> {
        texts.iter().map(|t| RangeSet::parse(t)).collect()
    }

    #[test]
    fn complement_example() {
        let pool = complement(&RangeSet::parse("1-10"), &sets(&["3-4", "7-7"]));
        assert_eq!(pool.to_string(), "1-2,5-6,8-10");
    }

    #[test]
    fn complement_with_full_exclusion_is_empty() {
        for text in ["1-10", "5", "1-3,8-9"] {
            let total = RangeSet::parse(text);
            assert!(complement(&total, std::slice::from_ref(&total)).is_empty());
        }
    }

    #[test]
    fn touching_exclusions_count_as_one() {
        let pool = complement(&RangeSet::parse("1-20"), &sets(&["1-5", "6-10"]));
        assert_eq!(pool.to_string(), "11-20");
    }

    #[test]
    fn complement_of_empty_total_is_empty() {
        assert!(complement(&RangeSet::empty(), &sets(&["1-5"])).is_empty());
    }

    #[test]
    fn no_exclusions_returns_total() {
        let total = RangeSet::parse("1-5,9");
        assert_eq!(complement(&total, &sets(&["NO", ""])), total);
    }

    #[test]
    fn exclusions_outside_total_are_ignored() {
        let pool = complement(&RangeSet::parse("10-20,30-40"), &sets(&["1-5", "25", "35-50"]));
        assert_eq!(pool.to_string(), "10-20,30-34");
    }

    #[test]
    fn union_size_counts_overlaps_once() {
        assert_eq!(union_size(&sets(&["1-10", "5-15", "NO", "20"])), 16);
        assert_eq!(union_size(&[]), 0);
    }

    #[test]
    fn union_size_is_monotone() {
        let mut acc = sets(&["1-3"]);
        let mut last = union_size(&acc);
        for extra in ["2-6", "100", "NO", "1-200"] {
            acc.push(RangeSet::parse(extra));
            let now = union_size(&acc);
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn summary_resolves_all_figures() {
        let summary = PoolSummary::resolve(&RangeSet::parse("1-100"), &sets(&["1-10", "5-20", "NO", "90"]));
        assert_eq!(summary.total, 100);
        assert_eq!(summary.total_paused, 21);
        assert_eq!(summary.available(), 79);
        assert_eq!(summary.pool.to_string(), "21-89,91-100");
    }
}

#[cfg(test)]
mod config {
    use crate::{EngineConfig, parse_hm};

    #[test]
    fn defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.history_days, 90);
        assert_eq!(cfg.default_start_hm(), (9, 0));
    }

    #[test]
    fn hm_parsing() {
        assert_eq!(parse_hm("07:30"), Some((7, 30)));
        assert_eq!(parse_hm("25:00"), None);
        assert_eq!(parse_hm("noon"), None);
    }
}
