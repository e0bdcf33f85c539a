    use super::*;

    #[test]
    fn empty_comparison_has_zero_accuracy() {
        let r = ComparisonResult::from_counts(0, 0);
        assert_eq!(r.total, 0);
        assert_eq!(r.matching, 0);
        assert_eq!(r.differing, 0);
        assert_eq!(r.accuracy, 0.0);
    }

    #[test]
    fn matching_is_total_minus_differing() {
        let r = ComparisonResult::from_counts(3, 1);
        assert_eq!(r.matching, 2);
        assert!((r.accuracy - 66.666_666).abs() < 1e-3);
    }

    #[test]
    fn all_differing_is_zero_percent() {
        let r = ComparisonResult::from_counts(4, 4);
        assert_eq!(r.matching, 0);
        assert_eq!(r.accuracy, 0.0);
    }
