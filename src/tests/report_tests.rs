    use super::*;

    #[test]
    fn report_has_four_lines_in_order() {
        let text = render_report(&ComparisonResult::from_counts(3, 1));
        assert_eq!(
            text,
            "Total lines: 3\nDiffering lines: 1\nMatching lines: 2\nAccuracy: 66.67%\n"
        );
    }

    #[test]
    fn empty_report_prints_zero_accuracy() {
        let text = render_report(&ComparisonResult::from_counts(0, 0));
        assert!(text.ends_with("Accuracy: 0.00%\n"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn write_report_matches_render() {
        let r = ComparisonResult::from_counts(2, 0);
        let mut buf = Vec::new();
        write_report(&mut buf, &r).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_report(&r));
        assert!(render_report(&r).contains("Accuracy: 100.00%"));
    }
