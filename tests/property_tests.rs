//! Property-based tests for proxylog using proptest

use proptest::prelude::*;
use proxylog::prelude::*;

fn severity_strategy() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Verbose),
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
        Just(Severity::Emergency),
    ]
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Severity tag conversions roundtrip through FromStr
    #[test]
    fn test_severity_str_roundtrip(level in severity_strategy()) {
        let as_str = level.as_str();
        let parsed: Severity = as_str.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Severity ordering is consistent with the numeric wire codes
    #[test]
    fn test_severity_ordering(
        level1 in severity_strategy(),
        level2 in severity_strategy(),
    ) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
        prop_assert_eq!(level1 >= level2, val1 >= val2);
        prop_assert_eq!(level1 > level2, val1 > val2);
    }

    /// Display matches as_str
    #[test]
    fn test_severity_display(level in severity_strategy()) {
        prop_assert_eq!(format!("{}", level), level.as_str());
    }

    /// Severity JSON serialization roundtrips
    #[test]
    fn test_severity_json_roundtrip(level in severity_strategy()) {
        let json = serde_json::to_string(&level).unwrap();
        let back: Severity = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, level);
    }
}

// ============================================================================
// Format Engine Tests
// ============================================================================

proptest! {
    /// Templates without '%' render unchanged, whatever the arguments
    #[test]
    fn test_literal_template_identity(
        template in "[^%]*",
        values in prop::collection::vec(any::<i64>(), 0..4),
    ) {
        let args: Vec<FormatArg> = values.into_iter().map(FormatArg::from).collect();
        prop_assert_eq!(render(&template, &args), template);
    }

    /// "%%" always renders a single '%', regardless of argument count
    #[test]
    fn test_escaped_percent(values in prop::collection::vec(any::<u32>(), 0..4)) {
        let args: Vec<FormatArg> = values.into_iter().map(FormatArg::from).collect();
        prop_assert_eq!(render("%%", &args), "%");
    }

    /// Alphanumeric specifier suffixes are discarded, whatever they contain
    /// (a leading 'x' would be the hex marker, so it is excluded here)
    #[test]
    fn test_specifier_suffix_discarded(
        suffix in "[a-wy-zA-Z0-9][a-zA-Z0-9]{0,8}",
        value in any::<i32>(),
    ) {
        let template = format!("%{} end", suffix);
        let expected = format!("{} end", value);
        prop_assert_eq!(render(&template, &[FormatArg::from(value)]), expected);
    }

    /// %x renders a hex-prefixed value and the flag does not persist
    #[test]
    fn test_hex_flag_one_shot(first in any::<u32>(), second in any::<u32>()) {
        prop_assert_eq!(
            render("%x", &[FormatArg::from(first)]),
            format!("0x{:x}", first)
        );
        prop_assert_eq!(
            render("%x %d", &[FormatArg::from(first), FormatArg::from(second)]),
            format!("0x{:x} {}", first, second)
        );
    }

    /// Placeholders beyond the argument list render as literal '%'
    #[test]
    fn test_argument_exhaustion(
        placeholders in 1usize..8,
        supplied in 0usize..8,
    ) {
        let template = "% ".repeat(placeholders);
        let args: Vec<FormatArg> = (0..supplied).map(|i| FormatArg::from(i as u64)).collect();
        let rendered = render(&template, &args);

        let tokens: Vec<&str> = rendered.split(' ').filter(|t| !t.is_empty()).collect();
        prop_assert_eq!(tokens.len(), placeholders);
        for (i, token) in tokens.iter().enumerate() {
            if i < supplied.min(placeholders) {
                prop_assert_eq!(*token, i.to_string());
            } else {
                prop_assert_eq!(*token, "%");
            }
        }
    }

    /// Arguments substitute strictly left to right
    #[test]
    fn test_left_to_right_consumption(values in prop::collection::vec(any::<u16>(), 1..6)) {
        let template = vec!["%d"; values.len()].join(",");
        let args: Vec<FormatArg> = values.iter().copied().map(FormatArg::from).collect();
        let expected = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(render(&template, &args), expected);
    }

    /// render never panics, whatever the template or arguments
    #[test]
    fn test_render_no_panic(
        template in ".*",
        values in prop::collection::vec(".*", 0..4),
    ) {
        let args: Vec<FormatArg> = values.into_iter().map(FormatArg::from).collect();
        let _ = render(&template, &args);
    }
}

// ============================================================================
// Logger Threshold Tests
// ============================================================================

proptest! {
    /// A logger delivers exactly the severities at or above its threshold
    #[test]
    fn test_threshold_partition(
        threshold in severity_strategy(),
        severity in severity_strategy(),
    ) {
        let sink = MemorySink::new();
        let lines = sink.lines_handle();
        let logger = Logger::new(sink).with_threshold(threshold);

        let written = logger.write(severity, "probe").unwrap();
        prop_assert_eq!(written, severity >= threshold);
        prop_assert_eq!(lines.lock().len(), usize::from(written));
    }
}
