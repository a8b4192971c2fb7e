/// Decides whether an operation stays in the generated API document.
///
/// Excludes only when the production profile is active and a
/// [`HideInProduction`](salute_domain::marker::HideInProduction) marker sits on
/// the handler or on the group declaring it.
#[must_use]
pub const fn should_include(
    is_prod_active: bool,
    has_marker_on_handler: bool,
    has_marker_on_group: bool,
) -> bool {
    !(is_prod_active && (has_marker_on_handler || has_marker_on_group))
}

#[cfg(test)]
mod tests {
    use super::should_include;

    #[test]
    fn truth_table() {
        for handler in [false, true] {
            for group in [false, true] {
                assert!(should_include(false, handler, group));
                assert_eq!(should_include(true, handler, group), !(handler || group));
            }
        }
    }

    #[test]
    fn repeated_evaluation_is_stable() {
        let first = should_include(true, true, false);
        let second = should_include(true, true, false);
        assert_eq!(first, second);
        assert!(!first);
    }
}
