#[cfg(feature = "std")]
#[cfg(test)]
mod logging_tests {
    use log::LevelFilter;
    use morris::log_level;

    #[test]
    fn test_unset_defaults_to_info() {
        assert_eq!(log_level(None), LevelFilter::Info);
    }

    #[test]
    fn test_named_levels() {
        assert_eq!(log_level(Some("off")), LevelFilter::Off);
        assert_eq!(log_level(Some("DEBUG")), LevelFilter::Debug);
        assert_eq!(log_level(Some(" trace\n")), LevelFilter::Trace);
    }

    #[test]
    fn test_unknown_value_falls_back_to_info() {
        assert_eq!(log_level(Some("loud")), LevelFilter::Info);
        assert_eq!(log_level(Some("")), LevelFilter::Info);
    }
}
