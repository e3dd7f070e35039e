use super::*;

#[test]
fn default_markers() {
    let config = ExponentConfig::default();
    assert_eq!(config.primary(), b'e');
    assert_eq!(config.secondary(), Some(b'^'));
    assert!(config.is_exponent_marker(b'e'));
    assert!(config.is_exponent_marker(b'^'));
    assert!(!config.is_exponent_marker(b'E'));
    assert!(!config.is_exponent_marker(b'_'));
}

#[test]
fn single_marker() {
    let config = ExponentConfig::new(b'p');
    assert_eq!(config.secondary(), None);
    assert!(config.is_exponent_marker(b'p'));
    assert!(!config.is_exponent_marker(b'^'));
}

#[test]
fn with_secondary_replaces() {
    let config = ExponentConfig::default().with_secondary(Some(b'#'));
    assert_eq!(config.primary(), b'e');
    assert!(config.is_exponent_marker(b'#'));
    assert!(!config.is_exponent_marker(b'^'));

    let config = config.with_secondary(None);
    assert!(!config.is_exponent_marker(b'#'));
}
