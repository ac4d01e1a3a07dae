use super::*;

#[test]
fn presets_map_to_their_delays() {
    assert_eq!(Pace::Fast.delay(), Duration::from_millis(50));
    assert_eq!(Pace::Normal.delay(), Duration::from_millis(100));
    assert_eq!(Pace::Slow.delay(), Duration::from_millis(200));
}

#[test]
fn normal_is_the_default() {
    assert_eq!(Pace::default(), Pace::Normal);
}

#[test]
fn settle_delay_is_brief() {
    assert_eq!(SETTLE_DELAY, Duration::from_millis(500));
}
