use approx::assert_relative_eq;
use resistor_kit::{find_nearest, led_resistor, Series};

#[test]
fn test_e24_exact_member() {
    let m = find_nearest(4700.0, Series::E24);
    assert!(m.is_exact);
    assert_eq!(m.value, 4700.0);
    assert_eq!(m.absolute_difference, 0.0);
}

#[test]
fn test_every_table_entry_is_exact_in_every_decade() {
    for series in Series::ALL {
        for exponent in -1..=6 {
            for &entry in series.values() {
                let target = entry * 10f64.powi(exponent);
                let m = find_nearest(target, series);
                assert!(m.is_exact, "{} {} not exact", series, target);
                assert_relative_eq!(m.value, target, max_relative = 1e-9);
            }
        }
    }
}

#[test]
fn test_one_megohm_neighbourhood() {
    let m = find_nearest(1_005_000.0, Series::E24);
    assert!(!m.is_exact);
    assert_eq!(m.value, 1_000_000.0);
}

#[test]
fn test_finer_series_gets_closer() {
    let target = 5_000.0;
    let e12 = find_nearest(target, Series::E12);
    let e24 = find_nearest(target, Series::E24);
    let e96 = find_nearest(target, Series::E96);

    assert_relative_eq!(e12.value, 4_700.0, max_relative = 1e-12);
    assert_relative_eq!(e24.value, 5_100.0, max_relative = 1e-12);
    assert_relative_eq!(e96.value, 4_990.0, max_relative = 1e-12);
    assert!(e96.absolute_difference <= e24.absolute_difference);
    assert!(e24.absolute_difference <= e12.absolute_difference);
}

#[test]
fn test_degenerate_targets_do_not_fail() {
    let zero = find_nearest(0.0, Series::E24);
    assert_eq!(zero.value, 0.0);
    assert!(!zero.is_exact);

    let negative = find_nearest(-5.0, Series::E12);
    assert_eq!(negative.value, 0.0);
    assert!(!negative.is_exact);
    assert_eq!(negative.absolute_difference, -5.0);
}

#[test]
fn test_led_uses_e24_rounding() {
    // 12 V supply, 3.2 V white LED at 10 mA → 880 Ω → 910 Ω is the nearest E24
    let led = led_resistor(12.0, 3.2, 0.010).unwrap();
    assert_relative_eq!(led.ohms, 880.0, max_relative = 1e-9);
    assert_relative_eq!(led.nearest_e24, 910.0, max_relative = 1e-12);
}
