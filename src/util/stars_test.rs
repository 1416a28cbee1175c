use super::*;

#[test]
fn stars_renders_filled_then_empty_for_every_rating() {
    for r in 0..=5 {
        let rendered = stars(r);
        let filled = rendered.chars().filter(|c| *c == FILLED_STAR).count();
        let empty = rendered.chars().filter(|c| *c == EMPTY_STAR).count();
        assert_eq!(filled, usize::try_from(r).unwrap(), "rating {r}");
        assert_eq!(empty, 5 - filled, "rating {r}");
        assert!(!rendered.contains(format!("{EMPTY_STAR}{FILLED_STAR}").as_str()));
    }
}

#[test]
fn stars_clamps_out_of_range_ratings() {
    assert_eq!(stars(-3), "☆☆☆☆☆");
    assert_eq!(stars(9), "★★★★★");
}

#[test]
fn rounded_average_rounds_half_up() {
    assert_eq!(rounded_average(3.5), 4);
    assert_eq!(rounded_average(3.49), 3);
    assert_eq!(rounded_average(0.0), 0);
    assert_eq!(rounded_average(f64::NAN), 0);
}

#[test]
fn average_label_shows_rounded_stars_and_one_decimal() {
    assert_eq!(average_label(11.0 / 3.0), "★★★★☆ (3.7)");
    assert_eq!(average_label(0.0), "☆☆☆☆☆ (0.0)");
    assert_eq!(average_label(5.0), "★★★★★ (5.0)");
}

#[test]
fn average_label_rounds_exact_ties_up() {
    // [2, 2, 2, 3] and [4, 4, 4, 5]
    assert_eq!(average_label(9.0 / 4.0), "★★☆☆☆ (2.3)");
    assert_eq!(average_label(17.0 / 4.0), "★★★★☆ (4.3)");
    assert_eq!(average_label(0.25), "☆☆☆☆☆ (0.3)");
}
