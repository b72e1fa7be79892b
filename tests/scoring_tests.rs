//! Score, level, and drop-speed progression tables

use tetris_rules::core::{calculate_level, calculate_score, get_drop_speed};

#[test]
fn test_score_table_level_one() {
    let table: Vec<u32> = (0..=4).map(|lines| calculate_score(lines, 1)).collect();
    assert_eq!(table, vec![0, 100, 300, 500, 800]);
}

#[test]
fn test_score_scales_with_level() {
    assert_eq!(calculate_score(1, 2), 200);
    assert_eq!(calculate_score(2, 3), 900);
    assert_eq!(calculate_score(3, 4), 2000);
    assert_eq!(calculate_score(4, 10), 8000);
}

#[test]
fn test_level_thresholds() {
    assert_eq!(calculate_level(0), 1);
    assert_eq!(calculate_level(9), 1);
    assert_eq!(calculate_level(10), 2);
    assert_eq!(calculate_level(25), 3);
}

#[test]
fn test_drop_speed_floor() {
    assert_eq!(get_drop_speed(1), 1000);
    assert_eq!(get_drop_speed(5), 600);
    assert_eq!(get_drop_speed(10), 100);
    assert_eq!(get_drop_speed(15), 100);
}

#[test]
fn test_drop_speed_is_monotone() {
    let speeds: Vec<u32> = (1..30).map(get_drop_speed).collect();
    assert!(speeds.windows(2).all(|w| w[0] >= w[1]));
}
