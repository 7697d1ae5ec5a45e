use levelup_core::config::AppConfig;
use levelup_core::lifecycle::CartSystem;
use levelup_core::rewards::TierTable;

#[test]
fn test_level_up_progression() {
    let table = TierTable::level_up();

    let names: Vec<_> = [0, 99, 100, 499, 500, 999, 1000, 1999, 2000, 50_000]
        .iter()
        .map(|&points| table.current_tier(points).name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "Bronze", "Bronze", "Silver", "Silver", "Gold", "Gold", "Platinum", "Platinum",
            "Diamond", "Diamond"
        ]
    );

    let status = table.status(750);
    assert_eq!(status.current.name, "Gold");
    assert_eq!(status.next.as_ref().map(|t| t.level), Some(4));
    assert!((status.progress - 0.5).abs() < 1e-12);
    assert_eq!(status.points_to_next, Some(250));
}

#[test]
fn test_progress_is_monotonic_within_a_tier() {
    let table = TierTable::level_up();
    let mut last = -1.0;
    for points in 500..1000 {
        let progress = table.progress(points);
        assert!(progress > last);
        last = progress;
    }
    assert_eq!(table.progress(1000), 0.0);
}

#[test]
fn test_status_serializes_for_profile_screen() {
    let status = TierTable::level_up().status(2400);
    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["current"]["name"], "Diamond");
    assert_eq!(json["progress"], 1.0);
    assert!(json["next"].is_null());
    assert!(json["points_to_next"].is_null());
}

#[tokio::test]
async fn test_system_uses_configured_tiers() {
    let config = AppConfig::from_yaml_str(
        r##"
tiers:
  - { level: 1, name: Rookie, min_points: 0, color: "#777777" }
  - { level: 2, name: Pro, min_points: 300, color: "#2266FF" }
"##,
    )
    .unwrap();

    let system = CartSystem::new(&config).unwrap();
    assert_eq!(system.tiers.current_tier(299).name, "Rookie");
    assert_eq!(system.tiers.current_tier(300).name, "Pro");
    assert_eq!(system.tiers.progress(150), 0.5);
    system.shutdown().await.unwrap();
}
