use chrono::{DateTime, Duration, TimeZone, Utc};
use serial_test::serial;
use std::fs;
use std::time::Duration as StdDuration;
use tempfile::tempdir;

use sunarc::celestial::source_from_config;
use sunarc::{
    Clock, Config, DayPhase, DayWindow, Driver, EntityFileSource, Instant, Log, Progress,
    progress, status,
};

struct FixedClock(Instant);

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }

    fn sleep(&self, _duration: StdDuration) {}
}

fn at(hour: u32, minute: u32) -> Instant {
    Utc.with_ymd_and_hms(2024, 6, 21, hour, minute, 0).unwrap()
}

fn entity_json(state: &str, next_rising: Instant, next_setting: Instant) -> String {
    format!(
        r#"{{"entity_id": "sun.sun", "state": "{}", "attributes": {{"next_rising": "{}", "next_setting": "{}"}}}}"#,
        state,
        next_rising.to_rfc3339(),
        next_setting.to_rfc3339()
    )
}

fn write_setup(dir: &std::path::Path, entity: &str) -> std::path::PathBuf {
    let entity_path = dir.join("sun.json");
    fs::write(&entity_path, entity).unwrap();

    let config_path = dir.join("sunarc.toml");
    let config = format!(
        "source = \"entity\"\nentity_file = \"{}\"\ntimezone = \"UTC\"\nupdate_interval = 60\n",
        entity_path.display()
    );
    fs::write(&config_path, config).unwrap();
    config_path
}

#[test]
fn test_midday_scenario() {
    let (now, sunrise, sunset) = (at(12, 0), at(6, 0), at(18, 0));

    let p = progress::compute(now, sunrise, sunset).unwrap();
    let line = status::format(now, sunrise, sunset);

    assert_eq!(p.value(), 0.5);
    assert_eq!(line.label, "Daylight hours");
    assert_eq!(line.remaining, "6h 0m until sunset");
}

#[test]
fn test_pre_dawn_scenario() {
    let (now, sunrise, sunset) = (at(5, 0), at(6, 0), at(18, 0));

    assert_eq!(progress::compute(now, sunrise, sunset).unwrap(), Progress::START);
    let line = status::format(now, sunrise, sunset);
    assert_eq!(line.label, "Before sunrise");
    assert_eq!(line.remaining, "1h 0m until sunrise");
}

#[test]
fn test_evening_scenario() {
    let (now, sunrise, sunset) = (at(19, 30), at(6, 0), at(18, 0));

    assert_eq!(progress::compute(now, sunrise, sunset).unwrap(), Progress::END);
    let line = status::format(now, sunrise, sunset);
    assert_eq!(line.phase, Some(DayPhase::AfterSunset));
    assert_eq!(line.remaining, "10h 30m until sunrise");
}

#[test]
fn test_resolver_shift_scenario() {
    let now = at(12, 0);
    let window = DayWindow::resolve(now, true, now + Duration::hours(2), now + Duration::hours(10));

    assert_eq!(window.sunrise, now - Duration::hours(22));
    assert_eq!(window.sunset, now + Duration::hours(10));
}

#[test]
#[serial]
fn test_config_to_frame_through_entity_file() {
    let temp_dir = tempdir().unwrap();
    // Sun is up: the host reports tomorrow's rising and today's setting
    let entity = entity_json("above_horizon", at(6, 0) + Duration::days(1), at(18, 0));
    let config_path = write_setup(temp_dir.path(), &entity);

    let config = Config::load_from_path(&config_path).unwrap();
    let source = source_from_config(&config).unwrap();
    let layout = config.layout().unwrap();
    let mut driver = Driver::new(source, layout, FixedClock(at(12, 0)), StdDuration::from_secs(60));

    let frame = driver.tick().unwrap().unwrap();
    assert_eq!(frame.progress.value(), 0.5);
    assert_eq!(frame.status, "Daylight hours");
    assert_eq!(frame.sunrise_time, "06:00");
    assert_eq!(frame.sunset_time, "18:00");
    assert_eq!(frame.current_time, "12:00");
    assert_eq!(frame.arc_path, "M 50 200 A 150 150 0 1 1 350 200");
}

#[test]
#[serial]
fn test_missing_entity_file_produces_no_frame() {
    let temp_dir = tempdir().unwrap();
    let config_path = write_setup(temp_dir.path(), "{}");
    fs::remove_file(temp_dir.path().join("sun.json")).unwrap();

    let config = Config::load_from_path(&config_path).unwrap();
    let source = source_from_config(&config).unwrap();
    let mut driver = Driver::new(
        source,
        config.layout().unwrap(),
        FixedClock(at(12, 0)),
        StdDuration::from_secs(60),
    );

    assert!(driver.tick().unwrap().is_none());
    assert!(driver.last_frame().is_none());
}

#[test]
#[serial]
fn test_degenerate_entity_renders_neutral_frame() {
    let temp_dir = tempdir().unwrap();
    let entity = entity_json("below_horizon", at(18, 0), at(18, 0));
    let config_path = write_setup(temp_dir.path(), &entity);

    let config = Config::load_from_path(&config_path).unwrap();
    let source = source_from_config(&config).unwrap();
    let mut driver = Driver::new(
        source,
        config.layout().unwrap(),
        FixedClock(at(12, 0)),
        StdDuration::from_secs(60),
    );

    Log::set_enabled(false);
    let frame = driver.tick().unwrap().unwrap().clone();
    Log::set_enabled(true);

    assert_eq!(frame.progress, Progress::START);
    assert_eq!(frame.status, "Sun times unavailable");
    assert_eq!(frame.dash, 0.0);
}

#[test]
fn test_entity_snapshot_with_offsets() {
    let json = r#"{"state": "above_horizon", "attributes": {
        "next_rising": "2024-06-22T05:00:00+02:00",
        "next_setting": "2024-06-21T21:30:00+02:00"}}"#;
    let state = EntityFileSource::parse(json).unwrap().unwrap();
    let expected: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 6, 21, 19, 30, 0).unwrap();
    assert_eq!(state.next_setting, expected);
}
