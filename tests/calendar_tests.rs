//! Integration tests for the CycleCalendar controller
//!
//! Every test opens a calendar on a temporary settings file with a fixed
//! "today" of 2025-01-10.

mod common;

use common::{get_test_calendar, ymd};
use cycle_calendar::{
    CycleCalendar, CycleSettings, Label, Locale, MAX_LENGTH_DAYS, MonthCursor, Theme,
};

fn today() -> chrono::NaiveDate {
    ymd(2025, 1, 10)
}

// 設定ファイルがない状態で開くと予測なし・設定を促すメッセージになる
#[test]
fn test_open_without_settings() {
    let (calendar, _dir, _path) = get_test_calendar(today());

    assert!(calendar.settings().is_none());
    assert!(calendar.index().is_empty());
    assert_eq!(calendar.cursor(), MonthCursor::new(2025, 1).unwrap());
    assert_eq!(calendar.horizon_days(), 180);
    assert_eq!(
        calendar.summary(),
        "Please set your last period and cycle preferences to see predictions."
    );
    assert_eq!(calendar.footer_note(), "");
}

// 設定を保存すると索引が再構築され、再度開いても同じ結果になる
#[test]
fn test_save_settings_rebuilds_and_persists() {
    let (mut calendar, _dir, path) = get_test_calendar(today());
    calendar
        .save_settings(CycleSettings::new(ymd(2025, 1, 1), 28, 5))
        .unwrap();

    assert_eq!(calendar.index().primary_on(ymd(2025, 1, 3)), Some(Label::Menstruation));
    assert_eq!(calendar.index().primary_on(ymd(2025, 2, 12)), Some(Label::Ovulation));
    assert_eq!(
        calendar.footer_note(),
        "Prediction based on: 2025-01-01 | 28 days (cycle)"
    );

    let reopened = CycleCalendar::open(&path, today()).unwrap();
    assert_eq!(reopened.settings(), calendar.settings());
    assert_eq!(reopened.index(), calendar.index());
}

// 不正な設定は拒否され、既存の設定は変わらない
#[test]
fn test_invalid_settings_are_rejected() {
    let (mut calendar, _dir, _path) = get_test_calendar(today());
    calendar
        .save_settings(CycleSettings::new(ymd(2025, 1, 1), 28, 5))
        .unwrap();

    assert!(calendar
        .save_settings(CycleSettings::new(ymd(2025, 1, 1), 0, 5))
        .is_err());
    assert!(calendar
        .save_settings(CycleSettings::new(ymd(2025, 1, 1), 28, -1))
        .is_err());
    let err = calendar
        .save_settings(CycleSettings {
            last_period: "01/01/2025".to_string(),
            cycle_length: 28,
            period_length: 5,
        })
        .unwrap_err();
    assert!(err.to_string().contains("01/01/2025"));

    assert_eq!(calendar.settings().unwrap().cycle_length, 28);
    assert!(!calendar.index().is_empty());
}

// 月の移動は年をまたいで前後でき、今日に戻れる
#[test]
fn test_month_navigation() {
    let (mut calendar, _dir, _path) = get_test_calendar(today());

    calendar.previous_month();
    assert_eq!(calendar.cursor(), MonthCursor::new(2024, 12).unwrap());

    calendar.next_month();
    calendar.next_month();
    assert_eq!(calendar.cursor(), MonthCursor::new(2025, 2).unwrap());

    calendar.go_to(MonthCursor::new(2030, 6).unwrap());
    assert_eq!(calendar.cursor().year(), 2030);

    calendar.go_to_today();
    assert_eq!(calendar.cursor(), MonthCursor::new(2025, 1).unwrap());
}

// リセットで設定と索引が消えるが、表示設定は残る
#[test]
fn test_reset_keeps_preferences() {
    let (mut calendar, _dir, path) = get_test_calendar(today());
    calendar.set_theme(Theme::Dark).unwrap();
    calendar
        .save_settings(CycleSettings::new(ymd(2025, 1, 1), 28, 5))
        .unwrap();

    calendar.reset().unwrap();
    assert!(calendar.settings().is_none());
    assert!(calendar.index().is_empty());

    let reopened = CycleCalendar::open(&path, today()).unwrap();
    assert!(reopened.settings().is_none());
    assert_eq!(reopened.preferences().theme, Theme::Dark);
}

// 言語を切り替えると月名や要約が翻訳される
#[test]
fn test_language_switch() {
    let (mut calendar, _dir, path) = get_test_calendar(today());
    calendar
        .save_settings(CycleSettings::new(ymd(2025, 1, 1), 28, 5))
        .unwrap();
    calendar.set_language(Locale::PtBr).unwrap();

    assert!(calendar.render_month(false).contains("janeiro de 2025"));
    assert!(calendar.banner().starts_with("Ciclo Feminino\n"));
    assert_eq!(
        calendar.footer_note(),
        "Previsão baseada em: 2025-01-01 | 28 dias (ciclo)"
    );

    let reopened = CycleCalendar::open(&path, today()).unwrap();
    assert_eq!(reopened.preferences().lang, Locale::PtBr);
}

// 今日の日付と予測ラベルがグリッドに表示される
#[test]
fn test_render_marks_today_and_labels() {
    let (mut calendar, _dir, _path) = get_test_calendar(today());
    calendar
        .save_settings(CycleSettings::new(ymd(2025, 1, 1), 28, 5))
        .unwrap();

    let grid = calendar.render_month(false);
    // 2025-01-10 is today and the first fertile day
    assert!(grid.contains(">10+"));
    assert!(grid.contains(" 15o"));
    assert!(grid.contains("  1*"));

    let two = calendar.render_months(2, false);
    assert!(two.contains("February 2025"));
    assert_eq!(calendar.cursor(), MonthCursor::new(2025, 1).unwrap());
}

// 地平線を0か月にすると、今日が基準日より後なので予測は空になる
#[test]
fn test_zero_horizon() {
    let (mut calendar, _dir, path) = get_test_calendar(today());
    calendar
        .save_settings(CycleSettings::new(ymd(2025, 1, 1), 28, 5))
        .unwrap();
    drop(calendar);

    let calendar = CycleCalendar::open(&path, today())
        .unwrap()
        .with_horizon_months(0);
    assert_eq!(calendar.horizon_days(), 0);
    assert!(calendar.index().is_empty());
}

// イベント一覧は指定範囲の日付だけを含む
#[test]
fn test_events_listing() {
    let (mut calendar, _dir, _path) = get_test_calendar(today());
    calendar
        .save_settings(CycleSettings::new(ymd(2025, 1, 1), 28, 5))
        .unwrap();

    assert_eq!(
        calendar.events(ymd(2025, 1, 4), ymd(2025, 1, 10)),
        "2025-01-04  menstruation\n2025-01-05  menstruation\n2025-01-10  fertile"
    );
}

// 1年を超える長さは保存前に拒否され、1年ちょうどは受け付ける
#[test]
fn test_oversized_lengths_are_rejected() {
    let (mut calendar, _dir, path) = get_test_calendar(today());

    let err = calendar
        .save_settings(CycleSettings::new(ymd(2025, 1, 1), 28, 1_000_000_000))
        .unwrap_err();
    assert!(err.to_string().contains("1000000000"));
    assert!(calendar
        .save_settings(CycleSettings::new(ymd(2025, 1, 1), MAX_LENGTH_DAYS + 1, 5))
        .is_err());
    assert!(calendar.settings().is_none());
    assert!(!path.exists());

    calendar
        .save_settings(CycleSettings::new(ymd(2025, 1, 1), MAX_LENGTH_DAYS, MAX_LENGTH_DAYS))
        .unwrap();
    assert_eq!(calendar.index().primary_on(ymd(2025, 1, 1)), Some(Label::Menstruation));
}

// 地平線の月数は上限で頭打ちになる
#[test]
fn test_horizon_is_capped() {
    let (calendar, _dir, _path) = get_test_calendar(today());
    let calendar = calendar.with_horizon_months(u32::MAX);
    assert_eq!(calendar.horizon_days(), cycle_calendar::cycle::MAX_HORIZON_DAYS);
}

// 予測のない範囲のイベント一覧は選択中の言語で表示される
#[test]
fn test_empty_events_listing_follows_language() {
    let (mut calendar, _dir, _path) = get_test_calendar(today());
    let (from, to) = (ymd(2025, 1, 20), ymd(2025, 1, 25));
    assert_eq!(calendar.events(from, to), "No predicted events");

    calendar.set_language(Locale::EsEs).unwrap();
    assert_eq!(calendar.events(from, to), "No hay eventos previstos");
}
