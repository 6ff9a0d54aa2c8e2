use calendar_app::PageShell;
use calendar_widget::{FixedClock, YearMonth};
use chrono::NaiveDate;
use egui_kittest::{Harness, kittest::Queryable as _};

fn shell() -> PageShell {
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    PageShell::new(Box::new(FixedClock(today)))
}

#[test]
fn mounts_the_calendar() {
    let mut harness = Harness::new_state(|ctx, shell: &mut PageShell| shell.show(ctx), shell());
    harness.run();

    assert!(harness.query_by_label("Jun").is_some());
    assert!(harness.query_by_label("2024").is_some());
    assert!(harness
        .query_by_label("Selected date: Sat Jun 15 2024")
        .is_some());
}

#[test]
fn picks_a_day_in_another_year() {
    let mut harness = Harness::new_state(|ctx, shell: &mut PageShell| shell.show(ctx), shell());
    harness.run();

    harness.get_by_label("2024").click();
    harness.run();
    harness.get_by_label("2030").click();
    harness.run();
    assert_eq!(
        harness.state().calendar().displayed(),
        YearMonth::new(2030, 5).unwrap()
    );

    harness.get_by_label("12").click();
    harness.run();
    assert_eq!(
        harness.state().calendar().selected(),
        NaiveDate::from_ymd_opt(2030, 6, 12)
    );
    assert!(harness
        .query_by_label("Selected date: Wed Jun 12 2030")
        .is_some());
}
