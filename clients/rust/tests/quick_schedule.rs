mod helpers;

use helpers::setup::spawn_backend;

use clinic_scheduler_sdk::{
    QuickCreateBatchError, QuickCreateError, QuickSchedulePlan, ScheduleOwner, ShiftTemplate,
    Weekday, ID,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, ResponseTemplate};

fn shift(start: &str, end: &str, note: &str) -> ShiftTemplate {
    ShiftTemplate {
        start: start.parse().unwrap(),
        end: end.parse().unwrap(),
        note: Some(note.to_string()),
    }
}

fn created_schedule_json(doctor_id: &ID, day_of_week: u8, start: &str, end: &str) -> serde_json::Value {
    json!({
        "id": ID::new().to_string(),
        "doctorId": doctor_id.to_string(),
        "dayOfWeek": day_of_week,
        "shiftStart": start,
        "shiftEnd": end,
        "note": "Morning shift",
    })
}

#[tokio::test]
async fn it_creates_the_full_cross_product() {
    let (server, sdk) = spawn_backend().await;
    let doctor_id = ID::new();

    let mut plan = QuickSchedulePlan::new(ScheduleOwner::Doctor(doctor_id.clone()));
    plan.toggle_day(Weekday::Mon);
    plan.toggle_day(Weekday::Wed);
    plan.add_shift(shift("08:00", "12:00", "Morning shift"));
    plan.add_shift(shift("13:00", "17:00", "Afternoon shift"));
    assert_eq!(plan.record_count(), 4);

    Mock::given(method("POST"))
        .and(path("/work-schedules"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(created_schedule_json(&doctor_id, 1, "08:00", "12:00")),
        )
        .expect(4)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/work-schedules/doctor/{}", doctor_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            created_schedule_json(&doctor_id, 1, "08:00", "12:00"),
            created_schedule_json(&doctor_id, 1, "13:00", "17:00"),
            created_schedule_json(&doctor_id, 3, "08:00", "12:00"),
            created_schedule_json(&doctor_id, 3, "13:00", "17:00"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let report = sdk
        .work_schedule
        .quick_create(&plan)
        .await
        .expect("Expected quick create to succeed");

    assert_eq!(report.created.len(), 4);
    assert_eq!(report.schedules.len(), 4);
}

#[tokio::test]
async fn an_empty_day_selection_sends_nothing() {
    let (server, sdk) = spawn_backend().await;

    let mut plan = QuickSchedulePlan::new(ScheduleOwner::Doctor(ID::new()));
    plan.add_shift(shift("08:00", "12:00", "Morning shift"));

    let err = sdk
        .work_schedule
        .quick_create(&plan)
        .await
        .expect_err("Expected validation to fail");
    match err {
        QuickCreateBatchError::Invalid(QuickCreateError::EmptyDays) => (),
        other => panic!("Expected EmptyDays, got {:?}", other),
    }

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn an_empty_shift_list_sends_nothing() {
    let (server, sdk) = spawn_backend().await;

    let mut plan = QuickSchedulePlan::new(ScheduleOwner::LabNurse(ID::new()));
    plan.toggle_day(Weekday::Tue);

    let err = sdk
        .work_schedule
        .quick_create(&plan)
        .await
        .expect_err("Expected validation to fail");
    match err {
        QuickCreateBatchError::Invalid(QuickCreateError::EmptyShifts) => (),
        other => panic!("Expected EmptyShifts, got {:?}", other),
    }

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn a_partial_failure_reports_the_itemized_breakdown() {
    let (server, sdk) = spawn_backend().await;
    let doctor_id = ID::new();

    let mut plan = QuickSchedulePlan::new(ScheduleOwner::Doctor(doctor_id.clone()));
    plan.toggle_day(Weekday::Mon);
    plan.add_shift(shift("08:00", "12:00", "Morning shift"));
    plan.add_shift(shift("13:00", "17:00", "Afternoon shift"));

    // The afternoon draft is refused, the morning one goes through
    Mock::given(method("POST"))
        .and(path("/work-schedules"))
        .and(body_partial_json(json!({ "shiftStart": "13:00" })))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/work-schedules"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(created_schedule_json(&doctor_id, 1, "08:00", "12:00")),
        )
        .mount(&server)
        .await;

    let err = sdk
        .work_schedule
        .quick_create(&plan)
        .await
        .expect_err("Expected a partial failure");

    match err {
        QuickCreateBatchError::Partial { created, failed } => {
            assert_eq!(created.len(), 1);
            assert_eq!(failed.len(), 1);
            assert_eq!(failed[0].draft.shift_start.to_string(), "13:00");
        }
        other => panic!("Expected Partial, got {:?}", other),
    }

    // The schedule list is not reloaded after a partial failure
    let reloads = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.method.to_string() == "GET")
        .count();
    assert_eq!(reloads, 0);
}
