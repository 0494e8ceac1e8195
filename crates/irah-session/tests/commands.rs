use irah_core::models::inputs::ScaleInputs;
use irah_core::models::tier::RiskTier;
use irah_session::commands::{
    assign_bed, clear_ward, evaluate_patient, export_csv, export_report_text, remove_bed,
    ward_overview, RemoveOutcome,
};
use irah_session::error::SessionError;
use irah_session::state::SessionState;
use irah_ward::error::WardError;

fn today() -> jiff::civil::Date {
    jiff::civil::date(2026, 8, 20)
}

fn mrc_inputs(mrc: u8) -> ScaleInputs {
    ScaleInputs {
        mrc,
        ..ScaleInputs::default()
    }
}

#[tokio::test]
async fn assign_then_overview() {
    let state = SessionState::new();
    let record = assign_bed(&state, 5, "jas", today(), mrc_inputs(40))
        .await
        .unwrap();
    assert_eq!(record.initials, "JAS");
    assert_eq!(record.score.composite, 5.0);

    let overview = ward_overview(&state).await;
    assert_eq!(overview.patients.len(), 1);
    assert_eq!(overview.summary.occupancy(), "1/20");
    assert_eq!(overview.summary.mean, Some(5.0));
}

#[tokio::test]
async fn empty_initials_are_rejected_before_the_roster_changes() {
    let state = SessionState::new();
    let result = assign_bed(&state, 5, "   ", today(), ScaleInputs::default()).await;
    assert!(matches!(result, Err(SessionError::MissingInitials)));
    assert!(ward_overview(&state).await.patients.is_empty());
}

#[tokio::test]
async fn out_of_range_beds_are_rejected() {
    let state = SessionState::new();
    let result = assign_bed(&state, 21, "JAS", today(), ScaleInputs::default()).await;
    assert!(matches!(
        result,
        Err(SessionError::Ward(WardError::BedOutOfRange(21)))
    ));
}

#[tokio::test]
async fn reassigning_a_bed_replaces_the_occupant() {
    let state = SessionState::new();
    assign_bed(&state, 5, "JAS", today(), mrc_inputs(40))
        .await
        .unwrap();
    assign_bed(&state, 5, "MRT", today(), mrc_inputs(20))
        .await
        .unwrap();

    let overview = ward_overview(&state).await;
    assert_eq!(overview.patients.len(), 1);
    assert_eq!(overview.patients[0].initials, "MRT");
    assert_eq!(overview.patients[0].score.composite, 10.0);
}

#[tokio::test]
async fn remove_reports_whether_the_bed_was_occupied() {
    let state = SessionState::new();
    assign_bed(&state, 3, "JAS", today(), ScaleInputs::default())
        .await
        .unwrap();

    match remove_bed(&state, 3).await {
        RemoveOutcome::Removed(record) => assert_eq!(record.initials, "JAS"),
        RemoveOutcome::BedAlreadyEmpty => panic!("bed 3 was occupied"),
    }
    assert_eq!(remove_bed(&state, 3).await, RemoveOutcome::BedAlreadyEmpty);
    assert!(ward_overview(&state).await.patients.is_empty());
}

#[tokio::test]
async fn clear_reports_the_discard_count() {
    let state = SessionState::new();
    assign_bed(&state, 1, "AAA", today(), ScaleInputs::default())
        .await
        .unwrap();
    assign_bed(&state, 2, "BBB", today(), ScaleInputs::default())
        .await
        .unwrap();

    assert_eq!(clear_ward(&state).await, 2);
    assert_eq!(clear_ward(&state).await, 0);
}

#[tokio::test]
async fn concurrent_assigns_both_land() {
    let state = SessionState::new();
    let (a, b) = tokio::join!(
        assign_bed(&state, 1, "AAA", today(), mrc_inputs(40)),
        assign_bed(&state, 2, "BBB", today(), mrc_inputs(20)),
    );
    a.unwrap();
    b.unwrap();

    let overview = ward_overview(&state).await;
    assert_eq!(overview.patients.len(), 2);
}

#[tokio::test]
async fn exports_reflect_the_session_roster() {
    let state = SessionState::new();
    assign_bed(&state, 7, "JAS", today(), mrc_inputs(0))
        .await
        .unwrap();

    let csv = export_csv(&state).await;
    assert!(csv.starts_with("Leito,Iniciais,IRAH_Premier"));
    assert!(csv.contains("7,JAS,15.0,Alto,SIM"));

    let report = export_report_text(&state).await.unwrap();
    assert!(report.contains("**Ocupação**: 1/20"));
    assert!(report.contains("**Leito 7** — JAS"));
}

#[test]
fn evaluate_patient_is_roster_free() {
    let result = evaluate_patient(&mrc_inputs(0));
    assert!(result.trigger);
    assert_eq!(result.tier, RiskTier::High);
    assert_eq!(result.composite, 15.0);
}
