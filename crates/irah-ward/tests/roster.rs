use irah_core::models::inputs::ScaleInputs;
use irah_core::models::patient::PatientRecord;
use irah_scales::evaluate::evaluate;
use irah_ward::error::WardError;
use irah_ward::roster::Roster;

fn record(bed: u8, initials: &str) -> PatientRecord {
    let inputs = ScaleInputs::default();
    let score = evaluate(&inputs);
    PatientRecord {
        bed,
        initials: initials.to_string(),
        assessed_on: jiff::civil::date(2026, 8, 20),
        inputs,
        score,
    }
}

#[test]
fn upsert_replaces_the_previous_occupant() {
    let mut roster = Roster::new();
    assert!(roster.upsert(record(5, "JAS")).unwrap().is_none());

    let replaced = roster.upsert(record(5, "MRT")).unwrap();
    assert_eq!(replaced.unwrap().initials, "JAS");

    assert_eq!(roster.len(), 1);
    assert_eq!(roster.get(5).unwrap().initials, "MRT");
}

#[test]
fn upsert_rejects_beds_outside_the_ward() {
    let mut roster = Roster::new();
    assert!(matches!(
        roster.upsert(record(0, "AAA")),
        Err(WardError::BedOutOfRange(0))
    ));
    assert!(matches!(
        roster.upsert(record(21, "BBB")),
        Err(WardError::BedOutOfRange(21))
    ));
    assert!(roster.is_empty());

    // 1 and 20 are both valid.
    roster.upsert(record(1, "CCC")).unwrap();
    roster.upsert(record(20, "DDD")).unwrap();
    assert_eq!(roster.len(), 2);
}

#[test]
fn remove_on_an_empty_bed_is_a_no_op() {
    let mut roster = Roster::new();
    roster.upsert(record(3, "JAS")).unwrap();

    assert!(roster.remove(7).is_none());
    assert_eq!(roster.len(), 1);

    let removed = roster.remove(3).unwrap();
    assert_eq!(removed.initials, "JAS");
    assert!(roster.is_empty());
}

#[test]
fn clear_empties_the_roster_unconditionally() {
    let mut roster = Roster::new();
    roster.upsert(record(2, "AAA")).unwrap();
    roster.upsert(record(9, "BBB")).unwrap();

    assert_eq!(roster.clear(), 2);
    assert!(roster.is_empty());
    assert_eq!(roster.clear(), 0);
}

#[test]
fn list_is_ordered_by_ascending_bed() {
    let mut roster = Roster::new();
    roster.upsert(record(7, "AAA")).unwrap();
    roster.upsert(record(2, "BBB")).unwrap();
    roster.upsert(record(20, "CCC")).unwrap();

    let beds: Vec<u8> = roster.list().map(|r| r.bed).collect();
    assert_eq!(beds, vec![2, 7, 20]);
}
