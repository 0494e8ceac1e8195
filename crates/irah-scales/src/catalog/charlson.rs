use std::collections::BTreeSet;

use irah_core::models::inputs::Comorbidity;

/// All checklist items, in the institution's form order.
pub const ALL: [Comorbidity; 19] = [
    Comorbidity::MyocardialInfarction,
    Comorbidity::CongestiveHeartFailure,
    Comorbidity::PeripheralVascularDisease,
    Comorbidity::CerebrovascularDisease,
    Comorbidity::Dementia,
    Comorbidity::ChronicPulmonaryDisease,
    Comorbidity::ConnectiveTissueDisease,
    Comorbidity::PepticUlcerDisease,
    Comorbidity::MildLiverDisease,
    Comorbidity::DiabetesUncomplicated,
    Comorbidity::DiabetesEndOrganDamage,
    Comorbidity::Hemiplegia,
    Comorbidity::ModerateSevereRenalDisease,
    Comorbidity::SolidTumorNonMetastatic,
    Comorbidity::Leukemia,
    Comorbidity::Lymphoma,
    Comorbidity::ModerateSevereLiverDisease,
    Comorbidity::MetastaticSolidTumor,
    Comorbidity::Aids,
];

/// Classic Charlson weight for one comorbidity (1, 2, 3 or 6).
pub fn weight(comorbidity: Comorbidity) -> u8 {
    use Comorbidity::*;
    match comorbidity {
        MyocardialInfarction | CongestiveHeartFailure | PeripheralVascularDisease
        | CerebrovascularDisease | Dementia | ChronicPulmonaryDisease
        | ConnectiveTissueDisease | PepticUlcerDisease | MildLiverDisease
        | DiabetesUncomplicated => 1,
        DiabetesEndOrganDamage | Hemiplegia | ModerateSevereRenalDisease
        | SolidTumorNonMetastatic | Leukemia | Lymphoma => 2,
        ModerateSevereLiverDisease => 3,
        MetastaticSolidTumor | Aids => 6,
    }
}

/// Checklist label, as printed on the institution's form.
pub fn label(comorbidity: Comorbidity) -> &'static str {
    use Comorbidity::*;
    match comorbidity {
        MyocardialInfarction => "Infarto do miocárdio",
        CongestiveHeartFailure => "Insuficiência cardíaca congestiva",
        PeripheralVascularDisease => "Doença vascular periférica",
        CerebrovascularDisease => "Doença cerebrovascular (AVC/AIT)",
        Dementia => "Demência",
        ChronicPulmonaryDisease => "DPOC / doença pulmonar crônica",
        ConnectiveTissueDisease => "Doença do tecido conjuntivo",
        PepticUlcerDisease => "Doença ulcerosa péptica",
        MildLiverDisease => "Doença hepática leve",
        DiabetesUncomplicated => "Diabetes sem complicações",
        DiabetesEndOrganDamage => "Diabetes com lesão de órgão-alvo",
        Hemiplegia => "Hemiplegia/paraplegia",
        ModerateSevereRenalDisease => "Doença renal moderada/grave",
        SolidTumorNonMetastatic => "Neoplasia (sólida) sem metástase",
        Leukemia => "Leucemia",
        Lymphoma => "Linfoma",
        ModerateSevereLiverDisease => "Doença hepática moderada/grave",
        MetastaticSolidTumor => "Neoplasia metastática",
        Aids => "AIDS/HIV (com doença)",
    }
}

/// Sum of weights over the selected comorbidities.
pub fn base_total(conditions: &BTreeSet<Comorbidity>) -> u8 {
    conditions.iter().map(|c| weight(*c)).sum()
}

/// Optional Charlson age adjustment: 50–59 +1, 60–69 +2, 70–79 +3,
/// ≥80 +4. Ages are clamped to 0–120 before banding.
pub fn age_points(age: u8) -> u8 {
    match age.min(120) {
        80.. => 4,
        70..=79 => 3,
        60..=69 => 2,
        50..=59 => 1,
        _ => 0,
    }
}
