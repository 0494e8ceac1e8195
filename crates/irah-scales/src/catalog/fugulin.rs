use serde::Serialize;
use ts_rs::TS;

use irah_core::models::inputs::FugulinModel;

use crate::error::ScaleError;

/// One Fugulin care domain with its four ordinal level descriptions.
/// Descriptions keep the source institution's wording (Portuguese);
/// they are display data, not part of the numeric model.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct FugulinDomain {
    pub id: String,
    pub name: String,
    /// Description per level; index 0 corresponds to level 1.
    pub levels: Vec<String>,
}

/// The domains of the given model, in catalog order. The reduced model
/// is a prefix of the full one.
pub fn domains(model: FugulinModel) -> &'static [FugulinDomain] {
    static DOMAINS: std::sync::LazyLock<Vec<FugulinDomain>> = std::sync::LazyLock::new(|| {
        let items: [(&str, &str, [&str; 4]); 12] = [
            (
                "mental_state",
                "Estado mental",
                [
                    "Lúcido, orientado",
                    "Desorientado ocasionalmente",
                    "Desorientado frequentemente",
                    "Inconsciente / sedado",
                ],
            ),
            (
                "oxygenation",
                "Oxigenação",
                [
                    "Respiração espontânea em ar ambiente",
                    "Oxigênio por cateter nasal",
                    "Oxigênio por máscara",
                    "VNI ou ventilação invasiva",
                ],
            ),
            (
                "vital_signs",
                "Sinais vitais",
                [
                    "Controle de rotina (≥8/8h)",
                    "Controle a cada 6 horas",
                    "Controle a cada 4 horas",
                    "Monitorização contínua",
                ],
            ),
            (
                "mobility",
                "Motilidade",
                [
                    "Move-se espontaneamente",
                    "Dificuldade para movimentos",
                    "Movimentos limitados",
                    "Imóvel",
                ],
            ),
            (
                "ambulation",
                "Deambulação",
                [
                    "Deambula sozinho",
                    "Deambula com auxílio",
                    "Não deambula, senta com ajuda",
                    "Restrito ao leito",
                ],
            ),
            (
                "feeding",
                "Alimentação",
                [
                    "Alimenta-se sozinho",
                    "Auxílio parcial",
                    "Auxílio total",
                    "Nutrição enteral/parenteral",
                ],
            ),
            (
                "body_care",
                "Cuidado corporal",
                [
                    "Autossuficiente",
                    "Auxílio parcial",
                    "Auxílio total",
                    "Dependência completa",
                ],
            ),
            (
                "elimination",
                "Eliminação",
                [
                    "Controle esfincteriano",
                    "Uso eventual de fralda",
                    "Uso contínuo de fralda",
                    "SVD / ostomias",
                ],
            ),
            (
                "therapeutics",
                "Terapêutica",
                [
                    "Medicação oral simples",
                    "Medicação EV intermitente",
                    "Múltiplas medicações EV",
                    "Cuidados complexos (ex.: drogas vasoativas)",
                ],
            ),
            (
                "skin_mucosa_integrity",
                "Integridade cutâneo-mucosa",
                [
                    "Íntegra",
                    "Risco/alteração leve (ex.: hiperemia, pele frágil)",
                    "Lesão superficial / UPP estágio 1–2 / dermatite importante",
                    "Lesão extensa / UPP estágio 3–4 / ferida complexa",
                ],
            ),
            (
                "dressing",
                "Curativo",
                [
                    "Sem curativo",
                    "Curativo simples (baixa complexidade)",
                    "Curativo moderado (ex.: múltiplas lesões / técnica específica)",
                    "Curativo complexo (ex.: grande área / terapia avançada)",
                ],
            ),
            (
                "dressing_time",
                "Tempo de curativo",
                [
                    "< 5 min / não se aplica",
                    "5–15 min",
                    "16–30 min",
                    "> 30 min",
                ],
            ),
        ];

        items
            .iter()
            .map(|(id, name, levels)| FugulinDomain {
                id: id.to_string(),
                name: name.to_string(),
                levels: levels.iter().map(|l| l.to_string()).collect(),
            })
            .collect()
    });

    &DOMAINS[..model.domain_count()]
}

/// Look up the description for one domain level.
pub fn describe(model: FugulinModel, domain_id: &str, level: u8) -> Result<&'static str, ScaleError> {
    if !(1..=4).contains(&level) {
        return Err(ScaleError::InvalidLevel(level));
    }
    let domain = domains(model)
        .iter()
        .find(|d| d.id == domain_id)
        .ok_or_else(|| ScaleError::UnknownDomain(domain_id.to_string()))?;
    Ok(domain.levels[usize::from(level) - 1].as_str())
}
