//! Briefing document types
//!
//! A briefing is one JSON object per file. Identity fields are required;
//! everything else is optional and decoded independently, so a malformed
//! optional field never rejects the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Five narrative beats of the recommended structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendedStructure {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contexto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desenvolvimento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quebra_de_expectativa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fechamento: Option<String>,
}

/// One row of the script (`roteiro`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptBeat {
    #[serde(default)]
    pub tempo: String,
    #[serde(default)]
    pub visual: String,
    #[serde(default)]
    pub texto: String,
}

/// One stage of the video art direction (`direcao_arte_video`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtDirectionStage {
    #[serde(default)]
    pub etapa: String,
    #[serde(default)]
    pub composicao: String,
    #[serde(default)]
    pub ponto_focal: String,
    #[serde(default)]
    pub tipografia: String,
    /// Raw colour strings, passed through to the swatches untouched
    #[serde(default)]
    pub paleta: Vec<String>,
}

/// A visual reference link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualReference {
    #[serde(default)]
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub url: String,
}

/// A validated briefing.
///
/// `slug` is unique across a loaded collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingRecord {
    pub nome_projeto: String,
    pub cliente: String,
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segmento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_de_peca: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formato_da_peca: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objetivo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensagem_principal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tom_de_voz: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight_publico: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diferenciais: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub itens_a_evitar: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estilo_narrativo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estrutura_recomendada: Option<RecommendedStructure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roteiro: Option<Vec<ScriptBeat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justificativa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direcao_arte_video: Option<Vec<ArtDirectionStage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referencias_visuais: Option<Vec<VisualReference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_pdf: Option<String>,
}

impl BriefingRecord {
    /// Creates a record with only the identity fields set
    pub fn new(
        nome_projeto: impl Into<String>,
        cliente: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            nome_projeto: nome_projeto.into(),
            cliente: cliente.into(),
            slug: slug.into(),
            segmento: None,
            tipo_de_peca: None,
            formato_da_peca: None,
            objetivo: None,
            mensagem_principal: None,
            tom_de_voz: None,
            insight_publico: None,
            diferenciais: None,
            itens_a_evitar: None,
            estilo_narrativo: None,
            estrutura_recomendada: None,
            roteiro: None,
            cta: None,
            justificativa: None,
            hashtags: None,
            direcao_arte_video: None,
            referencias_visuais: None,
            link_pdf: None,
        }
    }

    /// Builds a record from already-checked identity values and the raw
    /// document.
    ///
    /// Returns the record and the names of optional fields that were present
    /// with an unusable shape and therefore dropped.
    pub fn from_document(
        nome_projeto: String,
        cliente: String,
        slug: String,
        doc: &Map<String, Value>,
    ) -> (Self, Vec<&'static str>) {
        let mut dropped = Vec::new();
        let d = &mut dropped;

        let record = Self {
            nome_projeto,
            cliente,
            slug,
            segmento: optional(doc, "segmento", d),
            tipo_de_peca: optional(doc, "tipo_de_peca", d),
            formato_da_peca: optional(doc, "formato_da_peca", d),
            objetivo: optional(doc, "objetivo", d),
            mensagem_principal: optional(doc, "mensagem_principal", d),
            tom_de_voz: optional(doc, "tom_de_voz", d),
            insight_publico: optional(doc, "insight_publico", d),
            diferenciais: optional(doc, "diferenciais", d),
            itens_a_evitar: optional(doc, "itens_a_evitar", d),
            estilo_narrativo: optional(doc, "estilo_narrativo", d),
            estrutura_recomendada: optional(doc, "estrutura_recomendada", d),
            roteiro: optional(doc, "roteiro", d),
            cta: optional(doc, "cta", d),
            justificativa: optional(doc, "justificativa", d),
            hashtags: optional(doc, "hashtags", d),
            direcao_arte_video: optional(doc, "direcao_arte_video", d),
            referencias_visuais: optional(doc, "referencias_visuais", d),
            link_pdf: optional(doc, "link_pdf", d),
        };

        (record, dropped)
    }
}

/// Decodes one optional field. Absent and `null` are both "not present".
fn optional<T: DeserializeOwned>(
    doc: &Map<String, Value>,
    key: &'static str,
    dropped: &mut Vec<&'static str>,
) -> Option<T> {
    match doc.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => match T::deserialize(value) {
            Ok(decoded) => Some(decoded),
            Err(_) => {
                dropped.push(key);
                None
            }
        },
    }
}

/// Entry of the precomputed `index.json` listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub slug: String,
    pub title: String,
}

impl From<&BriefingRecord> for IndexEntry {
    fn from(record: &BriefingRecord) -> Self {
        Self {
            slug: record.slug.clone(),
            title: record.nome_projeto.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_optional_fields_pass_through_verbatim() {
        let raw = doc(json!({
            "segmento": "Cafeteria",
            "hashtags": ["cafe", "fe"],
            "estrutura_recomendada": { "hook": "Abre forte", "fechamento": "Fecha" },
            "roteiro": [{ "tempo": "0-3s", "visual": "Xícara", "texto": "Bom dia" }]
        }));

        let (record, dropped) =
            BriefingRecord::from_document("Café".into(), "Loja".into(), "cafe".into(), &raw);

        assert!(dropped.is_empty());
        assert_eq!(record.segmento.as_deref(), Some("Cafeteria"));
        assert_eq!(record.hashtags, Some(vec!["cafe".to_string(), "fe".to_string()]));
        let structure = record.estrutura_recomendada.unwrap();
        assert_eq!(structure.hook.as_deref(), Some("Abre forte"));
        assert_eq!(structure.contexto, None);
        assert_eq!(record.roteiro.unwrap()[0].visual, "Xícara");
    }

    #[test]
    fn test_wrong_shape_is_dropped_and_reported() {
        let raw = doc(json!({
            "roteiro": "not a list",
            "hashtags": [1, 2],
            "objetivo": "Vender"
        }));

        let (record, dropped) =
            BriefingRecord::from_document("A".into(), "C".into(), "a".into(), &raw);

        assert_eq!(record.roteiro, None);
        assert_eq!(record.hashtags, None);
        assert_eq!(record.objetivo.as_deref(), Some("Vender"));
        assert_eq!(dropped, vec!["roteiro", "hashtags"]);
    }

    #[test]
    fn test_null_is_absent_not_dropped() {
        let raw = doc(json!({ "cta": null }));
        let (record, dropped) =
            BriefingRecord::from_document("A".into(), "C".into(), "a".into(), &raw);
        assert_eq!(record.cta, None);
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_missing_item_fields_default_to_empty() {
        let raw = doc(json!({
            "direcao_arte_video": [{ "etapa": "Abertura" }]
        }));
        let (record, _) = BriefingRecord::from_document("A".into(), "C".into(), "a".into(), &raw);
        let stage = &record.direcao_arte_video.unwrap()[0];
        assert_eq!(stage.etapa, "Abertura");
        assert_eq!(stage.composicao, "");
        assert!(stage.paleta.is_empty());
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let record = BriefingRecord::new("A", "C", "a");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({ "nome_projeto": "A", "cliente": "C", "slug": "a" }));
    }
}
