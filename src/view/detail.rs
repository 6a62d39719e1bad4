//! Detail projection
//!
//! Every optional field is checked on its own. An absent field produces no
//! block, and a section left without blocks is dropped, so the page never
//! shows an empty header or an empty table.

use serde::Serialize;

use crate::briefing::{ArtDirectionStage, BriefingRecord, ScriptBeat, VisualReference};

pub const SECTION_IDENTIFICATION: &str = "Identificação";
pub const SECTION_NARRATIVE: &str = "Narrativa e Direcionamento";
pub const SECTION_SCRIPT: &str = "Roteiro";
pub const SECTION_CTA: &str = "CTA e Distribuição";
pub const SECTION_ART_DIRECTION: &str = "Direção de Arte para Vídeo";
pub const SECTION_REFERENCES: &str = "Referências Visuais";

/// A labelled narrative beat
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Beat {
    pub label: &'static str,
    pub value: String,
}

/// One displayable unit inside a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Text { label: &'static str, value: String },
    List { label: &'static str, items: Vec<String> },
    Beats { label: &'static str, beats: Vec<Beat> },
    Tags { label: &'static str, tags: Vec<String> },
    Script { rows: Vec<ScriptBeat> },
    ArtStage { stage: ArtDirectionStage },
    Reference { reference: VisualReference },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub blocks: Vec<Block>,
}

/// Full-field projection of one briefing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub slug: String,
    pub heading: String,
    /// `<title>` of the page
    pub title: String,
    /// Meta description of the page
    pub description: String,
    pub pdf_link: Option<String>,
    pub sections: Vec<Section>,
}

impl DetailView {
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn has_section(&self, title: &str) -> bool {
        self.section(title).is_some()
    }
}

/// Projects a validated record onto the detail view.
pub fn project_detail(record: &BriefingRecord) -> DetailView {
    let mut sections = Vec::new();

    let mut identification = vec![Block::Text {
        label: "Cliente",
        value: record.cliente.clone(),
    }];
    push_text(&mut identification, "Segmento", &record.segmento);
    push_text(&mut identification, "Tipo de Peça", &record.tipo_de_peca);
    push_text(&mut identification, "Formato", &record.formato_da_peca);
    push_section(&mut sections, SECTION_IDENTIFICATION, identification);

    let mut narrative = Vec::new();
    push_text(&mut narrative, "Objetivo", &record.objetivo);
    push_text(&mut narrative, "Mensagem Principal", &record.mensagem_principal);
    push_text(&mut narrative, "Tom de Voz", &record.tom_de_voz);
    push_text(&mut narrative, "Insight do Público", &record.insight_publico);
    push_text(&mut narrative, "Diferenciais", &record.diferenciais);
    if let Some(items) = non_empty_list(&record.itens_a_evitar) {
        narrative.push(Block::List {
            label: "Itens a Evitar",
            items: items.to_vec(),
        });
    }
    push_text(&mut narrative, "Estilo Narrativo", &record.estilo_narrativo);
    if let Some(structure) = &record.estrutura_recomendada {
        let beats: Vec<Beat> = [
            ("Hook", &structure.hook),
            ("Contexto", &structure.contexto),
            ("Desenvolvimento", &structure.desenvolvimento),
            ("Quebra de Expectativa", &structure.quebra_de_expectativa),
            ("Fechamento", &structure.fechamento),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            non_empty(value).map(|value| Beat {
                label,
                value: value.to_string(),
            })
        })
        .collect();

        if !beats.is_empty() {
            narrative.push(Block::Beats {
                label: "Estrutura Recomendada",
                beats,
            });
        }
    }
    push_section(&mut sections, SECTION_NARRATIVE, narrative);

    if let Some(rows) = non_empty_list(&record.roteiro) {
        push_section(
            &mut sections,
            SECTION_SCRIPT,
            vec![Block::Script { rows: rows.to_vec() }],
        );
    }

    let mut cta = Vec::new();
    push_text(&mut cta, "Call to Action", &record.cta);
    push_text(&mut cta, "Justificativa", &record.justificativa);
    if let Some(tags) = non_empty_list(&record.hashtags) {
        cta.push(Block::Tags {
            label: "Hashtags",
            tags: tags.to_vec(),
        });
    }
    push_section(&mut sections, SECTION_CTA, cta);

    if let Some(stages) = non_empty_list(&record.direcao_arte_video) {
        let blocks = stages
            .iter()
            .map(|stage| Block::ArtStage { stage: stage.clone() })
            .collect();
        push_section(&mut sections, SECTION_ART_DIRECTION, blocks);
    }

    if let Some(references) = non_empty_list(&record.referencias_visuais) {
        let blocks = references
            .iter()
            .map(|reference| Block::Reference {
                reference: reference.clone(),
            })
            .collect();
        push_section(&mut sections, SECTION_REFERENCES, blocks);
    }

    DetailView {
        slug: record.slug.clone(),
        heading: record.nome_projeto.clone(),
        title: format!("{} | AiMore Briefing", record.nome_projeto),
        description: format!(
            "Briefing do projeto {} para {}",
            record.nome_projeto, record.cliente
        ),
        pdf_link: non_empty(&record.link_pdf).map(str::to_string),
        sections,
    }
}

/// An empty string displays nothing, same as an absent one.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn non_empty_list<T>(value: &Option<Vec<T>>) -> Option<&[T]> {
    value.as_deref().filter(|items| !items.is_empty())
}

fn push_text(blocks: &mut Vec<Block>, label: &'static str, value: &Option<String>) {
    if let Some(value) = non_empty(value) {
        blocks.push(Block::Text {
            label,
            value: value.to_string(),
        });
    }
}

fn push_section(sections: &mut Vec<Section>, title: &'static str, blocks: Vec<Block>) {
    if !blocks.is_empty() {
        sections.push(Section { title, blocks });
    }
}
