//! HTML rendering of the view models
//!
//! All interpolated text goes through `escape_html`. Markup is kept minimal;
//! the theme supplies the stylesheet.

use chrono::Datelike;

use super::detail::{Block, DetailView, Section};
use super::listing::ListingEntry;
use super::theme::Theme;

const SITE_NAME: &str = "AiMore Briefings";
const SITE_DESCRIPTION: &str = "Briefing inteligente, visual e premium, powered by AiMore.";

/// Renders pages for one theme
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    theme: Theme,
    year: i32,
}

impl Renderer {
    /// Creates a renderer stamping the current year in the footer
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            year: chrono::Local::now().year(),
        }
    }

    /// Fixes the footer year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Listing page: one card per entry, linking to `/<slug>`
    pub fn listing_page(&self, entries: &[ListingEntry]) -> String {
        let mut body = String::new();
        body.push_str("<h1 class=\"title\">🚀 Briefings AiMore</h1>\n");

        if entries.is_empty() {
            body.push_str("<p class=\"empty\">Nenhum briefing encontrado.</p>\n");
        } else {
            body.push_str("<div class=\"grid\">\n");
            for entry in entries {
                body.push_str(&format!(
                    "<a class=\"card\" href=\"{}\"><h2>{}</h2><p>{}</p></a>\n",
                    escape_html(&entry.href()),
                    escape_html(&entry.nome_projeto),
                    escape_html(&entry.cliente),
                ));
            }
            body.push_str("</div>\n");
        }

        self.layout(SITE_NAME, SITE_DESCRIPTION, &body)
    }

    /// Detail page: one `<section>` per present section of the view
    pub fn detail_page(&self, view: &DetailView) -> String {
        let mut body = String::new();

        body.push_str("<div class=\"page-header\">\n");
        body.push_str(&format!("<h1 class=\"title\">{}</h1>\n", escape_html(&view.heading)));
        if let Some(link) = &view.pdf_link {
            body.push_str(&format!(
                "<a class=\"download-btn\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" aria-label=\"Baixar PDF do briefing\">⬇️ Baixar PDF</a>\n",
                escape_html(link)
            ));
        }
        body.push_str("</div>\n");

        for section in &view.sections {
            render_section(&mut body, section);
        }

        self.layout(&view.title, &view.description, &body)
    }

    /// Page shown for an unknown slug
    pub fn not_found_page(&self) -> String {
        let body = "<div class=\"not-found\">\n\
<h1>404</h1>\n\
<h2>Página não encontrada</h2>\n\
<p>O briefing que você procura não existe ou foi removido.</p>\n\
<a class=\"download-btn\" href=\"/\">⬅️ Voltar para a Página Inicial</a>\n\
</div>\n";
        self.layout("Página não encontrada | AiMore Briefing", SITE_DESCRIPTION, body)
    }

    fn layout(&self, title: &str, description: &str, body: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
<html lang=\"pt-BR\" data-theme=\"{theme}\">\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{title}</title>\n\
<meta name=\"description\" content=\"{description}\">\n\
<style>{css}</style>\n\
</head>\n\
<body>\n\
<header class=\"site\"><strong>{site}</strong><a href=\"/\">Home</a></header>\n\
<main>\n{body}</main>\n\
<footer class=\"site\">© {year} AiMore — Todos os direitos reservados.</footer>\n\
</body>\n\
</html>\n",
            theme = self.theme.as_str(),
            title = escape_html(title),
            description = escape_html(description),
            css = self.theme.stylesheet(),
            site = SITE_NAME,
            body = body,
            year = self.year,
        )
    }
}

fn render_section(out: &mut String, section: &Section) {
    out.push_str(&format!(
        "<section class=\"section\">\n<h2 class=\"subtitle\">{}</h2>\n",
        escape_html(section.title)
    ));

    let is_table = matches!(section.blocks.as_slice(), [Block::Script { .. }]);
    if !is_table {
        out.push_str("<div class=\"grid\">\n");
    }
    for block in &section.blocks {
        render_block(out, block);
    }
    if !is_table {
        out.push_str("</div>\n");
    }

    out.push_str("</section>\n");
}

fn render_block(out: &mut String, block: &Block) {
    match block {
        Block::Text { label, value } => {
            out.push_str(&format!(
                "<div class=\"block\"><h3>{}</h3><p>{}</p></div>\n",
                escape_html(label),
                escape_html(value)
            ));
        }
        Block::List { label, items } => {
            out.push_str(&format!("<div class=\"block\"><h3>{}</h3><ul>", escape_html(label)));
            for item in items {
                out.push_str(&format!("<li>{}</li>", escape_html(item)));
            }
            out.push_str("</ul></div>\n");
        }
        Block::Beats { label, beats } => {
            out.push_str(&format!("<div class=\"block\"><h3>{}</h3><ul>", escape_html(label)));
            for beat in beats {
                out.push_str(&format!(
                    "<li><b>{}:</b> {}</li>",
                    escape_html(beat.label),
                    escape_html(&beat.value)
                ));
            }
            out.push_str("</ul></div>\n");
        }
        Block::Tags { label, tags } => {
            out.push_str(&format!("<div class=\"block\"><h3>{}</h3>", escape_html(label)));
            for tag in tags {
                out.push_str(&format!("<span class=\"tag\">#{}</span>", escape_html(tag)));
            }
            out.push_str("</div>\n");
        }
        Block::Script { rows } => {
            out.push_str(
                "<div class=\"table-container\"><table>\n\
<thead><tr><th>Tempo</th><th>Texto</th><th>Visual</th></tr></thead>\n<tbody>\n",
            );
            for row in rows {
                out.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape_html(&row.tempo),
                    escape_html(&row.texto),
                    escape_html(&row.visual)
                ));
            }
            out.push_str("</tbody>\n</table></div>\n");
        }
        Block::ArtStage { stage } => {
            out.push_str("<div class=\"block\">");
            for (label, value) in [
                ("Etapa", &stage.etapa),
                ("Composição", &stage.composicao),
                ("Ponto Focal", &stage.ponto_focal),
                ("Tipografia", &stage.tipografia),
            ] {
                out.push_str(&format!("<p><b>{}:</b> {}</p>", label, escape_html(value)));
            }
            out.push_str("<div><b>Paleta:</b> ");
            for colour in &stage.paleta {
                let title = escape_html(colour);
                if is_css_colour(colour) {
                    out.push_str(&format!(
                        "<span class=\"palette\" style=\"background: {}\" title=\"{}\"></span>",
                        title, title
                    ));
                } else {
                    out.push_str(&format!("<span class=\"palette\" title=\"{}\"></span>", title));
                }
            }
            out.push_str("</div></div>\n");
        }
        Block::Reference { reference } => {
            out.push_str(&format!(
                "<a class=\"block\" href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\">\
<p class=\"visual-ref-nome\">{nome}</p><p class=\"visual-ref-desc\">{descricao}</p>\
<span class=\"visual-ref-link\">{url}</span></a>\n",
                url = escape_html(&reference.url),
                nome = escape_html(&reference.nome),
                descricao = escape_html(&reference.descricao),
            ));
        }
    }
}

/// Whether a palette entry can go into a `background` declaration as-is.
///
/// Accepts names, hex codes and functional notation (`rgb(0, 0, 0)`);
/// anything that could end the declaration is refused.
fn is_css_colour(value: &str) -> bool {
    !value.trim().is_empty()
        && !value.to_ascii_lowercase().contains("url(")
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-'))
}

/// Escapes text for HTML element content and double-quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            c => output.push(c),
        }
    }
    output
}
