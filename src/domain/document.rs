// src/domain/document.rs

use crate::domain::listing::Listing;
use crate::domain::text::fold_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Magazine,
    Official,
    Reportage,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Magazine,
        DocumentKind::Official,
        DocumentKind::Reportage,
    ];

    /// Value used by the `tipo` filter.
    pub fn slug(self) -> &'static str {
        match self {
            DocumentKind::Magazine => "revista",
            DocumentKind::Official => "oficial",
            DocumentKind::Reportage => "reportagem",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Magazine => "Revista",
            DocumentKind::Official => "Documento Oficial",
            DocumentKind::Reportage => "Reportagem",
        }
    }

    pub fn section_title(self) -> &'static str {
        match self {
            DocumentKind::Magazine => "Revista AssociaVal",
            DocumentKind::Official => "Documentos Oficiais",
            DocumentKind::Reportage => "Reportagens",
        }
    }
}

/// A publication shipped with the site (no backend endpoint exists for these).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: i64,
    pub kind: DocumentKind,
    pub title: &'static str,
    pub description: &'static str,
    pub meta: &'static str,
    pub year: i32,
    pub file: &'static str,
}

const CATALOG: [Document; 7] = [
    Document {
        id: 1,
        kind: DocumentKind::Magazine,
        title: "Revista AssociaVal nº 3",
        description: "Edição de inverno com a agenda cultural e desportiva do concelho.",
        meta: "Dezembro 2024 · 32 páginas",
        year: 2024,
        file: "revista-associaval-03.pdf",
    },
    Document {
        id: 2,
        kind: DocumentKind::Magazine,
        title: "Revista AssociaVal nº 2",
        description: "Especial verão: festas populares e associações de Sobrado e Campo.",
        meta: "Junho 2024 · 28 páginas",
        year: 2024,
        file: "revista-associaval-02.pdf",
    },
    Document {
        id: 3,
        kind: DocumentKind::Magazine,
        title: "Revista AssociaVal nº 1",
        description: "Número de estreia com o retrato do movimento associativo de Valongo.",
        meta: "Dezembro 2023 · 24 páginas",
        year: 2023,
        file: "revista-associaval-01.pdf",
    },
    Document {
        id: 4,
        kind: DocumentKind::Official,
        title: "Regulamento de Apoio ao Associativismo",
        description: "Normas municipais para candidaturas a apoios financeiros e logísticos.",
        meta: "PDF · 1,2 MB",
        year: 2024,
        file: "regulamento-apoio-associativismo.pdf",
    },
    Document {
        id: 5,
        kind: DocumentKind::Official,
        title: "Relatório Anual do Associativismo",
        description: "Balanço das atividades e apoios concedidos às associações do concelho.",
        meta: "PDF · 3,4 MB",
        year: 2023,
        file: "relatorio-anual-2023.pdf",
    },
    Document {
        id: 6,
        kind: DocumentKind::Reportage,
        title: "Teatro em Sobrado",
        description: "Reportagem sobre o grupo de teatro amador e a sua nova peça.",
        meta: "Vídeo · 12 min",
        year: 2024,
        file: "reportagem-teatro-sobrado.mp4",
    },
    Document {
        id: 7,
        kind: DocumentKind::Reportage,
        title: "Karaté em Ermesinde",
        description: "Os jovens atletas do clube de desporto que chegaram ao nacional.",
        meta: "Artigo · 5 min de leitura",
        year: 2023,
        file: "reportagem-karate-ermesinde.pdf",
    },
];

pub fn catalog() -> &'static [Document] {
    &CATALOG
}

/// Distinct years in the catalogue, newest first.
pub fn catalog_years() -> Vec<i32> {
    let mut years: Vec<i32> = CATALOG.iter().map(|d| d.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

impl Listing for Document {
    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.description
    }

    fn location(&self) -> &str {
        ""
    }

    fn year(&self) -> Option<i32> {
        Some(self.year)
    }

    fn category_label(&self) -> String {
        format!("{} {}", self.kind.label(), self.meta)
    }

    /// Exact match against the kind slug.
    fn matches_category(&self, value: &str) -> bool {
        fold_case(self.kind.slug()) == value
    }
}
