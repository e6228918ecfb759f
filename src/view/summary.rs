// src/view/summary.rs

/// A listed noun with the agreement data pt-PT needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Noun {
    pub singular: &'static str,
    pub plural: &'static str,
    pub feminine: bool,
}

pub const ACTIVITY: Noun = Noun {
    singular: "atividade",
    plural: "atividades",
    feminine: true,
};

pub const ASSOCIATION: Noun = Noun {
    singular: "associação",
    plural: "associações",
    feminine: true,
};

pub const DOCUMENT: Noun = Noun {
    singular: "documento",
    plural: "documentos",
    feminine: false,
};

impl Noun {
    pub fn for_count(self, count: usize) -> &'static str {
        if count == 1 {
            self.singular
        } else {
            self.plural
        }
    }

    /// "encontrada", "encontrados", ...
    pub fn found(self, count: usize) -> &'static str {
        match (self.feminine, count == 1) {
            (true, true) => "encontrada",
            (true, false) => "encontradas",
            (false, true) => "encontrado",
            (false, false) => "encontrados",
        }
    }

    /// "Nenhuma atividade" / "Nenhum documento".
    pub fn none(self) -> String {
        let article = if self.feminine { "Nenhuma" } else { "Nenhum" };
        format!("{article} {}", self.singular)
    }

    /// The "no results" title, e.g. "Nenhuma atividade encontrada".
    pub fn none_found(self) -> String {
        format!("{} {}", self.none(), self.found(1))
    }
}

/// Visible-count line shown above a listing.
pub fn count_summary(noun: Noun, count: usize, search: Option<&str>) -> String {
    match search {
        Some(query) => format!(
            "{count} {} {} para \"{query}\"",
            noun.for_count(count),
            noun.found(count)
        ),
        None => format!("Mostrando {count} {}", noun.for_count(count)),
    }
}
