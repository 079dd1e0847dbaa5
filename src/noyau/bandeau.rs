//! Bandeau de messages transitoires (erreur réseau, refus du PIN, etc.).
//!
//! Un seul message à la fois, effacé automatiquement après `delai` secondes.
//! L’horloge est injectée (secondes en f64, horloge egui) : aucun appel système ici.

/// Délai par défaut avant effacement.
pub const DELAI_DEFAUT_S: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Info,
    Erreur,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub texte: String,
    pub genre: Genre,
    pub expire_a: f64,
}

#[derive(Clone, Debug)]
pub struct Bandeau {
    delai: f64,
    courant: Option<Message>,
}

impl Default for Bandeau {
    fn default() -> Self {
        Self::new(DELAI_DEFAUT_S)
    }
}

impl Bandeau {
    /// Délai borné à [0.5, 60] s (un délai nul rendrait le message invisible).
    pub fn new(delai: f64) -> Self {
        let delai = if delai.is_finite() {
            delai.clamp(0.5, 60.0)
        } else {
            DELAI_DEFAUT_S
        };
        Self {
            delai,
            courant: None,
        }
    }

    /// Remplace le message courant.
    pub fn afficher(&mut self, texte: impl Into<String>, genre: Genre, maintenant: f64) {
        self.courant = Some(Message {
            texte: texte.into(),
            genre,
            expire_a: maintenant + self.delai,
        });
    }

    pub fn erreur(&mut self, texte: impl Into<String>, maintenant: f64) {
        self.afficher(texte, Genre::Erreur, maintenant);
    }

    pub fn info(&mut self, texte: impl Into<String>, maintenant: f64) {
        self.afficher(texte, Genre::Info, maintenant);
    }

    /// Efface le message s’il est expiré.
    pub fn tick(&mut self, maintenant: f64) {
        if matches!(&self.courant, Some(m) if maintenant >= m.expire_a) {
            self.courant = None;
        }
    }

    pub fn message(&self) -> Option<&Message> {
        self.courant.as_ref()
    }

    /// Secondes restantes avant effacement (None si rien à afficher).
    pub fn restant(&self, maintenant: f64) -> Option<f64> {
        self.courant
            .as_ref()
            .map(|m| (m.expire_a - maintenant).max(0.0))
    }
}
