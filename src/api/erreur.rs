// src/api/erreur.rs

/// Erreurs du client REST.
#[derive(Debug, thiserror::Error)]
pub enum ErreurApi {
    #[error("réseau indisponible: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("réponse HTTP {code}: {corps}")]
    Statut { code: u16, corps: String },

    #[error("{0}")]
    Refus(String),

    #[error("réponse illisible: {0}")]
    Decodage(#[from] serde_json::Error),
}

impl ErreurApi {
    /// Texte court pour le bandeau.
    pub fn message_utilisateur(&self) -> String {
        match self {
            ErreurApi::Transport(_) => "Réseau indisponible, réessayez".to_string(),
            ErreurApi::Statut { code, .. } if *code == 401 || *code == 403 => {
                "PIN incorrect".to_string()
            }
            ErreurApi::Statut { code, .. } => format!("Erreur serveur ({code})"),
            ErreurApi::Refus(msg) if msg.trim().is_empty() => "PIN incorrect".to_string(),
            ErreurApi::Refus(msg) => msg.clone(),
            ErreurApi::Decodage(_) => "Réponse du serveur illisible".to_string(),
        }
    }
}
