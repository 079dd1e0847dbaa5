//! Configuration (URL du serveur, rôle, délais).
//!
//! Ordre : valeurs par défaut <- fichier YAML (optionnel) <- variables d’environnement.
//!
//! ```yaml
//! api_base_url: "https://api.exemple.com/v1"
//! role: dealer
//! delai_message_s: 4
//! ```

use serde::{Deserialize, Serialize};

use crate::session::Role;

/// Fichier lu si PORTAIL_CONFIG n’est pas défini.
pub const FICHIER_DEFAUT: &str = "portail.yaml";

pub const ENV_FICHIER: &str = "PORTAIL_CONFIG";
pub const ENV_API_URL: &str = "PORTAIL_API_URL";
pub const ENV_ROLE: &str = "PORTAIL_ROLE";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub chemin_equations: String,
    pub chemin_login: String,
    pub role: Role,
    pub entete_role: String,
    pub timeout_s: u64,
    pub delai_message_s: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            chemin_equations: "/calculate-list".to_string(),
            chemin_login: "/login".to_string(),
            role: Role::Admin,
            entete_role: "X-Role".to_string(),
            timeout_s: 10,
            delai_message_s: 3.0,
        }
    }
}

impl Config {
    /// YAML -> Config (champs absents = défauts).
    pub fn depuis_yaml(texte: &str) -> anyhow::Result<Self> {
        let cfg: Config = serde_yaml::from_str(texte)?;
        Ok(cfg)
    }

    /// Surcharges par variables d’environnement (lookup injecté pour les tests).
    pub fn appliquer_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<()> {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_base_url = url;
        }
        if let Some(role) = lookup(ENV_ROLE) {
            self.role = role
                .parse()
                .map_err(|e| anyhow::anyhow!("{ENV_ROLE}: {e}"))?;
        }
        Ok(())
    }

    /// URL complète d’un chemin ("/login") sans double "/".
    pub fn url(&self, chemin: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            chemin.trim_start_matches('/')
        )
    }

    /// Chargement natif : fichier (si présent) + environnement.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger() -> anyhow::Result<Self> {
        use anyhow::Context;

        let chemin = std::env::var(ENV_FICHIER).unwrap_or_else(|_| FICHIER_DEFAUT.to_string());
        let mut cfg = match std::fs::read_to_string(&chemin) {
            Ok(texte) => {
                let cfg = Self::depuis_yaml(&texte)
                    .with_context(|| format!("config invalide: {chemin}"))?;
                log::info!("Configuration chargée depuis {chemin}");
                cfg
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Pas de fichier {chemin}, configuration par défaut");
                Self::default()
            }
            Err(e) => return Err(e).with_context(|| format!("lecture impossible: {chemin}")),
        };

        cfg.appliquer_env(|k| std::env::var(k).ok())?;
        Ok(cfg)
    }

    /// En wasm : pas de fichier ni d’environnement.
    #[cfg(target_arch = "wasm32")]
    pub fn charger() -> anyhow::Result<Self> {
        Ok(Self::default())
    }
}
