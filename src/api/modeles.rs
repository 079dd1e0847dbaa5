// src/api/modeles.rs
//
// Corps JSON échangés avec le serveur.

use chrono::Utc;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use super::erreur::ErreurApi;
use crate::session::{Profil, Session};

/* ------------------------ Liste d’équations ------------------------ */

/// Le serveur renvoie soit `["11-89", ...]`, soit `{"data": ["11-89", ...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CorpsListe {
    Brut(Vec<Value>),
    Enveloppe { data: Vec<Value> },
}

/// Corps -> liste d’équations, dans l’ordre reçu.
/// Entrées non textuelles ignorées ; corps illisible => liste vide
/// (la calculatrice se comporte alors comme une calculatrice ordinaire).
pub fn decoder_liste(corps: &str) -> Vec<String> {
    let valeurs = match serde_json::from_str::<CorpsListe>(corps) {
        Ok(CorpsListe::Brut(v)) | Ok(CorpsListe::Enveloppe { data: v }) => v,
        Err(e) => {
            log::warn!("Liste d’équations illisible, traitée comme vide: {e}");
            return Vec::new();
        }
    };

    let total = valeurs.len();
    let liste: Vec<String> = valeurs
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect();

    if liste.len() != total {
        log::warn!(
            "Liste d’équations : {} entrée(s) non textuelle(s) ignorée(s)",
            total - liste.len()
        );
    }
    liste
}

/// Statut + corps de la réponse -> liste. Hors 2xx : `ErreurApi::Statut`
/// (l’app la traite alors comme une liste vide).
pub fn interpreter_liste(code: StatusCode, corps: &str) -> Result<Vec<String>, ErreurApi> {
    verifier_statut(code, corps)?;
    Ok(decoder_liste(corps))
}

/* ------------------------ Login ------------------------ */

#[derive(Debug, Deserialize)]
pub struct ReponseLogin {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default, alias = "access_token")]
    pub token: Option<String>,
    #[serde(default, alias = "profile")]
    pub user: Option<Profil>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ReponseLogin {
    /// `success: false`, jeton ou profil absent => refus.
    pub fn en_session(self) -> Result<Session, ErreurApi> {
        let refus = || {
            ErreurApi::Refus(
                // vide => "PIN incorrect" côté bandeau
                self.message.clone().unwrap_or_default(),
            )
        };

        if self.success == Some(false) {
            return Err(refus());
        }

        match (self.token.clone(), self.user.clone()) {
            (Some(token), Some(profil)) if !token.is_empty() => Ok(Session {
                token,
                profil,
                ouverte_le: Utc::now(),
            }),
            _ => Err(refus()),
        }
    }
}

/// Corps -> session (ou refus).
pub fn decoder_login(corps: &str) -> Result<Session, ErreurApi> {
    let r: ReponseLogin = serde_json::from_str(corps)?;
    r.en_session()
}

/// Statut + corps de la réponse -> session.
/// 401/403 : refus si le corps l’explique, sinon `Statut`.
pub fn interpreter_login(code: StatusCode, corps: &str) -> Result<Session, ErreurApi> {
    if code == StatusCode::UNAUTHORIZED || code == StatusCode::FORBIDDEN {
        return match decoder_login(corps) {
            Err(ErreurApi::Refus(msg)) => Err(ErreurApi::Refus(msg)),
            _ => Err(ErreurApi::Statut {
                code: code.as_u16(),
                corps: corps.to_string(),
            }),
        };
    }
    verifier_statut(code, corps)?;
    decoder_login(corps)
}

fn verifier_statut(code: StatusCode, corps: &str) -> Result<(), ErreurApi> {
    if code.is_success() {
        return Ok(());
    }
    log::warn!("HTTP {code}");
    Err(ErreurApi::Statut {
        code: code.as_u16(),
        corps: corps.to_string(),
    })
}
