//! Session utilisateur (jeton + profil).
//!
//! Objet explicite, possédé par l’état de l’app et passé à la vue :
//! pas de global. Sérialisable pour la persistance eframe.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::api::{Authentification, ErreurApi};
use crate::noyau::Identifiants;

/// Les quatre rôles servis par le portail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Dealer,
    Agent,
    Staff,
}

impl Role {
    /// Valeur envoyée dans l’en-tête de rôle.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Dealer => "dealer",
            Role::Agent => "agent",
            Role::Staff => "staff",
        }
    }

    pub fn libelle(self) -> &'static str {
        match self {
            Role::Admin => "Administrateur",
            Role::Dealer => "Dealer",
            Role::Agent => "Agent",
            Role::Staff => "Personnel",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "dealer" => Ok(Role::Dealer),
            "agent" => Ok(Role::Agent),
            "staff" => Ok(Role::Staff),
            autre => Err(format!("rôle inconnu: {autre:?}")),
        }
    }
}

/// Profil renvoyé par le login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profil {
    #[serde(deserialize_with = "id_texte_ou_nombre")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub balance: Option<f64>,
}

/// L’API renvoie l’id tantôt en nombre, tantôt en texte.
fn id_texte_ou_nombre<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Texte(String),
        Nombre(i64),
    }

    Ok(match Id::deserialize(d)? {
        Id::Texte(s) => s,
        Id::Nombre(n) => n.to_string(),
    })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub profil: Profil,
    pub ouverte_le: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionStore {
    courante: Option<Session>,
}

impl SessionStore {
    /// Envoie les identifiants ; en cas de succès, la session est conservée.
    /// Un refus du serveur remonte tel quel (`ErreurApi::Refus`, avec son motif).
    pub async fn login<A>(&mut self, auth: &A, id: &Identifiants) -> Result<(), ErreurApi>
    where
        A: Authentification + ?Sized,
    {
        match auth.login(id).await {
            Ok(session) => {
                self.ouvrir(session);
                Ok(())
            }
            Err(e) => {
                if let ErreurApi::Refus(msg) = &e {
                    log::info!("Login refusé: {msg}");
                }
                Err(e)
            }
        }
    }

    pub fn ouvrir(&mut self, session: Session) {
        log::info!(
            "Session ouverte: {} ({})",
            session.profil.name,
            session.profil.role
        );
        self.courante = Some(session);
    }

    pub fn logout(&mut self) {
        if let Some(s) = self.courante.take() {
            log::info!("Session fermée: {}", s.profil.name);
        }
    }

    pub fn est_connecte(&self) -> bool {
        self.courante.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.courante.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.courante.as_ref().map(|s| s.token.as_str())
    }

    pub fn profil(&self) -> Option<&Profil> {
        self.courante.as_ref().map(|s| &s.profil)
    }
}
