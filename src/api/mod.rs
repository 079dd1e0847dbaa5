//! Client REST
//!
//! - client.rs  : ClientApi (reqwest) : liste d’équations + login
//! - modeles.rs : corps JSON (tolérant : liste brute ou enveloppe, alias de champs)
//! - erreur.rs  : ErreurApi (thiserror) + message court pour le bandeau

pub mod client;
pub mod erreur;
pub mod modeles;

use async_trait::async_trait;

use crate::noyau::Identifiants;
use crate::session::Session;

pub use client::ClientApi;
pub use erreur::ErreurApi;

/// Couture du login : ClientApi en vrai, un faux serveur en test.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Authentification {
    async fn login(&self, id: &Identifiants) -> Result<Session, ErreurApi>;
}
