// src/api/client.rs

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};

use super::erreur::ErreurApi;
use super::modeles::{interpreter_liste, interpreter_login};
use super::Authentification;
use crate::config::Config;
use crate::noyau::Identifiants;
use crate::session::Session;

/// Client REST du portail : un `reqwest::Client` + la config (URL, rôle, timeout).
#[derive(Clone, Debug)]
pub struct ClientApi {
    http: Client,
    config: Config,
}

impl ClientApi {
    pub fn new(config: Config) -> Result<Self, ErreurApi> {
        let builder = Client::builder();

        // pas de timeout côté wasm (fetch du navigateur)
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.timeout_s.max(1)));

        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    /// GET liste d’équations, avec l’en-tête de rôle.
    pub fn requete_equations(&self) -> RequestBuilder {
        self.http
            .get(self.config.url(&self.config.chemin_equations))
            .header(self.config.entete_role.as_str(), self.config.role.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// POST login {calculate_str, secret_pin}.
    pub fn requete_login(&self, id: &Identifiants) -> RequestBuilder {
        self.http
            .post(self.config.url(&self.config.chemin_login))
            .header(self.config.entete_role.as_str(), self.config.role.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(id)
    }

    /// Liste d’équations ; un corps illisible donne une liste vide.
    pub async fn equations(&self) -> Result<Vec<String>, ErreurApi> {
        log::debug!("GET liste d’équations ({})", self.config.role);
        let resp = self.requete_equations().send().await?;
        let code = resp.status();
        let corps = resp.text().await?;
        let liste = interpreter_liste(code, &corps)?;
        log::info!("{} équation(s) reçue(s)", liste.len());
        Ok(liste)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Authentification for ClientApi {
    async fn login(&self, id: &Identifiants) -> Result<Session, ErreurApi> {
        // jamais le PIN dans les logs
        log::debug!("POST login (équation {})", id.calculate_str);
        let resp = self.requete_login(id).send().await?;

        let code = resp.status();
        let corps = resp.text().await?;
        interpreter_login(code, &corps)
    }
}
