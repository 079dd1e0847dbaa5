//! src/app/etat.rs
//!
//! État UI (sans rendu).
//!
//! Rôle : réunir la calculatrice (noyau), la liste d’équations en cours de
//! chargement, la session, le bandeau et l’écran courant ; appliquer les
//! résultats des tâches réseau.
//!
//! Contrats :
//! - Aucune logique de calcul ici (tout passe par noyau::Calculatrice).
//! - Les requêtes partent via `Taches`, leurs résultats reviennent par `appliquer`.
//! - Un seul login en vol (verrou tenu par la calculatrice).

use eframe::egui;

use super::taches::{Evenement, Taches};
use crate::api::ClientApi;
use crate::config::Config;
use crate::noyau::bandeau::Bandeau;
use crate::noyau::Calculatrice;
use crate::session::SessionStore;

/// Clé de persistance eframe de la session.
pub const CLE_SESSION: &str = "portail_session";

/// Garde-fou UI : longueur max du PIN saisi.
pub const PIN_MAX: usize = 12;

#[derive(Clone, Debug, PartialEq)]
pub enum Chargement {
    Inactif,
    EnCours,
    Pret(usize),
    Echec(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ecran {
    Calculatrice,
    /// Espace authentifié.
    Espace,
}

pub struct AppPortail {
    pub calc: Calculatrice,
    pub chargement: Chargement,
    pub session: SessionStore,
    pub bandeau: Bandeau,
    pub ecran: Ecran,

    // horloge egui (secondes) de la dernière frame
    pub maintenant: f64,

    client: ClientApi,
    taches: Taches,
    monte: bool,
}

impl AppPortail {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let bandeau = Bandeau::new(config.delai_message_s);
        let client = ClientApi::new(config)?;
        Ok(Self {
            calc: Calculatrice::default(),
            chargement: Chargement::Inactif,
            session: SessionStore::default(),
            bandeau,
            ecran: Ecran::Calculatrice,
            maintenant: 0.0,
            client,
            taches: Taches::new()?,
            monte: false,
        })
    }

    /// Session relue depuis le stockage eframe.
    pub fn restaurer_session(&mut self, store: Option<SessionStore>) {
        if let Some(store) = store {
            if store.est_connecte() {
                log::info!("Session restaurée");
                self.session = store;
                self.ecran = Ecran::Espace;
            }
        }
    }

    /* ------------------------ Cycle de frame ------------------------ */

    /// Début de frame : horloge, bandeau, résultats réseau, chargement initial.
    pub fn debut_frame(&mut self, ctx: &egui::Context, maintenant: f64) {
        self.maintenant = maintenant;
        self.bandeau.tick(maintenant);

        for ev in self.taches.recevoir() {
            self.appliquer(ev);
        }

        // une fois par montage de l’écran calculatrice
        if !self.monte && self.ecran == Ecran::Calculatrice {
            self.monte = true;
            self.charger_equations(ctx);
        }
    }

    /* ------------------------ Réseau ------------------------ */

    /// GET liste d’équations (ignoré si déjà en cours).
    pub fn charger_equations(&mut self, ctx: &egui::Context) {
        if self.chargement == Chargement::EnCours {
            return;
        }
        self.chargement = Chargement::EnCours;

        let client = self.client.clone();
        self.taches.lancer(ctx, async move {
            Evenement::Equations(client.equations().await)
        });
    }

    /// Envoie {équation, PIN} ; rien si la calculatrice refuse (PIN vide, envoi en cours…).
    pub fn soumettre_pin(&mut self, ctx: &egui::Context) {
        let Some(id) = self.calc.submit_pin() else {
            return;
        };
        log::info!("Soumission du PIN pour l’équation {}", id.calculate_str);

        let client = self.client.clone();
        let mut store = self.session.clone();
        self.taches.lancer(ctx, async move {
            let resultat = store.login(&client, &id).await;
            Evenement::Login { store, resultat }
        });
    }

    /// Résultat d’une tâche -> état.
    pub fn appliquer(&mut self, ev: Evenement) {
        match ev {
            Evenement::Equations(Ok(liste)) => {
                self.chargement = Chargement::Pret(liste.len());
                self.calc.set_allow_list(liste);
            }
            Evenement::Equations(Err(e)) => {
                // liste absente = liste vide : calculatrice ordinaire
                log::warn!("Chargement de la liste impossible: {e}");
                self.calc.set_allow_list(Vec::new());
                self.chargement = Chargement::Echec(e.message_utilisateur());
                self.bandeau.erreur(e.message_utilisateur(), self.maintenant);
            }
            Evenement::Login {
                store,
                resultat: Ok(()),
            } => {
                self.calc.fin_soumission(true);
                self.session = store;
                self.ecran = Ecran::Espace;
                self.monte = false;
                let nom = self
                    .session
                    .profil()
                    .map(|p| p.name.clone())
                    .unwrap_or_default();
                self.bandeau.info(format!("Bienvenue {nom}"), self.maintenant);
            }
            Evenement::Login {
                resultat: Err(e), ..
            } => {
                // refus (motif du serveur ou "PIN incorrect") ou panne réseau
                log::warn!("Login en échec: {e}");
                self.calc.fin_soumission(false);
                self.bandeau.erreur(e.message_utilisateur(), self.maintenant);
            }
        }
    }

    /* ------------------------ Actions ------------------------ */

    /// C : remise à zéro + rechargement manuel de la liste.
    pub fn clear_et_recharger(&mut self, ctx: &egui::Context) {
        self.calc.clear();
        self.charger_equations(ctx);
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.calc.clear();
        self.ecran = Ecran::Calculatrice;
        // remontage : la liste sera rechargée
        self.monte = false;
    }

    /// Chiffre : borné à PIN_MAX en mode PIN.
    pub fn chiffre(&mut self, d: char) {
        if self.calc.equation().is_some() && self.calc.pin().chars().count() >= PIN_MAX {
            return;
        }
        self.calc.input_digit(d);
    }
}
