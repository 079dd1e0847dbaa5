// src/app/taches.rs
//
// Pont async -> UI
// ----------------
// - NATIF : runtime tokio (multi-thread), les requêtes tournent hors du thread UI
// - WEB   : wasm_bindgen_futures::spawn_local (pas de threads)
// - Retour : canal mpsc lu à chaque frame (`recevoir`), puis request_repaint()
//
// Aucune annulation : une requête partie va jusqu’au bout.

use std::future::Future;
use std::sync::mpsc::{channel, Receiver, Sender};

use eframe::egui;

use crate::api::ErreurApi;
use crate::session::SessionStore;

/// Résultat d’une tâche, rendu au thread UI.
#[derive(Debug)]
pub enum Evenement {
    Equations(Result<Vec<String>, ErreurApi>),
    /// `store` : copie de la session sur laquelle le login a été joué.
    Login {
        store: SessionStore,
        resultat: Result<(), ErreurApi>,
    },
}

pub struct Taches {
    tx: Sender<Evenement>,
    rx: Receiver<Evenement>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Runtime,
}

impl Taches {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("portail-reseau")
            .enable_all()
            .build()?;
        let (tx, rx) = channel();
        Ok(Self { tx, rx, runtime })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new() -> anyhow::Result<Self> {
        let (tx, rx) = channel();
        Ok(Self { tx, rx })
    }

    /// Lance `fut` ; son résultat arrivera dans `recevoir`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn lancer<F>(&self, ctx: &egui::Context, fut: F)
    where
        F: Future<Output = Evenement> + Send + 'static,
    {
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let ev = fut.await;
            if tx.send(ev).is_err() {
                log::debug!("Résultat ignoré : UI fermée");
            }
            ctx.request_repaint();
        });
    }

    #[cfg(target_arch = "wasm32")]
    pub fn lancer<F>(&self, ctx: &egui::Context, fut: F)
    where
        F: Future<Output = Evenement> + 'static,
    {
        let tx = self.tx.clone();
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let ev = fut.await;
            if tx.send(ev).is_err() {
                log::debug!("Résultat ignoré : UI fermée");
            }
            ctx.request_repaint();
        });
    }

    /// Tout ce qui est arrivé depuis la dernière frame (non bloquant).
    pub fn recevoir(&self) -> Vec<Evenement> {
        self.rx.try_iter().collect()
    }
}
