// src/app.rs
//
// Portail Tirage — module App (racine)
// ------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs + taches.rs)
// - Ré-exporter AppPortail (pour main.rs: use crate::app::AppPortail;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, pas de champ texte) :
// - chiffres, '.', + - * / %, '=' ou Enter : comme le pavé
// - Backspace = DEL, Escape = C (avec rechargement de la liste)

pub mod etat;
pub mod taches;
pub mod vue;

// Ré-export pratique : `use crate::app::AppPortail;`
pub use etat::AppPortail;

use std::time::Duration;

use eframe::egui;

use etat::{Ecran, CLE_SESSION};
use vue::{touche_depuis_texte, Touche};

impl AppPortail {
    fn clavier(&mut self, ctx: &egui::Context) {
        if self.ecran != Ecran::Calculatrice {
            return;
        }

        let touches: Vec<Touche> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|ev| match ev {
                    egui::Event::Text(t) => {
                        Some(t.chars().filter_map(touche_depuis_texte).collect::<Vec<_>>())
                    }
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => match key {
                        egui::Key::Enter => Some(vec![Touche::Egal]),
                        egui::Key::Backspace => Some(vec![Touche::Del]),
                        egui::Key::Escape => Some(vec![Touche::Clear]),
                        _ => None,
                    },
                    _ => None,
                })
                .flatten()
                .collect()
        });

        for t in touches {
            self.appuyer(ctx, t);
        }
    }
}

impl eframe::App for AppPortail {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);
        self.debut_frame(ctx, maintenant);

        self.clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });

        // le bandeau doit s’effacer sans attendre une entrée utilisateur
        if let Some(restant) = self.bandeau.restant(maintenant) {
            ctx.request_repaint_after(Duration::from_secs_f64(restant.min(1.0)));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, CLE_SESSION, &self.session);
    }
}
