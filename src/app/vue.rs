// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran calculatrice : affichage + pavé 4 colonnes (gros boutons, tactile)
// - Mode PIN : l’affichage montre le PIN masqué, "=" devient "OK"
// - Espace : profil, rôle, solde, heure de connexion, déconnexion
// - Bandeau transitoire en haut (erreur réseau / PIN refusé)

use chrono::Local;
use eframe::egui;

use super::etat::{AppPortail, Chargement, Ecran};
use crate::noyau::bandeau::Genre;
use crate::noyau::format::{format_date_heure, format_duree_restante, format_montant};
use crate::noyau::nombre::format_nombre;
use crate::noyau::{Operateur, Phase};

/// Une touche du pavé (bouton ou clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Point,
    Op(Operateur),
    Egal,
    Del,
    Clear,
}

impl AppPortail {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Portail Tirage");
                ui.add_space(6.0);

                self.ui_bandeau(ui);

                match self.ecran {
                    Ecran::Calculatrice => self.ui_calculatrice(ui),
                    Ecran::Espace => self.ui_espace(ui),
                }
            });
    }

    /// Touche -> action (partagé boutons + clavier).
    pub fn appuyer(&mut self, ctx: &egui::Context, t: Touche) {
        match t {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Point => self.calc.input_point(),
            Touche::Op(op) => self.calc.input_operator(op),
            Touche::Egal => {
                if self.calc.phase() == Phase::PinEntry {
                    self.soumettre_pin(ctx);
                } else {
                    self.calc.evaluate();
                }
            }
            Touche::Del => self.calc.delete(),
            Touche::Clear => self.clear_et_recharger(ctx),
        }
    }

    fn ui_bandeau(&mut self, ui: &mut egui::Ui) {
        let Some(m) = self.bandeau.message() else {
            return;
        };

        let couleur = match m.genre {
            Genre::Erreur => ui.visuals().error_fg_color,
            Genre::Info => ui.visuals().hyperlink_color,
        };
        let restant = self.bandeau.restant(self.maintenant).unwrap_or(0.0);

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.colored_label(couleur, &m.texte);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(format_duree_restante(restant));
                });
            });
        });
        ui.add_space(6.0);
    }

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        // État de la liste (discret)
        let etat_liste = match &self.chargement {
            Chargement::Inactif => String::new(),
            Chargement::EnCours => "Chargement…".to_string(),
            Chargement::Pret(_) => String::new(),
            Chargement::Echec(msg) => format!("Hors ligne : {msg}"),
        };
        if !etat_liste.is_empty() {
            ui.weak(etat_liste);
        }

        // Affichage
        let (titre, contenu) = if self.calc.phase() == Phase::PinEntry {
            let masque = "•".repeat(self.calc.pin().chars().count());
            ("PIN :", if masque.is_empty() { "-".to_string() } else { masque })
        } else {
            let mut s = String::new();
            if let (Some(p), Some(op)) = (self.calc.premier(), self.calc.operateur()) {
                s.push_str(&format!("{} {}  ", format_nombre(p), op.symbole()));
            }
            s.push_str(self.calc.affichage());
            ("", s)
        };
        if !titre.is_empty() {
            ui.label(titre);
        }
        Self::champ_monospace(ui, "affichage_out", &contenu);

        ui.add_space(8.0);
        self.ui_pave(ui);

        if self.calc.envoi_en_cours() {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Vérification…");
            });
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let pin = self.calc.phase() == Phase::PinEntry;
        // en mode PIN : seuls chiffres, DEL, C et OK
        let calc_actif = !pin;
        let ok_actif = !pin || (!self.calc.pin().is_empty() && !self.calc.envoi_en_cours());

        egui::Grid::new("pave_portail")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "7", Touche::Chiffre('7'), true);
                self.bouton(ui, "8", Touche::Chiffre('8'), true);
                self.bouton(ui, "9", Touche::Chiffre('9'), true);
                self.bouton(ui, "÷", Touche::Op(Operateur::Divise), calc_actif);
                ui.end_row();

                self.bouton(ui, "4", Touche::Chiffre('4'), true);
                self.bouton(ui, "5", Touche::Chiffre('5'), true);
                self.bouton(ui, "6", Touche::Chiffre('6'), true);
                self.bouton(ui, "×", Touche::Op(Operateur::Fois), calc_actif);
                ui.end_row();

                self.bouton(ui, "1", Touche::Chiffre('1'), true);
                self.bouton(ui, "2", Touche::Chiffre('2'), true);
                self.bouton(ui, "3", Touche::Chiffre('3'), true);
                self.bouton(ui, "-", Touche::Op(Operateur::Moins), calc_actif);
                ui.end_row();

                self.bouton(ui, "0", Touche::Chiffre('0'), true);
                self.bouton(ui, ".", Touche::Point, calc_actif);
                self.bouton(ui, "%", Touche::Op(Operateur::Modulo), calc_actif);
                self.bouton(ui, "+", Touche::Op(Operateur::Plus), calc_actif);
                ui.end_row();

                self.bouton(ui, "C", Touche::Clear, true);
                self.bouton(ui, "DEL", Touche::Del, true);
                ui.label("");
                self.bouton(ui, if pin { "OK" } else { "=" }, Touche::Egal, ok_actif);
                ui.end_row();
            });
    }

    fn ui_espace(&mut self, ui: &mut egui::Ui) {
        let Some(session) = self.session.session().cloned() else {
            // session perdue (ne devrait pas arriver) : retour calculatrice
            self.logout();
            return;
        };

        egui::Grid::new("espace_profil")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("Utilisateur :");
                ui.strong(&session.profil.name);
                ui.end_row();

                ui.label("Rôle :");
                ui.label(session.profil.role.libelle());
                ui.end_row();

                ui.label("Solde :");
                ui.monospace(
                    session
                        .profil
                        .balance
                        .map(format_montant)
                        .unwrap_or_else(|| "-".to_string()),
                );
                ui.end_row();

                ui.label("Connecté le :");
                ui.label(format_date_heure(&session.ouverte_le.with_timezone(&Local)));
                ui.end_row();
            });

        ui.add_space(12.0);
        if ui
            .add_sized([140.0, 32.0], egui::Button::new("Se déconnecter"))
            .clicked()
        {
            self.logout();
        }
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // Affichage lecture seule “stable”, aligné à droite comme une calculatrice.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(contenu)
                                .monospace()
                                .size(28.0),
                        );
                    });
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, t: Touche, actif: bool) {
        let resp = ui.add_enabled(
            actif,
            egui::Button::new(egui::RichText::new(label).size(20.0)).min_size(egui::vec2(64.0, 44.0)),
        );
        if resp.clicked() {
            let ctx = ui.ctx().clone();
            self.appuyer(&ctx, t);
        }
    }
}

/// Touche clavier (texte tapé) -> touche du pavé.
pub fn touche_depuis_texte(c: char) -> Option<Touche> {
    match c {
        '0'..='9' => Some(Touche::Chiffre(c)),
        '.' | ',' => Some(Touche::Point),
        '=' => Some(Touche::Egal),
        _ => Operateur::depuis_symbole(c).map(Touche::Op),
    }
}
