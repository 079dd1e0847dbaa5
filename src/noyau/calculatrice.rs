//! Calculatrice à porte PIN.
//!
//! Pavé classique (chiffres, + - * / %, =, DEL, C). Sur "=", la forme canonique
//! `{premier}{op}{second}` (sans espaces, ex: "11-89") est comparée à la liste
//! d’équations fournie par le serveur :
//! - trouvée     => mode PIN (affichage vidé, tampon PIN prêt)
//! - pas trouvée => calcul normal, le résultat devient le premier opérande (enchaînement)
//!
//! Contrats :
//! - Aucune I/O ici : la liste est injectée, la soumission est coupée en deux
//!   (`submit_pin` / `fin_soumission`), l’appel réseau vit dans app/.
//! - Tout est total : division par zéro => Infinity/NaN affichés, jamais de panique.
//! - Le tampon PIN n’existe que si une équation est posée.

use serde::Serialize;

use super::nombre::{est_editable, format_nombre, lire_affichage};
use super::operation::Operateur;

/// Identifiants envoyés au login (noms de champs imposés par l’API).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Identifiants {
    pub calculate_str: String,
    pub secret_pin: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Saisie d’un premier nombre (ou repos, affichage "0").
    Idle,
    /// Opérateur armé : le second opérande est en cours de saisie.
    AwaitingOperator,
    /// "=" vient de produire un résultat, qui est le nouveau premier opérande.
    Chaining,
    /// Équation reconnue : les chiffres vont dans le tampon PIN.
    PinEntry,
}

/// Ce que "=" a produit.
#[derive(Clone, Debug, PartialEq)]
pub enum Issue {
    /// Rien à évaluer (mode PIN).
    Rien,
    Resultat(f64),
    PinDemande(String),
}

#[derive(Clone, Debug)]
pub struct Calculatrice {
    affichage: String,
    premier: Option<f64>,
    operateur: Option<Operateur>,
    // le prochain chiffre remplace l’affichage au lieu de s’y ajouter
    attente_second: bool,
    resultat: bool,

    equation: Option<String>,
    pin: String,
    envoi_en_cours: bool,

    liste: Vec<String>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            premier: None,
            operateur: None,
            attente_second: false,
            resultat: false,
            equation: None,
            pin: String::new(),
            envoi_en_cours: false,
            liste: Vec::new(),
        }
    }
}

/// Forme canonique comparée à la liste du serveur.
pub fn canonique(premier: f64, op: Operateur, second: f64) -> String {
    format!(
        "{}{}{}",
        format_nombre(premier),
        op.symbole(),
        format_nombre(second)
    )
}

impl Calculatrice {
    pub fn avec_liste(liste: Vec<String>) -> Self {
        Self {
            liste,
            ..Self::default()
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn phase(&self) -> Phase {
        if self.equation.is_some() {
            Phase::PinEntry
        } else if self.operateur.is_some() {
            Phase::AwaitingOperator
        } else if self.resultat {
            Phase::Chaining
        } else {
            Phase::Idle
        }
    }

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn premier(&self) -> Option<f64> {
        self.premier
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.operateur
    }

    pub fn equation(&self) -> Option<&str> {
        self.equation.as_deref()
    }

    pub fn pin(&self) -> &str {
        &self.pin
    }

    pub fn envoi_en_cours(&self) -> bool {
        self.envoi_en_cours
    }

    pub fn liste(&self) -> &[String] {
        &self.liste
    }

    /// Remplace la liste d’équations (chargement ou rechargement).
    pub fn set_allow_list(&mut self, liste: Vec<String>) {
        self.liste = liste;
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre '0'..='9' (le reste est ignoré).
    pub fn input_digit(&mut self, d: char) {
        if !d.is_ascii_digit() {
            return;
        }

        if self.equation.is_some() {
            if !self.envoi_en_cours {
                self.pin.push(d);
            }
            return;
        }

        let nouvelle = self.apres_resultat();
        if nouvelle {
            self.oublier_resultat();
        }
        if nouvelle || self.attente_second {
            self.affichage = d.to_string();
            self.attente_second = false;
            return;
        }

        if self.affichage == "0" || !est_editable(&self.affichage) {
            self.affichage = d.to_string();
        } else {
            self.affichage.push(d);
        }
    }

    /// Séparateur décimal.
    pub fn input_point(&mut self) {
        if self.equation.is_some() {
            return;
        }

        let nouvelle = self.apres_resultat();
        if nouvelle {
            self.oublier_resultat();
        }
        if nouvelle || self.attente_second {
            self.affichage = "0.".to_string();
            self.attente_second = false;
            return;
        }

        if !est_editable(&self.affichage) {
            self.affichage = "0.".to_string();
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    /// Capture le premier opérande, ou replie l’opérateur en attente
    /// (calcul enchaîné : 5 + 3 * => affiche 8).
    pub fn input_operator(&mut self, op: Operateur) {
        if self.equation.is_some() {
            return;
        }

        let valeur = lire_affichage(&self.affichage);

        match (self.premier, self.operateur) {
            (Some(p), Some(en_attente)) => {
                // opérateur tapé deux fois de suite : on remplace seulement
                if !self.attente_second {
                    let r = en_attente.appliquer(p, valeur);
                    self.affichage = format_nombre(r);
                    self.premier = Some(r);
                }
            }
            _ => self.premier = Some(valeur),
        }

        self.operateur = Some(op);
        self.attente_second = true;
        self.resultat = false;
    }

    /// "=" : équation reconnue => mode PIN ; sinon calcul + enchaînement.
    pub fn evaluate(&mut self) -> Issue {
        if self.equation.is_some() {
            return Issue::Rien;
        }

        let second = lire_affichage(&self.affichage);

        let (premier, op) = match (self.premier, self.operateur) {
            (Some(p), Some(op)) => (p, op),
            _ => {
                // "5 =" : le nombre affiché devient le premier opérande
                self.premier = Some(second);
                self.attente_second = true;
                self.resultat = true;
                return Issue::Resultat(second);
            }
        };

        let canon = canonique(premier, op, second);
        if self.liste.iter().any(|e| *e == canon) {
            self.entrer_pin(canon.clone());
            return Issue::PinDemande(canon);
        }

        let r = op.appliquer(premier, second);
        self.affichage = format_nombre(r);
        self.premier = Some(r);
        self.operateur = None;
        self.attente_second = true;
        self.resultat = true;
        Issue::Resultat(r)
    }

    /// DEL : dernier chiffre du PIN, ou dernier caractère de l’affichage.
    /// Tampon PIN vidé => retour complet au repos (l’équation part avec).
    pub fn delete(&mut self) {
        if self.equation.is_some() {
            if self.envoi_en_cours {
                return;
            }
            self.pin.pop();
            if self.pin.is_empty() {
                self.reinitialiser();
            }
            return;
        }

        // "11 -" puis DEL : on retire l’opérateur, le premier redevient éditable
        if self.operateur.is_some() && self.attente_second {
            self.operateur = None;
            self.premier = None;
            self.attente_second = false;
            return;
        }

        if !est_editable(&self.affichage) {
            self.reinitialiser();
            return;
        }

        if self.resultat {
            // on édite le résultat : il redevient une saisie ordinaire
            self.premier = None;
            self.resultat = false;
            self.attente_second = false;
        }

        self.affichage.pop();
        if self.affichage.is_empty() || self.affichage == "-" {
            self.reinitialiser();
        }
    }

    /// C : retour au repos, affichage "0", ni équation ni PIN.
    /// La liste est conservée ; un envoi déjà parti reste marqué en cours
    /// jusqu’à `fin_soumission` (un seul envoi à la fois).
    pub fn clear(&mut self) {
        self.reinitialiser();
    }

    /* ------------------------ Soumission du PIN ------------------------ */

    /// Prépare l’envoi : None si pas en mode PIN, PIN vide, ou envoi déjà en cours.
    pub fn submit_pin(&mut self) -> Option<Identifiants> {
        let equation = self.equation.as_ref()?;
        if self.pin.is_empty() || self.envoi_en_cours {
            return None;
        }

        self.envoi_en_cours = true;
        Some(Identifiants {
            calculate_str: equation.clone(),
            secret_pin: self.pin.clone(),
        })
    }

    /// Retour du login.
    /// - succès : retour au repos (la navigation est gérée par l’app)
    /// - échec  : seul le PIN est vidé, l’équation reste pour réessayer
    pub fn fin_soumission(&mut self, succes: bool) {
        self.envoi_en_cours = false;
        if succes {
            self.reinitialiser();
        } else {
            self.pin.clear();
        }
    }

    /* ------------------------ Interne ------------------------ */

    /// Résultat affiché, aucun opérateur en attente : la prochaine saisie
    /// démarre un nouveau calcul.
    fn apres_resultat(&self) -> bool {
        self.resultat && self.operateur.is_none()
    }

    fn oublier_resultat(&mut self) {
        self.premier = None;
        self.resultat = false;
    }

    fn entrer_pin(&mut self, equation: String) {
        self.affichage.clear();
        self.premier = None;
        self.operateur = None;
        self.attente_second = false;
        self.resultat = false;
        self.pin.clear();
        self.equation = Some(equation);
    }

    fn reinitialiser(&mut self) {
        self.affichage = "0".to_string();
        self.premier = None;
        self.operateur = None;
        self.attente_second = false;
        self.resultat = false;
        self.equation = None;
        self.pin.clear();
    }
}
