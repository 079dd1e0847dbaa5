//! Tests de la calculatrice à porte PIN : scénarios du pavé, mode PIN, soumission.

use super::calculatrice::{canonique, Calculatrice, Identifiants, Issue, Phase};
use super::operation::Operateur;

fn liste_demo() -> Vec<String> {
    ["11-89", "22-2", "8+133"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Tape une suite de touches ("11-89=", "5/0=", "C", "<" pour DEL).
fn taper(c: &mut Calculatrice, touches: &str) {
    for t in touches.chars() {
        match t {
            '0'..='9' => c.input_digit(t),
            '.' => c.input_point(),
            '=' => {
                c.evaluate();
            }
            '<' => c.delete(),
            'C' => c.clear(),
            _ => {
                let op = Operateur::depuis_symbole(t)
                    .unwrap_or_else(|| panic!("touche inconnue: {t:?}"));
                c.input_operator(op);
            }
        }
    }
}

fn assert_repos(c: &Calculatrice) {
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.affichage(), "0");
    assert_eq!(c.pin(), "");
    assert_eq!(c.equation(), None);
    assert_eq!(c.premier(), None);
    assert_eq!(c.operateur(), None);
}

/* ------------------------ Porte PIN ------------------------ */

#[test]
fn equation_reconnue_ouvre_le_mode_pin() {
    let mut c = Calculatrice::avec_liste(liste_demo());
    taper(&mut c, "11-89");
    assert_eq!(c.phase(), Phase::AwaitingOperator);

    let issue = c.evaluate();
    assert_eq!(issue, Issue::PinDemande("11-89".to_string()));
    assert_eq!(c.phase(), Phase::PinEntry);
    assert_eq!(c.equation(), Some("11-89"));
    assert_eq!(c.pin(), "");
    assert_eq!(c.affichage(), "");
}

#[test]
fn equation_reconnue_apres_calcul_enchaine() {
    // 5 + 3 + => 8 affiché, puis 133 = => "8+133"
    let mut c = Calculatrice::avec_liste(liste_demo());
    taper(&mut c, "5+3+");
    assert_eq!(c.affichage(), "8");
    taper(&mut c, "133=");
    assert_eq!(c.phase(), Phase::PinEntry);
    assert_eq!(c.equation(), Some("8+133"));
}

#[test]
fn equation_inconnue_calcule_normalement() {
    let mut c = Calculatrice::avec_liste(liste_demo());
    taper(&mut c, "5+5");
    assert_eq!(c.evaluate(), Issue::Resultat(10.0));
    assert_eq!(c.affichage(), "10");
    assert_eq!(c.phase(), Phase::Chaining);
    assert_eq!(c.premier(), Some(10.0));
    assert_eq!(c.equation(), None);
}

#[test]
fn liste_vide_calculatrice_ordinaire() {
    let mut c = Calculatrice::default();
    taper(&mut c, "11-89=");
    assert_eq!(c.phase(), Phase::Chaining);
    assert_eq!(c.affichage(), "-78");
}

#[test]
fn comparaison_exacte_sans_normalisation() {
    // "011" est lu 11 : la forme canonique reste "11-89"
    let mut c = Calculatrice::avec_liste(liste_demo());
    taper(&mut c, "011-89=");
    assert_eq!(c.equation(), Some("11-89"));

    // "22-2.0" => second lu 2 => "22-2"
    let mut c = Calculatrice::avec_liste(liste_demo());
    taper(&mut c, "22-2.0=");
    assert_eq!(c.equation(), Some("22-2"));

    // "11.5-89" n’est pas dans la liste
    let mut c = Calculatrice::avec_liste(liste_demo());
    taper(&mut c, "11.5-89=");
    assert_eq!(c.phase(), Phase::Chaining);
    assert_eq!(c.affichage(), "-77.5");
}

#[test]
fn forme_canonique() {
    assert_eq!(canonique(11.0, Operateur::Moins, 89.0), "11-89");
    assert_eq!(canonique(0.5, Operateur::Fois, -2.0), "0.5*-2");
    assert_eq!(canonique(-0.0, Operateur::Plus, 1.0), "0+1");
    assert_eq!(canonique(f64::INFINITY, Operateur::Modulo, 3.0), "Infinity%3");
}

/* ------------------------ Calcul enchaîné ------------------------ */

#[test]
fn division_par_zero_sans_panique() {
    let mut c = Calculatrice::avec_liste(vec!["5/1".to_string(), "Infinity-1".to_string()]);
    taper(&mut c, "5/0=");
    assert_eq!(c.affichage(), "Infinity");
    assert_eq!(c.phase(), Phase::Chaining);
    assert_eq!(c.equation(), None);

    // 0/0 => NaN, toujours utilisable
    taper(&mut c, "C0/0=");
    assert_eq!(c.affichage(), "NaN");
    taper(&mut c, "7");
    assert_eq!(c.affichage(), "7");
}

#[test]
fn resultat_devient_premier_operande() {
    let mut c = Calculatrice::default();
    taper(&mut c, "2+3=");
    taper(&mut c, "*4=");
    assert_eq!(c.affichage(), "20");
    assert_eq!(c.premier(), Some(20.0));
}

#[test]
fn chiffre_apres_resultat_demarre_une_nouvelle_saisie() {
    let mut c = Calculatrice::default();
    taper(&mut c, "2+3=");
    taper(&mut c, "7");
    assert_eq!(c.affichage(), "7");
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.premier(), None);

    taper(&mut c, "+1=");
    assert_eq!(c.affichage(), "8");
}

#[test]
fn point_apres_resultat_demarre_une_nouvelle_saisie() {
    let mut c = Calculatrice::default();
    taper(&mut c, "2+3=.5");
    assert_eq!(c.affichage(), "0.5");
    assert_eq!(c.premier(), None);
    assert_eq!(c.phase(), Phase::Idle);

    // après un opérateur, le résultat reste le premier opérande
    taper(&mut c, "C2+3=*2=");
    assert_eq!(c.affichage(), "10");
}

#[test]
fn operateur_repete_remplace_seulement() {
    let mut c = Calculatrice::default();
    taper(&mut c, "9+-*");
    assert_eq!(c.operateur(), Some(Operateur::Fois));
    assert_eq!(c.affichage(), "9");
    taper(&mut c, "2=");
    assert_eq!(c.affichage(), "18");
}

#[test]
fn modulo_et_decimaux() {
    let mut c = Calculatrice::default();
    taper(&mut c, "17%5=");
    assert_eq!(c.affichage(), "2");

    taper(&mut c, "C0.1+0.2=");
    assert_eq!(c.affichage(), "0.30000000000000004");

    // point déjà présent : ignoré
    taper(&mut c, "C1..5");
    assert_eq!(c.affichage(), "1.5");
}

#[test]
fn egal_sans_operateur_passe_en_enchainement() {
    let mut c = Calculatrice::default();
    taper(&mut c, "42=");
    assert_eq!(c.phase(), Phase::Chaining);
    assert_eq!(c.premier(), Some(42.0));
    taper(&mut c, "+8=");
    assert_eq!(c.affichage(), "50");
}

/* ------------------------ DEL / C ------------------------ */

#[test]
fn clear_depuis_tous_les_etats() {
    let mut c = Calculatrice::avec_liste(liste_demo());

    taper(&mut c, "123C");
    assert_repos(&c);

    taper(&mut c, "12+3C");
    assert_repos(&c);

    taper(&mut c, "2+3=C");
    assert_repos(&c);

    taper(&mut c, "11-89=4567C");
    assert_repos(&c);
    assert_eq!(c.liste().len(), 3);
}

#[test]
fn delete_sur_affichage_par_defaut_equivaut_a_clear() {
    let mut c = Calculatrice::default();
    c.delete();
    assert_repos(&c);
}

#[test]
fn delete_retire_le_dernier_caractere() {
    let mut c = Calculatrice::default();
    taper(&mut c, "123<");
    assert_eq!(c.affichage(), "12");
    taper(&mut c, "<<");
    assert_repos(&c);
}

#[test]
fn delete_apres_operateur_retire_l_operateur() {
    let mut c = Calculatrice::default();
    taper(&mut c, "12+<");
    assert_eq!(c.operateur(), None);
    assert_eq!(c.affichage(), "12");
    taper(&mut c, "3");
    assert_eq!(c.affichage(), "123");
}

#[test]
fn delete_sur_resultat() {
    let mut c = Calculatrice::default();
    taper(&mut c, "6*7=<");
    assert_eq!(c.affichage(), "4");
    assert_eq!(c.phase(), Phase::Idle);

    taper(&mut c, "C5/0=<");
    assert_repos(&c);
}

#[test]
fn delete_en_mode_pin() {
    let mut c = Calculatrice::avec_liste(liste_demo());
    taper(&mut c, "22-2=12");
    assert_eq!(c.pin(), "12");

    c.delete();
    assert_eq!(c.pin(), "1");
    assert_eq!(c.phase(), Phase::PinEntry);

    // tampon vidé => l’équation part avec
    c.delete();
    assert_repos(&c);
}

/* ------------------------ Soumission ------------------------ */

#[test]
fn soumission_pin() {
    let mut c = Calculatrice::avec_liste(liste_demo());
    taper(&mut c, "11-89=");
    assert_eq!(c.submit_pin(), None, "PIN vide : rien à envoyer");

    taper(&mut c, "4321");
    assert_eq!(c.affichage(), "");
    let id = c.submit_pin().expect("identifiants");
    assert_eq!(
        id,
        Identifiants {
            calculate_str: "11-89".to_string(),
            secret_pin: "4321".to_string(),
        }
    );
    assert!(c.envoi_en_cours());

    // un seul envoi à la fois, saisie gelée
    assert_eq!(c.submit_pin(), None);
    taper(&mut c, "9<");
    assert_eq!(c.pin(), "4321");
}

#[test]
fn echec_vide_le_pin_et_garde_l_equation() {
    let mut c = Calculatrice::avec_liste(liste_demo());
    taper(&mut c, "11-89=4321");
    c.submit_pin();
    c.fin_soumission(false);

    assert!(!c.envoi_en_cours());
    assert_eq!(c.phase(), Phase::PinEntry);
    assert_eq!(c.equation(), Some("11-89"));
    assert_eq!(c.pin(), "");

    // nouvel essai
    taper(&mut c, "1111");
    assert_eq!(c.submit_pin().map(|i| i.secret_pin), Some("1111".to_string()));
}

#[test]
fn succes_retour_au_repos() {
    let mut c = Calculatrice::avec_liste(liste_demo());
    taper(&mut c, "11-89=4321");
    c.submit_pin();
    c.fin_soumission(true);
    assert_repos(&c);
    assert!(!c.envoi_en_cours());
}

#[test]
fn clear_pendant_envoi_garde_le_verrou() {
    let mut c = Calculatrice::avec_liste(liste_demo());
    taper(&mut c, "11-89=4321");
    c.submit_pin();
    c.clear();
    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.envoi_en_cours());

    taper(&mut c, "11-89=1");
    assert_eq!(c.submit_pin(), None);

    c.fin_soumission(false);
    assert!(!c.envoi_en_cours());
}
