//! Tests fuzz safe : la calculatrice martelée par des suites de touches aléatoires.
//!
//! - RNG déterministe (seed fixe)
//! - budget temps global
//! - invariants clés :
//!   * PIN non vide => équation posée
//!   * "=" hors liste => enchaînement, résultat = premier opérande
//!   * jamais d’équation posée si la liste est vide

use std::time::{Duration, Instant};

use super::calculatrice::{Calculatrice, Issue, Phase};
use super::nombre::lire_affichage;
use super::operation::Operateur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn check_invariants(c: &Calculatrice) {
    if !c.pin().is_empty() {
        assert!(c.equation().is_some(), "PIN sans équation");
    }
    if c.equation().is_some() {
        assert_eq!(c.phase(), Phase::PinEntry);
        assert_eq!(c.premier(), None);
        assert_eq!(c.operateur(), None);
    }
    if c.phase() != Phase::PinEntry {
        assert!(!c.affichage().is_empty(), "affichage vide hors mode PIN");
    }
}

fn meme_nombre(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

/// Une touche au hasard ; renvoie l’issue si c’était "=".
fn touche(c: &mut Calculatrice, rng: &mut Rng) -> Option<Issue> {
    match rng.pick(20) {
        0..=9 => c.input_digit(char::from(b'0' + rng.pick(10) as u8)),
        10 => c.input_point(),
        11..=15 => {
            let op = Operateur::TOUS[rng.pick(5) as usize];
            c.input_operator(op);
        }
        16 | 17 => return Some(c.evaluate()),
        18 => c.delete(),
        _ => {
            // C rarement, sinon on ne va jamais loin
            if rng.pick(4) == 0 {
                c.clear();
            } else {
                c.input_digit('0');
            }
        }
    }
    None
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_liste_vide_toujours_enchainement() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut c = Calculatrice::default();
    let mut resultats = 0usize;

    for _ in 0..5_000 {
        budget(t0, max);

        if let Some(issue) = touche(&mut c, &mut rng) {
            match issue {
                Issue::Resultat(r) => {
                    assert_eq!(c.phase(), Phase::Chaining);
                    let p = c.premier().expect("premier opérande après =");
                    assert!(meme_nombre(p, r), "premier={p} résultat={r}");
                    assert!(meme_nombre(lire_affichage(c.affichage()), r));
                    resultats += 1;
                }
                autre => panic!("issue inattendue sans liste: {autre:?}"),
            }
        }
        check_invariants(&c);
    }

    assert!(resultats > 100, "trop peu de '=': {resultats}");
}

#[test]
fn fuzz_safe_avec_liste_invariants_pin() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // opérandes à un chiffre : on tombe dessus assez souvent
    let liste: Vec<String> = ["1+2", "3*4", "9-9", "8/2", "7%3"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut c = Calculatrice::avec_liste(liste.clone());
    let mut portes = 0usize;

    for i in 0..20_000usize {
        budget(t0, max);

        // de temps en temps, une équation de la liste tapée au propre
        let issue = if i % 97 == 0 {
            let eq = &liste[i % liste.len()];
            c.clear();
            for t in eq.chars() {
                match Operateur::depuis_symbole(t) {
                    Some(op) => c.input_operator(op),
                    None => c.input_digit(t),
                }
            }
            Some(c.evaluate())
        } else {
            touche(&mut c, &mut rng)
        };

        if let Some(Issue::PinDemande(eq)) = issue {
            assert!(liste.contains(&eq), "équation hors liste: {eq}");
            assert_eq!(c.equation(), Some(eq.as_str()));
            assert_eq!(c.pin(), "");
            portes += 1;

            // on tente un envoi refusé puis on sort
            c.input_digit('1');
            assert!(c.submit_pin().is_some());
            c.fin_soumission(false);
            assert_eq!(c.equation(), Some(eq.as_str()));
            c.clear();
        }
        check_invariants(&c);
    }

    assert!(portes > 0, "aucune porte PIN ouverte: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_division_par_zero_jamais_reconnue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(100);

    let liste: Vec<String> = (0..10).map(|a| format!("{a}/1")).collect();

    for a in 0..10u8 {
        budget(t0, max);

        let mut c = Calculatrice::avec_liste(liste.clone());
        c.input_digit(char::from(b'0' + a));
        c.input_operator(Operateur::Divise);
        c.input_digit('0');

        let issue = c.evaluate();
        assert!(matches!(issue, Issue::Resultat(_)), "a={a}");
        let attendu = if a == 0 { "NaN" } else { "Infinity" };
        assert_eq!(c.affichage(), attendu);

        // le résultat non fini enchaîne sans jamais ouvrir la porte
        c.input_operator(Operateur::Divise);
        c.input_digit('1');
        assert!(matches!(c.evaluate(), Issue::Resultat(_)));
        assert_eq!(c.equation(), None);
    }
}
