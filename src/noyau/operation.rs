// src/noyau/operation.rs

/// Les cinq opérateurs du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
}

impl Operateur {
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Modulo,
    ];

    /// Caractère utilisé dans la forme canonique ("11-89").
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
            Operateur::Modulo => '%',
        }
    }

    /// Touche clavier / bouton -> opérateur.
    /// Accepte aussi les variantes “jolies” (×, x, ÷).
    pub fn depuis_symbole(c: char) -> Option<Operateur> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' | '−' => Some(Operateur::Moins),
            '*' | 'x' | 'X' | '×' => Some(Operateur::Fois),
            '/' | '÷' => Some(Operateur::Divise),
            '%' => Some(Operateur::Modulo),
            _ => None,
        }
    }

    /// Arithmétique f64 (IEEE-754), jamais de panique :
    /// - x/0 -> ±Infinity, 0/0 -> NaN
    /// - % = reste tronqué (signe du dividende), x%0 -> NaN
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => a / b,
            Operateur::Modulo => a % b,
        }
    }
}
