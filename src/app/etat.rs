//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de la calculatrice (expression en saisie, affichage,
//! dernier résultat "Ans", mode d'angle, bascules SHIFT/hyp) et offrir des
//! opérations simples (AC/DEL/saisie) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing) : vue.rs s'en charge.
//! - "Ans" est un pur collage de chaîne : le noyau ne garde aucun état.

use crate::noyau::ModeAngle;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sorties ---
    pub affichage: String, // résultat formaté OU message d'erreur
    pub ans: String,       // dernier résultat (représentation décimale)

    // --- modes ---
    pub mode_angle: ModeAngle,
    pub shift: bool,
    pub hyp: bool,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            expression: String::new(),
            affichage: "0".to_string(),
            ans: "0".to_string(),
            mode_angle: ModeAngle::Degres, // comme une calculatrice qui s'allume
            shift: false,
            hyp: false,
            focus_entree: true,
        }
    }
}

/// Motifs multi-caractères retirés d'un coup par DEL (du plus long au plus
/// court : "asinh(" avant "sin(").
const MOTIFS_DEL: &[&str] = &[
    "asinh(", "acosh(", "atanh(", "sinh(", "cosh(", "tanh(", "asin(", "acos(",
    "atan(", "sin(", "cos(", "tan(", "log(", "exp(", "ln(", "√(", "x⁻¹", "x²",
    "π",
];

impl AppCalc {
    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// AC : remise à zéro totale (expression, affichage, Ans, modes).
    pub fn reset_total(&mut self) {
        self.expression.clear();
        self.affichage = "0".to_string();
        self.ans = "0".to_string();
        self.mode_angle = ModeAngle::Degres;
        self.shift = false;
        self.hyp = false;
        self.focus_entree = true;
    }

    /// Ajoute un fragment à l'expression (chiffre, opérateur, "sin(", …).
    pub fn ajoute(&mut self, texte: &str) {
        self.expression.push_str(texte);
        self.focus_entree = true;
    }

    /// Colle le dernier résultat dans l'expression (contrat "Ans" : pure
    /// concaténation de chaîne).
    pub fn ajoute_ans(&mut self) {
        let ans = self.ans.clone();
        self.ajoute(&ans);
    }

    /// DEL "intelligent" : retire d'un coup les motifs connus ("sin(", "π", …),
    /// sinon un caractère.
    pub fn efface_dernier(&mut self) {
        if self.expression.is_empty() {
            return;
        }

        for motif in MOTIFS_DEL {
            if self.expression.ends_with(motif) {
                let coupe = self.expression.len() - motif.len();
                self.expression.truncate(coupe);
                self.focus_entree = true;
                return;
            }
        }

        self.expression.pop();
        self.focus_entree = true;
    }

    /// Esc : effacer seulement l'expression (affichage et Ans intacts).
    pub fn efface_expression(&mut self) {
        self.expression.clear();
        self.focus_entree = true;
    }

    pub fn bascule_mode_angle(&mut self) {
        self.mode_angle = self.mode_angle.bascule();
        self.focus_entree = true;
    }

    pub fn bascule_shift(&mut self) {
        self.shift = !self.shift;
    }

    pub fn bascule_hyp(&mut self) {
        self.hyp = !self.hyp;
    }

    /// Les bascules retombent après toute touche autre que SHIFT/hyp.
    pub fn retombe_bascules(&mut self) {
        self.shift = false;
        self.hyp = false;
    }

    /* ------------------------ Dépôt des résultats (vue -> état) ------------------------ */

    /// Résultat valide : affiché ET mémorisé pour "Ans".
    pub fn set_resultat(&mut self, texte: impl Into<String>) {
        let texte = texte.into();
        self.affichage = texte.clone();
        self.ans = texte;
        self.focus_entree = true;
    }

    /// Erreur : affichée seulement, "Ans" conserve le dernier résultat valide.
    pub fn set_erreur(&mut self, message: impl Into<String>) {
        self.affichage = message.into();
        self.focus_entree = true;
    }
}
