//! The periodic table the prober works over.
//!
//! The table is a fixed, ordered sequence of all 118 elements. Probing walks
//! it in atomic-number order, so initial batches group neighbouring elements.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ElementGroup
// ---------------------------------------------------------------------------

/// Category tag for an element. Only used for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementGroup {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
    Unknown,
}

impl ElementGroup {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AlkaliMetal => "alkali_metal",
            Self::AlkalineEarthMetal => "alkaline_earth_metal",
            Self::TransitionMetal => "transition_metal",
            Self::PostTransitionMetal => "post_transition_metal",
            Self::Metalloid => "metalloid",
            Self::Nonmetal => "nonmetal",
            Self::Halogen => "halogen",
            Self::NobleGas => "noble_gas",
            Self::Lanthanide => "lanthanide",
            Self::Actinide => "actinide",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ElementGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// A chemical element as seen by the prober.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Element {
    /// Chemical symbol, unique across the table (e.g. `He`).
    pub sym: &'static str,
    /// Atomic number.
    pub num: u8,
    pub group: ElementGroup,
}

impl Element {
    #[must_use]
    pub const fn new(sym: &'static str, num: u8, group: ElementGroup) -> Self {
        Self { sym, num, group }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sym)
    }
}

const fn el(sym: &'static str, num: u8, group: ElementGroup) -> Element {
    Element::new(sym, num, group)
}

/// All elements, ordered by atomic number.
pub static PERIODIC_TABLE: [Element; 118] = [
    el("H", 1, ElementGroup::Nonmetal),
    el("He", 2, ElementGroup::NobleGas),
    el("Li", 3, ElementGroup::AlkaliMetal),
    el("Be", 4, ElementGroup::AlkalineEarthMetal),
    el("B", 5, ElementGroup::Metalloid),
    el("C", 6, ElementGroup::Nonmetal),
    el("N", 7, ElementGroup::Nonmetal),
    el("O", 8, ElementGroup::Nonmetal),
    el("F", 9, ElementGroup::Halogen),
    el("Ne", 10, ElementGroup::NobleGas),
    el("Na", 11, ElementGroup::AlkaliMetal),
    el("Mg", 12, ElementGroup::AlkalineEarthMetal),
    el("Al", 13, ElementGroup::PostTransitionMetal),
    el("Si", 14, ElementGroup::Metalloid),
    el("P", 15, ElementGroup::Nonmetal),
    el("S", 16, ElementGroup::Nonmetal),
    el("Cl", 17, ElementGroup::Halogen),
    el("Ar", 18, ElementGroup::NobleGas),
    el("K", 19, ElementGroup::AlkaliMetal),
    el("Ca", 20, ElementGroup::AlkalineEarthMetal),
    el("Sc", 21, ElementGroup::TransitionMetal),
    el("Ti", 22, ElementGroup::TransitionMetal),
    el("V", 23, ElementGroup::TransitionMetal),
    el("Cr", 24, ElementGroup::TransitionMetal),
    el("Mn", 25, ElementGroup::TransitionMetal),
    el("Fe", 26, ElementGroup::TransitionMetal),
    el("Co", 27, ElementGroup::TransitionMetal),
    el("Ni", 28, ElementGroup::TransitionMetal),
    el("Cu", 29, ElementGroup::TransitionMetal),
    el("Zn", 30, ElementGroup::TransitionMetal),
    el("Ga", 31, ElementGroup::PostTransitionMetal),
    el("Ge", 32, ElementGroup::Metalloid),
    el("As", 33, ElementGroup::Metalloid),
    el("Se", 34, ElementGroup::Nonmetal),
    el("Br", 35, ElementGroup::Halogen),
    el("Kr", 36, ElementGroup::NobleGas),
    el("Rb", 37, ElementGroup::AlkaliMetal),
    el("Sr", 38, ElementGroup::AlkalineEarthMetal),
    el("Y", 39, ElementGroup::TransitionMetal),
    el("Zr", 40, ElementGroup::TransitionMetal),
    el("Nb", 41, ElementGroup::TransitionMetal),
    el("Mo", 42, ElementGroup::TransitionMetal),
    el("Tc", 43, ElementGroup::TransitionMetal),
    el("Ru", 44, ElementGroup::TransitionMetal),
    el("Rh", 45, ElementGroup::TransitionMetal),
    el("Pd", 46, ElementGroup::TransitionMetal),
    el("Ag", 47, ElementGroup::TransitionMetal),
    el("Cd", 48, ElementGroup::TransitionMetal),
    el("In", 49, ElementGroup::PostTransitionMetal),
    el("Sn", 50, ElementGroup::PostTransitionMetal),
    el("Sb", 51, ElementGroup::Metalloid),
    el("Te", 52, ElementGroup::Metalloid),
    el("I", 53, ElementGroup::Halogen),
    el("Xe", 54, ElementGroup::NobleGas),
    el("Cs", 55, ElementGroup::AlkaliMetal),
    el("Ba", 56, ElementGroup::AlkalineEarthMetal),
    el("La", 57, ElementGroup::Lanthanide),
    el("Ce", 58, ElementGroup::Lanthanide),
    el("Pr", 59, ElementGroup::Lanthanide),
    el("Nd", 60, ElementGroup::Lanthanide),
    el("Pm", 61, ElementGroup::Lanthanide),
    el("Sm", 62, ElementGroup::Lanthanide),
    el("Eu", 63, ElementGroup::Lanthanide),
    el("Gd", 64, ElementGroup::Lanthanide),
    el("Tb", 65, ElementGroup::Lanthanide),
    el("Dy", 66, ElementGroup::Lanthanide),
    el("Ho", 67, ElementGroup::Lanthanide),
    el("Er", 68, ElementGroup::Lanthanide),
    el("Tm", 69, ElementGroup::Lanthanide),
    el("Yb", 70, ElementGroup::Lanthanide),
    el("Lu", 71, ElementGroup::Lanthanide),
    el("Hf", 72, ElementGroup::TransitionMetal),
    el("Ta", 73, ElementGroup::TransitionMetal),
    el("W", 74, ElementGroup::TransitionMetal),
    el("Re", 75, ElementGroup::TransitionMetal),
    el("Os", 76, ElementGroup::TransitionMetal),
    el("Ir", 77, ElementGroup::TransitionMetal),
    el("Pt", 78, ElementGroup::TransitionMetal),
    el("Au", 79, ElementGroup::TransitionMetal),
    el("Hg", 80, ElementGroup::TransitionMetal),
    el("Tl", 81, ElementGroup::PostTransitionMetal),
    el("Pb", 82, ElementGroup::PostTransitionMetal),
    el("Bi", 83, ElementGroup::PostTransitionMetal),
    el("Po", 84, ElementGroup::PostTransitionMetal),
    el("At", 85, ElementGroup::Halogen),
    el("Rn", 86, ElementGroup::NobleGas),
    el("Fr", 87, ElementGroup::AlkaliMetal),
    el("Ra", 88, ElementGroup::AlkalineEarthMetal),
    el("Ac", 89, ElementGroup::Actinide),
    el("Th", 90, ElementGroup::Actinide),
    el("Pa", 91, ElementGroup::Actinide),
    el("U", 92, ElementGroup::Actinide),
    el("Np", 93, ElementGroup::Actinide),
    el("Pu", 94, ElementGroup::Actinide),
    el("Am", 95, ElementGroup::Actinide),
    el("Cm", 96, ElementGroup::Actinide),
    el("Bk", 97, ElementGroup::Actinide),
    el("Cf", 98, ElementGroup::Actinide),
    el("Es", 99, ElementGroup::Actinide),
    el("Fm", 100, ElementGroup::Actinide),
    el("Md", 101, ElementGroup::Actinide),
    el("No", 102, ElementGroup::Actinide),
    el("Lr", 103, ElementGroup::Actinide),
    el("Rf", 104, ElementGroup::TransitionMetal),
    el("Db", 105, ElementGroup::TransitionMetal),
    el("Sg", 106, ElementGroup::TransitionMetal),
    el("Bh", 107, ElementGroup::TransitionMetal),
    el("Hs", 108, ElementGroup::TransitionMetal),
    el("Mt", 109, ElementGroup::Unknown),
    el("Ds", 110, ElementGroup::Unknown),
    el("Rg", 111, ElementGroup::Unknown),
    el("Cn", 112, ElementGroup::Unknown),
    el("Nh", 113, ElementGroup::Unknown),
    el("Fl", 114, ElementGroup::Unknown),
    el("Mc", 115, ElementGroup::Unknown),
    el("Lv", 116, ElementGroup::Unknown),
    el("Ts", 117, ElementGroup::Unknown),
    el("Og", 118, ElementGroup::Unknown),
];
