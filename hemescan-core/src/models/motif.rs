use anyhow::{Context, Result};
use regex::Regex;

/// A heme-binding motif: two cysteines separated by a fixed spacer,
/// followed by the iron ligand (histidine or lysine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HemeMotif {
    pub label: &'static str,
    pub pattern: &'static str,
    pub spacer: usize,
}

impl HemeMotif {
    pub const fn new(label: &'static str, pattern: &'static str, spacer: usize) -> Self {
        Self {
            label,
            pattern,
            spacer,
        }
    }
}

/// Motifs in the order they are allowed to claim a region of a sequence.
/// The canonical Cx2CH motif goes first, long spacers last.
pub const HEME_BINDING_MOTIFS: [HemeMotif; 9] = [
    HemeMotif::new("Cx2CH", "C..CH", 2),
    HemeMotif::new("Cx2CK", "C..CK", 2),
    HemeMotif::new("CxC[HK]", "C.C[HK]", 1),
    HemeMotif::new("Cx3CH", "C...CH", 3),
    HemeMotif::new("Cx4CH", "C....CH", 4),
    HemeMotif::new("Cx11CH", "C.{11}CH", 11),
    HemeMotif::new("Cx14CH", "C.{14}CH", 14),
    HemeMotif::new("Cx15CH", "C.{15}CH", 15),
    HemeMotif::new("Cx17CH", "C.{17}CH", 17),
];

#[derive(Debug, Clone)]
pub struct CompiledMotif {
    pub motif: HemeMotif,
    regex: Regex,
}

impl CompiledMotif {
    pub fn new(motif: HemeMotif) -> Result<Self> {
        let regex = Regex::new(motif.pattern)
            .with_context(|| format!("Could not compile motif pattern: '{}'", motif.pattern))?;

        Ok(Self { motif, regex })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Ordered collection of compiled motifs. Iteration order is priority order.
#[derive(Debug, Clone)]
pub struct MotifSet {
    motifs: Vec<CompiledMotif>,
}

impl MotifSet {
    pub fn new(motifs: &[HemeMotif]) -> Result<Self> {
        let motifs = motifs
            .iter()
            .map(|m| CompiledMotif::new(*m))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { motifs })
    }

    pub fn heme_binding() -> Result<Self> {
        Self::new(&HEME_BINDING_MOTIFS)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledMotif> {
        self.motifs.iter()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.motifs.iter().map(|m| m.motif.label).collect()
    }
}
