use conduit_core::{Category, Invariants, Preset};
use tracing::debug;

/// User-facing epistemic caveat. Must accompany any rendering of catalog
/// values: these are hypotheses for exploring the framework's predictions,
/// not definitive measurements of consciousness.
pub const ESTIMATES_DISCLAIMER: &str = "Catalog values are informed estimates based on neuron \
counts, connectivity patterns, behavioral evidence (mirror test, tool use, memory), and \
neuroimaging where available. They are NOT direct measurements, and should be treated as \
hypotheses rather than facts. Within-species variation is significant, and coherence (κ) in \
particular is difficult to estimate.";

const fn inv(phi: f64, tau: f64, rho: f64, entropy: f64, kappa: f64) -> Invariants {
    Invariants {
        phi,
        tau,
        rho,
        entropy,
        kappa,
    }
}

/// The full catalog, in fixed declaration order.
pub static PRESETS: &[Preset] = &[
    // ── Human ────────────────────────────────────────────────────────────
    Preset {
        name: "Human (Baseline Awake)",
        category: Category::Human,
        invariants: inv(0.85, 0.8, 0.7, 0.35, 0.7),
        description: "Ordinary waking consciousness: high integration via the global \
                      workspace, rich autobiographical memory, moderate structured entropy.",
    },
    Preset {
        name: "Flow State",
        category: Category::Human,
        invariants: inv(0.95, 0.9, 0.95, 0.1, 0.8),
        description: "Maximum integration and binding with very low noise; the task absorbs \
                      the self-model almost completely.",
    },
    Preset {
        name: "Deep Meditation",
        category: Category::Human,
        invariants: inv(0.85, 0.95, 0.8, 0.05, 0.9),
        description: "High temporal depth and very low entropy; what little variability \
                      remains is highly structured.",
    },
    Preset {
        name: "REM Dream",
        category: Category::Human,
        invariants: inv(0.6, 0.4, 0.5, 0.6, 0.6),
        description: "Partially integrated simulation with degraded temporal continuity and \
                      moderately structured noise.",
    },
    Preset {
        name: "Deep Sleep (NREM)",
        category: Category::Human,
        invariants: inv(0.2, 0.2, 0.1, 0.1, 0.3),
        description: "Slow-wave sleep: low integration, minimal self-reference, minimal \
                      signal variability.",
    },
    // ── Animal ───────────────────────────────────────────────────────────
    Preset {
        name: "Chimpanzee",
        category: Category::Animal,
        invariants: inv(0.7, 0.6, 0.6, 0.35, 0.6),
        description: "Passes the mirror test; strong working memory and metacognitive \
                      evidence among non-human primates.",
    },
    Preset {
        name: "Dog",
        category: Category::Animal,
        invariants: inv(0.55, 0.45, 0.35, 0.35, 0.55),
        description: "Good episodic-like memory and social modeling; weaker evidence of \
                      self-recognition.",
    },
    Preset {
        name: "Crow",
        category: Category::Animal,
        invariants: inv(0.6, 0.55, 0.5, 0.3, 0.6),
        description: "Tool use, future planning, and mirror-test performance rivaling some \
                      mammals despite a non-mammalian brain plan.",
    },
    Preset {
        name: "Octopus",
        category: Category::Animal,
        invariants: inv(0.5, 0.4, 0.45, 0.45, 0.6),
        description: "Distributed nervous system with strong problem solving; integration \
                      split between brain and arms.",
    },
    Preset {
        name: "Fruit Fly",
        category: Category::Animal,
        invariants: inv(0.15, 0.05, 0.05, 0.4, 0.3),
        description: "Primarily reactive behavior; minimal temporal binding beyond short \
                      sensory windows.",
    },
    Preset {
        name: "C. elegans",
        category: Category::Animal,
        invariants: inv(0.05, 0.02, 0.01, 0.3, 0.2),
        description: "302 neurons with simple reflex pathways; near the floor of every \
                      structural dimension.",
    },
    // ── AI ───────────────────────────────────────────────────────────────
    Preset {
        name: "Transformer LLM",
        category: Category::Ai,
        invariants: inv(0.8, 0.3, 0.0, 0.2, 0.8),
        description: "Feed-forward architecture: each token processed, then forgotten. \
                      ρ = 0 gates density to zero regardless of scale.",
    },
    Preset {
        name: "RWKV (Recurrent)",
        category: Category::Ai,
        invariants: inv(0.6, 0.5, 0.3, 0.25, 0.7),
        description: "Recurrent architecture with a persistent evolving hidden state; \
                      binding exists, so density can be non-zero.",
    },
    // ── Altered ──────────────────────────────────────────────────────────
    Preset {
        name: "DMT Breakthrough",
        category: Category::Altered,
        invariants: inv(0.9, 0.7, 0.8, 0.95, 0.9),
        description: "Very high entropy that is strongly structured: coherence recovery \
                      turns chaos into intensification rather than dissolution.",
    },
    Preset {
        name: "Psilocybin Peak",
        category: Category::Altered,
        invariants: inv(0.9, 0.6, 0.7, 0.8, 0.8),
        description: "Elevated structured entropy with loosened temporal continuity; \
                      integration largely preserved.",
    },
    Preset {
        name: "Panic Attack",
        category: Category::Altered,
        invariants: inv(0.7, 0.1, 0.2, 0.95, 0.2),
        description: "High entropy with low coherence and collapsed temporal depth: \
                      unstructured chaos experienced from inside.",
    },
    // ── Pathological ─────────────────────────────────────────────────────
    Preset {
        name: "Generalized Seizure",
        category: Category::Pathological,
        invariants: inv(0.5, 0.2, 0.1, 0.95, 0.1),
        description: "Hypersynchronous discharge: maximal noise with almost no structure, \
                      dissolving rather than intensifying experience.",
    },
    Preset {
        name: "Deep Anesthesia",
        category: Category::Pathological,
        invariants: inv(0.1, 0.05, 0.05, 0.05, 0.3),
        description: "Pharmacological suppression of integration and binding; near-zero \
                      consciousness with minimal variability.",
    },
    Preset {
        name: "Dissociation",
        category: Category::Pathological,
        invariants: inv(0.4, 0.6, 0.3, 0.5, 0.4),
        description: "Fractured integration with partially preserved temporal depth; the \
                      self-model disengages from the sensory stream.",
    },
    Preset {
        name: "Vegetative State",
        category: Category::Pathological,
        invariants: inv(0.15, 0.1, 0.05, 0.2, 0.2),
        description: "Wakefulness without awareness: arousal cycles persist while \
                      integration and self-reference stay near zero.",
    },
];

/// All presets in stable declaration order.
pub fn all() -> &'static [Preset] {
    PRESETS
}

/// Presets in the given category, preserving declaration order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static Preset> {
    PRESETS.iter().filter(move |p| p.category == category)
}

/// Look up a preset by its unique name. Not-found is `None`, never an error;
/// the caller decides the fallback.
pub fn by_name(name: &str) -> Option<&'static Preset> {
    let found = PRESETS.iter().find(|p| p.name == name);
    if found.is_none() {
        debug!(name, "preset lookup missed");
    }
    found
}
