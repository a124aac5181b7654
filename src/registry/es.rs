//! Energy Saving feature contexts

use super::context::ContextEntry;

pub(super) const ENTRIES: &[ContextEntry] = &[
    ContextEntry {
        name: "Persistent Low Load",
        aliases: &["Persistent Low Load Score"],
        intent: "Measures how consistently the cell has carried low traffic across the observation window.",
        interpretation: [
            "Traffic has stayed low for a sustained period; the cell is lightly used most of the time.",
            "Low-load periods occur but are interrupted by regular traffic peaks.",
            "The cell carries steady traffic with few low-load periods.",
        ],
        impact: ["Strongly supports ES", "Moderately supports ES", "Opposes ES"],
        role: "Primary benefit indicator",
        hard_block: false,
    },
    ContextEntry {
        name: "Energy Inefficiency",
        aliases: &["Energy Inefficiency Score"],
        intent: "Compares the power drawn by the cell against the traffic it actually serves.",
        interpretation: [
            "Power consumption is high relative to served traffic.",
            "Power consumption is somewhat above what the traffic requires.",
            "Power consumption is in line with served traffic.",
        ],
        impact: [
            "Supports ES",
            "Weakly supports ES",
            "Neutral for ES (little energy to recover)",
        ],
        role: "Benefit indicator",
        hard_block: false,
    },
    ContextEntry {
        name: "QoS Stability",
        aliases: &["Stable QoS Confidence", "QoS Stability Score"],
        intent: "Confidence that throughput, latency and drop rates stay within target if capacity is reduced.",
        interpretation: [
            "QoS has been stable with comfortable margin to its targets.",
            "QoS is mostly within targets with occasional dips.",
            "QoS is already close to or below its targets.",
        ],
        impact: [
            "Supports ES (QoS headroom available)",
            "Neutral for ES",
            "Blocks ES (QoS would degrade)",
        ],
        role: "Hard safety constraint",
        hard_block: true,
    },
    ContextEntry {
        name: "Mobility Safety",
        aliases: &["Mobility Safety Index"],
        intent: "Indicates whether users can be handed over safely if the cell is put to sleep.",
        interpretation: [
            "Neighbor coverage and handover performance can absorb this cell's users.",
            "Handover to neighbors is possible but with limited margin.",
            "Users would face handover failures or coverage gaps.",
        ],
        impact: ["Supports ES", "Neutral for ES", "Blocks ES (mobility risk)"],
        role: "Hard safety constraint",
        hard_block: true,
    },
    ContextEntry {
        name: "Social Event Risk",
        aliases: &["Social Event Score"],
        intent: "Likelihood that a nearby public event drives unusual demand.",
        interpretation: [
            "A significant event is expected near the cell.",
            "A minor event or gathering may raise demand.",
            "No notable events are expected.",
        ],
        impact: [
            "Opposes ES (event-driven demand surge expected)",
            "Slightly opposes ES",
            "Neutral for ES",
        ],
        role: "Contextual risk",
        hard_block: false,
    },
    ContextEntry {
        name: "Traffic Volatility",
        aliases: &["Traffic Volatility Index"],
        intent: "Measures how erratically the cell's traffic changes between intervals.",
        interpretation: [
            "Traffic swings sharply and unpredictably.",
            "Traffic varies moderately.",
            "Traffic follows a stable, predictable pattern.",
        ],
        impact: ["Opposes ES", "Slightly opposes ES", "Supports ES"],
        role: "Stability indicator",
        hard_block: false,
    },
    ContextEntry {
        name: "Weather Sensitivity",
        aliases: &["Weather Sensitivity Score"],
        intent: "Captures how strongly forecast weather shifts traffic at this site.",
        interpretation: [
            "Forecast weather is likely to push traffic up.",
            "Weather has a mild effect on expected traffic.",
            "Weather is unlikely to raise traffic, or is expected to reduce it.",
        ],
        impact: ["Slightly opposes ES", "Neutral for ES", "Slightly supports ES"],
        role: "Contextual risk",
        hard_block: false,
    },
    ContextEntry {
        name: "Neighbor Dependency",
        aliases: &["Neighbor Dependency Score", "Neighbour Dependency"],
        intent: "Share of neighbor-cell traffic and coverage that relies on this cell.",
        interpretation: [
            "Neighbors depend heavily on this cell for offload and coverage.",
            "Neighbors rely on this cell at peak times.",
            "Neighbors can operate without this cell.",
        ],
        impact: [
            "Opposes ES (neighbors cannot absorb the load)",
            "Neutral for ES",
            "Supports ES",
        ],
        role: "Coverage constraint",
        hard_block: false,
    },
    ContextEntry {
        name: "ES Opportunity",
        aliases: &["ES Opportunity Score", "Energy Saving Opportunity"],
        intent: "Aggregate estimate of the energy that can be saved without service impact.",
        interpretation: [
            "A large saving is available at low service risk.",
            "A modest saving is available.",
            "Little saving is available.",
        ],
        impact: ["Strongly supports ES", "Supports ES", "Neutral for ES"],
        role: "Aggregate benefit indicator",
        hard_block: false,
    },
    ContextEntry {
        name: "Alarm Count",
        aliases: &["n_alarm", "Active Alarms"],
        intent: "Number of active alarms raised on the cell or its site.",
        interpretation: [
            "Several alarms are active on the cell.",
            "A few alarms are active.",
            "No or almost no alarms are active.",
        ],
        impact: [
            "Blocks ES (active faults must be cleared first)",
            "Opposes ES",
            "Neutral for ES",
        ],
        role: "Hard safety constraint",
        hard_block: true,
    },
];
