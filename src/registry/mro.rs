//! Mobility Robustness Optimization feature contexts

use super::context::ContextEntry;

pub(super) const ENTRIES: &[ContextEntry] = &[
    ContextEntry {
        name: "Handover Failure Pressure",
        aliases: &["Handover Failure Pressure Score", "HO Failure Pressure"],
        intent: "Rate of too-early, too-late and wrong-cell handover failures at this cell.",
        interpretation: [
            "Handover failures are frequent.",
            "Handover failures occur occasionally.",
            "Handover failures are rare.",
        ],
        impact: ["Strongly supports MRO", "Supports MRO", "Neutral for MRO"],
        role: "Primary need indicator",
        hard_block: false,
    },
    ContextEntry {
        name: "Handover Success Stability",
        aliases: &["HO Success Stability"],
        intent: "Consistency of the handover success rate over recent intervals.",
        interpretation: [
            "Handover success has been consistently high.",
            "Handover success fluctuates somewhat.",
            "Handover success is unstable or degrading.",
        ],
        impact: [
            "Opposes MRO (mobility is already healthy)",
            "Neutral for MRO",
            "Supports MRO",
        ],
        role: "Stability indicator",
        hard_block: false,
    },
    ContextEntry {
        name: "Congestion-Induced HO Risk",
        aliases: &["Congestion-Induced Risk", "Congestion Induced Handover Risk"],
        intent: "Risk that load in target cells causes handover rejections or drops.",
        interpretation: [
            "Target cells are congested enough to reject or drop handovers.",
            "Target cells are occasionally congested.",
            "Target cells have spare capacity.",
        ],
        impact: ["Supports MRO", "Weakly supports MRO", "Neutral for MRO"],
        role: "Contributing risk",
        hard_block: false,
    },
    ContextEntry {
        name: "Post-Handover QoE Degradation",
        aliases: &["Post-HO QoE Degradation", "Post Handover QoE Drop"],
        intent: "Drop in user throughput and experience right after a handover.",
        interpretation: [
            "Users lose significant throughput after handing over.",
            "Users see a noticeable but limited dip after handover.",
            "Experience is preserved across handovers.",
        ],
        impact: ["Strongly supports MRO", "Supports MRO", "Neutral for MRO"],
        role: "Experience indicator",
        hard_block: false,
    },
    ContextEntry {
        name: "Mobility Volatility",
        aliases: &["Mobility Volatility Index"],
        intent: "How erratically user movement patterns change around the cell.",
        interpretation: [
            "Mobility patterns shift sharply between intervals.",
            "Mobility patterns vary moderately.",
            "Mobility patterns are stable.",
        ],
        impact: [
            "Opposes MRO (tuning would chase transient patterns)",
            "Neutral for MRO",
            "Supports MRO",
        ],
        role: "Stability indicator",
        hard_block: false,
    },
    ContextEntry {
        name: "Weather-Driven Mobility Risk",
        aliases: &["Weather-Driven Risk", "Weather Mobility Risk"],
        intent: "Expected change in mobility caused by forecast weather.",
        interpretation: [
            "Weather is expected to change how users move through the area.",
            "Weather may slightly alter mobility.",
            "Weather is unlikely to affect mobility.",
        ],
        impact: ["Supports MRO", "Neutral for MRO", "Neutral for MRO"],
        role: "Contextual risk",
        hard_block: false,
    },
    ContextEntry {
        name: "MRO Necessity",
        aliases: &["MRO Necessity Score"],
        intent: "Aggregate estimate of how much handover parameters need retuning.",
        interpretation: [
            "Current handover parameters are clearly mistuned.",
            "Handover parameters could be improved.",
            "Handover parameters fit current conditions.",
        ],
        impact: ["Strongly supports MRO", "Supports MRO", "Opposes MRO"],
        role: "Aggregate need indicator",
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
            "Blocks MRO (active faults must be cleared first)",
            "Opposes MRO",
            "Neutral for MRO",
        ],
        role: "Hard safety constraint",
        hard_block: true,
    },
    ContextEntry {
        name: "Social Event Risk",
        aliases: &["Social Event Score"],
        intent: "Likelihood that a nearby public event changes crowd movement.",
        interpretation: [
            "A significant event is expected near the cell.",
            "A minor event or gathering may alter movement.",
            "No notable events are expected.",
        ],
        impact: [
            "Supports MRO (event-driven mobility surge)",
            "Neutral for MRO",
            "Neutral for MRO",
        ],
        role: "Contextual risk",
        hard_block: false,
    },
];
