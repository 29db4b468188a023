//! Compiled-in "Lean Walkaround" questionnaire
//!
//! Positions are part of the persisted key format: appending questions or
//! tools to a group is safe, reordering or inserting is not.

use crate::key::{GroupId, SectionId};
use crate::model::{Group, Schema, Section};

/// Version label of the compiled-in questionnaire
pub const BUILTIN_VERSION: &str = "walkaround-v1";

/// Id of the checklist group whose items name the observed wastes
pub const WASTES_GROUP_ID: &str = "wastes";

struct SectionDef {
    id: &'static str,
    title: &'static str,
    subtitle: Option<&'static str>,
    groups: &'static [GroupDef],
}

struct GroupDef {
    id: &'static str,
    title: &'static str,
    tools_title: Option<&'static str>,
    questions: &'static [&'static str],
    tools: &'static [&'static str],
}

const SECTIONS: &[SectionDef] = &[
    SectionDef {
        id: "control",
        title: "SECTION 1 — CONTROL & STABILITY",
        subtitle: Some("Is the process predictable enough to improve?"),
        groups: &[
            GroupDef {
                id: "flow",
                title: "A. Flow & Pace",
                tools_title: Some("Flow tools seen"),
                questions: &[
                    "Is the pace of production visible at the point of work?",
                    "Does material flow without frequent stops or rework loops?",
                    "Is work-in-process limited and controlled between processes?",
                ],
                tools: &[
                    "Takt time board",
                    "FIFO lanes",
                    "Kanban / pull signals",
                    "Line balancing chart",
                ],
            },
            GroupDef {
                id: "standards",
                title: "B. Standard Work",
                tools_title: Some("Standards seen"),
                questions: &[
                    "Are current standards posted at the workstation?",
                    "Do operators follow the posted standard?",
                    "Are standards reviewed and updated after process changes?",
                ],
                tools: &[
                    "Standard work sheets",
                    "Job breakdown sheets",
                    "Standard WIP markings",
                    "Leader standard work",
                ],
            },
            GroupDef {
                id: "stability",
                title: "C. Machine & Process Stability",
                tools_title: Some("Stability tools seen"),
                questions: &[
                    "Are breakdowns tracked and reviewed?",
                    "Is planned maintenance completed on schedule?",
                    "Are changeovers timed and standardized?",
                ],
                tools: &[
                    "Autonomous maintenance checklists",
                    "OEE tracking",
                    "SMED records",
                    "Downtime log",
                ],
            },
        ],
    },
    SectionDef {
        id: "visual",
        title: "SECTION 2 — VISUAL MANAGEMENT",
        subtitle: Some("Can a stranger tell normal from abnormal in 30 seconds?"),
        groups: &[
            GroupDef {
                id: "workplace",
                title: "A. Workplace Organization",
                tools_title: Some("5S evidence seen"),
                questions: &[
                    "Does every tool and material have a marked home?",
                    "Is the area free of unneeded items?",
                    "Are 5S audits performed and posted?",
                ],
                tools: &[
                    "Shadow boards",
                    "Floor markings",
                    "Red-tag area",
                    "5S audit sheet",
                ],
            },
            GroupDef {
                id: "boards",
                title: "B. Performance Boards",
                tools_title: Some("Boards seen"),
                questions: &[
                    "Are hour-by-hour or shift boards up to date?",
                    "Can anyone see at a glance whether the area is ahead or behind?",
                    "Are abnormalities highlighted in a different colour?",
                ],
                tools: &[
                    "Hour-by-hour board",
                    "SQDC board",
                    "Andon",
                    "Production control board",
                ],
            },
            GroupDef {
                id: "status",
                title: "C. Status at a Glance",
                tools_title: Some("Status signals seen"),
                questions: &[
                    "Is machine status visible from the aisle?",
                    "Is material status (min/max) visible?",
                ],
                tools: &["Stack lights", "Min/max markers", "Status cards"],
            },
        ],
    },
    SectionDef {
        id: "quality",
        title: "SECTION 3 — QUALITY AT THE SOURCE",
        subtitle: None,
        groups: &[
            GroupDef {
                id: "detection",
                title: "A. Defect Detection",
                tools_title: Some("Quality tools seen"),
                questions: &[
                    "Are defects caught at the process that creates them?",
                    "Are mistake-proofing devices in place and verified?",
                    "Is first-piece inspection performed and recorded?",
                ],
                tools: &[
                    "Poka-yoke devices",
                    "First-piece checklist",
                    "Check sheets",
                    "Visual quality alerts",
                ],
            },
            GroupDef {
                id: "containment",
                title: "B. Containment & Escalation",
                tools_title: Some("Containment tools seen"),
                questions: &[
                    "Is there a clear stop-and-call rule for abnormalities?",
                    "Is nonconforming material segregated and labelled?",
                ],
                tools: &["Escalation matrix", "Quarantine area", "Hold tags"],
            },
            GroupDef {
                id: WASTES_GROUP_ID,
                title: "C. Observed Wastes",
                tools_title: Some("Wastes observed"),
                questions: &["Were the observed wastes discussed with the area team?"],
                tools: &[
                    "Defects — lack of controls, incoming quality",
                    "Overproduction — building ahead of demand",
                    "Waiting — idle operators or machines",
                    "Non-utilized talent — ideas not captured",
                    "Transportation — excess material moves",
                    "Inventory — excess WIP or stock",
                    "Motion — searching, reaching, walking",
                    "Extra-processing — work the customer does not value",
                ],
            },
        ],
    },
    SectionDef {
        id: "problems",
        title: "SECTION 4 — PROBLEM SOLVING",
        subtitle: Some("Are problems surfaced, owned and closed?"),
        groups: &[
            GroupDef {
                id: "tiers",
                title: "A. Daily Tiered Meetings",
                tools_title: Some("Meeting evidence seen"),
                questions: &[
                    "Is there a daily team meeting at the board?",
                    "Are issues escalated to the next tier within the day?",
                    "Are actions assigned with owners and dates?",
                ],
                tools: &["Tier 1 board", "Tier 2/3 meeting", "Action log"],
            },
            GroupDef {
                id: "rootcause",
                title: "B. Root Cause Analysis",
                tools_title: Some("Problem-solving tools seen"),
                questions: &[
                    "Are recurring problems analysed for root cause?",
                    "Are countermeasures verified for effectiveness?",
                ],
                tools: &["5 Whys", "Fishbone diagram", "A3 reports", "8D reports"],
            },
            GroupDef {
                id: "improvement",
                title: "C. Continuous Improvement",
                tools_title: Some("Improvement evidence seen"),
                questions: &[
                    "Are improvement ideas collected from operators?",
                    "Is there a visible pipeline of improvement projects?",
                    "Are the results of improvements measured?",
                ],
                tools: &[
                    "Idea board",
                    "Kaizen newspaper",
                    "Kaizen event records",
                    "Before/after photos",
                ],
            },
        ],
    },
    SectionDef {
        id: "people",
        title: "SECTION 5 — PEOPLE & LEADERSHIP",
        subtitle: None,
        groups: &[
            GroupDef {
                id: "gemba",
                title: "A. Leadership Presence",
                tools_title: Some("Leadership routines seen"),
                questions: &[
                    "Do leaders walk the floor on a fixed routine?",
                    "Do leaders ask questions rather than hand out answers?",
                ],
                tools: &[
                    "Gemba walk schedule",
                    "Leader standard work checklist",
                    "Layered process audits",
                ],
            },
            GroupDef {
                id: "skills",
                title: "B. Skills & Training",
                tools_title: Some("Training evidence seen"),
                questions: &[
                    "Is there a current skills matrix for the area?",
                    "Are new operators trained against the standard?",
                    "Is cross-training planned rather than accidental?",
                ],
                tools: &[
                    "Skills matrix",
                    "TWI job instruction",
                    "Training records",
                    "Onboarding checklist",
                ],
            },
            GroupDef {
                id: "engagement",
                title: "C. Safety & Engagement",
                tools_title: Some("Engagement evidence seen"),
                questions: &[
                    "Are safety hazards reported and closed quickly?",
                    "Do operators take part in improvement work?",
                    "Is recognition visible on the floor?",
                ],
                tools: &["Safety cross", "Near-miss board", "Recognition board"],
            },
        ],
    },
    SectionDef {
        id: "planning",
        title: "SECTION 6 — PLANNING & MATERIAL FLOW",
        subtitle: Some("Does the schedule drive the floor, or the floor the schedule?"),
        groups: &[
            GroupDef {
                id: "scheduling",
                title: "A. Scheduling & Levelling",
                tools_title: Some("Planning tools seen"),
                questions: &[
                    "Is the schedule levelled by mix and volume?",
                    "Is schedule attainment measured daily?",
                    "Are expedites the exception rather than the rule?",
                ],
                tools: &[
                    "Heijunka box",
                    "Production schedule board",
                    "Attainment chart",
                ],
            },
            GroupDef {
                id: "material",
                title: "B. Material Supply",
                tools_title: Some("Material systems seen"),
                questions: &[
                    "Is material delivered to point of use on a fixed route?",
                    "Are shortages rare and tracked?",
                    "Are supermarkets sized and maintained?",
                ],
                tools: &[
                    "Water spider route",
                    "Supermarket",
                    "Two-bin system",
                    "Shortage log",
                ],
            },
            GroupDef {
                id: "valuestream",
                title: "C. Value Stream Understanding",
                tools_title: Some("Value stream artefacts seen"),
                questions: &[
                    "Has the value stream been mapped in the last year?",
                    "Is end-to-end lead time known and tracked?",
                ],
                tools: &[
                    "Current-state map",
                    "Future-state map",
                    "Lead time chart",
                ],
            },
        ],
    },
];

impl Schema {
    /// The compiled-in questionnaire
    #[must_use]
    pub fn builtin() -> Self {
        let sections = SECTIONS.iter().map(SectionDef::to_section).collect();
        Self::from_trusted_parts(BUILTIN_VERSION, "Lean Walkaround Diagnostic", sections)
    }
}

impl SectionDef {
    fn to_section(&self) -> Section {
        Section {
            id: SectionId::new(self.id),
            title: self.title.to_string(),
            subtitle: self.subtitle.map(str::to_string),
            groups: self.groups.iter().map(GroupDef::to_group).collect(),
        }
    }
}

impl GroupDef {
    fn to_group(&self) -> Group {
        Group {
            id: GroupId::new(self.id),
            title: self.title.to_string(),
            tools_title: self.tools_title.map(str::to_string),
            questions: self.questions.iter().map(|q| (*q).to_string()).collect(),
            tools: self.tools.iter().map(|t| (*t).to_string()).collect(),
        }
    }
}
