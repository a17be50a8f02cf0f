//! Built-in seed corpus
//!
//! Two networks: a military command chain around `T-1001`, and the foreign
//! ministry around `ORG-MOFA-001`, joined by two liaison edges.

use super::topics::TopicTable;
use crate::graph::{Edge, EntityKind, Node, RelationKind};

/// Seed nodes, without dossiers
pub fn seed_nodes() -> Vec<Node> {
    vec![
        Node::new("T-1001", "Lt Gen Abdul Rehman Khan", EntityKind::Person)
            .with_role("Commander, 10 Corps")
            .with_threat(95)
            .with_description(
                "Primary target. High-ranking officer with confirmed links to non-state actors. \
                 Oversees cross-border infiltrations in sector 4.",
            )
            .with_detail("Service Number", "PA-45211")
            .with_detail("Unit", "10 Corps (Rawalpindi)")
            .with_detail("Last Sigint", "2 mins ago")
            .with_detail("Clearance", "Top Secret (Pak)")
            .with_detail("Family", "3 children (2 in London)"),
        Node::new("ORG-MOFA-001", "Ministry of Foreign Affairs (MOFA)", EntityKind::Org)
            .with_role("Federal Ministry - Foreign Relations")
            .with_threat(48)
            .with_description(
                "Pakistan's Ministry of Foreign Affairs responsible for diplomatic relations, \
                 international agreements, and bilateral cooperation. Currently handling \
                 high-level visits from Indonesia, Iran, and Russia.",
            )
            .with_detail("Headquarters", "Constitution Avenue, Islamabad")
            .with_detail("Foreign Secretary", "Dr. Asad Majeed Khan")
            .with_detail("Active Delegations", "Indonesia, Iran, Russia, Hungary")
            .with_detail("Last Major Activity", "Indonesia President Visit (Dec 8-9, 2025)")
            .with_detail("Upcoming Event", "124th NMC Meeting (Jan 5, 2026)")
            .with_detail("Current Agreements", "UNIDROIT, Prisoner Transfer, Pak-Russia IGC")
            .with_detail("Classification", "Official Use Only"),
        Node::new("MOFA-FS-001", "Dr. Asad Majeed Khan", EntityKind::Person)
            .with_role("Foreign Secretary of Pakistan")
            .with_threat(35)
            .with_description(
                "Career diplomat serving as Foreign Secretary. Previously Pakistan's Ambassador \
                 to USA (2019-2022). Currently overseeing critical bilateral visits including \
                 Indonesia President's visit and 124th NMC coordination.",
            )
            .with_detail("Designation", "Foreign Secretary")
            .with_detail("Service", "Pakistan Foreign Service")
            .with_detail("Previous Posting", "Ambassador to United States")
            .with_detail("Current Focus", "Indonesia Visit, NMC Meeting, Iran MoU Implementation")
            .with_detail("Last Activity", "124th NMC Letter (Dec 2025)")
            .with_detail("Clearance", "Top Secret - Diplomatic"),
        Node::new("MOFA-JS-002", "Joint Secretary (East Asia)", EntityKind::Person)
            .with_role("Joint Secretary - East Asia Division")
            .with_threat(30)
            .with_description(
                "Managing Indonesia President's visit and bilateral cooperation. Coordinating \
                 with PM Office on high-level diplomatic engagements.",
            )
            .with_detail("Designation", "Joint Secretary")
            .with_detail("Division", "East Asia & Pacific")
            .with_detail("Current Project", "Indonesia President Visit (Dec 8-9, 2025)")
            .with_detail("Coordination", "PM Office, Protocol Division")
            .with_detail("Last Activity", "Visit Directive (Nov 2025)")
            .with_detail("Clearance", "Secret - Diplomatic"),
        Node::new("MOFA-JS-003", "Joint Secretary (Middle East)", EntityKind::Person)
            .with_role("Joint Secretary - Middle East Division")
            .with_threat(32)
            .with_description(
                "Overseeing Iran MoU implementation and agreements signed during Iranian \
                 President's visit. Coordinating with all ministries on implementation.",
            )
            .with_detail("Designation", "Joint Secretary")
            .with_detail("Division", "Middle East")
            .with_detail("Current Project", "Iran President Visit MoU Implementation")
            .with_detail("OM Reference", "O.M. dated 03.10.2025")
            .with_detail("Last Activity", "Coordination with Secretaries (Oct 2025)")
            .with_detail("Clearance", "Secret - Diplomatic"),
        Node::new("MOFA-JS-001", "Joint Secretary (Europe)", EntityKind::Person)
            .with_role("Joint Secretary - Europe Division")
            .with_threat(28)
            .with_description(
                "Handles European affairs including Hungary implementation and UNIDROIT \
                 convention matters. Coordinates with Russia on IGC meetings.",
            )
            .with_detail("Designation", "Joint Secretary")
            .with_detail("Division", "Europe")
            .with_detail("Current Projects", "Hungary Implementation, Pak-Russia IGC")
            .with_detail("Last Meeting", "10th Pak-Russia IGC Session")
            .with_detail("Clearance", "Secret - Diplomatic"),
        Node::new("LOC-MOFA-HQ", "MOFA Headquarters - Islamabad", EntityKind::Loc)
            .with_role("Diplomatic HQ")
            .with_threat(25)
            .with_description(
                "Main headquarters building on Constitution Avenue. Houses all divisions \
                 including Political, Economic, UN Affairs, and regional desks.",
            )
            .with_detail("Address", "Constitution Avenue, Red Zone, Islamabad")
            .with_detail("Security Level", "High - Armed Guards, Multi-layer Clearance")
            .with_detail("Key Divisions", "Political, Economic, Legal, Protocol")
            .with_detail("Meeting Rooms", "15+ (including 3 secure rooms)")
            .with_detail("Last Surveillance", "Ongoing"),
        Node::new("EVENT-INDO-001", "Indonesia President Visit", EntityKind::Org)
            .with_role("State Visit Event")
            .with_threat(42)
            .with_description(
                "High-level state visit by President of Indonesia to Pakistan on December 8-9, \
                 2025. Multiple bilateral agreements and MoUs to be signed. Protocol Division \
                 coordinating security arrangements.",
            )
            .with_detail("Date", "December 8-9, 2025")
            .with_detail("Status", "Confirmed - Protocol Active")
            .with_detail("Delegation Size", "45+ officials")
            .with_detail("Security Level", "Presidential - Category A")
            .with_detail("Agreements", "Trade, Defense, Energy MoUs")
            .with_detail("Venue", "Aiwan-e-Sadr, PM House"),
        Node::new("FINANCE-IRAN-001", "Iran MoU Implementation", EntityKind::Finance)
            .with_role("Bilateral Agreement")
            .with_threat(38)
            .with_description(
                "Implementation of MoUs and Agreements signed during Iranian President's visit. \
                 Multi-ministry coordination required for energy, trade, and security \
                 cooperation frameworks.",
            )
            .with_detail("Reference", "O.M. dated 03.10.2025")
            .with_detail("Ministries Involved", "15+ Federal Ministries")
            .with_detail("Sectors", "Energy, Trade, Defense, Agriculture")
            .with_detail("Implementation Timeline", "6 months")
            .with_detail("Coordination", "All Secretaries briefed")
            .with_detail("Status", "Active Implementation Phase"),
        Node::new("COMMS-NMC-001", "124th NMC Meeting", EntityKind::Comms)
            .with_role("National Monitoring Committee")
            .with_threat(35)
            .with_description(
                "124th National Monitoring Committee meeting scheduled from January 5, 2026. \
                 Inter-ministerial coordination platform for policy implementation and \
                 monitoring.",
            )
            .with_detail("Meeting Date", "January 5, 2026")
            .with_detail("Participants", "All Federal Secretaries")
            .with_detail("Agenda", "Policy Implementation Review")
            .with_detail("Venue", "Cabinet Division, Islamabad")
            .with_detail("Classification", "Official Use Only")
            .with_detail("Coordination", "Foreign Secretary leading"),
        Node::new("P-002", "Maj Gen Ahmed Jabbar", EntityKind::Person)
            .with_role("DG Analysis, ISI")
            .with_threat(88)
            .with_description(
                "Director General of Analysis at ISI. Responsible for strategic planning of \
                 covert operations in the Kashmir valley. Intercepts suggest recent travel to \
                 forward operating bases.",
            )
            .with_detail("Unit", "ISI Directorate S")
            .with_detail("Clearance", "TS/SCI (Pak)")
            .with_detail("Last Seen", "Islamabad H-8"),
        Node::new("P-003", "Brig Salman Butt", EntityKind::Person)
            .with_role("Sector Commander")
            .with_threat(82)
            .with_description(
                "Sector Commander for Kotli sector. Directly supervises launch pads for \
                 infiltration. Reports directly to Lt Gen Khan. Known hardliner.",
            )
            .with_detail("Sector", "Kotli")
            .with_detail("Command", "3rd Bde")
            .with_detail("Status", "Active"),
        Node::new("O-001", "ISI Directorate S", EntityKind::Org)
            .with_role("Covert Ops")
            .with_threat(90)
            .with_description(
                "The secretive covert operations wing of the ISI. Focused on supporting \
                 non-state actors in neighboring regions. Primary source of funding and \
                 logistics.",
            )
            .with_detail("HQ", "Islamabad")
            .with_detail("Focus", "External Ops")
            .with_detail("Budget", "Classified"),
        Node::new("O-002", "Lashkar-e-Taiba", EntityKind::Org)
            .with_role("Proxy Group")
            .with_threat(95)
            .with_description(
                "Proscribed militant organization operating out of Muridke. Maintains training \
                 camps in Muzaffarabad. Heavily funded by front charities.",
            )
            .with_detail("Status", "Proscribed")
            .with_detail("Leader", "Hafiz Saeed")
            .with_detail("Strength", "Est. 2500"),
        Node::new("L-001", "Rawalpindi GHQ", EntityKind::Loc)
            .with_role("Military HQ")
            .with_threat(30)
            .with_description(
                "General Headquarters of the Pakistan Army. Nerve center for all military \
                 operations. Highly secured facility with dual-layer perimeter.",
            )
            .with_detail("Coordinates", "33.59° N, 73.04° E")
            .with_detail("Secure Comms", "Active")
            .with_detail("Surveillance", "High"),
        Node::new("F-001", "Dubai Hawala", EntityKind::Finance)
            .with_role("Laundering")
            .with_threat(70)
            .with_description(
                "Hawala network operating out of Deira, Dubai using gold traders as fronts. \
                 Primary channel for moving illicit funds to operational commanders.",
            )
            .with_detail("Hub", "Deira")
            .with_detail("Volume", "$4M/mo")
            .with_detail("Front", "Al-Jadeed Jewelers"),
    ]
}

/// Seed edges
pub fn seed_edges() -> Vec<Edge> {
    vec![
        // Military command chain
        Edge::new("e1", "T-1001", "P-002", "COMMANDS"),
        Edge::new("e2", "T-1001", "P-003", "COMMANDS"),
        Edge::new("e3", "P-002", "O-001", "DIRECTS"),
        Edge::new("e4", "O-001", "O-002", "HANDLES"),
        Edge::new("e5", "T-1001", "L-001", "STATIONED_AT"),
        Edge::new("e6", "T-1001", "F-001", "FUNDS").with_kind(RelationKind::Financial),
        // Ministry staff
        Edge::new("e7", "MOFA-FS-001", "ORG-MOFA-001", "HEADS"),
        Edge::new("e8", "MOFA-JS-001", "ORG-MOFA-001", "WORKS_AT"),
        Edge::new("e9", "MOFA-JS-002", "ORG-MOFA-001", "WORKS_AT"),
        Edge::new("e10", "MOFA-JS-003", "ORG-MOFA-001", "WORKS_AT"),
        Edge::new("e11", "ORG-MOFA-001", "LOC-MOFA-HQ", "OPERATES_FROM"),
        // Ministry projects
        Edge::new("e12", "MOFA-JS-002", "EVENT-INDO-001", "COORDINATES"),
        Edge::new("e13", "MOFA-JS-003", "FINANCE-IRAN-001", "IMPLEMENTS")
            .with_kind(RelationKind::Financial),
        Edge::new("e14", "MOFA-FS-001", "COMMS-NMC-001", "CHAIRS").with_kind(RelationKind::Comms),
        // Liaison between the networks
        Edge::new("e15", "ORG-MOFA-001", "T-1001", "COORDINATES_WITH"),
        Edge::new("e16", "ORG-MOFA-001", "O-001", "INTELLIGENCE_LIAISON")
            .with_kind(RelationKind::Comms),
    ]
}

const MILITARY_NETWORK: [&str; 7] = ["T-1001", "P-002", "P-003", "O-001", "O-002", "L-001", "F-001"];

/// Seed topic groups
pub fn seed_topics() -> TopicTable {
    TopicTable::new()
        .with_group("abdul", MILITARY_NETWORK)
        .with_group("military", MILITARY_NETWORK)
        .with_group("isi", ["P-002", "O-001", "O-002", "T-1001"])
        .with_group(
            "mofa",
            [
                "ORG-MOFA-001",
                "MOFA-FS-001",
                "MOFA-JS-001",
                "MOFA-JS-002",
                "MOFA-JS-003",
                "LOC-MOFA-HQ",
                "EVENT-INDO-001",
                "FINANCE-IRAN-001",
                "COMMS-NMC-001",
            ],
        )
        .with_group(
            "foreign affairs",
            ["ORG-MOFA-001", "MOFA-FS-001", "MOFA-JS-001", "MOFA-JS-002", "MOFA-JS-003"],
        )
        .with_group("asad majeed", ["MOFA-FS-001", "ORG-MOFA-001", "COMMS-NMC-001"])
        .with_group("indonesia", ["MOFA-JS-002", "EVENT-INDO-001", "ORG-MOFA-001"])
        .with_group("iran", ["MOFA-JS-003", "FINANCE-IRAN-001", "ORG-MOFA-001"])
        .with_group("russia", ["MOFA-JS-001", "ORG-MOFA-001"])
        .with_group("nmc", ["COMMS-NMC-001", "MOFA-FS-001", "ORG-MOFA-001"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphSnapshot;

    #[test]
    fn test_seed_is_consistent() {
        let snapshot = GraphSnapshot::from_parts(seed_nodes(), seed_edges()).unwrap();
        assert_eq!(snapshot.node_count(), 16);
        assert_eq!(snapshot.edge_count(), 16);
    }

    #[test]
    fn test_topics_reference_seed_nodes() {
        let nodes = seed_nodes();
        for (phrase, ids) in seed_topics().iter() {
            for id in ids {
                assert!(nodes.iter().any(|n| &n.id == id), "{} -> {} missing", phrase, id);
            }
        }
        assert_eq!(seed_topics().len(), 10);
    }
}
