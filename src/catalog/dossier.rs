//! Dossier generation
//!
//! Each (entity kind, label) pair gets a fresh set of simulated documents
//! drawn from kind-specific templates. Labels naming the foreign ministry or
//! its officials bypass randomization and always receive the same
//! hand-authored official file set.

use crate::config::DossierConfig;
use crate::graph::{Document, DocumentKind, EntityKind};
use crate::random::ChoiceSource;
use chrono::{Days, NaiveDate};
use tracing::warn;

/// Title, document kind and tags a generated document is built from
#[derive(Debug, Clone, Copy)]
pub struct DocumentTemplate {
    pub title: &'static str,
    pub kind: DocumentKind,
    pub tags: &'static [&'static str],
}

const fn template(
    title: &'static str,
    kind: DocumentKind,
    tags: &'static [&'static str],
) -> DocumentTemplate {
    DocumentTemplate { title, kind, tags }
}

const PERSON_TEMPLATES: &[DocumentTemplate] = &[
    template("SURVEILLANCE LOG: SECTOR 4", DocumentKind::Log, &["Surveillance", "Movement"]),
    template("INTERCEPTED GSM CALL #9921", DocumentKind::Transcript, &["Sigint", "Voice"]),
    template("TRAVEL PATTERN ANALYSIS Q4", DocumentKind::Report, &["Travel", "Pattern"]),
    template("ASSET FINANCIAL LINKAGES", DocumentKind::Brief, &["Finance", "Audit"]),
    template("HUMINT FIELD REPORT: CONTACT", DocumentKind::Memo, &["Humint", "Field"]),
];

const ORG_TEMPLATES: &[DocumentTemplate] = &[
    template("FUNDING STREAM ANALYSIS", DocumentKind::Report, &["Finance", "Laundering"]),
    template("RECRUITMENT NETWORK MAP", DocumentKind::Brief, &["HR", "Network"]),
    template("MEETING MINUTES: SHURA COUNCIL", DocumentKind::Memo, &["Leadership", "Strategy"]),
    template("PROCUREMENT LOGISTICS", DocumentKind::Log, &["Supply Chain", "Arms"]),
    template("FRONT COMPANY AUDIT", DocumentKind::Report, &["Finance", "Cover"]),
];

const LOC_TEMPLATES: &[DocumentTemplate] = &[
    template("SATELLITE IMAGERY ANALYSIS", DocumentKind::Report, &["Imint", "Geo"]),
    template("PERIMETER SECURITY LAYOUT", DocumentKind::Blueprint, &["Infra", "Security"]),
    template("POWER CONSUMPTION PATTERNS", DocumentKind::Log, &["Utility", "Signature"]),
    template("LOCAL POPULATION SENTIMENT", DocumentKind::Brief, &["Humint", "Social"]),
    template("ACCESS ROUTE VULNERABILITIES", DocumentKind::Memo, &["Tactical", "Entry"]),
];

const FINANCE_TEMPLATES: &[DocumentTemplate] = &[
    template("SWIFT TRANSACTION LOGS", DocumentKind::Log, &["Bank", "Transfer"]),
    template("SHELL COMPANY REGISTRATION", DocumentKind::Memo, &["Legal", "Cover"]),
    template("CURRENCY EXCHANGE PATTERNS", DocumentKind::Report, &["Forex", "Laundering"]),
    template("CRYPTOCURRENCY WALLET DUMP", DocumentKind::Log, &["Crypto", "Tech"]),
    template("AUDIT TRAIL: ACCOUNT 8812", DocumentKind::Brief, &["Audit", "Trace"]),
];

const COMMS_TEMPLATES: &[DocumentTemplate] = &[
    template("SIGNAL FREQUENCY ANALYSIS", DocumentKind::Report, &["Sigint", "Tech"]),
    template("DECRYPTED MESSAGE BUFFER", DocumentKind::Transcript, &["Crypto", "Content"]),
    template("NETWORK TOPOLOGY MAP", DocumentKind::Blueprint, &["Infra", "Comms"]),
    template("CALL DURATION STATISTICS", DocumentKind::Log, &["Meta", "Analysis"]),
    template("DEVICE IMEI TRACKING", DocumentKind::Memo, &["Hardware", "Track"]),
];

const WEAPON_TEMPLATES: &[DocumentTemplate] = &[
    template("BALLISTIC ANALYSIS REPORT", DocumentKind::Report, &["Forensics", "Ballistics"]),
    template("SUPPLY CHAIN TRACE", DocumentKind::Log, &["Logistics", "Origin"]),
    template("DEPLOYMENT SCHEMATIC", DocumentKind::Blueprint, &["Tactical", "Deploy"]),
];

/// Title suffixes for randomized documents
pub const CLASSIFICATION_LEVELS: [&str; 3] = ["CONFIDENTIAL", "SECRET", "TOP SECRET"];

/// Label fragments that select the official file set (matched lower-case)
pub const OFFICIAL_TRIGGERS: [&str; 4] = [
    "mofa",
    "ministry of foreign affairs",
    "foreign secretary",
    "asad majeed",
];

/// Templates for an entity kind
pub fn templates_for(kind: EntityKind) -> &'static [DocumentTemplate] {
    match kind {
        EntityKind::Person => PERSON_TEMPLATES,
        EntityKind::Org => ORG_TEMPLATES,
        EntityKind::Loc => LOC_TEMPLATES,
        EntityKind::Finance => FINANCE_TEMPLATES,
        EntityKind::Comms => COMMS_TEMPLATES,
        EntityKind::Weapon => WEAPON_TEMPLATES,
    }
}

/// True when `label` selects the fixed official file set
pub fn is_official(label: &str) -> bool {
    let label = label.to_lowercase();
    OFFICIAL_TRIGGERS.iter().any(|trigger| label.contains(trigger))
}

/// Generates dossiers for new nodes
#[derive(Debug, Clone)]
pub struct DossierGenerator {
    config: DossierConfig,
    /// Latest date a document may carry; also stamped into document bodies
    today: NaiveDate,
}

impl DossierGenerator {
    /// Generator anchored at the current UTC date
    pub fn new(config: DossierConfig) -> Self {
        Self::with_today(config, chrono::Utc::now().date_naive())
    }

    /// Generator anchored at `today`. An `earliest_date` after `today` is
    /// pulled back to `today` so no document is ever dated in the future.
    pub fn with_today(mut config: DossierConfig, today: NaiveDate) -> Self {
        if config.earliest_date > today {
            warn!(
                "Dossier earliest date {} is after {}, clamping",
                config.earliest_date, today
            );
            config.earliest_date = today;
        }
        DossierGenerator { config, today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Dossier for a node of `kind` labeled `label`
    pub fn generate<C: ChoiceSource>(
        &self,
        kind: EntityKind,
        label: &str,
        rng: &mut C,
    ) -> Vec<Document> {
        if is_official(label) {
            return official_dossier();
        }

        let templates = templates_for(kind);
        let count = rng.range_inclusive(self.config.min_documents, self.config.max_documents);
        (0..count)
            .map(|_| {
                let template = rng.pick(templates);
                self.render(template, label, rng)
            })
            .collect()
    }

    fn render<C: ChoiceSource>(
        &self,
        template: &DocumentTemplate,
        label: &str,
        rng: &mut C,
    ) -> Document {
        let number = rng.next_index(10_000);
        let level = rng.pick(&CLASSIFICATION_LEVELS);
        let date = self.random_date(rng);
        let tags: Vec<String> = template.tags.iter().map(|t| t.to_string()).collect();
        let primary = tags.first().map(String::as_str).unwrap_or("signal");

        Document {
            id: format!("DOC-{}", number),
            title: format!("{} // {}", template.title, level),
            kind: template.kind,
            date,
            classification: "NOFORN".to_string(),
            summary: format!(
                "Document contains critical intelligence regarding {}. Analysis indicates high \
                 probability of correlation with ongoing operations. Key focus on {}. \
                 Recommended action: Continued monitoring.",
                label,
                tags.join(" and ")
            ),
            content: format!(
                "FULL DECRYPTED CONTENT:\n\nSUBJECT: {}\nDATE: {}\n\n1. EXECUTIVE SUMMARY\n\
                 Intercepted data reveals significant activity related to {}. Multiple data \
                 points suggest coordinated efforts.\n\n2. KEY FINDINGS\n\
                 - Primary vector established via {}.\n\
                 - Secondary correlation link identified.\n\
                 - Amplitude of activity exceeds baseline by 45%.\n\n\
                 3. RAW DATA\n[REDACTED]... [REDACTED]...",
                template.title, self.today, label, primary
            ),
            tags,
            file_name: None,
        }
    }

    /// Uniform date in `earliest_date..=today`
    fn random_date<C: ChoiceSource>(&self, rng: &mut C) -> NaiveDate {
        let earliest = self.config.earliest_date;
        let span = (self.today - earliest).num_days().max(0) as usize;
        let offset = rng.next_index(span + 1) as u64;
        earliest.checked_add_days(Days::new(offset)).unwrap_or(self.today)
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

struct OfficialRecord {
    id: &'static str,
    title: &'static str,
    kind: DocumentKind,
    date: (i32, u32, u32),
    classification: &'static str,
    tags: &'static [&'static str],
    summary: &'static str,
    content: &'static str,
    file_name: &'static str,
}

const OFFICIAL_RECORDS: &[OfficialRecord] = &[
    OfficialRecord {
        id: "MOFA-DOC-001",
        title: "LETTER TO FOREIGN SECRETARY - 124th NMC MEETING // OFFICIAL",
        kind: DocumentKind::Memo,
        date: (2025, 12, 1),
        classification: "OFFICIAL // FOR OFFICIAL USE ONLY",
        tags: &["NMC", "Coordination"],
        summary: "Letter addressed to Foreign Secretary regarding 124th National Monitoring \
                  Committee (NMC) meeting scheduled from 5 January 2026. Coordination required \
                  with all ministries for agenda preparation and participation confirmation.",
        content: "SUBJECT: 124th NMC MEETING\nDATE: December 2025\n\n1. EXECUTIVE SUMMARY\n\
                  Letter addressed to FS regarding 124th NMC to be held from 5 January 2026.\n\n\
                  2. KEY REQUIREMENTS\n- All ministry participation required\n\
                  - Agenda preparation coordination\n- Inter-ministerial briefings",
        file_name: "Letter addressed to FS regarding 124th NMC to be held from 5 January 2026.pdf",
    },
    OfficialRecord {
        id: "MOFA-DOC-002",
        title: "COMMITTEE DIRECTIVE - INDONESIA PRESIDENT VISIT // CONFIDENTIAL",
        kind: DocumentKind::Brief,
        date: (2025, 11, 20),
        classification: "CONFIDENTIAL // NOFORN",
        tags: &["Indonesia", "State Visit"],
        summary: "Committee directive for President of Indonesia's state visit to Pakistan on \
                  8-9 December 2025. Detailed protocol arrangements, security coordination, \
                  bilateral meeting agendas, and MoU signing ceremonies.",
        content: "SUBJECT: INDONESIA PRESIDENT VISIT\nDATE: December 8-9, 2025\n\n\
                  1. PROTOCOL ARRANGEMENTS\nPresidential-level security and protocol required.\n\n\
                  2. BILATERAL AGENDA\n- Trade agreements\n- Defense cooperation\n\
                  - Energy sector MoUs",
        file_name: "Committee on the Visit of the President of Indonesia to Pakistan on 8_9 December 2025.pdf",
    },
    OfficialRecord {
        id: "MOFA-DOC-003",
        title: "OFFICE MEMORANDUM - IRAN PRESIDENT VISIT MoU // SECRET",
        kind: DocumentKind::Memo,
        date: (2025, 10, 3),
        classification: "SECRET // BILATERAL",
        tags: &["Iran", "MoU Implementation"],
        summary: "O.M. dated 03.10.2025 to all Secretaries regarding implementation of MoUs and \
                  Agreements signed during the visit of President of Iran. Multiple bilateral \
                  cooperation agreements across energy, trade, and security sectors.",
        content: "SUBJECT: IRAN MoU IMPLEMENTATION\nDATE: 03.10.2025\n\n\
                  1. IMPLEMENTATION DIRECTIVE\nAll Secretaries briefed on Iran MoU implementation.\n\n\
                  2. SECTORS COVERED\n- Energy cooperation\n- Trade expansion\n\
                  - Security frameworks",
        file_name: "O.M. dated 03.10.2025 to Secretaries (MoU signed during Iran President visit).pdf",
    },
    OfficialRecord {
        id: "MOFA-DOC-004",
        title: "PAK-RUSSIA IGC - 10th SESSION SIGNED MINUTES // CONFIDENTIAL",
        kind: DocumentKind::Report,
        date: (2025, 11, 14),
        classification: "CONFIDENTIAL // BILATERAL",
        tags: &["Russia", "IGC"],
        summary: "Signed Minutes of 10th Pakistan-Russia Inter-Governmental Commission meeting. \
                  Covers defense cooperation, energy sector collaboration, trade expansion, and \
                  technical assistance programs.",
        content: "SUBJECT: PAK-RUSSIA IGC 10th SESSION\n\n1. DEFENSE COOPERATION\n\
                  Enhanced military-technical cooperation agreements.\n\n\
                  2. ENERGY COLLABORATION\nPipeline projects and energy security frameworks.",
        file_name: "Signed Minutes of 10th Pak_Russia IGC_compressed.pdf",
    },
    OfficialRecord {
        id: "MOFA-DOC-005",
        title: "AGREEMENT - TRANSFER OF SENTENCED PERSONS // OFFICIAL",
        kind: DocumentKind::Brief,
        date: (2025, 11, 28),
        classification: "OFFICIAL // LEGAL AFFAIRS",
        tags: &["Legal", "Prisoner Transfer"],
        summary: "Final checked draft of Agreement on Transfer of Sentenced Persons. Bilateral \
                  prisoner exchange framework for humanitarian considerations. Legal Affairs \
                  Division coordinating with Ministry of Interior.",
        content: "SUBJECT: PRISONER TRANSFER AGREEMENT\n\n1. HUMANITARIAN FRAMEWORK\n\
                  Bilateral prisoner exchange for humanitarian considerations.\n\n\
                  2. LEGAL COORDINATION\nLegal Affairs Division coordinating with Interior Ministry.",
        file_name: "Agreement Transfer of Sentenced Persons_FINAL CHECKED 28.11.25.docx",
    },
    OfficialRecord {
        id: "MOFA-DOC-006",
        title: "HUNGARY IMPLEMENTATION - O.M. DATED 17/04/2025 // OFFICIAL",
        kind: DocumentKind::Memo,
        date: (2025, 4, 17),
        classification: "OFFICIAL",
        tags: &["Hungary", "Implementation"],
        summary: "Office Memorandum on implementation of Hungary cooperation agreements. \
                  Technical education programs, scholarship exchanges, and cultural cooperation \
                  initiatives.",
        content: "SUBJECT: HUNGARY COOPERATION\nDATE: 17/04/2025\n\n1. EDUCATION PROGRAMS\n\
                  Technical education and scholarship exchanges.\n\n\
                  2. CULTURAL COOPERATION\nCultural exchange initiatives and programs.",
        file_name: "O.M dated 17_04_2025_Hungary Implementation.pdf",
    },
];

/// The fixed official file set
pub fn official_dossier() -> Vec<Document> {
    OFFICIAL_RECORDS
        .iter()
        .map(|r| Document {
            id: r.id.to_string(),
            title: r.title.to_string(),
            kind: r.kind,
            date: ymd(r.date.0, r.date.1, r.date.2),
            classification: r.classification.to_string(),
            summary: r.summary.to_string(),
            content: format!("{}\n\n3. REFERENCE\n{}", r.content, r.file_name),
            tags: r.tags.iter().map(|t| t.to_string()).collect(),
            file_name: Some(r.file_name.to_string()),
        })
        .collect()
}
