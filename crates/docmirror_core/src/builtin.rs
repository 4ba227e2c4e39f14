//! The digital forensics reference catalog mirrored by the `docmirror` binary.

use crate::catalog::{Catalog, StaticCatalog};

const FEDERATED_TESTING: &str =
    "https://www.nist.gov/itl/ssd/software-quality-group/computer-forensics-tool-testing-program-cftt/federated-testing";
const AI_RMF_KNOWLEDGE_BASE: &str =
    "https://airc.nist.gov/AI_RMF_Knowledge_Base/Technical_And_Policy_Documents";

const FORENSICS_DOCUMENTS: StaticCatalog<'static> = &[
    (
        "NIST_CFTT",
        &[
            (
                "General",
                &[
                    "https://www.nist.gov/itl/ssd/software-quality-group/computer-forensics-tool-testing-program-cftt",
                    "https://www.nist.gov/programs-projects/computer-forensics-tool-testing-cftt",
                    "https://www.dhs.gov/science-and-technology/nist-cftt-reports",
                ],
            ),
            (
                "Disk_Imaging",
                &[
                    FEDERATED_TESTING,
                    "https://www.dhs.gov/sites/default/files/publications/Test Report_NIST Disk Imaging Tool CFT v3.4.1 February 2018_508_Final.pdf",
                    "https://www.utica.edu/academic/institutes/ecii/publications/articles/A04BC142-F4C3-EB2B-462CCC0C887B3CBE.pdf",
                ],
            ),
            ("Write_Blocking", &[FEDERATED_TESTING]),
            ("Mobile_Device", &[FEDERATED_TESTING]),
            ("String_Search", &[FEDERATED_TESTING]),
        ],
    ),
    (
        "NIST_AI",
        &[
            (
                "Core_Framework",
                &[
                    "https://nvlpubs.nist.gov/nistpubs/ai/nist.ai.100-1.pdf",
                    AI_RMF_KNOWLEDGE_BASE,
                ],
            ),
            (
                "Security",
                &["https://csrc.nist.gov/Topics/technologies/artificial-intelligence"],
            ),
            (
                "Trustworthy_AI",
                &[
                    "https://nvlpubs.nist.gov/nistpubs/ai/NIST.AI.600-1.pdf",
                    AI_RMF_KNOWLEDGE_BASE,
                ],
            ),
        ],
    ),
    (
        "SWGDE",
        &[
            (
                "Computer_Forensics",
                &[
                    "https://www.swgde.org/18-f-003-2/",
                    "https://www.swgde.org/17-f-002-2-1/",
                    "https://www.swgde.org/21-f-002-2/",
                    "https://www.swgde.org/18-f-001-2/",
                    "https://www.swgde.org/12-f-003-2/",
                    "https://www.swgde.org/documents/published-complete-listing/14-f-002-best-practices-for-handling-damaged-digital-storage-devices/",
                    "https://www.swgde.org/documents/published-complete-listing/22-f-003-best-practices-for-remote-collection-of-digital-evidence-from-an-endpoint/",
                    "https://www.swgde.org/wp-content/uploads/2025/09/SWGDE-17-F-001-3.0-Recommendations-for-Historical-Cell-Site-Analysis.pdf",
                    "https://www.swgde.org/documents/published-complete-listing/23-f-004-best-practices-for-digital-evidence-acquisition-preservation-and-analysis-from-cloud-service-providers/",
                    "https://www.swgde.org/documents/published-complete-listing/23-f-006-tech-notes-on-cryptocurrency/",
                    "https://www.swgde.org/documents/published-complete-listing/23-f-003-best-practices-for-internet-of-things-seizure-and-analysis/",
                    "https://www.swgde.org/documents/published-complete-listing/12-f-006-core-competencies-for-digital-forensics/",
                    "https://www.swgde.org/documents/published-complete-listing/12-f-004-best-practices-for-vehicle-infotainment-and-telematics-systems/",
                    "https://www.swgde.org/documents/published-complete-listing/16-f-002-considerations-for-required-minimization-of-digital-evidence-seizure/",
                    "https://www.swgde.org/documents/published-complete-listing/23-f-005-swgde-best-practices-apple-macos-forensic-acquisition/",
                    "https://www.swgde.org/documents/published-complete-listing/21-f-001-best-practices-for-acquiring-online-content/",
                    "https://www.swgde.org/documents/published-complete-listing/16-f-001-linux-tech-notes/",
                    "https://www.swgde.org/documents/published-complete-listing/22-f-004-best-practices-for-obtaining-google-reverse-location-data-for-investigative-purposes/",
                ],
            ),
            (
                "Video",
                &[
                    "https://www.swgde.org/documents/published-complete-listing/18-m-001-video-and-audio-redaction-guidelines/",
                    "https://www.swgde.org/documents/published-complete-listing/18-v-001-best-practices-for-digital-forensic-video-analysis/",
                    "https://www.swgde.org/documents/published-by-committee/video/",
                ],
            ),
            (
                "Photography",
                &["https://www.swgde.org/documents/published-by-committee/photography/"],
            ),
            (
                "Quality_Standards",
                &[
                    "https://www.swgde.org/documents/published-complete-listing/22-q-001-introduction-to-testimony-in-digital-and-multimedia-forensics/",
                    "https://www.nist.gov/document/swgde-18-q-001-10-minimum-requirements-testing-tools-used-digital-and-multimedia-forensics",
                    "https://www.swgde.org/documents/published-by-committee/quality-standards/",
                ],
            ),
            (
                "Imaging",
                &["https://www.swgde.org/documents/published-by-committee/imaging/"],
            ),
            (
                "Audio",
                &["https://www.swgde.org/documents/published-by-committee/audio/"],
            ),
            (
                "Multimedia",
                &["https://www.swgde.org/documents/published-complete-listing/14-f-001-digital-and-multimedia-evidence-digital-forensics-as-a-forensic-science-discipline/"],
            ),
        ],
    ),
];

/// NIST CFTT, NIST AI and SWGDE documents, grouped by source and category.
pub fn forensics_catalog() -> Catalog {
    Catalog::from_static(FORENSICS_DOCUMENTS)
}
