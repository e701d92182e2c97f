//! Required-document checklist for a service name.
//!
//! Rules are checked top to bottom and the first rule with a keyword contained
//! in the service name wins. The order matters: a name like
//! "पेंशन प्रमाण पत्र" matches the certificate rule, not the pension rule.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRuleKind {
    IdentityCard,
    VoterRegistration,
    Passport,
    Certificate,
    Pension,
}

#[derive(Debug, PartialEq)]
pub struct DocumentRule {
    pub kind: DocumentRuleKind,
    pub keywords: &'static [&'static str],
    pub documents: &'static [&'static str],
}

impl DocumentRule {
    pub fn matches(&self, service_name: &str) -> bool {
        self.keywords.iter().any(|k| service_name.contains(k))
    }
}

pub const DOCUMENT_RULES: &[DocumentRule] = &[
    DocumentRule {
        kind: DocumentRuleKind::IdentityCard,
        keywords: &["पैन", "आधार"],
        documents: &[
            "आधार कार्ड",
            "पासपोर्ट साइज फोटो",
            "हस्ताक्षर",
            "मोबाइल नंबर",
        ],
    },
    DocumentRule {
        kind: DocumentRuleKind::VoterRegistration,
        keywords: &["वोटर", "मतदाता"],
        documents: &[
            "आधार कार्ड",
            "पासपोर्ट साइज फोटो",
            "पते का प्रमाण",
            "जन्म तिथि का प्रमाण",
        ],
    },
    DocumentRule {
        kind: DocumentRuleKind::Passport,
        keywords: &["पासपोर्ट"],
        documents: &[
            "आधार कार्ड",
            "पैन कार्ड",
            "जन्म प्रमाण पत्र",
            "पते का प्रमाण",
            "10वीं की मार्कशीट",
            "पासपोर्ट साइज फोटो",
        ],
    },
    DocumentRule {
        kind: DocumentRuleKind::Certificate,
        keywords: &["प्रमाण पत्र"],
        documents: &[
            "आधार कार्ड",
            "राशन कार्ड",
            "स्व-घोषणा पत्र",
            "पासपोर्ट साइज फोटो",
        ],
    },
    DocumentRule {
        kind: DocumentRuleKind::Pension,
        keywords: &["पेंशन"],
        documents: &[
            "आधार कार्ड",
            "बैंक पासबुक",
            "आयु प्रमाण पत्र",
            "पासपोर्ट साइज फोटो",
        ],
    },
];

pub const FALLBACK_DOCUMENTS: &[&str] = &["आधार कार्ड", "पासपोर्ट साइज फोटो", "मोबाइल नंबर"];

pub fn rule_for(service_name: &str) -> Option<&'static DocumentRule> {
    DOCUMENT_RULES.iter().find(|rule| rule.matches(service_name))
}

/// Total: every input, including the empty string, gets a non-empty list.
pub fn documents_for(service_name: &str) -> &'static [&'static str] {
    rule_for(service_name)
        .map(|rule| rule.documents)
        .unwrap_or(FALLBACK_DOCUMENTS)
}
