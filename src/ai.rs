//! Heuristic ticket triage.
//!
//! A fixed decision table, not a model: the concatenated title and
//! description are lower-cased and tested for substring membership against
//! four keyword tables in priority order. The first matching table wins and
//! carries a hard-coded confidence. Same input, same output, always; there
//! is no training, learning, or external inference call.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Ticket priority, ordered from least to most urgent.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier verdict for one ticket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub category: &'static str,
    pub department: &'static str,
    pub priority: Priority,
    pub confidence: f32,
}

const URGENT_KEYWORDS: &[&str] = &[
    "down", "outage", "critical", "emergency", "urgent", "crashed", "data loss",
];
const SECURITY_KEYWORDS: &[&str] = &[
    "hack",
    "breach",
    "virus",
    "malware",
    "phishing",
    "ransomware",
    "compromised",
];
const NETWORK_KEYWORDS: &[&str] = &[
    "vpn", "wifi", "network", "internet", "connection", "dns", "latency",
];
const ACCOUNT_KEYWORDS: &[&str] = &[
    "password",
    "login",
    "locked out",
    "access",
    "permission",
    "account",
    "mfa",
];

// Table order is the match priority: an urgent keyword beats a security
// keyword, and so on down.
const RULES: &[(&[&str], Classification)] = &[
    (
        URGENT_KEYWORDS,
        Classification {
            category: "Critical Incident",
            department: "Infrastructure",
            priority: Priority::Critical,
            confidence: 0.9,
        },
    ),
    (
        SECURITY_KEYWORDS,
        Classification {
            category: "Security Incident",
            department: "Security Operations",
            priority: Priority::Critical,
            confidence: 0.85,
        },
    ),
    (
        NETWORK_KEYWORDS,
        Classification {
            category: "Network & Connectivity",
            department: "Network Operations",
            priority: Priority::High,
            confidence: 0.8,
        },
    ),
    (
        ACCOUNT_KEYWORDS,
        Classification {
            category: "Access & Permissions",
            department: "Service Desk",
            priority: Priority::High,
            confidence: 0.75,
        },
    ),
];

const DEFAULT_VERDICT: Classification = Classification {
    category: "General Support",
    department: "Service Desk",
    priority: Priority::Medium,
    confidence: 0.6,
};

/// Classify a ticket from its title and description.
///
/// Substring containment, so "down" also matches "shutdown". That is the
/// decision table's documented behavior, not an oversight.
pub fn classify_ticket(title: &str, description: &str) -> Classification {
    let text = format!("{} {}", title, description).to_lowercase();
    for (keywords, verdict) in RULES {
        if keywords.iter().any(|k| text.contains(k)) {
            return *verdict;
        }
    }
    DEFAULT_VERDICT
}

/// Canned next-step suggestions per category.
pub fn generate_suggestions(category: &str) -> &'static [&'static str] {
    match category {
        "Critical Incident" => &[
            "Check the service status dashboard for a known outage",
            "Confirm impact scope with the client before paging",
            "Open a bridge call if more than one client is affected",
        ],
        "Security Incident" => &[
            "Isolate the affected machine from the network",
            "Reset credentials for any account involved",
            "Preserve logs before remediation",
        ],
        "Network & Connectivity" => &[
            "Verify the client's circuit status with the carrier",
            "Check VPN concentrator session counts",
            "Run a traceroute from the client's gateway",
        ],
        "Access & Permissions" => &[
            "Verify the requester's identity before any reset",
            "Check for a lockout in the directory first",
            "Confirm MFA enrollment after the reset",
        ],
        _ => &[
            "Gather reproduction steps from the client",
            "Check recent changes on the affected service",
        ],
    }
}

/// Expected resolution window per priority. Fixed lookup, no history.
pub fn predict_resolution_time(priority: Priority) -> Duration {
    match priority {
        Priority::Critical => Duration::hours(2),
        Priority::High => Duration::hours(8),
        Priority::Medium => Duration::hours(24),
        Priority::Low => Duration::hours(72),
    }
}

/// Escalation advice given how long the ticket has been open.
pub fn recommend_action(priority: Priority, open_for: Duration) -> &'static str {
    match priority {
        Priority::Critical if open_for >= Duration::hours(1) => "Escalate to on-call engineer",
        Priority::Critical => "Notify assigned engineer immediately",
        Priority::High if open_for >= Duration::hours(8) => "Flag for team lead review",
        _ if open_for >= Duration::hours(72) => "Send status update to client and reprioritize",
        _ => "Continue normal queue processing",
    }
}
