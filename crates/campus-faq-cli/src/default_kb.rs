//! Built-in knowledge base for campus enquiries.
//!
//! These entries ship with the binary so the chat works out of the box; a
//! `--kb <file.json>` flag replaces them entirely. Multi-word phrases sit
//! alongside their single-word anchors so the longest-n-gram policy has
//! something to prefer (e.g. "annual fee" over "fee").

use campus_faq::KnowledgeEntry;

/// The built-in phrase -> answer entries, in compilation order.
pub(crate) fn default_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            "admission",
            "Admissions start in May every year. Visit the official website for online applications.",
        ),
        KnowledgeEntry::new(
            "fee",
            "The annual fee for the AI & ML department is ₹1,50,000.",
        ),
        KnowledgeEntry::new(
            "annual fee",
            "The annual fee for the AI & ML department is ₹1,50,000, payable at the start of the academic year.",
        ),
        KnowledgeEntry::new("principal", "Our principal is Dr. K. Venkatesh."),
        KnowledgeEntry::new(
            "college",
            "This is Sri Venkateswara College of Engineering and Technology.",
        ),
        KnowledgeEntry::new(
            "placement",
            "Our placement cell partners with TCS, Infosys, and Wipro.",
        ),
        KnowledgeEntry::new("courses", "We offer B.Tech, M.Tech, and MBA programs."),
        KnowledgeEntry::new(
            "ai",
            "The AI lab is located in Block B, 2nd floor with GPU systems.",
        ),
        KnowledgeEntry::new(
            "ai lab",
            "The AI lab is in Block B, 2nd floor, equipped with GPU systems for student projects.",
        ),
        KnowledgeEntry::new(
            "library",
            "The library is open from 8 AM to 8 PM on weekdays.",
        ),
        KnowledgeEntry::new(
            "library timings",
            "The library is open from 8 AM to 8 PM on weekdays.",
        ),
        KnowledgeEntry::new("canteen", "The canteen is open from 9 AM to 5 PM."),
        KnowledgeEntry::new(
            "hostel",
            "Hostel facilities are available with Wi-Fi and 24/7 security.",
        ),
    ]
}
