//! The fixed catalog of service offerings shown on the landing page.

/// Every offering a visitor can select, in display order.
pub const SERVICE_CATALOG: [&str; 15] = [
    "AI Calling Agent",
    "Game Development",
    "Mobile App Development",
    "Full-Stack Web Development",
    "Cybersecurity Solutions",
    "Robotic Process Automation",
    "Cloud Computing Solutions",
    "Artificial Intelligence & ML Development",
    "Data Analytics & Business Intelligence",
    "Internet of Things (IoT) Development",
    "VR/AR Solutions",
    "Blockchain Development",
    "AI Chatbot Development",
    "UX/UI Design",
    "Business Automation",
];

/// Whether `label` is one of the catalog offerings (exact match).
#[must_use]
pub fn is_catalog_service(label: &str) -> bool {
    SERVICE_CATALOG.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_labels_are_unique() {
        let unique: HashSet<&str> = SERVICE_CATALOG.iter().copied().collect();
        assert_eq!(unique.len(), SERVICE_CATALOG.len());
    }

    #[test]
    fn membership_is_exact() {
        assert!(is_catalog_service("UX/UI Design"));
        assert!(!is_catalog_service("ux/ui design"));
        assert!(!is_catalog_service("UX/UI Design "));
        assert!(!is_catalog_service(""));
    }
}
