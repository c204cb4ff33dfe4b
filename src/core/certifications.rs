use crate::domain::model::{RoadmapCategory, RoadmapItem};

/// Certification entries in input order, independent of status grouping.
pub fn certifications_of(items: &[RoadmapItem]) -> Vec<RoadmapItem> {
    items
        .iter()
        .filter(|item| item.category == RoadmapCategory::Certification)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RoadmapStatus;

    fn item(id: &str, category: RoadmapCategory) -> RoadmapItem {
        RoadmapItem {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            target_date: None,
            status: RoadmapStatus::Planning,
            category,
        }
    }

    #[test]
    fn test_certifications_of_is_stable_filter() {
        let items = vec![
            item("az-900", RoadmapCategory::Certification),
            item("ad-lab", RoadmapCategory::Lab),
            item("course", RoadmapCategory::Course),
            item("security-plus", RoadmapCategory::Certification),
        ];
        let ids: Vec<_> = certifications_of(&items).into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["az-900", "security-plus"]);
    }

    #[test]
    fn test_certifications_of_empty() {
        assert!(certifications_of(&[]).is_empty());
        assert!(certifications_of(&[item("lab", RoadmapCategory::Lab)]).is_empty());
    }
}
