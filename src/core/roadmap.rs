use crate::domain::model::{RoadmapItem, RoadmapStatus};
use serde::Serialize;

/// Display bucket a roadmap status maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    Now,
    Next,
    Done,
}

impl GroupKey {
    pub const ORDER: [GroupKey; 3] = [GroupKey::Now, GroupKey::Next, GroupKey::Done];

    pub fn for_status(status: RoadmapStatus) -> Self {
        match status {
            RoadmapStatus::InProgress => GroupKey::Now,
            RoadmapStatus::Planning => GroupKey::Next,
            RoadmapStatus::Completed => GroupKey::Done,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            GroupKey::Now => "now",
            GroupKey::Next => "next",
            GroupKey::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GroupKey::Now => "Now",
            GroupKey::Next => "Next",
            GroupKey::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoadmapGroups {
    pub now: Vec<RoadmapItem>,
    pub next: Vec<RoadmapItem>,
    pub done: Vec<RoadmapItem>,
}

impl RoadmapGroups {
    pub fn get(&self, key: GroupKey) -> &[RoadmapItem] {
        match key {
            GroupKey::Now => &self.now,
            GroupKey::Next => &self.next,
            GroupKey::Done => &self.done,
        }
    }

    /// Buckets in display order: Now, Next, Done.
    pub fn iter(&self) -> impl Iterator<Item = (GroupKey, &[RoadmapItem])> + '_ {
        GroupKey::ORDER.into_iter().map(move |key| (key, self.get(key)))
    }

    pub fn len(&self) -> usize {
        self.now.len() + self.next.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partitions items by status. Every item lands in exactly one bucket and
/// relative order within a bucket follows the input.
pub fn group_roadmap(items: &[RoadmapItem]) -> RoadmapGroups {
    let mut groups = RoadmapGroups::default();
    for item in items {
        let bucket = match GroupKey::for_status(item.status) {
            GroupKey::Now => &mut groups.now,
            GroupKey::Next => &mut groups.next,
            GroupKey::Done => &mut groups.done,
        };
        bucket.push(item.clone());
    }
    groups
}

/// Fixed visual-completion heuristic for progress bars, not a measured value.
pub fn progress_for(status: RoadmapStatus) -> f64 {
    match status {
        RoadmapStatus::Planning => 0.15,
        RoadmapStatus::InProgress => 0.55,
        RoadmapStatus::Completed => 1.0,
    }
}
