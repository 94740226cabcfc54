//! Learning Roadmap Models
//!
//! `GeneratedRoadmap` is what the model returns. `TrackedRoadmap` is the
//! storable form with milestone ids and completion progress.

use serde::{Deserialize, Serialize};

use crate::services::normalizer::{JsonShape, ResponseSchema};

/// A roadmap as generated by the model.
///
/// `total_days` is taken as reported; it is not reconciled with the
/// milestone estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRoadmap {
    pub title: String,
    pub description: String,
    pub total_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_milestones: Option<u32>,
    pub category: String,
    pub milestones: Vec<Milestone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub estimated_days: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    /// "Beginner", "Intermediate" or "Advanced" as written by the model
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub icon: String,
}

impl ResponseSchema for GeneratedRoadmap {
    const SHAPE: JsonShape = JsonShape::Object;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedMilestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub estimated_days: u32,
    pub topics: Vec<String>,
    pub difficulty: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedRoadmap {
    pub id: String,
    pub title: String,
    pub description: String,
    pub total_days: u32,
    pub completed_milestones: usize,
    pub total_milestones: usize,
    pub category: String,
    pub milestones: Vec<TrackedMilestone>,
}

impl TrackedRoadmap {
    pub fn from_generated(roadmap: GeneratedRoadmap) -> Self {
        let milestones: Vec<TrackedMilestone> = roadmap
            .milestones
            .into_iter()
            .enumerate()
            .map(|(index, m)| TrackedMilestone {
                id: format!("milestone-{}", index),
                title: m.title,
                description: m.description,
                completed: false,
                estimated_days: m.estimated_days,
                topics: m.topics,
                difficulty: m.difficulty,
                icon: m.icon,
            })
            .collect();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: roadmap.title,
            description: roadmap.description,
            total_days: roadmap.total_days,
            completed_milestones: 0,
            total_milestones: milestones.len(),
            category: roadmap.category,
            milestones,
        }
    }

    /// Flip a milestone's completion; returns the new state, or `None` for an unknown id.
    pub fn toggle_milestone(&mut self, milestone_id: &str) -> Option<bool> {
        let milestone = self.milestones.iter_mut().find(|m| m.id == milestone_id)?;
        milestone.completed = !milestone.completed;
        let state = milestone.completed;
        self.recount();
        Some(state)
    }

    /// Mark a milestone done; returns false for an unknown id.
    pub fn complete_milestone(&mut self, milestone_id: &str) -> bool {
        match self.milestones.iter_mut().find(|m| m.id == milestone_id) {
            Some(milestone) => {
                milestone.completed = true;
                self.recount();
                true
            }
            None => false,
        }
    }

    pub fn progress_percentage(&self) -> f64 {
        if self.total_milestones == 0 {
            return 0.0;
        }
        self.completed_milestones as f64 / self.total_milestones as f64 * 100.0
    }

    fn recount(&mut self) {
        self.completed_milestones = self.milestones.iter().filter(|m| m.completed).count();
    }
}
