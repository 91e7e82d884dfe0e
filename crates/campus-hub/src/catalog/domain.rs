use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identifier of a posting on the project board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub avatar: String,
}

impl TeamMember {
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

/// Faculty contact attached to administrator postings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminContact {
    pub name: String,
    pub department: String,
    pub email: String,
    pub avatar: String,
}

/// A project posting. Catalog entries are read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<String>,
    pub tags: Vec<String>,
    pub deadline: NaiveDate,
    pub posted_on: NaiveDate,
    pub team_size: u16,
    pub team_members: Vec<TeamMember>,
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_contact: Option<AdminContact>,
}

impl Project {
    /// Unfilled seats; rosters longer than the team size report zero.
    pub fn open_slots(&self) -> usize {
        usize::from(self.team_size).saturating_sub(self.team_members.len())
    }

    pub fn is_full(&self) -> bool {
        self.open_slots() == 0
    }

    /// `needle` must already be lowercased.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    pub fn has_any_tag(&self, tags: &BTreeSet<String>) -> bool {
        self.tags.iter().any(|tag| tags.contains(tag))
    }

    pub fn card(&self) -> ProjectCardView {
        ProjectCardView::from(self)
    }

    pub fn detail(&self) -> ProjectDetailView {
        ProjectDetailView::from(self)
    }
}

/// Board listing entry. Only the first few member avatars are shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCardView {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub deadline: NaiveDate,
    pub team_size: u16,
    pub capacity: String,
    pub visible_members: Vec<TeamMember>,
    pub hidden_member_count: usize,
    pub is_admin: bool,
}

impl ProjectCardView {
    pub const VISIBLE_MEMBERS: usize = 3;
}

impl From<&Project> for ProjectCardView {
    fn from(project: &Project) -> Self {
        let visible_members = project
            .team_members
            .iter()
            .take(Self::VISIBLE_MEMBERS)
            .cloned()
            .collect();

        Self {
            id: project.id,
            title: project.title.clone(),
            description: project.description.clone(),
            tags: project.tags.clone(),
            deadline: project.deadline,
            team_size: project.team_size,
            capacity: format!("{}/{}", project.team_members.len(), project.team_size),
            visible_members,
            hidden_member_count: project
                .team_members
                .len()
                .saturating_sub(Self::VISIBLE_MEMBERS),
            is_admin: project.is_admin,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetailView {
    pub id: ProjectId,
    pub title: String,
    pub tags: Vec<String>,
    pub posted_on: NaiveDate,
    pub deadline: NaiveDate,
    pub team_size: u16,
    pub about: String,
    pub progress: u8,
    pub requirements: Vec<String>,
    pub team_members: Vec<TeamMember>,
    pub open_slots: usize,
    pub contact: AdminContactView,
    pub is_admin: bool,
}

impl ProjectDetailView {
    /// Shown when progress is missing or zero.
    pub const DEFAULT_PROGRESS: u8 = 10;
    pub const NO_REQUIREMENTS: &'static str = "No specific requirements listed for this project.";
}

impl From<&Project> for ProjectDetailView {
    fn from(project: &Project) -> Self {
        let requirements = if project.requirements.is_empty() {
            vec![Self::NO_REQUIREMENTS.to_string()]
        } else {
            project.requirements.clone()
        };

        Self {
            id: project.id,
            title: project.title.clone(),
            tags: project.tags.clone(),
            posted_on: project.posted_on,
            deadline: project.deadline,
            team_size: project.team_size,
            about: project
                .full_description
                .clone()
                .unwrap_or_else(|| project.description.clone()),
            progress: project
                .progress
                .filter(|progress| *progress > 0)
                .unwrap_or(Self::DEFAULT_PROGRESS),
            requirements,
            team_members: project.team_members.clone(),
            open_slots: project.open_slots(),
            contact: AdminContactView::from(project.admin_contact.as_ref()),
            is_admin: project.is_admin,
        }
    }
}

/// Contact block on the detail page, with placeholders for student postings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminContactView {
    pub name: String,
    pub department: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub initial: char,
}

impl From<Option<&AdminContact>> for AdminContactView {
    fn from(contact: Option<&AdminContact>) -> Self {
        match contact {
            Some(contact) => Self {
                name: contact.name.clone(),
                department: contact.department.clone(),
                email: contact.email.clone(),
                avatar: Some(contact.avatar.clone()),
                initial: contact.name.chars().next().unwrap_or('A'),
            },
            None => Self {
                name: "Project Admin".to_string(),
                department: "Computer Science Department".to_string(),
                email: "admin@university.edu".to_string(),
                avatar: None,
                initial: 'A',
            },
        }
    }
}
