//! Technique defect vocabulary and the spoken cue for each defect.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Named technique defect. Identifiers are persisted verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormIssue {
    KneesCaving,
    NotDeepEnough,
    TooDeep,
    ForwardLean,
    RoundedBack,
    KneesTooFarForward,
    LockoutIncomplete,
}

impl FormIssue {
    pub const ALL: [FormIssue; 7] = [
        FormIssue::KneesCaving,
        FormIssue::NotDeepEnough,
        FormIssue::TooDeep,
        FormIssue::ForwardLean,
        FormIssue::RoundedBack,
        FormIssue::KneesTooFarForward,
        FormIssue::LockoutIncomplete,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FormIssue::KneesCaving => "knees_caving",
            FormIssue::NotDeepEnough => "not_deep_enough",
            FormIssue::TooDeep => "too_deep",
            FormIssue::ForwardLean => "forward_lean",
            FormIssue::RoundedBack => "rounded_back",
            FormIssue::KneesTooFarForward => "knees_too_far_forward",
            FormIssue::LockoutIncomplete => "lockout_incomplete",
        }
    }

    /// Short spoken feedback for this defect.
    pub fn phrase(&self) -> &'static str {
        match self {
            FormIssue::KneesCaving => "Push your knees out",
            FormIssue::NotDeepEnough => "Go deeper",
            FormIssue::TooDeep => "Don't go too deep",
            FormIssue::ForwardLean => "Keep your chest up",
            FormIssue::RoundedBack => "Keep your back straight",
            FormIssue::KneesTooFarForward => "Keep your knees behind your toes",
            FormIssue::LockoutIncomplete => "Lock out at the top",
        }
    }
}

impl fmt::Display for FormIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FormIssue {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormIssue::ALL
            .iter()
            .copied()
            .find(|issue| issue.id() == s)
            .ok_or_else(|| EngineError::UnknownIssue(s.to_string()))
    }
}

/// Duplicate-free issue list that keeps first-insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueSet(Vec<FormIssue>);

impl IssueSet {
    pub fn new() -> Self {
        IssueSet(Vec::new())
    }

    /// Returns false if the issue was already present.
    pub fn insert(&mut self, issue: FormIssue) -> bool {
        if self.0.contains(&issue) {
            return false;
        }
        self.0.push(issue);
        true
    }

    pub fn extend<I: IntoIterator<Item = FormIssue>>(&mut self, issues: I) {
        for issue in issues {
            self.insert(issue);
        }
    }

    pub fn contains(&self, issue: FormIssue) -> bool {
        self.0.contains(&issue)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = FormIssue> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[FormIssue] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<FormIssue> {
        self.0.clone()
    }
}

impl FromIterator<FormIssue> for IssueSet {
    fn from_iter<I: IntoIterator<Item = FormIssue>>(iter: I) -> Self {
        let mut set = IssueSet::new();
        set.extend(iter);
        set
    }
}
