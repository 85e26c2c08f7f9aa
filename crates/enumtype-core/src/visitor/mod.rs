//! Issue reporting shared by validators and the record validation pass.
mod context;

pub use context::*;

use std::collections::BTreeMap;

/// Field path -> messages, in path order.
pub type VisitorIssues = BTreeMap<String, Vec<String>>;

///
/// IssueCollector
///
/// Root context: issues without a segment land under the empty key, the rest
/// under their field name.
///

#[derive(Debug, Default)]
pub struct IssueCollector {
    issues: VisitorIssues,
}

impl IssueCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn issues(&self) -> &VisitorIssues {
        &self.issues
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn into_issues(self) -> VisitorIssues {
        self.issues
    }

    fn push_issue(&mut self, seg: PathSegment, issue: Issue) {
        let key = match seg {
            PathSegment::Field(name) => name,
            PathSegment::Empty => String::new(),
        };

        self.issues.entry(key).or_default().push(issue.message);
    }
}

impl VisitorContext for IssueCollector {
    fn add_issue(&mut self, issue: Issue) {
        self.push_issue(PathSegment::Empty, issue);
    }

    fn add_issue_at(&mut self, seg: PathSegment, issue: Issue) {
        self.push_issue(seg, issue);
    }
}

///
/// TESTS
///
