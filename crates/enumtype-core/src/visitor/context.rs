///
/// VisitorContext
/// Narrow interface validators report non-fatal issues through.
///

pub trait VisitorContext {
    fn add_issue(&mut self, issue: Issue);
    fn add_issue_at(&mut self, seg: PathSegment, issue: Issue);
}

impl dyn VisitorContext + '_ {
    pub fn issue(&mut self, msg: impl Into<String>) {
        self.add_issue(Issue::from(msg.into()));
    }

    pub fn issue_at(&mut self, seg: PathSegment, msg: impl Into<String>) {
        self.add_issue_at(seg, Issue::from(msg.into()));
    }
}

///
/// Issue
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Issue {
    pub message: String,
}

impl From<String> for Issue {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for Issue {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

///
/// PathSegment
///
/// Record fields are runtime names, so `Field` owns its text.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathSegment {
    Empty,
    Field(String),
}

impl From<&str> for PathSegment {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Self::Empty
        } else {
            Self::Field(s.to_string())
        }
    }
}
