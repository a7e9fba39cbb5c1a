use crate::github::UpdateBranchError;

/// A comment that can be posted to a pull request.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    text: String,
}

impl Comment {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn render(&self) -> String {
        self.text.clone()
    }
}

/// GitHub has scheduled the branch update and returned `message` about it.
pub fn update_scheduled_comment(preamble: &str, message: &str) -> Comment {
    Comment::new(format!("{preamble}\n\n{message}"))
}

pub fn update_failed_comment(error: &UpdateBranchError) -> Comment {
    Comment::new(format!("Failed to update pull request. Error: {error}"))
}
