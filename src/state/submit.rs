//! Submission screen state: the new-tool draft form.

use crate::models::ToolDraft;

/// Fields of the submission form, in display/tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitField {
    #[default]
    Name,
    Description,
    Category,
    Language,
    GithubUrl,
    WebsiteUrl,
    Tags,
    InstallationGuide,
    UsageExample,
    Author,
}

impl SubmitField {
    pub const ALL: [SubmitField; 10] = [
        SubmitField::Name,
        SubmitField::Description,
        SubmitField::Category,
        SubmitField::Language,
        SubmitField::GithubUrl,
        SubmitField::WebsiteUrl,
        SubmitField::Tags,
        SubmitField::InstallationGuide,
        SubmitField::UsageExample,
        SubmitField::Author,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SubmitField::Name => "Name",
            SubmitField::Description => "Description",
            SubmitField::Category => "Category",
            SubmitField::Language => "Language",
            SubmitField::GithubUrl => "GitHub URL",
            SubmitField::WebsiteUrl => "Website URL",
            SubmitField::Tags => "Tags (comma-separated)",
            SubmitField::InstallationGuide => "Installation guide",
            SubmitField::UsageExample => "Usage example",
            SubmitField::Author => "Author",
        }
    }

    /// Required fields block submission when blank.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            SubmitField::Name | SubmitField::Description | SubmitField::Category
        )
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// State for the submission screen. Field values survive a failed
/// submission so the user can correct and retry.
#[derive(Debug, Default)]
pub struct SubmitState {
    pub name: String,
    pub description: String,
    pub category: String,
    pub language: String,
    pub github_url: String,
    pub website_url: String,
    pub tags: String,
    pub installation_guide: String,
    pub usage_example: String,
    pub author: String,
    pub focus: SubmitField,
    pub submitting: bool,
    pub error: Option<String>,
}

impl SubmitState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_value(&self, field: SubmitField) -> &str {
        match field {
            SubmitField::Name => &self.name,
            SubmitField::Description => &self.description,
            SubmitField::Category => &self.category,
            SubmitField::Language => &self.language,
            SubmitField::GithubUrl => &self.github_url,
            SubmitField::WebsiteUrl => &self.website_url,
            SubmitField::Tags => &self.tags,
            SubmitField::InstallationGuide => &self.installation_guide,
            SubmitField::UsageExample => &self.usage_example,
            SubmitField::Author => &self.author,
        }
    }

    fn field_value_mut(&mut self, field: SubmitField) -> &mut String {
        match field {
            SubmitField::Name => &mut self.name,
            SubmitField::Description => &mut self.description,
            SubmitField::Category => &mut self.category,
            SubmitField::Language => &mut self.language,
            SubmitField::GithubUrl => &mut self.github_url,
            SubmitField::WebsiteUrl => &mut self.website_url,
            SubmitField::Tags => &mut self.tags,
            SubmitField::InstallationGuide => &mut self.installation_guide,
            SubmitField::UsageExample => &mut self.usage_example,
            SubmitField::Author => &mut self.author,
        }
    }

    pub fn type_char(&mut self, c: char) {
        let field = self.focus;
        self.field_value_mut(field).push(c);
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        self.field_value_mut(field).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Build the request draft. Blank required fields block submission
    /// with a field-naming error; blank optional fields are sent as
    /// absent, never as empty strings.
    pub fn to_draft(&self) -> Result<ToolDraft, String> {
        for field in [SubmitField::Name, SubmitField::Description, SubmitField::Category] {
            if self.field_value(field).trim().is_empty() {
                return Err(format!("{} is required", field.label()));
            }
        }
        fn opt(s: &str) -> Option<String> {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Ok(ToolDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            language: opt(&self.language),
            github_url: opt(&self.github_url),
            website_url: opt(&self.website_url),
            tags: opt(&self.tags),
            installation_guide: opt(&self.installation_guide),
            usage_example: opt(&self.usage_example),
            author: opt(&self.author),
        })
    }

    /// Reset the whole form (after navigating away from a success).
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
