use std::collections::HashMap;

use chrono::Datelike;

use crate::domain::{project_name::ProjectName, value_objects::ProjectType};

/// Context for rendering generated documentation.
///
/// Immutable after creation; `with_variable` returns a new instance.
///
/// ## Built-in Variables
///
/// | Variable | Example |
/// |----------|---------|
/// | `PROJECT_NAME` | "demo-app" |
/// | `PROJECT_NAME_SNAKE` | "demo_app" |
/// | `PROJECT_NAME_KEBAB` | "demo-app" |
/// | `PROJECT_NAME_PASCAL` | "DemoApp" |
/// | `PROJECT_TYPE` | "fullstack" |
/// | `YEAR` | "2026" |
#[derive(Debug, Clone)]
pub struct RenderContext {
    project_name: String,
    project_type: ProjectType,
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new(project_name: &ProjectName, project_type: ProjectType) -> Self {
        let name = project_name.as_str().to_string();
        let mut vars = HashMap::new();

        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert("PROJECT_NAME_SNAKE".to_string(), to_snake_case(&name));
        vars.insert("PROJECT_NAME_KEBAB".to_string(), to_kebab_case(&name));
        vars.insert("PROJECT_NAME_PASCAL".to_string(), to_pascal_case(&name));
        vars.insert("PROJECT_TYPE".to_string(), project_type.to_string());
        vars.insert(
            "YEAR".to_string(),
            chrono::Local::now().year().to_string(),
        );

        Self {
            project_name: name,
            project_type,
            variables: vars,
        }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Replace `{{VARIABLE}}` placeholders. Unknown placeholders are left
    /// as-is.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split on `-`, `_`, whitespace and lower→upper case transitions.
fn split_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current.clear();
            }
            continue;
        }

        if let Some(next) = chars.peek() {
            if c.is_lowercase() && next.is_uppercase() {
                current.push(c);
                words.push(current.to_lowercase());
                current.clear();
                continue;
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}
