//! Template generators for the frontend and backend components.
//!
//! Both shell out through the [`ToolRunner`](stackgen_core::application::ports::ToolRunner)
//! port; files they patch afterwards go through the
//! [`Filesystem`](stackgen_core::application::ports::Filesystem) port.

mod spring;
mod vite;

pub use spring::{BackendSettings, SpringInitializrGenerator};
pub use vite::{FrontendSettings, ViteGenerator};

use stackgen_core::{
    application::ports::{GenerationRequest, TemplateGenerator},
    domain::Component,
    error::StackgenResult,
};
use tracing::instrument;

/// Routes each request to the generator for its component.
pub struct ComponentGenerators {
    frontend: Box<dyn TemplateGenerator>,
    backend: Box<dyn TemplateGenerator>,
}

impl ComponentGenerators {
    pub fn new(frontend: Box<dyn TemplateGenerator>, backend: Box<dyn TemplateGenerator>) -> Self {
        Self { frontend, backend }
    }
}

impl TemplateGenerator for ComponentGenerators {
    #[instrument(skip_all, fields(component = %request.component))]
    fn generate(&self, request: &GenerationRequest) -> StackgenResult<()> {
        match request.component {
            Component::Frontend => self.frontend.generate(request),
            Component::Backend => self.backend.generate(request),
        }
    }
}
