//! Template model
//!
//! A template joins one resolved [`BookFormat`] with the ordered list of
//! placed elements. Order is z-order as kept by the caller and is never
//! changed here. Every edit returns a new template.

mod element;
mod io;

pub use element::*;
pub use io::*;

use crate::constants::DEFAULT_TEMPLATE_NAME;
use crate::types::{BookError, BookFormat, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) format: BookFormat,
    pub(crate) elements: Vec<TemplateElement>,
}

impl Template {
    /// Start an empty template for `format`
    pub fn new(format: BookFormat) -> Self {
        Self::assemble(format, Vec::new())
    }

    /// Join a format and a set of placed elements into a template.
    ///
    /// Elements without an id, or whose id repeats an earlier one, are
    /// given a fresh `<type>-<n>` id.
    pub fn assemble(format: BookFormat, elements: Vec<TemplateElement>) -> Self {
        let template = Self {
            id: new_template_id(),
            name: DEFAULT_TEMPLATE_NAME.to_string(),
            format,
            elements: assign_element_ids(elements),
        };
        log::debug!(
            "Assembled template {} ({} elements, format {})",
            template.id,
            template.elements.len(),
            template.format.id()
        );
        template
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> &BookFormat {
        &self.format
    }

    pub fn elements(&self) -> &[TemplateElement] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&TemplateElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &TemplateElement> {
        self.elements.iter().filter(|e| e.is_placeholder)
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    pub fn with_format(self, format: BookFormat) -> Self {
        Self { format, ..self }
    }

    /// Replace the element list wholesale
    pub fn with_elements(self, elements: Vec<TemplateElement>) -> Self {
        Self {
            elements: assign_element_ids(elements),
            ..self
        }
    }

    /// Append an element on top of the stack
    pub fn add_element(self, element: TemplateElement) -> Self {
        let mut elements = self.elements;
        elements.push(element);
        Self {
            elements: assign_element_ids(elements),
            ..self
        }
    }

    /// Apply `edit` to the element with `id`; the id itself cannot change
    pub fn update_element(
        self,
        id: &str,
        edit: impl FnOnce(TemplateElement) -> TemplateElement,
    ) -> Result<Self> {
        let index = self.index_of(id)?;
        let mut elements = self.elements;
        let original = elements.remove(index);
        let mut updated = edit(original);
        updated.id = id.to_string();
        elements.insert(index, updated);
        Ok(Self { elements, ..self })
    }

    pub fn remove_element(self, id: &str) -> Result<Self> {
        let index = self.index_of(id)?;
        let mut elements = self.elements;
        elements.remove(index);
        Ok(Self { elements, ..self })
    }

    /// Copy an element onto the top of the stack under a new id
    pub fn duplicate_element(self, id: &str) -> Result<Self> {
        let index = self.index_of(id)?;
        let copy = self.elements[index].duplicated(String::new());
        Ok(self.add_element(copy))
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.elements
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| BookError::ElementNotFound(id.to_string()))
    }
}

fn new_template_id() -> String {
    format!("template-{}", chrono::Utc::now().timestamp_millis())
}

/// Keep the first occurrence of every id and number the rest
fn assign_element_ids(elements: Vec<TemplateElement>) -> Vec<TemplateElement> {
    let mut kept = HashSet::new();
    let needs_id: Vec<bool> = elements
        .iter()
        .map(|e| e.id.is_empty() || !kept.insert(e.id.clone()))
        .collect();

    let mut used = kept;
    elements
        .into_iter()
        .zip(needs_id)
        .map(|(element, needs_id)| {
            if !needs_id {
                return element;
            }
            let prefix = element.kind.id_prefix();
            let id = (1..)
                .map(|n| format!("{}-{}", prefix, n))
                .find(|candidate| !used.contains(candidate))
                .unwrap_or_default();
            used.insert(id.clone());
            element.with_id(id)
        })
        .collect()
}
