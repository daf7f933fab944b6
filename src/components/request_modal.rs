//! Request-detail modal presenter.
//!
//! Fills the display slots of the request modal from a caller-supplied
//! payload and decides whether the approval action is offered. The host page
//! renders the modal skeleton; a missing slot is a page/script version
//! mismatch, so presentation fails loudly instead of degrading.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::services::dom::{ElementHandle, ElementRegistry};
use crate::services::logging::Logger;

const COMPONENT: &str = "request-modal";

const PERSONNEL_FALLBACK: &str = "Unassigned";
const MATERIALS_FALLBACK: &str = "No materials assigned";
const REPORTS_FALLBACK: &str = "No reports submitted";

/// Errors raised while presenting the modal.
#[derive(Debug, Error)]
pub enum ModalError {
    /// A display slot the page is expected to render was not found.
    #[error("required element #{id} is missing from the page")]
    MissingElement { id: String },

    /// A serialized payload could not be decoded.
    #[error("malformed request payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Snapshot of a service request, built by the caller right before the modal
/// opens and discarded when it is dismissed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestDetails {
    pub id: String,
    /// Submission date, already formatted for display.
    pub date: String,
    pub requestor: String,
    pub office: String,
    pub unit: String,
    pub description: String,
    /// Workflow status label. Only the literal "Pending" affects behavior.
    pub status: String,
    /// Assigned personnel, absent until the request is staffed.
    #[serde(default)]
    pub personnel: Option<String>,
    /// Requested materials, absent when none were assigned.
    #[serde(default)]
    pub materials: Option<String>,
    /// Pre-sanitized report markup, absent until reports are submitted.
    /// Rendered verbatim; the caller is trusted to sanitize.
    #[serde(default)]
    pub reports: Option<String>,
}

impl RequestDetails {
    /// Decode a payload a template embedded as JSON, e.g. in a `data-request`
    /// attribute.
    pub fn from_json(payload: &str) -> Result<Self, ModalError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Element ids and the endpoint template the host page provides.
#[derive(Debug, Clone)]
pub struct ModalConfig {
    pub modal_id: &'static str,
    pub date_id: &'static str,
    pub requestor_id: &'static str,
    pub office_id: &'static str,
    pub unit_id: &'static str,
    pub description_id: &'static str,
    pub status_id: &'static str,
    pub personnel_id: &'static str,
    pub materials_id: &'static str,
    pub reports_id: &'static str,
    /// The approval form is optional on the page.
    pub approve_form_id: &'static str,
    /// Prefix of the approval endpoint; the request id and a trailing slash
    /// are appended.
    pub approve_action_prefix: &'static str,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal_id: "requestModal",
            date_id: "modal-date",
            requestor_id: "modal-requestor",
            office_id: "modal-office",
            unit_id: "modal-unit",
            description_id: "modal-description",
            status_id: "modal-status",
            personnel_id: "modal-personnel",
            materials_id: "modal-materials",
            reports_id: "modal-reports",
            approve_form_id: "approveForm",
            approve_action_prefix: "/gso_requests/approve/",
        }
    }
}

impl ModalConfig {
    fn approve_action(&self, id: &str) -> String {
        format!("{}{}/", self.approve_action_prefix, id)
    }
}

/// Populates and shows the request-detail modal.
#[derive(Debug, Clone, Default)]
pub struct ModalPresenter {
    config: ModalConfig,
}

impl ModalPresenter {
    pub fn new(config: ModalConfig) -> Self {
        Self { config }
    }

    /// Write every display slot, set up the approval action, and show the
    /// modal. Text slots are assigned as plain text; the reports slot alone
    /// is rendered as markup.
    pub fn present<R: ElementRegistry>(
        &self,
        registry: &R,
        details: &RequestDetails,
    ) -> Result<(), ModalError> {
        let c = &self.config;

        self.slot(registry, c.date_id)?.set_text(&details.date);
        self.slot(registry, c.requestor_id)?
            .set_text(&details.requestor);
        self.slot(registry, c.office_id)?.set_text(&details.office);
        self.slot(registry, c.unit_id)?.set_text(&details.unit);
        self.slot(registry, c.description_id)?
            .set_text(&details.description);
        self.slot(registry, c.status_id)?.set_text(&details.status);

        let personnel = details.personnel.as_deref().filter(|p| !p.is_empty());
        self.slot(registry, c.personnel_id)?
            .set_text(personnel.unwrap_or(PERSONNEL_FALLBACK));

        let materials = details.materials.as_deref().filter(|m| !m.is_empty());
        self.slot(registry, c.materials_id)?
            .set_text(materials.unwrap_or(MATERIALS_FALLBACK));

        let reports = details.reports.as_deref().filter(|r| !r.is_empty());
        self.slot(registry, c.reports_id)?
            .set_html(reports.unwrap_or(REPORTS_FALLBACK));

        if let Some(form) = registry.element_by_id(c.approve_form_id) {
            form.set_attribute("action", &c.approve_action(&details.id));
            if approval_offered(&details.status, details.personnel.as_deref()) {
                form.set_display("block");
            } else {
                form.set_display("none");
            }
        }

        Logger::debug_with_component(
            COMPONENT,
            &format!("presenting request {} ({})", details.id, details.status),
        );
        self.slot(registry, c.modal_id)?.show_modal();
        Ok(())
    }

    fn slot<R: ElementRegistry>(&self, registry: &R, id: &str) -> Result<R::Handle, ModalError> {
        registry.element_by_id(id).ok_or_else(|| {
            Logger::error_with_component(COMPONENT, &format!("missing element #{id}"));
            ModalError::MissingElement { id: id.to_string() }
        })
    }
}

/// Approval is offered only for pending requests that already have personnel
/// assigned. Partially-staffed or already-processed requests never expose it.
fn approval_offered(status: &str, personnel: Option<&str>) -> bool {
    status == "Pending" && personnel.is_some_and(|p| !p.trim().is_empty())
}
