#![allow(dead_code)]

//! Apply-channel classification: which submission system a job's URL
//! belongs to, and the initial application status that follows from it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyChannel {
    Lever,
    Greenhouse,
    Workable,
    Indeed,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Queued,
    ManualRequired,
    // Set by the downstream submission executor, never by this service.
    Submitted,
    Failed,
}

impl ApplyChannel {
    /// Classifies a job URL by substring; first match wins, in this fixed
    /// order. The bare "indeed" check comes last so ATS-hosted postings
    /// reached via indeed links still classify as their ATS.
    pub fn detect(url: &str) -> Self {
        if url.contains("greenhouse.io") {
            ApplyChannel::Greenhouse
        } else if url.contains("jobs.lever.co") {
            ApplyChannel::Lever
        } else if url.contains("workable.com") {
            ApplyChannel::Workable
        } else if url.contains("indeed") {
            ApplyChannel::Indeed
        } else {
            ApplyChannel::Other
        }
    }

    /// Machine-submittable channels start queued; everything else needs a
    /// human downstream.
    pub fn initial_status(&self) -> ApplicationStatus {
        match self {
            ApplyChannel::Lever | ApplyChannel::Greenhouse | ApplyChannel::Workable => {
                ApplicationStatus::Queued
            }
            ApplyChannel::Indeed | ApplyChannel::Other => ApplicationStatus::ManualRequired,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplyChannel::Lever => "lever",
            ApplyChannel::Greenhouse => "greenhouse",
            ApplyChannel::Workable => "workable",
            ApplyChannel::Indeed => "indeed",
            ApplyChannel::Other => "other",
        }
    }
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Queued => "queued",
            ApplicationStatus::ManualRequired => "manual_required",
            ApplicationStatus::Submitted => "submitted",
            ApplicationStatus::Failed => "failed",
        }
    }
}
