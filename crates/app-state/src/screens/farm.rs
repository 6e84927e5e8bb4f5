use advisor::AdvisorError;
use mkulima_core::CropResearchResult;
use tracing::warn;

use super::{InFlight, PendingRequest, RequestTicket};

/// Crop research on the "My Farm" screen.
#[derive(Debug, Default)]
pub struct FarmScreen {
    selected: Option<String>,
    research: Option<CropResearchResult>,
    inflight: InFlight,
    error: Option<String>,
}

impl FarmScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a crop and request research for it. Re-selecting the crop
    /// that is already loading is ignored; any other selection supersedes
    /// the running request.
    pub fn select_crop(&mut self, name: &str) -> Option<PendingRequest<String>> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if self.inflight.is_loading() && self.selected.as_deref() == Some(name) {
            return None;
        }

        self.selected = Some(name.to_string());
        self.research = None;
        self.error = None;
        Some(PendingRequest {
            ticket: self.inflight.begin(),
            payload: name.to_string(),
        })
    }

    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<CropResearchResult, AdvisorError>,
    ) -> bool {
        if !self.inflight.settle(ticket) {
            return false;
        }
        match result {
            Ok(research) => self.research = Some(research),
            Err(err) => {
                warn!(error = %err, crop = ?self.selected, "Crop research failed");
                self.error = Some(err.to_string());
            }
        }
        true
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn research(&self) -> Option<&CropResearchResult> {
        self.research.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.inflight.is_loading()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn reset(&mut self) {
        self.inflight.invalidate();
        self.selected = None;
        self.research = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn research(climate: &str) -> CropResearchResult {
        CropResearchResult {
            climate: Some(climate.to_string()),
            ..CropResearchResult::default()
        }
    }

    #[test]
    fn test_select_and_complete() {
        let mut farm = FarmScreen::new();
        let pending = farm.select_crop("Mahindi").unwrap();
        assert_eq!(pending.payload, "Mahindi");
        assert_eq!(farm.selected(), Some("Mahindi"));
        assert!(farm.is_loading());

        assert!(farm.complete(pending.ticket, Ok(research("Joto la wastani"))));
        assert_eq!(
            farm.research().unwrap().climate.as_deref(),
            Some("Joto la wastani")
        );
    }

    #[test]
    fn test_new_crop_supersedes() {
        let mut farm = FarmScreen::new();
        let maize = farm.select_crop("Mahindi").unwrap();
        let rice = farm.select_crop("Mpunga").unwrap();

        assert!(!farm.complete(maize.ticket, Ok(research("maize"))));
        assert!(farm.research().is_none());
        assert!(farm.complete(rice.ticket, Ok(research("rice"))));
        assert_eq!(farm.research().unwrap().climate.as_deref(), Some("rice"));
    }

    #[test]
    fn test_same_crop_while_loading_ignored() {
        let mut farm = FarmScreen::new();
        let _pending = farm.select_crop("Nyanya").unwrap();
        assert!(farm.select_crop("Nyanya").is_none());
        assert!(farm.select_crop("  ").is_none());
    }

    #[test]
    fn test_replaced_not_merged() {
        let mut farm = FarmScreen::new();
        let first = farm.select_crop("Mahindi").unwrap();
        farm.complete(first.ticket, Ok(research("maize")));

        let second = farm.select_crop("Mpunga").unwrap();
        farm.complete(second.ticket, Ok(CropResearchResult::default()));
        assert!(farm.research().unwrap().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut farm = FarmScreen::new();
        let pending = farm.select_crop("Mahindi").unwrap();
        farm.reset();
        assert!(!farm.complete(pending.ticket, Ok(research("late"))));
        assert!(farm.selected().is_none());
    }
}
