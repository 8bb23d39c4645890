use async_trait::async_trait;
use chromiumoxide::Page;
use tracing::debug;
use vizdriver_sequencer::ports::TargetPort;
use vizdriver_sequencer::{ActionKind, SequencerError, TargetElement};

use crate::config::TargetLayout;
use crate::script;

/// Visualization page reached over CDP.
#[derive(Clone)]
pub struct CdpTarget {
    page: Page,
    layout: TargetLayout,
}

impl CdpTarget {
    pub fn new(page: Page, layout: TargetLayout) -> Self {
        Self { page, layout }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub(crate) async fn eval_bool(page: &Page, script: String) -> Result<bool, SequencerError> {
        page.evaluate(script)
            .await
            .map_err(|err| SequencerError::target(err.to_string()))?
            .into_value::<bool>()
            .map_err(|err| SequencerError::target(format!("unexpected script result: {err}")))
    }
}

#[async_trait]
impl TargetPort for CdpTarget {
    async fn write_field(&self, kind: ActionKind, text: &str) -> Result<(), SequencerError> {
        let index = self.layout.field_index(kind);
        debug!(%kind, index, text, "setting field value");
        let found = Self::eval_bool(&self.page, script::write_field(index, text)).await?;
        require(found, kind.field())
    }

    async fn activate(&self, kind: ActionKind) -> Result<(), SequencerError> {
        let name = self.layout.control_name(kind);
        debug!(%kind, control = name, "clicking control");
        let found = Self::eval_bool(&self.page, script::activate(name)).await?;
        require(found, kind.trigger())
    }
}

/// Scripts report `false` when their element lookup came back empty.
fn require(found: bool, element: TargetElement) -> Result<(), SequencerError> {
    if found {
        Ok(())
    } else {
        Err(SequencerError::TargetNotFound(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_element_passes() {
        assert_eq!(require(true, TargetElement::InsertField), Ok(()));
    }

    #[test]
    fn missing_element_names_the_lookup() {
        for kind in [ActionKind::Insert, ActionKind::Delete] {
            assert_eq!(
                require(false, kind.field()),
                Err(SequencerError::TargetNotFound(kind.field()))
            );
            assert_eq!(
                require(false, kind.trigger()),
                Err(SequencerError::TargetNotFound(kind.trigger()))
            );
        }
    }
}
