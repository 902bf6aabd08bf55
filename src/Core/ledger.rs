use super::error::{Error, HandleRole, Result};

/// Records which channel capabilities a fan-in queue has handed out.
///
/// Every channel has exactly one input and one output capability. Once issued
/// they are never issued again, so no two threads can ever hold the same side
/// of one channel.
#[derive(Debug)]
pub struct IssueLedger {
    inputs: Box<[bool]>,
    outputs: Box<[bool]>,
}

impl IssueLedger {
    pub fn new(channels: usize) -> Self {
        Self {
            inputs: vec![false; channels].into_boxed_slice(),
            outputs: vec![false; channels].into_boxed_slice(),
        }
    }

    /// Number of channels tracked.
    pub fn channels(&self) -> usize {
        self.inputs.len()
    }

    /// Marks `role` of channel `index` as issued.
    ///
    /// Fails if the index is out of range or the capability was claimed before;
    /// the ledger is left untouched in both cases.
    pub fn claim(&mut self, role: HandleRole, index: usize) -> Result<()> {
        let channels = self.channels();
        let table = match role {
            HandleRole::Input => &mut self.inputs,
            HandleRole::Output => &mut self.outputs,
        };
        let slot = table
            .get_mut(index)
            .ok_or(Error::ChannelOutOfRange { index, channels })?;
        if *slot {
            return Err(Error::AlreadyIssued { role, index });
        }
        *slot = true;
        Ok(())
    }

    /// Returns true if `role` of channel `index` has been issued.
    pub fn is_issued(&self, role: HandleRole, index: usize) -> bool {
        let table = match role {
            HandleRole::Input => &self.inputs,
            HandleRole::Output => &self.outputs,
        };
        table.get(index).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_each_side_once() {
        let mut ledger = IssueLedger::new(2);

        assert!(ledger.claim(HandleRole::Input, 0).is_ok());
        assert!(ledger.claim(HandleRole::Output, 0).is_ok());
        assert_eq!(
            ledger.claim(HandleRole::Input, 0),
            Err(Error::AlreadyIssued {
                role: HandleRole::Input,
                index: 0
            })
        );
        assert!(ledger.is_issued(HandleRole::Output, 0));
        assert!(!ledger.is_issued(HandleRole::Output, 1));
        assert!(!ledger.is_issued(HandleRole::Input, 1));
    }

    #[test]
    fn rejects_out_of_range() {
        let mut ledger = IssueLedger::new(1);

        assert_eq!(
            ledger.claim(HandleRole::Output, 3),
            Err(Error::ChannelOutOfRange {
                index: 3,
                channels: 1
            })
        );
        assert!(!ledger.is_issued(HandleRole::Output, 0));
        assert!(!ledger.is_issued(HandleRole::Output, 3));
    }
}
